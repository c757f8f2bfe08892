//! Invocation builders for `llvm-objcopy` section surgery.
//!
//! The firmware volume travels inside the entry ELF as a named section.
//! Every edit names the binary format explicitly for both input and output
//! so objcopy never guesses.

use std::path::{Path, PathBuf};

use crate::invoke::Invocation;

/// Section carrying the firmware volume inside the entry binary.
pub const FV_SECTION: &str = ".upld.uefi_fv";

/// Binary format for both input and output of every edit.
pub const ELF_FORMAT: &str = "elf64-x86-64";

/// Alignment applied to the firmware-volume section.
pub const FV_SECTION_ALIGNMENT: u32 = 16;

/// Builds objcopy invocations against one resolved binary path.
#[derive(Debug, Clone)]
pub struct SectionEditor {
  objcopy: PathBuf,
}

impl SectionEditor {
  pub fn new(objcopy: impl Into<PathBuf>) -> Self {
    Self {
      objcopy: objcopy.into(),
    }
  }

  /// Version query used as the fast-fail toolchain probe.
  pub fn version_probe(&self) -> Invocation {
    Invocation::new(&self.objcopy).arg("--version")
  }

  fn edit(&self) -> Invocation {
    Invocation::new(&self.objcopy)
      .arg("-I")
      .arg(ELF_FORMAT)
      .arg("-O")
      .arg(ELF_FORMAT)
  }

  /// Strip the firmware-volume section, if present, from `binary`.
  pub fn remove_section(&self, binary: &Path) -> Invocation {
    self
      .edit()
      .arg("--remove-section")
      .arg(FV_SECTION)
      .arg(binary.to_string_lossy())
  }

  /// Insert `section_source` into `binary` as the firmware-volume section.
  pub fn add_section(&self, section_source: &Path, binary: &Path) -> Invocation {
    self
      .edit()
      .arg("--add-section")
      .arg(format!("{}={}", FV_SECTION, section_source.display()))
      .arg(binary.to_string_lossy())
  }

  /// Set the fixed alignment on the firmware-volume section of `binary`.
  pub fn set_section_alignment(&self, binary: &Path) -> Invocation {
    self
      .edit()
      .arg("--set-section-alignment")
      .arg(format!("{}={}", FV_SECTION, FV_SECTION_ALIGNMENT))
      .arg(binary.to_string_lossy())
  }
}
