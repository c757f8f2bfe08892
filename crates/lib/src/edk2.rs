//! Invocation builders for the EDK2 `build` tool.
//!
//! Both build stages go through the same entry point: the first produces the
//! DXE firmware volume, the second the payload entry module. The entry
//! module is always linked with the `CLANGDWARF` toolchain so the result is
//! an ELF, whatever toolchain the caller picked for the firmware volume.

use crate::defines::DefineSet;
use crate::invoke::Invocation;
use crate::layout::{ARCH, BuildLayout, ELF_TOOLCHAIN};

/// Name of the external build tool, resolved via `PATH`.
pub const BUILD_TOOL: &str = "build";

/// Build the firmware-volume stage invocation.
pub fn build_payload(
  layout: &BuildLayout,
  target: &str,
  toolchain: &str,
  defines: &DefineSet,
) -> Invocation {
  Invocation::new(BUILD_TOOL)
    .arg("-p")
    .arg(layout.dsc_path.to_string_lossy())
    .arg("-b")
    .arg(target)
    .arg("-a")
    .arg(ARCH)
    .arg("-t")
    .arg(toolchain)
    .arg("-y")
    .arg(layout.payload_report.to_string_lossy())
    .args(defines.to_args())
}

/// Build the entry-module stage invocation.
///
/// Scoped to the single entry INF via `-m`, reported separately, linked with
/// `ELF_TOOLCHAIN`.
pub fn build_entry(layout: &BuildLayout, target: &str, defines: &DefineSet) -> Invocation {
  Invocation::new(BUILD_TOOL)
    .arg("-p")
    .arg(layout.dsc_path.to_string_lossy())
    .arg("-b")
    .arg(target)
    .arg("-a")
    .arg(ARCH)
    .arg("-m")
    .arg(layout.entry_inf.to_string_lossy())
    .arg("-t")
    .arg(ELF_TOOLCHAIN)
    .arg("-y")
    .arg(layout.module_report.to_string_lossy())
    .args(defines.to_args())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::path::Path;

  fn layout() -> BuildLayout {
    BuildLayout::new(Path::new("/work/edk2"), "DEBUG", "GCC5")
  }

  #[test]
  fn payload_invocation_shape() {
    let defines = DefineSet::seeded();
    let invocation = build_payload(&layout(), "DEBUG", "GCC5", &defines);

    assert_eq!(invocation.program, Path::new("build"));
    assert_eq!(
      invocation.to_string(),
      "build -p UefiPayloadPkg/UefiPayloadPkg.dsc -b DEBUG -a X64 -t GCC5 \
       -y /work/edk2/Build/UefiPayloadPkgX64/UefiUniversalPayload.txt \
       -D UNIVERSAL_PAYLOAD=TRUE"
    );
  }

  #[test]
  fn entry_invocation_uses_elf_toolchain() {
    let defines = DefineSet::seeded();
    let invocation = build_entry(&layout(), "DEBUG", &defines);

    let args = invocation.args.join(" ");
    assert!(args.contains("-m UefiPayloadPkg/UefiPayloadEntry/UniversalPayloadEntry.inf"));
    assert!(args.contains("-t CLANGDWARF"));
    assert!(!args.contains("GCC5"));
  }

  #[test]
  fn both_stages_carry_all_defines() {
    let defines = DefineSet::from_args(["FOO=BAR"]).unwrap();

    for invocation in [
      build_payload(&layout(), "DEBUG", "GCC5", &defines),
      build_entry(&layout(), "DEBUG", &defines),
    ] {
      let args = invocation.args.join(" ");
      assert!(args.contains("-D FOO=BAR"));
      assert!(args.contains("-D UNIVERSAL_PAYLOAD=TRUE"));
    }
  }
}
