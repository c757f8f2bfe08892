//! Derived build-tree paths.
//!
//! Everything the pipeline reads or writes lives at a fixed location under
//! the workspace root, keyed by the requested build target and toolchain.
//! The layout is recomputed for every run and never persisted.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Toolchain used for the entry module's ELF link step, regardless of the
/// caller-supplied toolchain.
pub const ELF_TOOLCHAIN: &str = "CLANGDWARF";

/// The only architecture the payload build targets.
pub const ARCH: &str = "X64";

/// Filesystem layout for one (target, toolchain) build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildLayout {
  /// Workspace root anchoring everything below.
  pub workspace: PathBuf,

  /// Build directory shared by both build stages.
  pub build_dir: PathBuf,

  /// Firmware-volume blob produced by the first build stage.
  pub fv_output: PathBuf,

  /// Entry-module ELF produced by the second build stage. Always under the
  /// `ELF_TOOLCHAIN` subtree, whatever toolchain built the firmware volume.
  pub entry_output: PathBuf,

  /// Build report for the firmware-volume stage.
  pub payload_report: PathBuf,

  /// Build report for the entry-module stage.
  pub module_report: PathBuf,

  /// Platform descriptor handed to the build tool, workspace-relative.
  pub dsc_path: PathBuf,

  /// Entry-module INF handed to the build tool, workspace-relative.
  pub entry_inf: PathBuf,

  /// Final merged artifact.
  pub final_artifact: PathBuf,
}

impl BuildLayout {
  /// Compute the layout for a workspace root, build target and toolchain.
  pub fn new(workspace: &Path, target: &str, toolchain: &str) -> Self {
    let build_dir = workspace.join("Build").join("UefiPayloadPkgX64");

    let fv_output = build_dir
      .join(format!("{}_{}", target, toolchain))
      .join("FV")
      .join("DXEFV.Fv");

    let entry_output = build_dir
      .join(format!("{}_{}", target, ELF_TOOLCHAIN))
      .join("X64/UefiPayloadPkg/UefiPayloadEntry/UniversalPayloadEntry/DEBUG/UniversalPayloadEntry.dll");

    Self {
      workspace: workspace.to_path_buf(),
      payload_report: build_dir.join("UefiUniversalPayload.txt"),
      module_report: build_dir.join("UefiUniversalPayloadEntry.txt"),
      dsc_path: PathBuf::from("UefiPayloadPkg/UefiPayloadPkg.dsc"),
      entry_inf: PathBuf::from("UefiPayloadPkg/UefiPayloadEntry/UniversalPayloadEntry.inf"),
      final_artifact: build_dir.join("UniversalPayload.elf"),
      build_dir,
      fv_output,
      entry_output,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn layout() -> BuildLayout {
    BuildLayout::new(Path::new("/work/edk2"), "RELEASE", "VS2022")
  }

  #[test]
  fn build_dir_is_fixed_under_workspace() {
    assert_eq!(
      layout().build_dir,
      PathBuf::from("/work/edk2/Build/UefiPayloadPkgX64")
    );
  }

  #[test]
  fn fv_output_uses_target_and_toolchain() {
    assert_eq!(
      layout().fv_output,
      PathBuf::from("/work/edk2/Build/UefiPayloadPkgX64/RELEASE_VS2022/FV/DXEFV.Fv")
    );
  }

  #[test]
  fn entry_output_always_uses_elf_toolchain() {
    let layout = layout();
    let entry = layout.entry_output.to_string_lossy();
    assert!(entry.contains("RELEASE_CLANGDWARF"));
    assert!(!entry.contains("VS2022"));
    assert!(entry.ends_with("UniversalPayloadEntry.dll"));
  }

  #[test]
  fn reports_live_in_build_dir() {
    let layout = layout();
    assert_eq!(
      layout.payload_report,
      layout.build_dir.join("UefiUniversalPayload.txt")
    );
    assert_eq!(
      layout.module_report,
      layout.build_dir.join("UefiUniversalPayloadEntry.txt")
    );
  }

  #[test]
  fn descriptor_paths_are_workspace_relative() {
    let layout = layout();
    assert!(layout.dsc_path.is_relative());
    assert!(layout.entry_inf.is_relative());
  }

  #[test]
  fn final_artifact_has_fixed_name() {
    assert_eq!(
      layout().final_artifact,
      PathBuf::from("/work/edk2/Build/UefiPayloadPkgX64/UniversalPayload.elf")
    );
  }
}
