//! The seven-step payload build pipeline.
//!
//! A linear chain: toolchain probe, two build-tool stages, three objcopy
//! edits, final copy. Each step has a single success transition to the next
//! and a single failure transition out of the run. There are no retries and
//! no partial-success state; a failed run leaves the build directory in
//! whatever intermediate state it reached.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::defines::DefineSet;
use crate::edk2;
use crate::error::BuildError;
use crate::invoke::ToolRunner;
use crate::layout::BuildLayout;
use crate::objcopy::SectionEditor;

/// Everything a run needs, resolved once at process start.
///
/// The orchestrator itself never consults the environment; `workspace` and
/// `objcopy` arrive here already resolved.
#[derive(Debug, Clone)]
pub struct BuildConfig {
  /// Workspace root anchoring all relative paths.
  pub workspace: PathBuf,

  /// Build target selector, e.g. `DEBUG` or `RELEASE`.
  pub target: String,

  /// Toolchain for the firmware-volume stage.
  pub toolchain: String,

  /// Macro definitions forwarded to both build stages.
  pub defines: DefineSet,

  /// Resolved `llvm-objcopy` binary.
  pub objcopy: PathBuf,
}

impl BuildConfig {
  /// Compute the build-tree layout for this configuration.
  pub fn layout(&self) -> BuildLayout {
    BuildLayout::new(&self.workspace, &self.target, &self.toolchain)
  }
}

/// Fast-fail precondition: verify `llvm-objcopy` answers a version query.
///
/// Any failure, non-zero exit or spawn error alike, is reported as a
/// configuration error, and nothing else runs.
pub async fn probe_objcopy<R: ToolRunner>(
  workspace: &Path,
  objcopy: &Path,
  runner: &R,
) -> Result<(), BuildError> {
  let editor = SectionEditor::new(objcopy);
  runner
    .run(workspace, &editor.version_probe())
    .await
    .map_err(|err| BuildError::ObjcopyUnavailable(err.to_string()))
}

/// Run the whole pipeline, returning the layout whose `final_artifact` now
/// exists.
pub async fn build_universal_payload<R: ToolRunner>(
  config: &BuildConfig,
  runner: &R,
) -> Result<BuildLayout, BuildError> {
  let layout = config.layout();
  let editor = SectionEditor::new(&config.objcopy);

  probe_objcopy(&config.workspace, &config.objcopy, runner).await?;

  info!(target = %config.target, toolchain = %config.toolchain, "building firmware volume");
  runner
    .run(
      &config.workspace,
      &edk2::build_payload(&layout, &config.target, &config.toolchain, &config.defines),
    )
    .await?;

  info!("building payload entry module");
  runner
    .run(
      &config.workspace,
      &edk2::build_entry(&layout, &config.target, &config.defines),
    )
    .await?;

  info!(section = crate::objcopy::FV_SECTION, "embedding firmware volume");
  runner
    .run(&config.workspace, &editor.remove_section(&layout.entry_output))
    .await?;
  runner
    .run(
      &config.workspace,
      &editor.add_section(&layout.fv_output, &layout.entry_output),
    )
    .await?;
  runner
    .run(
      &config.workspace,
      &editor.set_section_alignment(&layout.entry_output),
    )
    .await?;

  tokio::fs::copy(&layout.entry_output, &layout.final_artifact)
    .await
    .map_err(|source| BuildError::CopyFailed {
      from: layout.entry_output.clone(),
      to: layout.final_artifact.clone(),
      source,
    })?;

  info!(artifact = %layout.final_artifact.display(), "payload build complete");
  Ok(layout)
}
