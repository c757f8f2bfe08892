//! Implementation of the `upld build` command.
//!
//! Resolves the process environment into an explicit `BuildConfig` once,
//! then hands the whole run to the pipeline. Every failure is fatal: the
//! command prints a diagnostic and exits non-zero, 2 for configuration
//! errors detected before any build step, 1 for everything else.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use upld_lib::defines::DefineSet;
use upld_lib::error::BuildError;
use upld_lib::invoke::ProcessRunner;
use upld_lib::orchestrator::{BuildConfig, build_universal_payload};
use upld_platform::{objcopy_path, workspace_root};

use crate::output::{print_error, print_success};

/// Execute the build command.
///
/// Runs the full pipeline: toolchain probe, firmware-volume build, entry
/// module build, three section edits, final copy.
pub fn cmd_build(
  workspace: Option<&Path>,
  toolchain: &str,
  target: &str,
  defines: &[String],
) -> Result<()> {
  let workspace = match workspace_root(workspace) {
    Ok(root) => root,
    Err(err) => {
      print_error(&err.to_string());
      std::process::exit(2);
    }
  };

  // Malformed macro arguments abort here, before any external command runs.
  let defines = match DefineSet::from_args(defines) {
    Ok(set) => set,
    Err(err) => {
      print_error(&err.to_string());
      std::process::exit(1);
    }
  };

  let config = BuildConfig {
    workspace,
    target: target.to_string(),
    toolchain: toolchain.to_string(),
    defines,
    objcopy: objcopy_path(),
  };

  info!(
    workspace = %config.workspace.display(),
    target = %config.target,
    toolchain = %config.toolchain,
    "starting payload build"
  );

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  match rt.block_on(build_universal_payload(&config, &ProcessRunner)) {
    Ok(_) => {
      print_success("Successfully build Universal Payload");
      Ok(())
    }
    Err(err @ BuildError::ObjcopyUnavailable(_)) => {
      print_error(&err.to_string());
      std::process::exit(2);
    }
    Err(err) => {
      print_error(&err.to_string());
      std::process::exit(1);
    }
  }
}
