//! Implementation of the `upld check` command.
//!
//! Runs only the toolchain probe, so a misconfigured LLVM install shows up
//! before anyone waits on a firmware build.

use std::path::Path;

use anyhow::{Context, Result};

use upld_lib::invoke::ProcessRunner;
use upld_lib::orchestrator::probe_objcopy;
use upld_platform::{objcopy_path, workspace_root};

use crate::output::{print_error, print_success, print_stat};

/// Execute the check command.
pub fn cmd_check(workspace: Option<&Path>) -> Result<()> {
  let workspace = match workspace_root(workspace) {
    Ok(root) => root,
    Err(err) => {
      print_error(&err.to_string());
      std::process::exit(2);
    }
  };

  let objcopy = objcopy_path();
  print_stat("workspace", &workspace.display().to_string());
  print_stat("llvm-objcopy", &objcopy.display().to_string());

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  match rt.block_on(probe_objcopy(&workspace, &objcopy, &ProcessRunner)) {
    Ok(()) => {
      print_success("llvm-objcopy is available");
      Ok(())
    }
    Err(err) => {
      print_error(&err.to_string());
      std::process::exit(2);
    }
  }
}
