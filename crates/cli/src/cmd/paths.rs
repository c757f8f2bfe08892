//! Implementation of the `upld paths` command.
//!
//! Prints the layout a build with the given target and toolchain would
//! read and write, without running anything.

use std::path::Path;

use anyhow::Result;

use upld_lib::layout::BuildLayout;
use upld_platform::workspace_root;

use crate::output::{OutputFormat, print_error, print_json, print_stat};

/// Execute the paths command.
pub fn cmd_paths(
  workspace: Option<&Path>,
  toolchain: &str,
  target: &str,
  format: OutputFormat,
) -> Result<()> {
  let workspace = match workspace_root(workspace) {
    Ok(root) => root,
    Err(err) => {
      print_error(&err.to_string());
      std::process::exit(2);
    }
  };

  let layout = BuildLayout::new(&workspace, target, toolchain);

  if format.is_json() {
    return print_json(&layout);
  }

  print_stat("workspace", &layout.workspace.display().to_string());
  print_stat("build dir", &layout.build_dir.display().to_string());
  print_stat("firmware volume", &layout.fv_output.display().to_string());
  print_stat("entry module", &layout.entry_output.display().to_string());
  print_stat("payload report", &layout.payload_report.display().to_string());
  print_stat("module report", &layout.module_report.display().to_string());
  print_stat("final artifact", &layout.final_artifact.display().to_string());

  Ok(())
}
