//! Environment and path plumbing for upld
//!
//! This crate provides the process-environment lookups the build
//! orchestrator needs:
//! - Workspace root resolution (`WORKSPACE`)
//! - Locating the `llvm-objcopy` binary (`CLANG_BIN`)
//! - Path normalization

mod error;
mod paths;
mod workspace;

pub use error::PlatformError;
pub use paths::normalize_path;
pub use workspace::{CLANG_BIN_ENV, WORKSPACE_ENV, objcopy_path, workspace_root};
