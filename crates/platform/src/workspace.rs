//! Workspace root and toolchain binary resolution
//!
//! The EDK2 build tree is anchored by the `WORKSPACE` environment variable,
//! and `llvm-objcopy` may live in a directory named by `CLANG_BIN`. Both
//! lookups happen once at process start; the resolved values are passed into
//! the orchestrator explicitly and never re-read.

use crate::error::PlatformError;
use crate::paths::normalize_path;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable anchoring all workspace-relative paths.
pub const WORKSPACE_ENV: &str = "WORKSPACE";

/// Optional environment variable naming the directory containing
/// `llvm-objcopy`.
pub const CLANG_BIN_ENV: &str = "CLANG_BIN";

/// Resolve the workspace root.
///
/// An explicit root (e.g. from a CLI flag) wins; otherwise `$WORKSPACE` is
/// consulted. The result is normalized but not required to exist; the build
/// tool itself reports a missing tree far more usefully than we could.
pub fn workspace_root(explicit: Option<&Path>) -> Result<PathBuf, PlatformError> {
    let root = match explicit {
        Some(path) => path.to_path_buf(),
        None => env::var_os(WORKSPACE_ENV)
            .map(PathBuf::from)
            .ok_or(PlatformError::NoWorkspace)?,
    };

    let root = normalize_path(&root);
    debug!(root = %root.display(), "resolved workspace root");

    if root.is_file() {
        return Err(PlatformError::NotADirectory(root.display().to_string()));
    }

    Ok(root)
}

/// Locate the `llvm-objcopy` binary.
///
/// If `$CLANG_BIN` is set, the binary is expected inside that directory;
/// otherwise the bare name is returned and resolution is left to `PATH`.
pub fn objcopy_path() -> PathBuf {
    match env::var_os(CLANG_BIN_ENV) {
        Some(dir) => PathBuf::from(dir).join("llvm-objcopy"),
        None => PathBuf::from("llvm-objcopy"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_root_wins() {
        temp_env::with_var(WORKSPACE_ENV, Some("/env/workspace"), || {
            let root = workspace_root(Some(Path::new("/explicit/root"))).unwrap();
            assert_eq!(root, PathBuf::from("/explicit/root"));
        });
    }

    #[test]
    fn test_root_from_env() {
        temp_env::with_var(WORKSPACE_ENV, Some("/env/workspace"), || {
            let root = workspace_root(None).unwrap();
            assert_eq!(root, PathBuf::from("/env/workspace"));
        });
    }

    #[test]
    fn test_root_missing_is_error() {
        temp_env::with_var(WORKSPACE_ENV, None::<&str>, || {
            assert!(matches!(
                workspace_root(None),
                Err(PlatformError::NoWorkspace)
            ));
        });
    }

    #[test]
    fn test_root_is_normalized() {
        let root = workspace_root(Some(Path::new("/work/./edk2/../edk2"))).unwrap();
        assert_eq!(root, PathBuf::from("/work/edk2"));
    }

    #[test]
    fn test_root_rejects_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let result = workspace_root(Some(temp.path()));
        assert!(matches!(result, Err(PlatformError::NotADirectory(_))));
    }

    #[test]
    fn test_objcopy_from_clang_bin() {
        temp_env::with_var(CLANG_BIN_ENV, Some("/opt/llvm/bin"), || {
            assert_eq!(objcopy_path(), PathBuf::from("/opt/llvm/bin/llvm-objcopy"));
        });
    }

    #[test]
    fn test_objcopy_falls_back_to_path() {
        temp_env::with_var(CLANG_BIN_ENV, None::<&str>, || {
            assert_eq!(objcopy_path(), PathBuf::from("llvm-objcopy"));
        });
    }
}
