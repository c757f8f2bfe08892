//! Error types for the build pipeline.
//!
//! Nothing here is recoverable: every variant is fatal to the run and is
//! surfaced to the user as a printed diagnostic with a non-zero exit.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while orchestrating the payload build.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The llvm-objcopy probe failed before any build step ran.
  #[error("llvm-objcopy unavailable or misconfigured (check LLVM install / CLANG_BIN): {0}")]
  ObjcopyUnavailable(String),

  /// An external command exited non-zero.
  #[error("command failed with exit code {code:?}: {cmd}")]
  CommandFailed { cmd: String, code: Option<i32> },

  /// An external command could not be started at all.
  #[error("failed to spawn {program}: {source}")]
  SpawnFailed {
    program: String,
    #[source]
    source: std::io::Error,
  },

  /// A macro definition without exactly one `=` separator.
  #[error("malformed macro definition (expected NAME=VALUE): {0}")]
  InvalidDefine(String),

  /// The final artifact copy failed.
  #[error("failed to copy {} to {}", .from.display(), .to.display())]
  CopyFailed {
    from: PathBuf,
    to: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// I/O error during execution.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}
