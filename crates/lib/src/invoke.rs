//! Structured external-command invocations and the runner seam.
//!
//! Commands are built as explicit program-plus-argv values, never shell
//! strings, so nothing here depends on shell quoting. The `ToolRunner` trait
//! is the seam between the pipeline and the outside world: production runs
//! real processes, tests substitute a recording stub.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::BuildError;

/// One external command: program, argument vector, expected zero exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: PathBuf,
  pub args: Vec<String>,
}

impl Invocation {
  pub fn new(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }
}

impl fmt::Display for Invocation {
  /// Render as a single traceable command line. Arguments containing
  /// whitespace are quoted for readability only; execution never goes
  /// through a shell.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program.display())?;
    for arg in &self.args {
      if arg.chars().any(char::is_whitespace) {
        write!(f, " \"{}\"", arg)?;
      } else {
        write!(f, " {}", arg)?;
      }
    }
    Ok(())
  }
}

/// Runs one invocation to completion.
pub trait ToolRunner {
  /// Execute `invocation` with `cwd` as working directory, echoing output as
  /// it is produced, and fail on a non-zero exit.
  fn run(
    &self,
    cwd: &Path,
    invocation: &Invocation,
  ) -> impl Future<Output = Result<(), BuildError>>;
}

/// The production runner: spawns the process and streams its output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
  async fn run(&self, cwd: &Path, invocation: &Invocation) -> Result<(), BuildError> {
    // The echoed command line is the only record of what ran; keep it on
    // stdout next to the tool's own output.
    println!("{}", invocation);
    info!(cmd = %invocation, "running external command");

    let mut command = Command::new(&invocation.program);
    command
      .args(&invocation.args)
      .current_dir(cwd)
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped());

    let mut child = command.spawn().map_err(|source| BuildError::SpawnFailed {
      program: invocation.program.display().to_string(),
      source,
    })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let (_, _, status) = tokio::join!(drain_lines(stdout), drain_lines(stderr), child.wait());
    let status = status?;

    debug!(cmd = %invocation, code = ?status.code(), "external command exited");

    if status.success() {
      Ok(())
    } else {
      Err(BuildError::CommandFailed {
        cmd: invocation.to_string(),
        code: status.code(),
      })
    }
  }
}

/// Drain a child stream line-by-line onto stdout.
///
/// A read error (e.g. non-UTF-8 output) ends the drain; it never fails the
/// build, the exit status does.
async fn drain_lines<R: AsyncRead + Unpin>(reader: Option<R>) {
  let Some(reader) = reader else {
    return;
  };

  let mut lines = BufReader::new(reader).lines();
  while let Ok(Some(line)) = lines.next_line().await {
    println!("{}", line);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_joins_program_and_args() {
    let invocation = Invocation::new("build")
      .args(["-p", "UefiPayloadPkg/UefiPayloadPkg.dsc", "-b", "DEBUG"]);
    assert_eq!(
      invocation.to_string(),
      "build -p UefiPayloadPkg/UefiPayloadPkg.dsc -b DEBUG"
    );
  }

  #[test]
  fn display_quotes_whitespace_args() {
    let invocation = Invocation::new("llvm-objcopy").arg("a b");
    assert_eq!(invocation.to_string(), "llvm-objcopy \"a b\"");
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn process_runner_succeeds_on_zero_exit() {
    let invocation = Invocation::new("/bin/echo").arg("hello");
    let result = ProcessRunner.run(Path::new("/"), &invocation).await;
    assert!(result.is_ok());
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn process_runner_reports_nonzero_exit() {
    let invocation = Invocation::new("/bin/sh").args(["-c", "exit 3"]);
    let result = ProcessRunner.run(Path::new("/"), &invocation).await;
    assert!(matches!(
      result,
      Err(BuildError::CommandFailed { code: Some(3), .. })
    ));
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn process_runner_reports_spawn_failure() {
    let invocation = Invocation::new("/nonexistent/tool");
    let result = ProcessRunner.run(Path::new("/"), &invocation).await;
    assert!(matches!(result, Err(BuildError::SpawnFailed { .. })));
  }
}
