//! Test utilities for upld-lib.
//!
//! Provides a `ToolRunner` that records invocations instead of spawning
//! processes, so pipeline tests can assert on exactly which external
//! commands would have run, and in what order.

use std::path::Path;
use std::sync::Mutex;

use crate::error::BuildError;
use crate::invoke::{Invocation, ToolRunner};

/// Records every invocation; optionally fails at one position.
#[derive(Debug, Default)]
pub struct RecordingRunner {
  recorded: Mutex<Vec<Invocation>>,
  fail_at: Option<usize>,
}

impl RecordingRunner {
  /// A runner where every command succeeds.
  pub fn new() -> Self {
    Self::default()
  }

  /// A runner whose `index`-th command (0-based) exits non-zero.
  pub fn failing_at(index: usize) -> Self {
    Self {
      recorded: Mutex::new(Vec::new()),
      fail_at: Some(index),
    }
  }

  /// Everything run so far, in order.
  pub fn recorded(&self) -> Vec<Invocation> {
    self.recorded.lock().expect("runner lock poisoned").clone()
  }
}

impl ToolRunner for RecordingRunner {
  async fn run(&self, _cwd: &Path, invocation: &Invocation) -> Result<(), BuildError> {
    let mut recorded = self.recorded.lock().expect("runner lock poisoned");
    recorded.push(invocation.clone());

    if self.fail_at == Some(recorded.len() - 1) {
      return Err(BuildError::CommandFailed {
        cmd: invocation.to_string(),
        code: Some(1),
      });
    }

    Ok(())
  }
}
