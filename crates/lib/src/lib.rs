//! upld-lib: orchestration core for the Universal Payload build
//!
//! This crate drives a two-stage EDK2 firmware build and merges the results:
//! - `defines`: build-time macro definitions (`-D NAME=VALUE`)
//! - `layout`: the derived build-tree paths for a (target, toolchain) pair
//! - `invoke`: structured external-command invocations and the runner seam
//! - `edk2` / `objcopy`: invocation builders for the two external tools
//! - `orchestrator`: the linear seven-step pipeline

pub mod defines;
pub mod edk2;
pub mod error;
pub mod invoke;
pub mod layout;
pub mod objcopy;
pub mod orchestrator;
pub mod testutil;
