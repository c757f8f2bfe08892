mod build;
mod check;
mod paths;

pub use build::cmd_build;
pub use check::cmd_check;
pub use paths::cmd_paths;
