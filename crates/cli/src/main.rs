use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use output::OutputFormat;

/// upld - Universal Payload firmware build orchestrator
#[derive(Parser)]
#[command(name = "upld")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Workspace root (defaults to $WORKSPACE)
  #[arg(short = 'w', long, global = true, value_name = "DIR")]
  workspace: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the payload and embed the firmware volume into the entry ELF
  Build {
    /// Toolchain for the firmware-volume stage
    #[arg(short = 't', long)]
    toolchain: String,

    /// Build target
    #[arg(short = 'b', long, default_value = "DEBUG")]
    target: String,

    /// Macro definition NAME=VALUE (repeatable; UNIVERSAL_PAYLOAD=TRUE is
    /// always seeded)
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE")]
    defines: Vec<String>,
  },

  /// Verify that llvm-objcopy is available
  Check,

  /// Print the resolved build-tree layout
  Paths {
    /// Toolchain for the firmware-volume stage
    #[arg(short = 't', long)]
    toolchain: String,

    /// Build target
    #[arg(short = 'b', long, default_value = "DEBUG")]
    target: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  // Initialize logging; -v turns on debug-level output unless RUST_LOG
  // already says otherwise.
  let filter = if cli.verbose {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .without_time()
    .init();

  match cli.command {
    Commands::Build {
      toolchain,
      target,
      defines,
    } => cmd::cmd_build(cli.workspace.as_deref(), &toolchain, &target, &defines),
    Commands::Check => cmd::cmd_check(cli.workspace.as_deref()),
    Commands::Paths {
      toolchain,
      target,
      format,
    } => cmd::cmd_paths(cli.workspace.as_deref(), &toolchain, &target, format),
  }
}
