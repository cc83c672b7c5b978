//! Trellis CLI — the command-line interface for the Trellis layout compiler.
//!
//! Provides `trellis init` for project scaffolding and `trellis build` for
//! incrementally resolving layout documents into generated output.

#![warn(missing_docs)]

mod build;
mod emit;
mod init;
mod pipeline;

use std::process;

use clap::{Parser, Subcommand};

/// Trellis — a declarative layout compiler.
#[derive(Parser, Debug)]
#[command(name = "trellis", version, about = "Trellis Layout Compiler")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `trellis.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Trellis project.
    Init {
        /// Project name (creates a subdirectory). If omitted, initializes in
        /// the current directory.
        name: Option<String>,
    },
    /// Resolve layout documents and write generated output.
    Build(BuildArgs),
}

/// Arguments for the `trellis build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Ignore the build cache and rebuild every document.
    #[arg(short, long)]
    pub force: bool,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Init { name } => init::run(name),
        Command::Build(ref args) => build::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
