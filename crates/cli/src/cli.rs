//! CLI argument parsing with clap derive.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A thin harness that drives pytest suites and notebook tutorials
#[derive(Parser)]
#[command(name = "sluice")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SLUICE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the test suite (the default when no command is given)
    Tests(TestsArgs),
    /// Execute notebook tutorials from a temporary copy
    Tutorials(TutorialsArgs),
}

#[derive(clap::Args, Default)]
pub struct TestsArgs {
    /// Restrict the run to one module's test subdirectory
    #[arg(value_name = "MODULE")]
    pub module: Option<String>,

    /// Distribute tests across worker processes (requires pytest-xdist)
    #[arg(long)]
    pub parallel: bool,

    /// Worker count for parallel runs (default: host CPU count)
    #[arg(long, value_name = "N")]
    pub n_cpu: Option<NonZeroUsize>,

    /// Measure coverage and write an HTML report
    #[arg(long)]
    pub coverage: bool,
}

#[derive(clap::Args, Default)]
pub struct TutorialsArgs {
    /// Execute notebooks across worker processes (requires pytest-xdist)
    #[arg(long)]
    pub parallel: bool,

    /// Worker count for parallel runs (default: automatic selection)
    #[arg(long, value_name = "N")]
    pub n_cpu: Option<NonZeroUsize>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
