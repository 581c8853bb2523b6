use clap::Parser;

use sluice::cli::{Cli, Command, TestsArgs};
use sluice::{cmd_tests, cmd_tutorials, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Some(Command::Tests(args)) => cmd_tests::run(&cli, args),
        Some(Command::Tutorials(args)) => cmd_tutorials::run(&cli, args),
        // Bare invocation runs the suite with defaults
        None => cmd_tests::run(&cli, &TestsArgs::default()),
    }
}
