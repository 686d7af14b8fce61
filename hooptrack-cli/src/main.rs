// hooptrack-cli/src/main.rs
//
// Binary entry point: parses arguments, initializes logging, and dispatches
// to the command implementations. Exit code 1 on any core error.

use std::process;

use clap::Parser;
use log::error;

use hooptrack_cli::cli::{Cli, Commands};
use hooptrack_cli::commands::{analyze, evaluate, sessions};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Analyze(args) => analyze::run_analyze(args).map(|_| ()),
        Commands::Evaluate(args) => evaluate::run_evaluate(args),
        Commands::Sessions(args) => sessions::run_sessions(args),
        Commands::Classifiers => sessions::run_classifiers(),
    };

    if let Err(error) = result {
        error!("{error}");
        eprintln!("Error: {error}");
        process::exit(1);
    }
}
