//! netan CLI - build and run the network analyzer

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use netan::builder::ProvisionError;
use netan::ops::LaunchError;
use netan::util::Shell;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging; NETAN_LOG overrides the flag-derived filter
    let filter = EnvFilter::try_from_env("NETAN_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("netan=debug")
        } else {
            EnvFilter::new("netan=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let shell = Arc::new(Shell::from_flags(cli.quiet, cli.verbose, cli.color));

    if let Err(e) = run(cli.command, &shell) {
        let code = report(&e, &shell);
        std::process::exit(code);
    }
}

fn run(command: Commands, shell: &Arc<Shell>) -> Result<()> {
    match command {
        Commands::Setup => commands::setup::execute(shell),
        Commands::Run => commands::run::execute(shell),
        Commands::Viz => commands::viz::execute(shell),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Print `err` for the operator and pick the process exit code.
fn report(err: &anyhow::Error, shell: &Shell) -> i32 {
    if let Some(e) = err.downcast_ref::<ProvisionError>() {
        shell.diagnostic(&e.to_diagnostic());
        1
    } else if let Some(e) = err.downcast_ref::<LaunchError>() {
        shell.diagnostic(&e.to_diagnostic());
        e.exit_code()
    } else {
        shell.error(format!("{:#}", err));
        1
    }
}
