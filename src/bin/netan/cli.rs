//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};

use netan::util::shell::ColorChoice;

/// netan - build and run the network analyzer
#[derive(Parser)]
#[command(name = "netan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directories and compile the analyzer and visualizers
    Setup,

    /// Run the network analyzer
    Run,

    /// Run the data and simple visualizers
    Viz,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
