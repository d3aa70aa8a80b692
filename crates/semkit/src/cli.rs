//! Command line definition

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

/// Command line interface for semkit
#[derive(Parser, Debug)]
#[command(name = "semkit")]
#[command(about = "Text similarity and question answering over embedding and chat services")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Score how similar two texts are, from -1.0 to 1.0
    Compare {
        /// First text
        first: String,
        /// Second text
        second: String,
    },

    /// Answer a question using only the supplied context
    Ask(AskArgs),

    /// Run the built-in question answering example
    Sample,

    /// List the registered embedding and chat completion providers
    Providers,
}

/// Arguments of `semkit ask`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[command(group(
    ArgGroup::new("context_source")
        .required(true)
        .args(["context", "context_file"])
))]
pub struct AskArgs {
    /// Question to answer
    #[arg(short, long)]
    pub question: String,

    /// Context text
    #[arg(long)]
    pub context: Option<String>,

    /// File to read the context from
    #[arg(long, value_name = "PATH")]
    pub context_file: Option<PathBuf>,
}
