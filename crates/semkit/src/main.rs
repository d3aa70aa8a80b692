//! semkit - Entry Point
//!
//! Binary entry point for the semkit command line interface.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `semkit compare <FIRST> <SECOND>` | Cosine similarity of two texts |
//! | `semkit ask -q <QUESTION> --context <TEXT>` | Answer a question from supplied context |
//! | `semkit sample` | Built-in question answering example |
//! | `semkit providers` | List registered providers |

// Force-link semkit-providers to ensure linkme registrations are included
extern crate semkit_providers;

use clap::Parser;
use semkit::cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    semkit::run(Cli::parse()).await
}
