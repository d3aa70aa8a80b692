//! Command execution
//!
//! Loads configuration, initializes logging and the application context,
//! then runs the selected subcommand. Results go to stdout; logs go to stderr.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use semkit_infrastructure::config::{AppConfig, ConfigLoader};
use semkit_infrastructure::di::{
    AppContext, ChatCompletionProviderResolver, EmbeddingProviderResolver, init_app,
};
use semkit_infrastructure::error_ext::ErrorContext;
use semkit_infrastructure::logging::{init_logging, log_config_loaded};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cli::{AskArgs, Cli, Command};

/// Context used by `semkit sample`
pub const SAMPLE_CONTEXT: &str = "The Rust programming language was started by Graydon Hoare \
as a personal project in 2006. Mozilla began sponsoring the project in 2009 and the first \
stable release, Rust 1.0, was published on May 15, 2015. Rust guarantees memory safety \
without a garbage collector by checking ownership and borrowing rules at compile time.";

/// Question used by `semkit sample`
pub const SAMPLE_QUESTION: &str = "When was Rust 1.0 released?";

/// Run the command line interface
///
/// Ctrl-C cancels the operation in flight.
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_file) = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;
    log_config_loaded(config_file.as_deref());

    if cli.command == Command::Providers {
        print_providers(Arc::new(config));
        return Ok(());
    }

    let context = init_app(config)?;
    let cancellation = CancellationToken::new();
    cancel_on_ctrl_c(cancellation.clone());

    match cli.command {
        Command::Compare { first, second } => {
            compare(&context, &first, &second, &cancellation).await?;
        }
        Command::Ask(args) => ask(&context, &args, &cancellation).await?,
        Command::Sample => {
            println!("Context: {SAMPLE_CONTEXT}");
            println!("Question: {SAMPLE_QUESTION}");
            answer(&context, SAMPLE_QUESTION, SAMPLE_CONTEXT, &cancellation).await?;
        }
        Command::Providers => print_providers(context.config()),
    }

    Ok(())
}

/// Load configuration from optional path
fn load_config(
    config_path: Option<&Path>,
) -> semkit_domain::Result<(AppConfig, Option<PathBuf>)> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load_with_path()
}

fn cancel_on_ctrl_c(cancellation: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling the running operation");
            cancellation.cancel();
        }
    });
}

async fn compare(
    context: &AppContext,
    first: &str,
    second: &str,
    cancellation: &CancellationToken,
) -> semkit_domain::Result<()> {
    let score = context
        .similarity_comparer()
        .compare(first, second, cancellation)
        .await?;
    info!(score, "Compared texts");
    println!("Similarity: {score:.4}");
    Ok(())
}

async fn ask(
    context: &AppContext,
    args: &AskArgs,
    cancellation: &CancellationToken,
) -> semkit_domain::Result<()> {
    let text = match (&args.context, &args.context_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .io_context(format!("Failed to read context file {}", path.display()))?,
        (None, None) => {
            return Err(semkit_domain::Error::invalid_argument(
                "Either --context or --context-file is required",
            ));
        }
    };
    answer(context, &args.question, &text, cancellation).await
}

async fn answer(
    context: &AppContext,
    question: &str,
    text: &str,
    cancellation: &CancellationToken,
) -> semkit_domain::Result<()> {
    let reply = context
        .question_answering()
        .answer_from_context(question, text, cancellation)
        .await?;
    println!("Answer: {reply}");
    Ok(())
}

fn print_providers(config: Arc<AppConfig>) {
    let embedding = EmbeddingProviderResolver::new(Arc::clone(&config));
    let chat_completion = ChatCompletionProviderResolver::new(config);

    println!("Embedding providers:");
    for (name, description) in embedding.list_available() {
        println!("  {name:<14} {description}");
    }
    println!("Chat completion providers:");
    for (name, description) in chat_completion.list_available() {
        println!("  {name:<14} {description}");
    }
}
