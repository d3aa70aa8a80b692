//! Structured logging with tracing
//!
//! Provides centralized logging configuration and utilities using the tracing ecosystem.
//! Console output goes to stderr so command output on stdout stays clean.

use std::ffi::OsStr;
use std::path::Path;

use semkit_domain::error::{Error, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use crate::constants::{LOG_FILE_STEM, LOG_FILTER_ENV_VAR};

/// Initialize logging with the provided configuration
///
/// `SEMKIT_LOG` overrides the configured level with a full filter directive.
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new(".")),
            path.file_name().unwrap_or_else(|| OsStr::new(LOG_FILE_STEM)),
        )
    });

    // Layer types differ per format, hence the separate branches
    let registry = Registry::default().with(filter);
    let installed = if config.json_format {
        let console = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        match file_appender {
            Some(appender) => {
                let file = fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(console).with(file).try_init()
            }
            None => registry.with(console).try_init(),
        }
    } else {
        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true);
        match file_appender {
            Some(appender) => {
                let file = fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(console).with(file).try_init()
            }
            None => registry.with(console).try_init(),
        }
    };

    installed.map_err(|e| Error::infrastructure(format!("Failed to initialize logging: {e}")))?;

    info!("Logging initialized with level: {level}");
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log which configuration file was loaded
pub fn log_config_loaded(config_path: Option<&Path>) {
    match config_path {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No configuration file found, using defaults and environment"),
    }
}
