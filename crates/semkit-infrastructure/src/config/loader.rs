//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML or JSON files, environment variables, and default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use semkit_domain::error::{Error, Result};

use crate::config::{AppConfig, LoggingConfig, QuestionAnsweringConfig, SemanticKernelConfig};
use crate::constants::{
    AZURE_OPENAI_PROVIDER, CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR,
    DEFAULT_CONFIG_FILENAME, KEYLESS_PROVIDERS, MAX_TEMPERATURE,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. Configuration file: the explicit path, or the first default location found
    /// 3. Environment variables with prefix (e.g., `SEMKIT__SEMANTIC_KERNEL__KEY`)
    ///
    /// An explicit path that does not exist is an error.
    pub fn load(&self) -> Result<AppConfig> {
        self.load_with_path().map(|(config, _)| config)
    }

    /// Load configuration and report which file, if any, was merged
    ///
    /// Loading happens before logging is initialized, so callers log the
    /// returned path with [`log_config_loaded`](crate::logging::log_config_loaded)
    /// once a subscriber is installed.
    pub fn load_with_path(&self) -> Result<(AppConfig, Option<PathBuf>)> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let config_file = match &self.config_path {
            Some(config_path) if !config_path.exists() => {
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            Some(config_path) => Some(config_path.clone()),
            None => Self::find_default_config_path(),
        };
        if let Some(path) = &config_file {
            figment = Self::merge_file(figment, path);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok((app_config, config_file))
    }

    /// Save configuration to file as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn merge_file(figment: Figment, path: &Path) -> Figment {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            figment.merge(Json::file(path))
        } else {
            figment.merge(Toml::file(path))
        }
    }

    /// Find the first default configuration file that exists
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(&config.logging)?;
    validate_semantic_kernel_config(&config.semantic_kernel)?;
    validate_question_answering_config(&config.question_answering)?;
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

fn validate_semantic_kernel_config(config: &SemanticKernelConfig) -> Result<()> {
    if config.request_timeout_secs == 0 {
        return Err(Error::configuration("Request timeout cannot be 0"));
    }

    for (service, provider) in [
        ("chat", &config.chat_provider),
        ("embedding", &config.embedding_provider),
    ] {
        if provider.trim().is_empty() {
            return Err(Error::configuration(format!(
                "The {service} provider name cannot be empty"
            )));
        }
        if !KEYLESS_PROVIDERS.contains(&provider.as_str()) && is_blank(config.key.as_deref()) {
            return Err(Error::configuration(format!(
                "An API key is required by the '{provider}' {service} provider"
            )));
        }
    }

    let chat_on_azure = config.chat_provider == AZURE_OPENAI_PROVIDER;
    let embedding_on_azure = config.embedding_provider == AZURE_OPENAI_PROVIDER;

    if (chat_on_azure || embedding_on_azure) && is_blank(config.endpoint.as_deref()) {
        return Err(Error::configuration(
            "An endpoint is required when using Azure OpenAI",
        ));
    }
    if chat_on_azure && is_blank(config.chat_model_deployment_name.as_deref()) {
        return Err(Error::configuration(
            "A chat model deployment name is required when using Azure OpenAI for chat",
        ));
    }
    if embedding_on_azure && is_blank(config.embeddings_model_deployment_name.as_deref()) {
        return Err(Error::configuration(
            "An embeddings model deployment name is required when using Azure OpenAI for embeddings",
        ));
    }
    if config.chat_max_context_tokens == Some(0) {
        return Err(Error::configuration("Chat context window cannot be 0"));
    }

    Ok(())
}

fn validate_question_answering_config(config: &QuestionAnsweringConfig) -> Result<()> {
    if config.max_response_tokens == 0 {
        return Err(Error::configuration("Maximum response tokens cannot be 0"));
    }
    if !(0.0..=MAX_TEMPERATURE).contains(&config.temperature) {
        return Err(Error::configuration(format!(
            "Temperature must be between 0 and {MAX_TEMPERATURE}, got {}",
            config.temperature
        )));
    }
    Ok(())
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
