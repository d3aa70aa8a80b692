//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `semkit_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "semkit.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "semkit";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SEMKIT";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// PROVIDER SELECTION CONSTANTS
// ============================================================================

/// Provider used when none is configured
pub const DEFAULT_PROVIDER: &str = "null";

/// Providers that work without an API key
pub const KEYLESS_PROVIDERS: &[&str] = &["null", "ollama"];

/// Registry name of the Azure OpenAI providers
pub const AZURE_OPENAI_PROVIDER: &str = "azure-openai";

/// Default timeout for requests to AI services, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Highest sampling temperature accepted by the chat services
pub const MAX_TEMPERATURE: f32 = 2.0;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV_VAR: &str = "SEMKIT_LOG";

/// File name stem used when the log file path has none
pub const LOG_FILE_STEM: &str = "semkit";
