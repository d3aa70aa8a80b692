//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! These are shared utilities, not ports.

use std::time::Duration;

use reqwest::Response;
use semkit_domain::error::{Error, Result};

use crate::constants::ERROR_MSG_REQUEST_TIMEOUT;

/// Which port a failing request belongs to
///
/// Decides the error variant upstream failures are reported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// Embedding generation
    Embedding,
    /// Chat completion
    ChatCompletion,
}

impl ServiceKind {
    /// Wrap `message` in this service's error variant
    pub fn error(self, message: impl Into<String>) -> Error {
        match self {
            Self::Embedding => Error::embedding(message),
            Self::ChatCompletion => Error::chat_completion(message),
        }
    }

    fn provider_error(self, provider: &str, context: &str, details: &str) -> Error {
        self.error(format!("{provider} {context}: {details}"))
    }
}

/// Utilities for processing HTTP responses
///
/// Provides common response handling patterns used by API providers.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    /// * `kind` - Port the request was made for
    ///
    /// # Returns
    /// Parsed JSON value on success, or an appropriate error
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
        kind: ServiceKind,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 => kind.provider_error(provider_name, "authentication failed", &error_text),
                429 => kind.provider_error(provider_name, "rate limit exceeded", &error_text),
                500..=599 => kind.provider_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => kind.provider_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response.json().await.map_err(|e| {
            kind.provider_error(provider_name, "response parse failed", &e.to_string())
        })
    }

    /// Convert a transport error, reporting timeouts with the configured limit
    pub fn request_error(error: &reqwest::Error, timeout: Duration, kind: ServiceKind) -> Error {
        if error.is_timeout() {
            kind.error(format!("{ERROR_MSG_REQUEST_TIMEOUT} {timeout:?}"))
        } else {
            kind.error(format!("HTTP request failed: {error}"))
        }
    }
}
