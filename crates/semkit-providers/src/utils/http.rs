//! HTTP client construction shared by API providers

use std::time::Duration;

use reqwest::{Client, Url};
use semkit_domain::error::Result;

use super::http_response::ServiceKind;

/// Trim surrounding whitespace from an API key
pub fn normalize_api_key(api_key: &str) -> String {
    api_key.trim().to_string()
}

/// Configured URL without a trailing slash, or `default_url`
pub fn effective_url(provided_url: Option<&str>, default_url: &str) -> String {
    provided_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(default_url)
        .trim_end_matches('/')
        .to_string()
}

/// URL of an operation on an Azure OpenAI deployment
///
/// `{endpoint}/openai/deployments/{deployment}/{operation...}?api-version=...`,
/// with the deployment percent-encoded as a single path segment.
pub fn azure_deployment_url(
    endpoint: &str,
    deployment: &str,
    operation: &[&str],
    api_version: &str,
    kind: ServiceKind,
) -> Result<Url> {
    let invalid =
        |reason: String| kind.error(format!("Invalid Azure OpenAI endpoint '{endpoint}': {reason}"));

    let mut url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("cannot be used as a base URL".to_string()))?
        .pop_if_empty()
        .extend(["openai", "deployments", deployment])
        .extend(operation);
    url.query_pairs_mut().append_pair("api-version", api_version);
    Ok(url)
}

/// Build the HTTP client a provider factory hands to its provider
pub fn build_http_client(timeout: Duration) -> std::result::Result<Client, String> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))
}
