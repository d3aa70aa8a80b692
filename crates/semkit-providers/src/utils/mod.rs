//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

mod http;
mod http_response;

pub use http::{azure_deployment_url, build_http_client, effective_url, normalize_api_key};
pub use http_response::{HttpResponseUtils, ServiceKind};
