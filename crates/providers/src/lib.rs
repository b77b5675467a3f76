//! Provider abstractions for the operation-description service.
//!
//! Describing an organize operation is an optional capability: the engine
//! holds a provider when one is configured and falls back to
//! [`fallback_description`] otherwise. A provider must never be load-bearing;
//! any error it returns is absorbed at the call site.

use serde::Serialize;
use thiserror::Error;

pub mod noop;
pub mod openai;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("not implemented")]
    NotImplemented,
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

/// Fixed-field payload describing one completed file operation.
#[derive(Debug, Clone, Serialize)]
pub struct DescribeRequest {
    /// Destination path of the file after the operation.
    pub path: String,
    pub extension: Option<String>,
    pub size: u64,
    pub action: String,
    pub old_name: Option<String>,
    pub new_name: Option<String>,
}

#[async_trait::async_trait]
pub trait DescriptionProvider: Send + Sync {
    async fn describe(&self, request: &DescribeRequest) -> Result<String, ProviderError>;
}

/// Deterministic text used whenever no provider is configured or a provider
/// call fails.
pub fn fallback_description(action: &str, name: &str) -> String {
    format!("File {}: {}", action, name)
}
