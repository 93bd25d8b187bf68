//! Oracle trait for text generation services

use crate::error::Result;
use serde_json::Value;

/// A black-box text-generation service.
///
/// Implementations handle their own retry and backoff; failures surface as
/// `ApiUnavailable`, `RateLimited`, or `MalformedOutput`.
pub trait TextOracle {
    /// Free-form text generation.
    fn generate(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Structured (JSON) generation; best-effort extraction of embedded JSON
    /// is applied to the raw output before giving up with `MalformedOutput`.
    fn generate_structured(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<Value>> + Send;
}
