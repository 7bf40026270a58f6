//! Shared utilities for use cases.
//!
//! Contains the timeout-bounded completion helper used by both pipeline
//! stages (classification and customization).

use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use std::time::Duration;
use tracing::warn;

/// Send one request, giving up after `timeout`.
///
/// The in-flight call is dropped (and thereby cancelled) on expiry.
pub(crate) async fn complete_within(
    gateway: &dyn LlmGateway,
    request: &CompletionRequest,
    timeout: Duration,
) -> Result<String, GatewayError> {
    match tokio::time::timeout(timeout, gateway.complete(request)).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                "{} call timed out after {}s",
                request.model,
                timeout.as_secs()
            );
            Err(GatewayError::Timeout)
        }
    }
}
