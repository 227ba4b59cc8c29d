//! The transport seam between the client and the network.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes the HTTP round-trip for a built request.
///
/// Implementations own all network concerns: connection handling, auth
/// header injection, timeouts. Failures must be reported as
/// [`ApiError::TransportError`]; the client forwards them to the caller
/// without remapping.
#[async_trait::async_trait]
pub trait Transport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}
