//! The `RecordTransport` trait — the engine's only I/O boundary.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::ClientError;
use crate::message::ResponseOperation;

/// Issues one network call per already-encoded chunk body and returns the
/// decoded response operations.
///
/// Everything outside implementations of this trait is a pure data
/// transformation; deadlines and cancellation, if any, are enforced by the
/// transport's underlying network call. Implementations must be
/// `Send + Sync` so many chunks can be in flight concurrently, and the
/// trait is object-safe for storage as `Arc<dyn RecordTransport>`.
#[async_trait]
pub trait RecordTransport: Send + Sync + 'static {
    /// Send `body` to the configured endpoint and decode the response body.
    async fn execute(&self, body: Bytes) -> Result<Vec<ResponseOperation>, ClientError>;

    /// The endpoint this transport targets (for logging and diagnostics).
    fn endpoint(&self) -> &str;
}
