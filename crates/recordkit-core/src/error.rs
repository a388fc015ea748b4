//! Client-level error types.

use thiserror::Error;

/// Errors that can occur during a batched record-storage call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, timeout, TLS, etc.).
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A request operation could not be serialized into a frame.
    #[error("frame encode error: {0}")]
    Encode(#[from] prost::EncodeError),

    /// A response frame had a malformed length prefix or message body,
    /// including a truncated trailing frame.
    #[error("frame decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The call was torn down while awaiting parallel chunk completion.
    #[error("batched call interrupted: {0}")]
    Interrupted(String),

    /// The reassembled response count does not match the request count.
    /// Primary defense against silent request/response desynchronization.
    #[error("protocol integrity violation: {requests} requests but {responses} responses")]
    ProtocolIntegrity { requests: usize, responses: usize },

    /// Deployment misconfiguration, e.g. an unresolvable operation key or
    /// incomplete account settings. Never silently defaulted.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Returns `true` if this error originated below the protocol layer
    /// (network or HTTP status), as opposed to a client-side fault.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }

    /// Returns `true` if the wire conversation itself is suspect and the
    /// same call cannot be expected to succeed on resubmission.
    pub fn is_protocol_fault(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::ProtocolIntegrity { .. })
    }
}
