//! recordkit-core — foundation types for the RecordKit client.
//!
//! # Overview
//!
//! RecordKit is a client for a proprietary cloud record-storage protocol:
//! typed request operations go out as length-delimited binary bodies over
//! HTTP, and responses come back positionally correlated with the request
//! order. The core crate defines:
//!
//! - [`message`] — the protocol's wire messages (prost)
//! - [`frame`] — the length-delimited frame codec
//! - [`batch`] — chunk splitting and order-restoring reassembly
//! - [`HeaderResolver`] — operation-key → request-header resolution
//! - [`RecordTransport`] — the async trait every transport implements
//! - [`ClientError`] — the failure taxonomy shared by every stage

pub mod batch;
pub mod error;
pub mod frame;
pub mod header;
pub mod message;
pub mod transport;

pub use batch::{Chunk, DEFAULT_CHUNK_LIMIT};
pub use error::ClientError;
pub use header::HeaderResolver;
pub use message::{RequestHeader, RequestOperation, ResponseOperation};
pub use transport::RecordTransport;
