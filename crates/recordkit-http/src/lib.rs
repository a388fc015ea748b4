//! recordkit-http — HTTP transport adapter for RecordKit.
//!
//! Implements [`recordkit_core::RecordTransport`] over `reqwest`: one POST
//! per chunk body, response bytes decoded through the frame codec.

pub mod client;

pub use client::{HttpRecordTransport, HttpTransportConfig, RequestIdentity};
