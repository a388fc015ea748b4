//! Pre-wired client construction.
//!
//! Wires a resolved [`AccountSession`] into a ready-to-use [`RecordClient`]:
//! HTTP transport against the session's endpoint, header resolver over the
//! operation keys this crate's builders use.

use std::sync::Arc;

use recordkit_core::error::ClientError;
use recordkit_core::header::HeaderResolver;
use recordkit_http::{HttpRecordTransport, RequestIdentity};

use crate::client::{ClientConfig, RecordClient};
use crate::ops;
use crate::session::AccountSession;

/// Application/device identity a client is created for.
#[derive(Debug, Clone)]
pub struct DeviceContext {
    pub container: String,
    pub bundle: String,
    /// Stable device identifier (UUID string).
    pub device_identifier: String,
    pub device_hardware_id: String,
}

/// Build a client for `session` with default configuration.
pub fn client_for_session(
    session: &AccountSession,
    device: &DeviceContext,
) -> Result<RecordClient, ClientError> {
    client_for_session_with(session, device, ClientConfig::default())
}

/// Build a client for `session` with explicit engine configuration.
pub fn client_for_session_with(
    session: &AccountSession,
    device: &DeviceContext,
    config: ClientConfig,
) -> Result<RecordClient, ClientError> {
    let identity = RequestIdentity {
        container: device.container.clone(),
        bundle: device.bundle.clone(),
        user_id: session.user_id.clone(),
        auth_token: session.auth_token.clone(),
    };
    let transport = HttpRecordTransport::default_for(session.base_url.clone(), identity)?;

    let headers = HeaderResolver::new(
        device.container.clone(),
        device.bundle.clone(),
        device.device_identifier.clone(),
        device.device_hardware_id.clone(),
        [ops::zones::KEY, ops::records::KEY],
    );

    Ok(RecordClient::new(
        Arc::new(transport),
        headers,
        session.user_id.clone(),
        config,
    ))
}
