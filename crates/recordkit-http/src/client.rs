//! HTTP transport backed by `reqwest`.
//!
//! One POST per chunk: the encoded body goes out with the session's
//! container/bundle/auth headers and a fresh operation UUID, and the raw
//! response body is decoded through the frame codec. This is the only
//! component of the client that performs I/O.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;
use uuid::Uuid;

use recordkit_core::error::ClientError;
use recordkit_core::frame;
use recordkit_core::message::ResponseOperation;
use recordkit_core::transport::RecordTransport;

/// Configuration for [`HttpRecordTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Deadline for each chunk's network call. Once issued, a call runs to
    /// completion or to this deadline; the engine never cancels it.
    pub request_timeout: Duration,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Session identity attached to every request.
#[derive(Debug, Clone)]
pub struct RequestIdentity {
    /// Application container the session is scoped to.
    pub container: String,
    /// Bundle identifier of the calling application.
    pub bundle: String,
    /// Resolved record-storage user id.
    pub user_id: String,
    /// Record-storage auth token.
    pub auth_token: String,
}

/// Transport adapter issuing one HTTP call per encoded chunk.
pub struct HttpRecordTransport {
    endpoint: String,
    http: reqwest::Client,
    identity: RequestIdentity,
}

impl HttpRecordTransport {
    /// Create a transport for `endpoint` with the given session identity.
    pub fn new(
        endpoint: impl Into<String>,
        identity: RequestIdentity,
        config: HttpTransportConfig,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
            identity,
        })
    }

    /// Create with default configuration.
    pub fn default_for(
        endpoint: impl Into<String>,
        identity: RequestIdentity,
    ) -> Result<Self, ClientError> {
        Self::new(endpoint, identity, HttpTransportConfig::default())
    }
}

#[async_trait]
impl RecordTransport for HttpRecordTransport {
    async fn execute(&self, body: Bytes) -> Result<Vec<ResponseOperation>, ClientError> {
        let request_id = Uuid::new_v4();
        debug!(
            endpoint = %self.endpoint,
            request_id = %request_id,
            bytes = body.len(),
            "posting chunk body"
        );

        let resp = self
            .http
            .post(&self.endpoint)
            .header("content-type", "application/x-protobuf")
            .header("x-record-container", &self.identity.container)
            .header("x-record-bundle", &self.identity.bundle)
            .header("x-record-user-id", &self.identity.user_id)
            .header("x-record-auth-token", &self.identity.auth_token)
            .header("x-request-id", request_id.to_string())
            .body(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let responses = frame::decode(payload)?;
        log_unrecognized_results(&responses);
        Ok(responses)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Surface result codes the decoder does not recognize, so protocol drift
/// can be observed without failing the call. Diagnostic only.
fn log_unrecognized_results(responses: &[ResponseOperation]) {
    for (i, response) in responses.iter().enumerate() {
        if response.result_code().is_none() {
            debug!(
                index = i,
                code = response.result_code_raw(),
                "response carries an unrecognized result code"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordkit_core::message::{OperationResult, ResultCode};

    fn identity() -> RequestIdentity {
        RequestIdentity {
            container: "com.example.container".into(),
            bundle: "com.example.bundle".into(),
            user_id: "user-1".into(),
            auth_token: "token".into(),
        }
    }

    #[test]
    fn endpoint_is_exposed() {
        let transport = HttpRecordTransport::default_for(
            "https://records.example.com/api/client",
            identity(),
        )
        .unwrap();
        assert_eq!(transport.endpoint(), "https://records.example.com/api/client");
    }

    #[test]
    fn unrecognized_result_codes_do_not_fail() {
        let responses = vec![
            ResponseOperation {
                result: Some(OperationResult { code: ResultCode::Success as i32, error_message: None }),
                ..Default::default()
            },
            ResponseOperation {
                result: Some(OperationResult { code: 77, error_message: None }),
                ..Default::default()
            },
        ];
        // Purely diagnostic — must not panic or alter the responses.
        log_unrecognized_results(&responses);
        assert_eq!(responses.len(), 2);
    }
}
