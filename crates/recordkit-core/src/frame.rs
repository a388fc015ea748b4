//! Length-delimited frame codec.
//!
//! Wire format, shared by request and response bodies:
//! ```text
//! ┌──────────────┬───────────────────┬──────────────┬───────────────────┬───
//! │ varint length│ message bytes     │ varint length│ message bytes     │ …
//! └──────────────┴───────────────────┴──────────────┴───────────────────┴───
//! ```
//! Message boundaries are self-describing; no external delimiter exists.
//! On the request side the per-call [`RequestHeader`] is not a frame of its
//! own: it is merged into the first request operation's envelope and applies
//! implicitly to every operation that follows in the same body.

use bytes::{Buf, Bytes, BytesMut};
use prost::Message;

use crate::error::ClientError;
use crate::message::{RequestHeader, RequestOperation, ResponseOperation};

/// Encode a chunk of request operations into one wire body.
///
/// The first operation is cloned with `header` merged into its envelope;
/// the rest are framed as-is. `requests` must be non-empty — empty chunks
/// are a caller bug upstream of the codec.
pub fn encode(
    header: &RequestHeader,
    requests: &[RequestOperation],
) -> Result<Bytes, ClientError> {
    assert!(!requests.is_empty(), "encode called with an empty chunk");

    let mut buf = BytesMut::with_capacity(requests.len() * 64);

    let mut first = requests[0].clone();
    first.header = Some(header.clone());
    first.encode_length_delimited(&mut buf)?;

    for request in &requests[1..] {
        request.encode_length_delimited(&mut buf)?;
    }
    Ok(buf.freeze())
}

/// Decode a wire body into its response operations.
///
/// Frames are read greedily until the buffer is exhausted. A truncated
/// trailing frame or malformed length prefix fails the whole decode; no
/// partial result is ever returned. Frame order is preserved.
pub fn decode(mut body: Bytes) -> Result<Vec<ResponseOperation>, ClientError> {
    let mut responses = Vec::new();
    while body.has_remaining() {
        let response = ResponseOperation::decode_length_delimited(&mut body)?;
        responses.push(response);
    }
    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Operation, OperationType};

    fn header() -> RequestHeader {
        RequestHeader {
            application_container: "com.example.container".into(),
            application_bundle: "com.example.bundle".into(),
            device_identifier: "6ba7b810-9dad-11d1-80b4-00c04fd430c8".into(),
            device_hardware_id: "hw-0001".into(),
            operation: "FetchRecordZonesOperation".into(),
        }
    }

    fn request(uuid: &str) -> RequestOperation {
        RequestOperation {
            request: Some(Operation {
                uuid: uuid.into(),
                r#type: OperationType::ZoneRetrieve as i32,
            }),
            ..Default::default()
        }
    }

    fn response(uuid: &str) -> ResponseOperation {
        ResponseOperation {
            response: Some(Operation {
                uuid: uuid.into(),
                r#type: OperationType::ZoneRetrieve as i32,
            }),
            ..Default::default()
        }
    }

    fn encode_responses(responses: &[ResponseOperation]) -> Bytes {
        let mut buf = BytesMut::new();
        for r in responses {
            r.encode_length_delimited(&mut buf).unwrap();
        }
        buf.freeze()
    }

    #[test]
    fn header_lands_on_first_frame_only() {
        let requests = vec![request("a"), request("b"), request("c")];
        let body = encode(&header(), &requests).unwrap();

        let mut cursor = body.clone();
        let first = RequestOperation::decode_length_delimited(&mut cursor).unwrap();
        assert_eq!(
            first.header.as_ref().map(|h| h.operation.as_str()),
            Some("FetchRecordZonesOperation")
        );

        let second = RequestOperation::decode_length_delimited(&mut cursor).unwrap();
        assert!(second.header.is_none());
        let third = RequestOperation::decode_length_delimited(&mut cursor).unwrap();
        assert!(third.header.is_none());
        assert!(!cursor.has_remaining());
    }

    #[test]
    fn decode_preserves_count_and_order() {
        let responses = vec![response("r0"), response("r1"), response("r2")];
        let decoded = decode(encode_responses(&responses)).unwrap();
        assert_eq!(decoded.len(), 3);
        for (i, op) in decoded.iter().enumerate() {
            assert_eq!(op.response.as_ref().unwrap().uuid, format!("r{i}"));
        }
    }

    #[test]
    fn decode_of_empty_body_yields_no_responses() {
        let decoded = decode(Bytes::new()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn truncated_trailing_frame_is_a_decode_error() {
        let body = encode_responses(&[response("r0"), response("r1")]);
        let truncated = body.slice(..body.len() - 3);
        let err = decode(truncated).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn malformed_length_prefix_is_a_decode_error() {
        // A lone 0xFF run never terminates a varint length prefix.
        let body = Bytes::from_static(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        let err = decode(body).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
