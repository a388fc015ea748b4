//! Record-storage protocol wire messages.
//!
//! Hand-derived [`prost`] messages covering the subset of the protocol this
//! client speaks: the request/response operation envelopes, the per-call
//! header, zone and record identifiers, and record field values (including
//! asset payload metadata). Field tags are part of the wire contract and
//! must not be renumbered.

/// Per-call header, merged into the first request operation of each wire
/// message. The header applies implicitly to every operation in that body.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RequestHeader {
    /// Application container the call is scoped to.
    #[prost(string, tag = "1")]
    pub application_container: ::prost::alloc::string::String,
    /// Bundle identifier of the calling application.
    #[prost(string, tag = "2")]
    pub application_bundle: ::prost::alloc::string::String,
    /// Stable device identifier (UUID).
    #[prost(string, tag = "3")]
    pub device_identifier: ::prost::alloc::string::String,
    /// Hardware identifier of the device.
    #[prost(string, tag = "4")]
    pub device_hardware_id: ::prost::alloc::string::String,
    /// Operation key this call performs, e.g. `FetchRecordZonesOperation`.
    #[prost(string, tag = "5")]
    pub operation: ::prost::alloc::string::String,
}

/// Operation metadata carried by every request and echoed in responses.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Operation {
    /// Unique id for this operation instance.
    #[prost(string, tag = "1")]
    pub uuid: ::prost::alloc::string::String,
    /// Operation type discriminant.
    #[prost(enumeration = "OperationType", tag = "2")]
    pub r#type: i32,
}

/// Operation type discriminants. Values mirror the envelope field tags of
/// the corresponding request/response payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperationType {
    Unknown = 0,
    ZoneRetrieve = 201,
    RecordRetrieve = 211,
}

/// Outcome reported by the endpoint for one response operation.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationResult {
    #[prost(enumeration = "ResultCode", tag = "1")]
    pub code: i32,
    #[prost(string, optional, tag = "2")]
    pub error_message: ::core::option::Option<::prost::alloc::string::String>,
}

/// Known per-operation result codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ResultCode {
    Unknown = 0,
    Success = 1,
    Failure = 2,
    NotFound = 3,
}

/// Generic name/type identifier.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Identifier {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(enumeration = "IdentifierType", tag = "2")]
    pub r#type: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum IdentifierType {
    UnknownIdentifier = 0,
    Record = 1,
    Zone = 2,
    User = 3,
}

/// Identifies a record zone within a user's database.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecordZoneIdentifier {
    #[prost(message, optional, tag = "1")]
    pub value: ::core::option::Option<Identifier>,
    /// The zone owner, normally the session user.
    #[prost(message, optional, tag = "2")]
    pub owner_identifier: ::core::option::Option<Identifier>,
}

/// Identifies a record within a zone.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecordIdentifier {
    #[prost(message, optional, tag = "1")]
    pub value: ::core::option::Option<Identifier>,
    #[prost(message, optional, tag = "2")]
    pub zone_identifier: ::core::option::Option<RecordZoneIdentifier>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ZoneRetrieveRequest {
    #[prost(message, optional, tag = "1")]
    pub zone_identifier: ::core::option::Option<RecordZoneIdentifier>,
}

/// A record zone as returned by the endpoint.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecordZone {
    #[prost(message, optional, tag = "1")]
    pub zone_identifier: ::core::option::Option<RecordZoneIdentifier>,
    /// Opaque zone protection material; decryption is out of scope here.
    #[prost(bytes = "vec", optional, tag = "2")]
    pub protection_info: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ZoneRetrieveResponse {
    #[prost(message, optional, tag = "1")]
    pub zone: ::core::option::Option<RecordZone>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecordRetrieveRequest {
    #[prost(message, optional, tag = "1")]
    pub record_identifier: ::core::option::Option<RecordIdentifier>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecordRetrieveResponse {
    #[prost(message, optional, tag = "1")]
    pub record: ::core::option::Option<Record>,
}

/// A stored record: identifier plus named, typed fields.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Record {
    #[prost(message, optional, tag = "1")]
    pub record_identifier: ::core::option::Option<RecordIdentifier>,
    #[prost(message, repeated, tag = "7")]
    pub record_field: ::prost::alloc::vec::Vec<RecordField>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecordField {
    #[prost(message, optional, tag = "1")]
    pub identifier: ::core::option::Option<FieldIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub value: ::core::option::Option<FieldValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldIdentifier {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// One field value. At most one of the value members is populated; absent
/// members stay `None` rather than defaulting.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldValue {
    #[prost(int64, optional, tag = "1")]
    pub signed_value: ::core::option::Option<i64>,
    #[prost(string, optional, tag = "2")]
    pub string_value: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub bytes_value: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// Seconds since the epoch.
    #[prost(int64, optional, tag = "4")]
    pub date_value: ::core::option::Option<i64>,
    #[prost(message, optional, tag = "5")]
    pub asset_value: ::core::option::Option<AssetValue>,
}

/// Asset payload metadata stored inside a record field.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AssetValue {
    #[prost(string, optional, tag = "1")]
    pub owner: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int64, optional, tag = "2")]
    pub size: ::core::option::Option<i64>,
    #[prost(bytes = "vec", optional, tag = "3")]
    pub signature: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "4")]
    pub reference_signature: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(message, optional, tag = "5")]
    pub protection_info: ::core::option::Option<ProtectionInfo>,
    #[prost(string, optional, tag = "6")]
    pub content_base_url: ::core::option::Option<::prost::alloc::string::String>,
    /// Seconds since the epoch.
    #[prost(int64, optional, tag = "7")]
    pub download_token_expiration: ::core::option::Option<i64>,
}

/// Wrapped key material protecting an asset. Opaque to this client.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtectionInfo {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub protection_info: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    #[prost(string, optional, tag = "2")]
    pub protection_info_tag: ::core::option::Option<::prost::alloc::string::String>,
}

/// One logical operation submitted to the endpoint. Immutable once built;
/// list order is significant and preserved end to end.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RequestOperation {
    /// Populated by the frame codec on the first operation of each body.
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<RequestHeader>,
    #[prost(message, optional, tag = "2")]
    pub request: ::core::option::Option<Operation>,
    #[prost(message, optional, tag = "201")]
    pub zone_retrieve_request: ::core::option::Option<ZoneRetrieveRequest>,
    #[prost(message, optional, tag = "211")]
    pub record_retrieve_request: ::core::option::Option<RecordRetrieveRequest>,
}

/// One decoded response operation, positionally correlated with the request
/// operation at the same index of the batched call.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResponseOperation {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<Operation>,
    #[prost(message, optional, tag = "2")]
    pub result: ::core::option::Option<OperationResult>,
    #[prost(message, optional, tag = "201")]
    pub zone_retrieve_response: ::core::option::Option<ZoneRetrieveResponse>,
    #[prost(message, optional, tag = "211")]
    pub record_retrieve_response: ::core::option::Option<RecordRetrieveResponse>,
}

impl ResponseOperation {
    /// The raw result code, or [`ResultCode::Unknown`]'s value when the
    /// endpoint omitted the result entirely.
    pub fn result_code_raw(&self) -> i32 {
        self.result.as_ref().map(|r| r.code).unwrap_or(0)
    }

    /// The result code, if it is one this client knows about.
    pub fn result_code(&self) -> Option<ResultCode> {
        ResultCode::try_from(self.result_code_raw()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn request_operation_round_trip() {
        let op = RequestOperation {
            header: None,
            request: Some(Operation {
                uuid: "b1946ac9".into(),
                r#type: OperationType::ZoneRetrieve as i32,
            }),
            zone_retrieve_request: Some(ZoneRetrieveRequest {
                zone_identifier: Some(RecordZoneIdentifier {
                    value: Some(Identifier {
                        name: "_defaultZone".into(),
                        r#type: IdentifierType::Zone as i32,
                    }),
                    owner_identifier: None,
                }),
            }),
            record_retrieve_request: None,
        };
        let bytes = op.encode_to_vec();
        let back = RequestOperation::decode(bytes.as_slice()).unwrap();
        assert_eq!(back, op);
    }

    #[test]
    fn result_code_of_empty_response_is_unknown() {
        let op = ResponseOperation::default();
        assert_eq!(op.result_code(), Some(ResultCode::Unknown));
    }

    #[test]
    fn unrecognized_result_code_is_none() {
        let op = ResponseOperation {
            result: Some(OperationResult { code: 42, error_message: None }),
            ..Default::default()
        };
        assert_eq!(op.result_code(), None);
        assert_eq!(op.result_code_raw(), 42);
    }
}
