//! Record-to-asset mapping.
//!
//! Maps a decoded [`Record`] to a typed [`Asset`]. Every field that may be
//! absent on the wire is an explicit `Option`; nothing is defaulted.
//! Encrypted attributes and protection material stay opaque — the
//! cryptographic zone that would decrypt them is not part of this client.

use tracing::debug;

use recordkit_core::message::{AssetValue, FieldValue, Record};

const CONTENTS: &str = "contents";
const ENCRYPTED_ATTRIBUTES: &str = "encryptedAttributes";
const FILE_TYPE: &str = "fileType";
const PROTECTION_CLASS: &str = "protectionClass";

/// A file asset extracted from a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    /// Record name the asset was extracted from.
    pub record_name: String,
    pub protection_class: Option<i64>,
    pub file_type: Option<i64>,
    pub file_size: Option<i64>,
    pub file_checksum: Option<Vec<u8>>,
    pub file_signature: Option<Vec<u8>>,
    /// Wrapped key material, still encrypted.
    pub protection_info: Option<Vec<u8>>,
    pub content_base_url: Option<String>,
    pub owner: Option<String>,
    /// Seconds since the epoch.
    pub download_token_expiration: Option<i64>,
    /// Encrypted attribute blob, still encrypted.
    pub encrypted_attributes: Option<Vec<u8>>,
}

impl Asset {
    /// Extract an asset from `record`, or `None` when the record carries no
    /// identifier name to key the asset by.
    pub fn from_record(record: &Record) -> Option<Asset> {
        let record_name = record
            .record_identifier
            .as_ref()?
            .value
            .as_ref()?
            .name
            .clone();
        if record_name.is_empty() {
            return None;
        }

        let contents = asset_value(record);
        let asset = Asset {
            record_name,
            protection_class: signed_field(record, PROTECTION_CLASS),
            file_type: signed_field(record, FILE_TYPE),
            file_size: contents.and_then(|a| a.size),
            file_checksum: contents.and_then(|a| a.signature.clone()),
            file_signature: contents.and_then(|a| a.reference_signature.clone()),
            protection_info: contents
                .and_then(|a| a.protection_info.as_ref())
                .and_then(|p| p.protection_info.clone()),
            content_base_url: contents.and_then(|a| a.content_base_url.clone()),
            owner: contents.and_then(|a| a.owner.clone()),
            download_token_expiration: contents.and_then(|a| a.download_token_expiration),
            encrypted_attributes: bytes_field(record, ENCRYPTED_ATTRIBUTES),
        };
        debug!(record = %asset.record_name, "extracted asset");
        Some(asset)
    }
}

fn field_value<'a>(record: &'a Record, name: &str) -> Option<&'a FieldValue> {
    record
        .record_field
        .iter()
        .find(|field| {
            field
                .identifier
                .as_ref()
                .is_some_and(|id| id.name == name)
        })
        .and_then(|field| field.value.as_ref())
}

fn signed_field(record: &Record, name: &str) -> Option<i64> {
    field_value(record, name).and_then(|v| v.signed_value)
}

fn bytes_field(record: &Record, name: &str) -> Option<Vec<u8>> {
    field_value(record, name).and_then(|v| v.bytes_value.clone())
}

fn asset_value(record: &Record) -> Option<&AssetValue> {
    field_value(record, CONTENTS).and_then(|v| v.asset_value.as_ref())
}
