//! Operation-key → request header resolution.

use std::collections::BTreeSet;

use crate::error::ClientError;
use crate::message::RequestHeader;

/// Resolves an operation key to the [`RequestHeader`] carried by the first
/// wire message of each chunk.
///
/// The resolver is total over the operation keys the deployment supports:
/// the supported set is fixed at construction, and resolving a key outside
/// it is a [`ClientError::Configuration`] failure raised before any network
/// call is issued.
#[derive(Debug, Clone)]
pub struct HeaderResolver {
    template: RequestHeader,
    supported: BTreeSet<String>,
}

impl HeaderResolver {
    /// Build a resolver for one application/device identity and the given
    /// set of supported operation keys.
    pub fn new(
        container: impl Into<String>,
        bundle: impl Into<String>,
        device_identifier: impl Into<String>,
        device_hardware_id: impl Into<String>,
        supported: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            template: RequestHeader {
                application_container: container.into(),
                application_bundle: bundle.into(),
                device_identifier: device_identifier.into(),
                device_hardware_id: device_hardware_id.into(),
                operation: String::new(),
            },
            supported: supported.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve `key` to its header value.
    pub fn resolve(&self, key: &str) -> Result<RequestHeader, ClientError> {
        if !self.supported.contains(key) {
            return Err(ClientError::Configuration(format!(
                "unsupported operation key '{key}'"
            )));
        }
        let mut header = self.template.clone();
        header.operation = key.to_string();
        Ok(header)
    }

    /// The operation keys this resolver supports.
    pub fn supported_keys(&self) -> impl Iterator<Item = &str> {
        self.supported.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> HeaderResolver {
        HeaderResolver::new(
            "com.example.container",
            "com.example.bundle",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "hw-0001",
            ["FetchRecordZonesOperation", "FetchRecordsOperation"],
        )
    }

    #[test]
    fn resolves_supported_key() {
        let header = resolver().resolve("FetchRecordZonesOperation").unwrap();
        assert_eq!(header.operation, "FetchRecordZonesOperation");
        assert_eq!(header.application_container, "com.example.container");
    }

    #[test]
    fn supported_keys_are_enumerable_and_resolvable() {
        let r = resolver();
        let keys: Vec<&str> = r.supported_keys().collect();
        assert_eq!(keys, vec!["FetchRecordZonesOperation", "FetchRecordsOperation"]);
        for key in keys {
            assert_eq!(r.resolve(key).unwrap().operation, key);
        }
    }

    #[test]
    fn unsupported_key_is_a_configuration_error() {
        let err = resolver().resolve("DeleteEverythingOperation").unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
        assert!(err.to_string().contains("DeleteEverythingOperation"));
    }
}
