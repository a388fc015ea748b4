//! Zone retrieve operations.

use uuid::Uuid;

use recordkit_core::error::ClientError;
use recordkit_core::message::{
    Identifier, IdentifierType, Operation, OperationType, RecordZoneIdentifier, RequestOperation,
    ZoneRetrieveRequest, ZoneRetrieveResponse,
};

use crate::client::RecordClient;

/// Operation key for zone retrieval.
pub const KEY: &str = "FetchRecordZonesOperation";

/// Retrieve the named zones, one response per zone in input order.
pub async fn retrieve(
    client: &RecordClient,
    zones: &[&str],
) -> Result<Vec<ZoneRetrieveResponse>, ClientError> {
    let requests = operations(zones, client.user_id());
    client
        .get(KEY, requests, |op| op.zone_retrieve_response.unwrap_or_default())
        .await
}

fn operations(zones: &[&str], user_id: &str) -> Vec<RequestOperation> {
    zones.iter().map(|zone| operation(zone, user_id)).collect()
}

fn operation(zone: &str, user_id: &str) -> RequestOperation {
    RequestOperation {
        request: Some(Operation {
            uuid: Uuid::new_v4().to_string(),
            r#type: OperationType::ZoneRetrieve as i32,
        }),
        zone_retrieve_request: Some(ZoneRetrieveRequest {
            zone_identifier: Some(zone_identifier(zone, user_id)),
        }),
        ..Default::default()
    }
}

/// Zone identifier owned by the session user.
pub(crate) fn zone_identifier(zone: &str, user_id: &str) -> RecordZoneIdentifier {
    RecordZoneIdentifier {
        value: Some(Identifier {
            name: zone.to_string(),
            r#type: IdentifierType::Zone as i32,
        }),
        owner_identifier: Some(Identifier {
            name: user_id.to_string(),
            r#type: IdentifierType::User as i32,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_operation_per_zone_in_order() {
        let ops = operations(&["_defaultZone", "backupZone"], "user-1");
        assert_eq!(ops.len(), 2);

        for (op, zone) in ops.iter().zip(["_defaultZone", "backupZone"]) {
            let request = op.request.as_ref().unwrap();
            assert_eq!(request.r#type, OperationType::ZoneRetrieve as i32);
            assert!(!request.uuid.is_empty());

            let zone_id = op
                .zone_retrieve_request
                .as_ref()
                .unwrap()
                .zone_identifier
                .as_ref()
                .unwrap();
            assert_eq!(zone_id.value.as_ref().unwrap().name, zone);
            assert_eq!(zone_id.owner_identifier.as_ref().unwrap().name, "user-1");
        }
    }
}
