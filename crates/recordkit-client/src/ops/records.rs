//! Record retrieve operations.

use uuid::Uuid;

use recordkit_core::error::ClientError;
use recordkit_core::message::{
    Identifier, IdentifierType, Operation, OperationType, RecordIdentifier,
    RecordRetrieveRequest, RecordRetrieveResponse, RequestOperation,
};

use crate::client::RecordClient;
use crate::ops::zones;

/// Operation key for record retrieval.
pub const KEY: &str = "FetchRecordsOperation";

/// Retrieve the named records from `zone`, one response per record in
/// input order.
pub async fn retrieve(
    client: &RecordClient,
    zone: &str,
    records: &[&str],
) -> Result<Vec<RecordRetrieveResponse>, ClientError> {
    let requests = operations(zone, records, client.user_id());
    client
        .get(KEY, requests, |op| op.record_retrieve_response.unwrap_or_default())
        .await
}

fn operations(zone: &str, records: &[&str], user_id: &str) -> Vec<RequestOperation> {
    records
        .iter()
        .map(|record| operation(zone, record, user_id))
        .collect()
}

fn operation(zone: &str, record: &str, user_id: &str) -> RequestOperation {
    RequestOperation {
        request: Some(Operation {
            uuid: Uuid::new_v4().to_string(),
            r#type: OperationType::RecordRetrieve as i32,
        }),
        record_retrieve_request: Some(RecordRetrieveRequest {
            record_identifier: Some(RecordIdentifier {
                value: Some(Identifier {
                    name: record.to_string(),
                    r#type: IdentifierType::Record as i32,
                }),
                zone_identifier: Some(zones::zone_identifier(zone, user_id)),
            }),
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_embeds_record_and_zone_identity() {
        let ops = operations("backupZone", &["rec-a", "rec-b"], "user-1");
        assert_eq!(ops.len(), 2);

        let id = ops[1]
            .record_retrieve_request
            .as_ref()
            .unwrap()
            .record_identifier
            .as_ref()
            .unwrap();
        assert_eq!(id.value.as_ref().unwrap().name, "rec-b");

        let zone_id = id.zone_identifier.as_ref().unwrap();
        assert_eq!(zone_id.value.as_ref().unwrap().name, "backupZone");
        assert_eq!(zone_id.owner_identifier.as_ref().unwrap().name, "user-1");
        assert_eq!(
            ops[1].request.as_ref().unwrap().r#type,
            OperationType::RecordRetrieve as i32
        );
    }
}
