use serde::Deserialize;
use validator::Validate;

/// CloudTrail record of a `RestoreTableToPointInTime` call, as delivered through EventBridge.
#[derive(Debug, Deserialize)]
pub struct RestoreTableEvent {
    pub detail: RestoreTableDetail,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreTableDetail {
    pub event_name: Option<String>,
    pub event_source: Option<String>,
    pub request_parameters: RestoreTableRequestParameters,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestoreTableRequestParameters {
    /// DynamoDB table names are 3 to 255 characters long.
    #[validate(length(min = 3, max = 255))]
    pub target_table_name: String,

    pub source_table_name: Option<String>,

    pub source_table_arn: Option<String>,
}
