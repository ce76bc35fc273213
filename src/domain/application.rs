use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Service application submitted through eCitizen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenApplication {
    pub service_id: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_phone: String,
    pub application_data: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    /// Base64-encoded payload.
    pub data: String,
}
