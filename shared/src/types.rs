use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

pub const ALLOWED_ORIGIN: &str = "*";
pub const ALLOWED_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

// ========== RESPONSE ENVELOPE ==========
/// API Gateway proxy response, serialized exactly as the gateway expects it
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub headers: BTreeMap<String, String>,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub is_base64_encoded: bool,
}

impl ResponseEnvelope {
    /// Fixed header set: content type plus the CORS pair
    pub fn cors_headers(content_type: &str) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CONTENT_TYPE.to_string(), content_type.to_string()),
            (ALLOW_ORIGIN.to_string(), ALLOWED_ORIGIN.to_string()),
            (ALLOW_HEADERS.to_string(), ALLOWED_HEADERS.to_string()),
        ])
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
