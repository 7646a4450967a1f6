//! Attachment metadata

use serde::{Deserialize, Serialize};

/// Server-side record of a file attached to a transaction.
/// The payload itself is only ever sent (base64) or linked (`url`), never
/// stored client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    pub id: i64,
    pub filename: String,
    pub content_type: String,
    #[serde(default)]
    pub size_bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
