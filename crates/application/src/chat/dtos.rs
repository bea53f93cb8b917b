use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{KIND_IMAGE, KIND_TEXT};

/// Message payload, discriminated by kind. Exactly one payload field is
/// populated per kind, both on the wire and in the storage columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessagePayload {
    Text { text: String },
    Image { url: String },
}

impl MessagePayload {
    pub fn kind(&self) -> i16 {
        match self {
            MessagePayload::Text { .. } => KIND_TEXT,
            MessagePayload::Image { .. } => KIND_IMAGE,
        }
    }

    /// Splits the payload into its `(body, attachment_url)` storage columns.
    pub fn into_columns(self) -> (Option<String>, Option<String>) {
        match self {
            MessagePayload::Text { text } => (Some(text), None),
            MessagePayload::Image { url } => (None, Some(url)),
        }
    }

    /// Rebuilds the payload from its storage columns.
    pub fn from_columns(
        kind: i16,
        body: Option<String>,
        attachment_url: Option<String>,
    ) -> Option<Self> {
        match kind {
            KIND_TEXT => body.map(|text| MessagePayload::Text { text }),
            KIND_IMAGE => attachment_url.map(|url| MessagePayload::Image { url }),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub payload: MessagePayload,
}

/// Minimal sender identity attached to each listed message for display.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageSenderDto {
    pub user_id: Uuid,
    pub name: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub message_id: i64,
    pub sender: MessageSenderDto,
    pub recipient_id: Uuid,
    pub payload: MessagePayload,
    pub sent_at: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteMessagesRequest {
    pub message_ids: Vec<i64>,
}
