use chrono::Utc;
use sea_orm::{prelude::DateTimeWithTimeZone, ActiveModelTrait, DatabaseConnection, Set};
use tracing::instrument;

use super::dtos::{MessagePayload, SendMessageRequest};
use crate::{AppError, AppResult};
use linkup_core::entities::messages;

pub struct SendMessageUseCase;

impl SendMessageUseCase {
    /// Persists one immutable message stamped with the current server time
    /// and returns its id.
    pub async fn execute(db: &DatabaseConnection, req: SendMessageRequest) -> AppResult<i64> {
        Self::execute_at(db, req, Utc::now().into()).await
    }

    /// Timestamp-injecting variant used by tests.
    #[instrument(skip(db, req), fields(sender = %req.sender_id, recipient = %req.recipient_id))]
    pub async fn execute_at(
        db: &DatabaseConnection,
        req: SendMessageRequest,
        sent_at: DateTimeWithTimeZone,
    ) -> AppResult<i64> {
        match &req.payload {
            MessagePayload::Text { text } if text.trim().is_empty() => {
                return Err(AppError::InvalidOperation(
                    "Message text must not be empty".to_string(),
                ));
            }
            MessagePayload::Image { url } if url.trim().is_empty() => {
                return Err(AppError::InvalidOperation(
                    "Image message requires an attachment reference".to_string(),
                ));
            }
            _ => {}
        }

        let kind = req.payload.kind();
        let (body, attachment_url) = req.payload.into_columns();

        let message = messages::ActiveModel {
            sender_id: Set(req.sender_id),
            recipient_id: Set(req.recipient_id),
            kind: Set(kind),
            body: Set(body),
            attachment_url: Set(attachment_url),
            sent_at: Set(sent_at),
            ..Default::default()
        };
        let inserted = message.insert(db).await?;

        Ok(inserted.message_id)
    }
}
