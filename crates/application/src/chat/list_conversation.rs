use anyhow::anyhow;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::dtos::{MessageDto, MessagePayload, MessageSenderDto};
use crate::{AppError, AppResult};
use linkup_core::entities::{messages, users};

pub struct ListConversationUseCase;

impl ListConversationUseCase {
    /// All messages between the two users in either direction, ordered by
    /// send time with insertion order as the stable tie-break. Symmetric in
    /// its arguments.
    pub async fn execute(
        db: &DatabaseConnection,
        user_a: Uuid,
        user_b: Uuid,
    ) -> AppResult<Vec<MessageDto>> {
        let rows = messages::Entity::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(messages::Column::SenderId.eq(user_a))
                            .add(messages::Column::RecipientId.eq(user_b)),
                    )
                    .add(
                        Condition::all()
                            .add(messages::Column::SenderId.eq(user_b))
                            .add(messages::Column::RecipientId.eq(user_a)),
                    ),
            )
            .order_by_asc(messages::Column::SentAt)
            .order_by_asc(messages::Column::MessageId)
            .find_also_related(users::Entity)
            .all(db)
            .await?;

        let mut conversation = Vec::new();
        for (message, sender) in rows {
            let sender = sender.ok_or_else(|| {
                AppError::Internal(anyhow!("Message {} has no sender row", message.message_id))
            })?;
            let payload =
                MessagePayload::from_columns(message.kind, message.body, message.attachment_url)
                    .ok_or_else(|| {
                        AppError::Internal(anyhow!(
                            "Message {} has a malformed payload",
                            message.message_id
                        ))
                    })?;

            conversation.push(MessageDto {
                message_id: message.message_id,
                sender: MessageSenderDto {
                    user_id: sender.user_id,
                    name: sender.name,
                },
                recipient_id: message.recipient_id,
                payload,
                sent_at: message.sent_at.timestamp(),
            });
        }

        Ok(conversation)
    }
}
