use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::instrument;

use super::dtos::DeleteMessagesRequest;
use crate::{AppError, AppResult};
use linkup_core::entities::messages;

pub struct DeleteMessagesUseCase;

impl DeleteMessagesUseCase {
    /// Deletes every listed message in one statement and returns the number
    /// of rows removed. Ids with no matching row are ignored, so replaying a
    /// delete is harmless.
    #[instrument(skip(db, req), fields(count = req.message_ids.len()))]
    pub async fn execute(db: &DatabaseConnection, req: DeleteMessagesRequest) -> AppResult<u64> {
        if req.message_ids.is_empty() {
            return Err(AppError::InvalidOperation(
                "Message id list must not be empty".to_string(),
            ));
        }

        let result = messages::Entity::delete_many()
            .filter(messages::Column::MessageId.is_in(req.message_ids))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }
}
