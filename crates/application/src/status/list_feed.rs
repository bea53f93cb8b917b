use anyhow::anyhow;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::dtos::{MediaRef, StatusAuthorDto, StatusDto};
use crate::friends::list_friends::FriendIdsUseCase;
use crate::{AppError, AppResult};
use linkup_core::entities::{statuses, users};

pub struct ListFeedUseCase;

impl ListFeedUseCase {
    /// Statuses visible to `user_id`: those authored by a confirmed friend
    /// at call time, newest first, with the author's identity attached.
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid) -> AppResult<Vec<StatusDto>> {
        // FriendIdsUseCase also rejects unknown readers with NotFound.
        let friend_ids = FriendIdsUseCase::execute(db, user_id).await?;
        if friend_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = statuses::Entity::find()
            .filter(statuses::Column::AuthorId.is_in(friend_ids))
            .order_by_desc(statuses::Column::CreatedAt)
            .order_by_desc(statuses::Column::StatusId)
            .find_also_related(users::Entity)
            .all(db)
            .await?;

        let mut feed = Vec::new();
        for (status, author) in rows {
            let author = author.ok_or_else(|| {
                AppError::Internal(anyhow!("Status {} has no author row", status.status_id))
            })?;
            let media: Vec<MediaRef> = serde_json::from_value(status.media).map_err(|e| {
                AppError::Internal(anyhow!(
                    "Status {} has malformed media references: {}",
                    status.status_id,
                    e
                ))
            })?;

            feed.push(StatusDto {
                status_id: status.status_id,
                author: StatusAuthorDto {
                    user_id: author.user_id,
                    name: author.name,
                    image: author.image,
                },
                text: status.text,
                media,
                created_at: status.created_at.timestamp(),
            });
        }

        Ok(feed)
    }
}
