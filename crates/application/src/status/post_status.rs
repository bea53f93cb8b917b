use chrono::Utc;
use sea_orm::{prelude::DateTimeWithTimeZone, ActiveModelTrait, DatabaseConnection, Set};
use tracing::instrument;

use super::dtos::PostStatusRequest;
use crate::users::ensure_user_exists;
use crate::{AppError, AppResult};
use linkup_core::entities::statuses;

pub struct PostStatusUseCase;

impl PostStatusUseCase {
    /// Persists one immutable status stamped with the current server time
    /// and returns its id.
    pub async fn execute(db: &DatabaseConnection, req: PostStatusRequest) -> AppResult<i64> {
        Self::execute_at(db, req, Utc::now().into()).await
    }

    /// Timestamp-injecting variant used by tests.
    #[instrument(skip(db, req), fields(author = %req.author_id))]
    pub async fn execute_at(
        db: &DatabaseConnection,
        req: PostStatusRequest,
        created_at: DateTimeWithTimeZone,
    ) -> AppResult<i64> {
        let text = req
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        if text.is_none() && req.media.is_empty() {
            return Err(AppError::InvalidOperation(
                "A status needs text or at least one media reference".to_string(),
            ));
        }

        ensure_user_exists(db, req.author_id).await?;

        let media = serde_json::to_value(&req.media).map_err(|e| AppError::Internal(e.into()))?;

        let status = statuses::ActiveModel {
            author_id: Set(req.author_id),
            text: Set(text),
            media: Set(media),
            created_at: Set(created_at),
            ..Default::default()
        };
        let inserted = status.insert(db).await?;

        Ok(inserted.status_id)
    }
}
