use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::instrument;

use super::dtos::SendFriendRequest;
use super::STATUS_PENDING;
use crate::locks::PairLocks;
use crate::users::ensure_user_exists;
use crate::{AppError, AppResult};
use linkup_core::entities::friends;

pub struct SendFriendRequestUseCase;

impl SendFriendRequestUseCase {
    #[instrument(skip(db, locks, req), fields(sender = %req.sender_id, recipient = %req.recipient_id))]
    pub async fn execute(
        db: &DatabaseConnection,
        locks: &PairLocks,
        req: SendFriendRequest,
    ) -> AppResult<()> {
        if req.sender_id == req.recipient_id {
            return Err(AppError::InvalidOperation(
                "Cannot send a friend request to yourself".to_string(),
            ));
        }

        let _pair = locks.acquire(req.sender_id, req.recipient_id).await;

        ensure_user_exists(db, req.sender_id).await?;
        ensure_user_exists(db, req.recipient_id).await?;

        // Any edge between the pair blocks a new request: a pending request
        // in either direction, or an accepted friendship.
        let existing = friends::Entity::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(friends::Column::UserId.eq(req.sender_id))
                            .add(friends::Column::FriendId.eq(req.recipient_id)),
                    )
                    .add(
                        Condition::all()
                            .add(friends::Column::UserId.eq(req.recipient_id))
                            .add(friends::Column::FriendId.eq(req.sender_id)),
                    ),
            )
            .one(db)
            .await?;

        if let Some(edge) = existing {
            let detail = if edge.status == STATUS_PENDING {
                "A friend request between these users is already pending"
            } else {
                "These users are already friends"
            };
            return Err(AppError::InvalidOperation(detail.to_string()));
        }

        // One row realizes both sides of the request: it is the recipient's
        // incoming entry and the sender's outgoing entry at once.
        let now = Utc::now();
        let request = friends::ActiveModel {
            user_id: Set(req.sender_id),
            friend_id: Set(req.recipient_id),
            status: Set(STATUS_PENDING),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        request.insert(db).await?;

        Ok(())
    }
}
