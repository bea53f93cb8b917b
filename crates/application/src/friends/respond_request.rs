use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::instrument;

use super::dtos::RespondFriendRequest;
use super::{STATUS_ACCEPTED, STATUS_PENDING};
use crate::locks::PairLocks;
use crate::users::ensure_user_exists;
use crate::{AppError, AppResult};
use linkup_core::entities::friends;

pub struct RespondFriendRequestUseCase;

impl RespondFriendRequestUseCase {
    #[instrument(
        skip(db, locks, req),
        fields(recipient = %req.recipient_id, requester = %req.requester_id, accept = req.accept)
    )]
    pub async fn execute(
        db: &DatabaseConnection,
        locks: &PairLocks,
        req: RespondFriendRequest,
    ) -> AppResult<()> {
        let _pair = locks.acquire(req.requester_id, req.recipient_id).await;

        ensure_user_exists(db, req.requester_id).await?;
        ensure_user_exists(db, req.recipient_id).await?;

        // The pending edge points requester -> recipient. An accepted edge
        // does not match, so replaying an accept fails here with the state
        // untouched.
        let pending = friends::Entity::find()
            .filter(
                friends::Column::UserId
                    .eq(req.requester_id)
                    .and(friends::Column::FriendId.eq(req.recipient_id))
                    .and(friends::Column::Status.eq(STATUS_PENDING)),
            )
            .one(db)
            .await?
            .ok_or_else(|| {
                AppError::InvalidOperation("No pending friend request from this user".to_string())
            })?;

        if !req.accept {
            // Reject: drop the request, the pair returns to no relationship.
            pending.delete(db).await?;
            return Ok(());
        }

        let txn = db.begin().await?;
        let now = Utc::now();

        // Promote the forward edge.
        let mut forward: friends::ActiveModel = pending.into();
        forward.status = Set(STATUS_ACCEPTED);
        forward.updated_at = Set(now.into());
        forward.update(&txn).await?;

        // Mirror it so the friendship is symmetric. A stale reverse edge is
        // promoted in place rather than duplicated.
        let reverse = friends::Entity::find()
            .filter(
                friends::Column::UserId
                    .eq(req.recipient_id)
                    .and(friends::Column::FriendId.eq(req.requester_id)),
            )
            .one(&txn)
            .await?;

        match reverse {
            Some(existing) => {
                let mut reverse: friends::ActiveModel = existing.into();
                reverse.status = Set(STATUS_ACCEPTED);
                reverse.updated_at = Set(now.into());
                reverse.update(&txn).await?;
            }
            None => {
                let reverse = friends::ActiveModel {
                    user_id: Set(req.recipient_id),
                    friend_id: Set(req.requester_id),
                    status: Set(STATUS_ACCEPTED),
                    created_at: Set(now.into()),
                    updated_at: Set(now.into()),
                };
                reverse.insert(&txn).await?;
            }
        }

        txn.commit().await?;
        Ok(())
    }
}
