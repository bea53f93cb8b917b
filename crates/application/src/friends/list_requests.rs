use sea_orm::{
    prelude::DateTimeWithTimeZone, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use super::dtos::FriendRequestDto;
use super::STATUS_PENDING;
use crate::users::ensure_user_exists;
use crate::AppResult;
use linkup_core::entities::{friends, users};

#[derive(FromQueryResult)]
struct RequestRow {
    user_id: Uuid,
    name: String,
    email: String,
    image: Option<String>,
    created_at: DateTimeWithTimeZone,
}

impl RequestRow {
    fn into_dto(self) -> FriendRequestDto {
        FriendRequestDto {
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            image: self.image,
            requested_at: self.created_at.timestamp(),
        }
    }
}

pub struct ListIncomingRequestsUseCase;

impl ListIncomingRequestsUseCase {
    /// Pending requests sent *to* `user_id`, oldest first, with the
    /// requester's profile.
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> AppResult<Vec<FriendRequestDto>> {
        ensure_user_exists(db, user_id).await?;

        let rows = friends::Entity::find()
            .filter(
                friends::Column::FriendId
                    .eq(user_id)
                    .and(friends::Column::Status.eq(STATUS_PENDING)),
            )
            .join(JoinType::InnerJoin, friends::Relation::Requester.def())
            .select_only()
            .column(users::Column::UserId)
            .column(users::Column::Name)
            .column(users::Column::Email)
            .column(users::Column::Image)
            .column(friends::Column::CreatedAt)
            .order_by_asc(friends::Column::CreatedAt)
            .into_model::<RequestRow>()
            .all(db)
            .await?;

        Ok(rows.into_iter().map(RequestRow::into_dto).collect())
    }
}

pub struct ListOutgoingRequestsUseCase;

impl ListOutgoingRequestsUseCase {
    /// Pending requests sent *by* `user_id`, oldest first, with the
    /// target's profile.
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> AppResult<Vec<FriendRequestDto>> {
        ensure_user_exists(db, user_id).await?;

        let rows = friends::Entity::find()
            .filter(
                friends::Column::UserId
                    .eq(user_id)
                    .and(friends::Column::Status.eq(STATUS_PENDING)),
            )
            .join(JoinType::InnerJoin, friends::Relation::Target.def())
            .select_only()
            .column(users::Column::UserId)
            .column(users::Column::Name)
            .column(users::Column::Email)
            .column(users::Column::Image)
            .column(friends::Column::CreatedAt)
            .order_by_asc(friends::Column::CreatedAt)
            .into_model::<RequestRow>()
            .all(db)
            .await?;

        Ok(rows.into_iter().map(RequestRow::into_dto).collect())
    }
}
