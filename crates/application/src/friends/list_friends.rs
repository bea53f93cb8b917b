use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use super::dtos::FriendDto;
use super::STATUS_ACCEPTED;
use crate::users::ensure_user_exists;
use crate::AppResult;
use linkup_core::entities::{friends, users};

pub struct ListFriendsUseCase;

impl ListFriendsUseCase {
    /// Confirmed friends of `user_id` with their profiles, oldest first.
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid) -> AppResult<Vec<FriendDto>> {
        ensure_user_exists(db, user_id).await?;

        let rows = friends::Entity::find()
            .filter(
                friends::Column::UserId
                    .eq(user_id)
                    .and(friends::Column::Status.eq(STATUS_ACCEPTED)),
            )
            .order_by_asc(friends::Column::CreatedAt)
            .find_also_related(users::Entity)
            .all(db)
            .await?;

        let mut friends_list = Vec::new();
        for (edge, user) in rows {
            if let Some(user) = user {
                friends_list.push(FriendDto {
                    user_id: user.user_id,
                    name: user.name,
                    email: user.email,
                    image: user.image,
                    since: edge.created_at.timestamp(),
                });
            }
        }

        Ok(friends_list)
    }
}

pub struct FriendIdsUseCase;

impl FriendIdsUseCase {
    /// Bare ids of the confirmed friend set.
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid) -> AppResult<Vec<Uuid>> {
        ensure_user_exists(db, user_id).await?;

        let ids = friends::Entity::find()
            .filter(
                friends::Column::UserId
                    .eq(user_id)
                    .and(friends::Column::Status.eq(STATUS_ACCEPTED)),
            )
            .order_by_asc(friends::Column::CreatedAt)
            .select_only()
            .column(friends::Column::FriendId)
            .into_tuple::<Uuid>()
            .all(db)
            .await?;

        Ok(ids)
    }
}
