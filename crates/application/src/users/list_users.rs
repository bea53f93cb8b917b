use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::dtos::UserDto;
use crate::AppResult;
use linkup_core::entities::users;

pub struct ListUsersUseCase;

impl ListUsersUseCase {
    /// Every registered user except the caller.
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid) -> AppResult<Vec<UserDto>> {
        let others = users::Entity::find()
            .filter(users::Column::UserId.ne(user_id))
            .order_by_asc(users::Column::CreatedAt)
            .all(db)
            .await?;

        Ok(others.into_iter().map(UserDto::from).collect())
    }
}
