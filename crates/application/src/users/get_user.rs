use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use super::dtos::UserDto;
use crate::{AppError, AppResult};
use linkup_core::entities::users;

pub struct GetUserUseCase;

impl GetUserUseCase {
    pub async fn execute(db: &DatabaseConnection, user_id: Uuid) -> AppResult<UserDto> {
        let user = users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }
}
