use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;
use validator::Validate;

use super::dtos::{UpdateImageRequest, UpdateNameRequest, UserDto};
use crate::{AppError, AppResult};
use linkup_core::entities::users;

pub struct UpdateProfileNameUseCase;

impl UpdateProfileNameUseCase {
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: Uuid,
        req: UpdateNameRequest,
    ) -> AppResult<UserDto> {
        req.validate()?;

        let user = users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut active: users::ActiveModel = user.into();
        active.name = Set(req.name);
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(db).await?;

        Ok(updated.into())
    }
}

pub struct UpdateProfileImageUseCase;

impl UpdateProfileImageUseCase {
    pub async fn execute(
        db: &DatabaseConnection,
        user_id: Uuid,
        req: UpdateImageRequest,
    ) -> AppResult<UserDto> {
        req.validate()?;

        let user = users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        // The reference is opaque; nothing here interprets it.
        let mut active: users::ActiveModel = user.into();
        active.image = Set(Some(req.image));
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(db).await?;

        Ok(updated.into())
    }
}
