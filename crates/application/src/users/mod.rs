use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::{AppError, AppResult};
use linkup_core::entities::users;

pub mod dtos;
pub mod get_user;
pub mod list_users;
pub mod login;
pub mod register;
pub mod update_profile;

/// Guard shared by operations that reference another user id.
pub(crate) async fn ensure_user_exists(db: &DatabaseConnection, user_id: Uuid) -> AppResult<()> {
    if users::Entity::find_by_id(user_id).one(db).await?.is_none() {
        return Err(AppError::NotFound(format!("User {} does not exist", user_id)));
    }
    Ok(())
}
