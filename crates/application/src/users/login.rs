use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use validator::Validate;

use super::dtos::{LoginRequest, LoginResponse};
use crate::auth::tokens::{self, AuthConfig};
use crate::auth::credentials;
use crate::{AppError, AppResult};
use linkup_core::entities::users;

pub struct LoginUseCase;

impl LoginUseCase {
    pub async fn execute(
        db: &DatabaseConnection,
        config: &AuthConfig,
        req: LoginRequest,
    ) -> AppResult<LoginResponse> {
        req.validate()?;

        let user = users::Entity::find()
            .filter(users::Column::Email.eq(req.email.as_str()))
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !credentials::verify_password(&req.password, &user.password_hash)? {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        let token = tokens::issue_token(config, user.user_id)?;
        Ok(LoginResponse {
            token,
            user_id: user.user_id,
        })
    }
}
