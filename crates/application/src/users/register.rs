use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use super::dtos::{RegisterRequest, RegisterResponse};
use crate::auth::credentials;
use crate::{AppError, AppResult};
use linkup_core::entities::users;

pub struct RegisterUserUseCase;

impl RegisterUserUseCase {
    #[instrument(skip(db, req), fields(email = %req.email))]
    pub async fn execute(
        db: &DatabaseConnection,
        req: RegisterRequest,
    ) -> AppResult<RegisterResponse> {
        req.validate()?;

        let exists = users::Entity::find()
            .filter(users::Column::Email.eq(req.email.as_str()))
            .one(db)
            .await?;
        if exists.is_some() {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        // The credential is opaque from here on; only the auth provider
        // reads it back.
        let password_hash = credentials::hash_password(&req.password)?;
        let now = Utc::now();

        let user = users::ActiveModel {
            user_id: Set(Uuid::new_v4()),
            name: Set(req.name),
            email: Set(req.email),
            password_hash: Set(password_hash),
            image: Set(req.image),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        let inserted = user.insert(db).await?;

        tracing::info!(user_id = %inserted.user_id, "User registered");

        Ok(RegisterResponse {
            user_id: inserted.user_id,
            name: inserted.name,
            email: inserted.email,
        })
    }
}
