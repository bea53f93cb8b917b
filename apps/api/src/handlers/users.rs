use actix_web::{get, post, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpAppError;
use application::users::dtos::{UpdateImageRequest, UpdateNameRequest};
use application::users::get_user::GetUserUseCase;
use application::users::list_users::ListUsersUseCase;
use application::users::update_profile::{UpdateProfileImageUseCase, UpdateProfileNameUseCase};
use application::AppError;

#[get("")]
pub async fn list_users(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let others = ListUsersUseCase::execute(&db, user_id).await?;
    Ok(HttpResponse::Ok().json(others))
}

#[get("/{user_id}")]
pub async fn get_user(
    _user: AuthUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HttpAppError> {
    let details = GetUserUseCase::execute(&db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(details))
}

#[post("/profile/name")]
pub async fn update_profile_name(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<UpdateNameRequest>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let updated = UpdateProfileNameUseCase::execute(&db, user_id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[post("/profile/image")]
pub async fn update_profile_image(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<UpdateImageRequest>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let updated = UpdateProfileImageUseCase::execute(&db, user_id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}
