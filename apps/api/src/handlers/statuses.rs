use actix_web::{get, post, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use uuid::Uuid;

use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpAppError;
use application::status::dtos::{MediaRef, PostStatusRequest};
use application::status::list_feed::ListFeedUseCase;
use application::status::post_status::PostStatusUseCase;
use application::AppError;

#[derive(Deserialize)]
pub struct PostStatusInput {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    media: Vec<MediaRef>,
}

#[post("")]
pub async fn post_status(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<PostStatusInput>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let input = body.into_inner();
    let req = PostStatusRequest {
        author_id: user_id,
        text: input.text,
        media: input.media,
    };

    let status_id = PostStatusUseCase::execute(&db, req).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status_id": status_id })))
}

#[get("/feed")]
pub async fn feed(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let feed = ListFeedUseCase::execute(&db, user_id).await?;
    Ok(HttpResponse::Ok().json(feed))
}
