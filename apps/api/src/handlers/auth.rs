use actix_web::{post, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::handlers::error_handler::HttpAppError;
use application::auth::tokens::AuthConfig;
use application::users::dtos::{LoginRequest, RegisterRequest};
use application::users::login::LoginUseCase;
use application::users::register::RegisterUserUseCase;

#[post("/register")]
pub async fn register(
    db: web::Data<DatabaseConnection>,
    body: web::Json<RegisterRequest>,
) -> Result<impl Responder, HttpAppError> {
    let response = RegisterUserUseCase::execute(&db, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/login")]
pub async fn login(
    db: web::Data<DatabaseConnection>,
    config: web::Data<Config>,
    body: web::Json<LoginRequest>,
) -> Result<impl Responder, HttpAppError> {
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        jwt_expiration: config.jwt_expiration,
    };

    let response = LoginUseCase::execute(&db, &auth_config, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
