use actix_web::{get, post, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use uuid::Uuid;

use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpAppError;
use application::friends::dtos::{RespondFriendRequest, SendFriendRequest};
use application::friends::list_friends::{FriendIdsUseCase, ListFriendsUseCase};
use application::friends::list_requests::{
    ListIncomingRequestsUseCase, ListOutgoingRequestsUseCase,
};
use application::friends::respond_request::RespondFriendRequestUseCase;
use application::friends::send_request::SendFriendRequestUseCase;
use application::locks::PairLocks;
use application::AppError;

#[derive(Deserialize)]
pub struct FriendRequestInput {
    recipient_id: Uuid,
}

#[derive(Deserialize)]
pub struct RespondRequestInput {
    requester_id: Uuid,
    accept: bool,
}

#[post("/request")]
pub async fn send_friend_request(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    locks: web::Data<PairLocks>,
    body: web::Json<FriendRequestInput>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let req = SendFriendRequest {
        sender_id: user_id,
        recipient_id: body.recipient_id,
    };

    SendFriendRequestUseCase::execute(&db, &locks, req).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Friend request sent" })))
}

#[post("/respond")]
pub async fn respond_friend_request(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    locks: web::Data<PairLocks>,
    body: web::Json<RespondRequestInput>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let req = RespondFriendRequest {
        recipient_id: user_id,
        requester_id: body.requester_id,
        accept: body.accept,
    };

    RespondFriendRequestUseCase::execute(&db, &locks, req).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Friend request processed" })))
}

#[get("")]
pub async fn list_friends(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let friends = ListFriendsUseCase::execute(&db, user_id).await?;
    Ok(HttpResponse::Ok().json(friends))
}

#[get("/ids")]
pub async fn list_friend_ids(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let ids = FriendIdsUseCase::execute(&db, user_id).await?;
    Ok(HttpResponse::Ok().json(ids))
}

#[get("/requests/incoming")]
pub async fn list_incoming_requests(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let requests = ListIncomingRequestsUseCase::execute(&db, user_id).await?;
    Ok(HttpResponse::Ok().json(requests))
}

#[get("/requests/outgoing")]
pub async fn list_outgoing_requests(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let requests = ListOutgoingRequestsUseCase::execute(&db, user_id).await?;
    Ok(HttpResponse::Ok().json(requests))
}
