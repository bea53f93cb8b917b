use actix_web::{get, post, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use uuid::Uuid;

use crate::extractors::AuthUser;
use crate::handlers::error_handler::HttpAppError;
use application::chat::delete_messages::DeleteMessagesUseCase;
use application::chat::dtos::{DeleteMessagesRequest, MessagePayload, SendMessageRequest};
use application::chat::list_conversation::ListConversationUseCase;
use application::chat::send_message::SendMessageUseCase;
use application::AppError;

#[derive(Deserialize)]
pub struct SendMessageInput {
    recipient_id: Uuid,
    payload: MessagePayload,
}

#[post("")]
pub async fn send_message(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<SendMessageInput>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let input = body.into_inner();
    let req = SendMessageRequest {
        sender_id: user_id,
        recipient_id: input.recipient_id,
        payload: input.payload,
    };

    let message_id = SendMessageUseCase::execute(&db, req).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message_id": message_id })))
}

#[get("/conversation/{peer_id}")]
pub async fn list_conversation(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, HttpAppError> {
    let user_id = Uuid::parse_str(&user.sub)
        .map_err(|_| AppError::Authentication("Invalid user ID".to_string()))?;

    let conversation = ListConversationUseCase::execute(&db, user_id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(conversation))
}

#[post("/delete")]
pub async fn delete_messages(
    _user: AuthUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<DeleteMessagesRequest>,
) -> Result<impl Responder, HttpAppError> {
    let deleted = DeleteMessagesUseCase::execute(&db, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted": deleted })))
}
