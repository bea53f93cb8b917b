use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct SendFriendRequest {
    pub sender_id: Uuid,    // The requester
    pub recipient_id: Uuid, // The target
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RespondFriendRequest {
    pub recipient_id: Uuid, // The user answering the request
    pub requester_id: Uuid, // The user who sent it
    pub accept: bool,       // True = accept, False = reject (drops the request)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FriendDto {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub since: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FriendRequestDto {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub requested_at: i64,
}
