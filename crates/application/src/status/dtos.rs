use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kinds of media a status can attach. The urls are opaque blob references;
/// nothing in the backend interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRef {
    pub kind: MediaKind,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostStatusRequest {
    pub author_id: Uuid,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub media: Vec<MediaRef>,
}

/// Author identity attached to each feed entry for display.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusAuthorDto {
    pub user_id: Uuid,
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusDto {
    pub status_id: i64,
    pub author: StatusAuthorDto,
    pub text: Option<String>,
    pub media: Vec<MediaRef>,
    pub created_at: i64,
}
