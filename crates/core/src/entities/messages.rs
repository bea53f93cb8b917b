use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One immutable direct message. The conversation key is the unordered
/// `{sender_id, recipient_id}` pair; `kind` discriminates which payload
/// column is populated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub message_id: i64,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    // 0 = text, 1 = image
    pub kind: i16,
    pub body: Option<String>,
    pub attachment_url: Option<String>,
    pub sent_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SenderId",
        to = "super::users::Column::UserId"
    )]
    Sender,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::RecipientId",
        to = "super::users::Column::UserId"
    )]
    Recipient,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sender.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
