pub mod delete_messages;
pub mod dtos;
pub mod list_conversation;
pub mod send_message;

// Message kinds stored in the `messages.kind` column.
pub const KIND_TEXT: i16 = 0;
pub const KIND_IMAGE: i16 = 1;
