pub mod auth;
pub mod error_handler;
pub mod friends;
pub mod health;
pub mod messages;
pub mod statuses;
pub mod users;
