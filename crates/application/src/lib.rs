pub mod auth;
pub mod chat;
pub mod error;
pub mod friends;
pub mod locks;
pub mod status;
pub mod users;

pub use error::{AppError, AppResult};
