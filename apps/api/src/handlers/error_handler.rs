use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use application::AppError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
}

/// Wrapper around AppError to implement ResponseError (which is defined in actix-web)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl fmt::Display for HttpAppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl ResponseError for HttpAppError {
    fn status_code(&self) -> StatusCode {
        let code = self.0.status_code();
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_code = self.0.error_code();
        let error_message = self.0.to_string();

        if status_code.is_server_error() {
            tracing::error!(
                error_code = error_code,
                error_message = %error_message,
                "Server error: {:?}",
                self.0
            );
        } else if status_code == StatusCode::UNAUTHORIZED {
            tracing::warn!(
                error_code = error_code,
                error_message = %error_message,
                "Auth error"
            );
        }

        HttpResponse::build(status_code).json(ErrorResponse {
            error: error_message,
            error_code: error_code.to_string(),
        })
    }
}
