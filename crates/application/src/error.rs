use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication errors (401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// State-machine or data-invariant violations (400)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Not found errors (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Conflict errors (409) - e.g. duplicate unique key
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Persistence errors (503 or mapped)
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] sea_orm::DbErr),

    /// Internal server errors (500)
    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

impl AppError {
    /// Get HTTP status code for the error
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Authentication(_) => 401,
            AppError::InvalidOperation(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::Conflict(_) => 409,
            AppError::StoreUnavailable(e) => match e {
                sea_orm::DbErr::RecordNotFound(_) => 404,
                sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => 503,
                e if e.to_string().contains("UNIQUE constraint")
                    || e.to_string().contains("unique constraint")
                    || e.to_string().contains("Duplicate entry") =>
                {
                    409
                }
                _ => 500,
            },
            AppError::Internal(_) => 500,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Authentication(_) => "AUTHENTICATION_FAILED",
            AppError::InvalidOperation(_) => "INVALID_OPERATION",
            AppError::NotFound(_)
            | AppError::StoreUnavailable(sea_orm::DbErr::RecordNotFound(_)) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::StoreUnavailable(e) => {
                if e.to_string().contains("UNIQUE constraint")
                    || e.to_string().contains("unique constraint")
                    || e.to_string().contains("Duplicate entry")
                {
                    "CONFLICT"
                } else {
                    "STORE_UNAVAILABLE"
                }
            }
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// Additional From implementations for conversion

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| "validation failed".to_string())
                    )
                })
            })
            .collect();
        AppError::InvalidOperation(messages.join(", "))
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Authentication(format!("JWT error: {}", err))
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::Internal(anyhow::anyhow!("Password hashing error: {}", err))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidOperation(format!("Invalid UUID: {}", err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;
