use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::dtos::Claims;
use crate::AppResult;

pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration: i64,
}

pub const TOKEN_TYPE_ACCESS: &str = "access";

/// Issues a signed access token for the given user.
pub fn issue_token(config: &AuthConfig, user_id: Uuid) -> AppResult<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(config.jwt_expiration)).timestamp(),
        token_type: TOKEN_TYPE_ACCESS.to_string(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?;
    Ok(token)
}

/// Decodes and validates an access token, returning its claims.
pub fn verify_token(config: &AuthConfig, token: &str) -> AppResult<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
