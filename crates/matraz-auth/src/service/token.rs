//! JWT token service

use std::sync::LazyLock;
use std::time::Duration;

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use moka::sync::Cache;

use crate::model::JwtClaims;

/// Token cache to avoid re-validating the same bearer token on every request
static TOKEN_CACHE: LazyLock<Cache<String, JwtClaims>> = LazyLock::new(|| {
    Cache::builder()
        .max_capacity(10_000)
        .time_to_live(Duration::from_secs(300))
        .build()
});

/// Encode a token for the given account
pub fn encode_token(
    email: &str,
    user_id: i32,
    secret_key: &str,
    expire_seconds: i64,
) -> jsonwebtoken::errors::Result<String> {
    let exp = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::seconds(expire_seconds))
        .unwrap_or_else(chrono::Utc::now)
        .timestamp();

    let claims = JwtClaims {
        sub: email.to_string(),
        uid: user_id,
        exp,
    };

    let encoding_key = EncodingKey::from_secret(secret_key.as_bytes());
    encode(&Header::default(), &claims, &encoding_key)
}

/// Decode and validate a token without caching
pub fn decode_token(token: &str, secret_key: &str) -> jsonwebtoken::errors::Result<JwtClaims> {
    let decoding_key = DecodingKey::from_secret(secret_key.as_bytes());
    let data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())?;
    Ok(data.claims)
}

/// Decode and validate a token, consulting the cache first
pub fn decode_token_cached(
    token: &str,
    secret_key: &str,
) -> jsonwebtoken::errors::Result<JwtClaims> {
    if let Some(cached) = TOKEN_CACHE.get(token) {
        let now = chrono::Utc::now().timestamp();
        if cached.exp > now {
            return Ok(cached);
        }
        // Expired while cached
        TOKEN_CACHE.invalidate(token);
    }

    let claims = decode_token(token, secret_key)?;
    TOKEN_CACHE.insert(token.to_string(), claims.clone());

    Ok(claims)
}

/// Render a token error the way the API reports it
pub fn error_message(err: &jsonwebtoken::errors::Error) -> String {
    match err.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => "token expired".to_string(),
        _ => "invalid token".to_string(),
    }
}
