//! Authentication models
//!
//! JWT claims, the per-request auth context, and the public account view.

use serde::{Deserialize, Serialize};

use matraz_persistence::entity::users;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const TOKEN_PREFIX: &str = "Bearer ";

/// Access token lifetime in seconds (1 hour)
pub const DEFAULT_TOKEN_EXPIRE_SECONDS: i64 = 3600;

/// Refresh token lifetime in seconds (7 days)
pub const DEFAULT_REFRESH_EXPIRE_SECONDS: i64 = 7 * 24 * 3600;

/// JWT payload carried by both access and refresh tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Account email
    pub sub: String,
    /// Account id
    pub uid: i32,
    /// Expiry as a unix timestamp
    pub exp: i64,
}

/// Auth context inserted into request extensions by the middleware
#[derive(Debug, Default, Clone)]
pub struct AuthContext {
    pub user_id: Option<i32>,
    pub email: Option<String>,
    pub token_provided: bool,
    /// Rendered token error when a provided token failed validation
    pub error: Option<String>,
}

impl AuthContext {
    pub fn authenticated(user_id: i32, email: String) -> Self {
        Self {
            user_id: Some(user_id),
            email: Some(email),
            token_provided: true,
            error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn error_message(&self) -> &str {
        match &self.error {
            Some(message) => message,
            None => "authentication required",
        }
    }
}

/// Account data exposed over the API — never includes the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountView {
    pub id: i32,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<users::Model> for AccountView {
    fn from(value: users::Model) -> Self {
        Self {
            id: value.id,
            email: value.email,
            created_at: value.created_at,
        }
    }
}

impl From<&users::Model> for AccountView {
    fn from(value: &users::Model) -> Self {
        Self {
            id: value.id,
            email: value.email.to_string(),
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_constants() {
        assert_eq!(AUTHORIZATION_HEADER, "Authorization");
        assert_eq!(TOKEN_PREFIX, "Bearer ");
        assert_eq!(DEFAULT_TOKEN_EXPIRE_SECONDS, 3600);
        assert_eq!(DEFAULT_REFRESH_EXPIRE_SECONDS, 604800);
    }

    #[test]
    fn test_auth_context_default() {
        let ctx = AuthContext::default();
        assert!(!ctx.is_authenticated());
        assert!(!ctx.token_provided);
        assert_eq!(ctx.error_message(), "authentication required");
    }

    #[test]
    fn test_auth_context_authenticated() {
        let ctx = AuthContext::authenticated(7, "admin@example.com".to_string());
        assert!(ctx.is_authenticated());
        assert!(ctx.token_provided);
        assert_eq!(ctx.user_id, Some(7));
        assert_eq!(ctx.email.as_deref(), Some("admin@example.com"));
    }

    #[test]
    fn test_auth_context_error_message() {
        let ctx = AuthContext {
            token_provided: true,
            error: Some("token expired".to_string()),
            ..Default::default()
        };
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.error_message(), "token expired");
    }

    #[test]
    fn test_account_view_hides_password() {
        let user = users::Model {
            id: 1,
            email: "admin@example.com".to_string(),
            password: "$2b$10$hash".to_string(),
            created_at: chrono::Utc::now(),
        };
        let view = AccountView::from(&user);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "admin@example.com");
    }
}
