//! Error types for Matraz
//!
//! `MatrazError` carries the application-level failures that handlers map
//! to HTTP status codes. Everything else travels as a plain `anyhow::Error`
//! and ends up as a 500.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum MatrazError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("slug '{0}' already exists")]
    SlugExists(String),

    #[error("section '{0}' already exists")]
    SectionExists(String),

    #[error("user '{0}' already exists")]
    UserAlreadyExists(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("caused: {0}")]
    IllegalArgument(String),

    #[error("cannot delete {0}: it still has associated products")]
    ResourceInUse(&'static str),

    #[error("authentication error: {0}")]
    AuthError(String),

    #[error("chatbot webhook is not configured")]
    WebhookNotConfigured,

    #[error("webhook error: {0}")]
    WebhookError(String),
}

impl MatrazError {
    /// HTTP status the error maps to at the API boundary
    pub fn status_code(&self) -> u16 {
        match self {
            MatrazError::NotFound(_) => 404,
            MatrazError::SlugExists(_)
            | MatrazError::SectionExists(_)
            | MatrazError::UserAlreadyExists(_)
            | MatrazError::IllegalArgument(_)
            | MatrazError::ResourceInUse(_) => 400,
            MatrazError::InvalidCredentials | MatrazError::AuthError(_) => 401,
            MatrazError::WebhookNotConfigured | MatrazError::WebhookError(_) => 502,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatrazError::NotFound("product");
        assert_eq!(format!("{}", err), "product not found");

        let err = MatrazError::SlugExists("microscopes".to_string());
        assert_eq!(format!("{}", err), "slug 'microscopes' already exists");

        let err = MatrazError::InvalidCredentials;
        assert_eq!(format!("{}", err), "invalid credentials");

        let err = MatrazError::ResourceInUse("category");
        assert_eq!(
            format!("{}", err),
            "cannot delete category: it still has associated products"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(MatrazError::NotFound("hero").status_code(), 404);
        assert_eq!(MatrazError::SlugExists("x".into()).status_code(), 400);
        assert_eq!(MatrazError::SectionExists("home".into()).status_code(), 400);
        assert_eq!(MatrazError::InvalidCredentials.status_code(), 401);
        assert_eq!(MatrazError::AuthError("token expired".into()).status_code(), 401);
        assert_eq!(MatrazError::WebhookNotConfigured.status_code(), 502);
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = MatrazError::NotFound("market").into();
        let matraz = err.downcast_ref::<MatrazError>();
        assert!(matches!(matraz, Some(MatrazError::NotFound("market"))));
    }
}
