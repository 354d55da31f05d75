//! Input validation helpers for API requests.

use validator::{ValidateEmail, ValidationError};

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// bcrypt ignores everything past 72 bytes, so longer inputs are rejected
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// Maximum length for slug fields
pub const MAX_SLUG_LENGTH: usize = 128;

/// Validate an email address format
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("email_empty"));
    }
    if !email.validate_email() {
        return Err(ValidationError::new("email_invalid"));
    }
    Ok(())
}

/// Validate a password at registration time
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new("password_too_short"));
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::new("password_too_long"));
    }
    Ok(())
}

/// Validate a client-provided slug
///
/// Slugs must be non-empty, within length, and contain only lowercase
/// alphanumerics and hyphens.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(ValidationError::new("slug_empty"));
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(ValidationError::new("slug_too_long"));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::new("slug_invalid_chars"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("admin@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@missing-user.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password(&"x".repeat(73)).is_err());
        assert!(validate_password(&"x".repeat(72)).is_ok());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("lab-equipment").is_ok());
        assert!(validate_slug("ph-meter-3000").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Uppercase").is_err());
        assert!(validate_slug("with space").is_err());
        assert!(validate_slug(&"a".repeat(129)).is_err());
    }
}
