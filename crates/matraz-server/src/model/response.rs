//! HTTP response helpers
//!
//! The API speaks the same wire format everywhere: plain rows on success,
//! `{"error": ...}` with a matching status on failure, and
//! `{"message": ...}` for acknowledgements.

use actix_web::{HttpResponse, http::StatusCode};
use serde::Serialize;

use matraz_common::MatrazError;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody {
        error: message.to_string(),
    })
}

pub fn unauthorized(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorBody {
        error: message.to_string(),
    })
}

pub fn not_found(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody {
        error: message.to_string(),
    })
}

pub fn internal_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorBody {
        error: message.to_string(),
    })
}

pub fn message_ok(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(MessageBody {
        message: message.to_string(),
    })
}

/// Map a service error to a response.
///
/// Application errors carry their own status; anything else is logged
/// with the handler's context message and reported as a bare 500.
pub fn handle_service_error(err: anyhow::Error, context: &str) -> HttpResponse {
    match err.downcast_ref::<MatrazError>() {
        Some(app_err) => {
            let status = StatusCode::from_u16(app_err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status).json(ErrorBody {
                error: app_err.to_string(),
            })
        }
        None => {
            tracing::error!("{}: {}", context, err);
            internal_error(context)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let res = handle_service_error(MatrazError::NotFound("product").into(), "ctx");
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = handle_service_error(MatrazError::SlugExists("x".to_string()).into(), "ctx");
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = handle_service_error(MatrazError::InvalidCredentials.into(), "ctx");
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let res = handle_service_error(anyhow::anyhow!("db exploded"), "failed to list products");
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_helper_statuses() {
        assert_eq!(bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(unauthorized("x").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(internal_error("x").status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message_ok("x").status(), StatusCode::OK);
    }
}
