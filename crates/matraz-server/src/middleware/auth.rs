// Authentication middleware
// Validates the bearer token (if any) and stores an AuthContext in the
// request extensions; the authenticated! macro enforces it per handler.

use actix_service::forward_ready;
use actix_utils::future::{Ready, ok};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web::Data,
};

use futures::future::LocalBoxFuture;

use matraz_auth::model::{AUTHORIZATION_HEADER, AuthContext, TOKEN_PREFIX};
use matraz_auth::service::token;

use crate::model::AppState;

pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthenticationMiddleware { service })
    }
}

pub struct AuthenticationMiddleware<S> {
    service: S,
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    let header_val = req.headers().get(AUTHORIZATION_HEADER)?;
    let value = header_val.to_str().ok()?;
    let token = value.trim().strip_prefix(TOKEN_PREFIX)?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if Method::OPTIONS != *req.method() {
            let mut auth_context = AuthContext::default();

            if let Some(bearer) = extract_token(&req) {
                auth_context.token_provided = true;

                if let Some(app_state) = req.app_data::<Data<AppState>>() {
                    let secret_key = app_state.configuration.token_secret_key();

                    match token::decode_token_cached(&bearer, &secret_key) {
                        Ok(claims) => {
                            auth_context = AuthContext::authenticated(claims.uid, claims.sub);
                        }
                        Err(err) => {
                            auth_context.error = Some(token::error_message(&err));
                        }
                    }
                } else {
                    tracing::error!("AppState not found in request app_data");
                }
            }

            // Always insert so the authenticated! macro can inspect it
            req.extensions_mut().insert(auth_context);
        }

        let res = self.service.call(req);

        Box::pin(async move { res.await.map(ServiceResponse::map_into_left_body) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn request_with_auth(value: &str) -> ServiceRequest {
        TestRequest::default()
            .insert_header((AUTHORIZATION_HEADER, value))
            .to_srv_request()
    }

    #[test]
    fn test_extract_token_bearer() {
        let req = request_with_auth("Bearer abc.def.ghi");
        assert_eq!(extract_token(&req), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_extract_token_trims_whitespace() {
        let req = request_with_auth("  Bearer   abc.def.ghi  ");
        assert_eq!(extract_token(&req), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_extract_token_rejects_other_schemes() {
        let req = request_with_auth("Basic dXNlcjpwYXNz");
        assert_eq!(extract_token(&req), None);
    }

    #[test]
    fn test_extract_token_rejects_empty() {
        let req = request_with_auth("Bearer ");
        assert_eq!(extract_token(&req), None);

        let req = TestRequest::default().to_srv_request();
        assert_eq!(extract_token(&req), None);
    }
}
