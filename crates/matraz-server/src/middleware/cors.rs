// CORS middleware
// Reflects the request origin (optionally restricted to a configured
// allow-list) and short-circuits OPTIONS preflights.

use std::rc::Rc;

use actix_service::forward_ready;
use actix_utils::future::{Ready, ok};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{Method, header, header::HeaderMap, header::HeaderValue},
};

use futures::future::LocalBoxFuture;

const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept, Authorization";

pub struct Cors {
    allowed_origins: Vec<String>,
}

impl Cors {
    /// An empty allow-list reflects every origin.
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(CorsMiddleware {
            service,
            allowed_origins: Rc::new(self.allowed_origins.clone()),
        })
    }
}

pub struct CorsMiddleware<S> {
    service: S,
    allowed_origins: Rc<Vec<String>>,
}

/// Origin value to reflect back, or None when the origin is not allowed.
fn resolve_origin(allowed: &[String], origin: Option<&str>) -> Option<String> {
    match origin {
        Some(origin) if allowed.is_empty() || allowed.iter().any(|o| o == origin) => {
            Some(origin.to_string())
        }
        Some(_) => None,
        None => Some("*".to_string()),
    }
}

fn set_cors_headers(headers: &mut HeaderMap, allow_origin: Option<&str>) {
    if let Some(origin) = allow_origin {
        if let Ok(value) = HeaderValue::from_str(origin) {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        }
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

impl<S, B> Service<ServiceRequest> for CorsMiddleware<S>
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
        let origin = req
            .headers()
            .get(header::ORIGIN)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let allow_origin = resolve_origin(&self.allowed_origins, origin.as_deref());

        if Method::OPTIONS == *req.method() {
            let mut response = HttpResponse::Ok().finish();
            set_cors_headers(response.headers_mut(), allow_origin.as_deref());
            let res = req.into_response(response.map_into_right_body());
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            set_cors_headers(res.headers_mut(), allow_origin.as_deref());
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_origin_open_list_reflects() {
        let allowed: Vec<String> = Vec::new();
        assert_eq!(
            resolve_origin(&allowed, Some("http://localhost:5173")),
            Some("http://localhost:5173".to_string())
        );
    }

    #[test]
    fn test_resolve_origin_no_origin_header() {
        let allowed = vec!["https://matraz.example.com".to_string()];
        assert_eq!(resolve_origin(&allowed, None), Some("*".to_string()));
    }

    #[test]
    fn test_resolve_origin_enforces_list() {
        let allowed = vec!["https://matraz.example.com".to_string()];
        assert_eq!(
            resolve_origin(&allowed, Some("https://matraz.example.com")),
            Some("https://matraz.example.com".to_string())
        );
        assert_eq!(resolve_origin(&allowed, Some("https://evil.example.com")), None);
    }

    #[test]
    fn test_set_cors_headers() {
        let mut headers = HeaderMap::new();
        set_cors_headers(&mut headers, Some("http://localhost:5173"));

        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            ALLOW_METHODS
        );
    }
}
