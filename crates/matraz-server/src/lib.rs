//! Matraz server library
//!
//! The HTTP surface of the catalog and content API: configuration,
//! shared app state, middleware, route handlers, and startup plumbing.

pub mod api;
pub mod middleware;
pub mod model;
pub mod startup;

/// Require a logged-in admin inside a handler.
///
/// Expands to an early `401 {"error": ...}` return unless the
/// authentication middleware put a valid identity into the request
/// extensions. Evaluates to the `AuthContext` on success.
#[macro_export]
macro_rules! authenticated {
    ($req:expr) => {{
        use actix_web::HttpMessage;
        let __ctx = $req
            .extensions()
            .get::<matraz_auth::model::AuthContext>()
            .cloned()
            .unwrap_or_default();
        if !__ctx.is_authenticated() {
            return $crate::model::response::unauthorized(__ctx.error_message());
        }
        __ctx
    }};
}
