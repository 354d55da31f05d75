//! Actix middleware: authentication context and CORS

pub mod auth;
pub mod cors;
