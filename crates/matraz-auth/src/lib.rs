//! Matraz Auth - JWT tokens and admin accounts
//!
//! The auth layer is deliberately thin: one kind of principal (an admin
//! user identified by email), HS256 bearer tokens, and bcrypt password
//! storage. Mutating API endpoints require a valid token; there are no
//! roles or per-resource permissions.

pub mod model;
pub mod service;

pub use model::{AuthContext, JwtClaims};
