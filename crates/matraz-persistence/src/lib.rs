//! Matraz Persistence - database entities
//!
//! SeaORM entity definitions for the catalog (products, categories,
//! suppliers and their link table), the CMS content tables, admin users,
//! key/value settings, and the chatbot conversation store.

pub mod entity;

// Re-export sea-orm so service crates use a single version
pub use sea_orm;
