//! Matraz Common - Shared types and utilities
//!
//! This crate provides the foundational pieces used across all Matraz
//! components:
//! - Error types
//! - Input validation helpers
//! - Slug generation and query-parameter conventions

pub mod error;
pub mod utils;
pub mod validation;

// Re-exports for convenience
pub use error::MatrazError;
pub use utils::{include_inactive, slugify};

/// Sender value stored for visitor-authored chatbot messages
pub const SENDER_USER: &str = "user";

/// Sender value stored for bot-authored chatbot messages
pub const SENDER_BOT: &str = "bot";

/// Conversation is still going on
pub const CONVERSATION_ACTIVE: &str = "active";

/// Conversation was closed by the visitor or the bot
pub const CONVERSATION_CLOSED: &str = "closed";

/// Bot is waiting for the visitor to leave contact data
pub const CONVERSATION_AWAITING_CONTACT: &str = "awaiting_contact";

/// Default currency for supplier offers
pub const DEFAULT_CURRENCY: &str = "USD";
