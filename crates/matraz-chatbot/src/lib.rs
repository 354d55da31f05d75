//! Matraz Chatbot - webhook relay and conversation store
//!
//! The chatbot itself runs behind an externally configured webhook (an
//! automation flow); this crate is the stateless proxy in front of it.
//! It records the transcript, forwards each visitor message, applies
//! whatever state the flow reports back, and keeps serving a fallback
//! reply when the flow is down so the widget never breaks.

pub mod model;
pub mod relay;
pub mod service;

pub use relay::WebhookClient;
