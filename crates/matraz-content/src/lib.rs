//! Matraz Content - CMS-style entities
//!
//! Everything the marketing site renders besides the catalog itself:
//! hero banners, market and industry landing content, technical service
//! cards, social links, and the key/value settings store.

pub mod model;
pub mod service;
