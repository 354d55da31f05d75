//! HTTP API handlers, one module per resource

pub mod auth;
pub mod categories;
pub mod chatbot;
pub mod health;
pub mod heroes;
pub mod industries;
pub mod markets;
pub mod products;
pub mod route;
pub mod settings;
pub mod social_links;
pub mod suppliers;
pub mod technical_services;
