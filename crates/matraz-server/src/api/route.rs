//! API routing configuration

use actix_web::{HttpResponse, Scope, web};

use crate::model::response;

use super::{
    auth, categories, chatbot, heroes, industries, markets, products, settings, social_links,
    suppliers, technical_services,
};

/// All resource routes under `/api`
pub fn routes() -> Scope {
    web::scope("/api")
        .service(auth::routes())
        .service(products::routes())
        .service(categories::routes())
        .service(suppliers::routes())
        .service(heroes::routes())
        .service(markets::routes())
        .service(industries::routes())
        .service(technical_services::routes())
        .service(social_links::routes())
        .service(settings::routes())
        .service(chatbot::routes())
}

/// JSON body for anything that did not match a route
pub async fn not_found() -> HttpResponse {
    response::not_found("route not found")
}
