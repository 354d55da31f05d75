//! HTTP server setup

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{
    api,
    middleware::{auth::Authentication, cors::Cors},
    model::AppState,
};

/// Creates and binds the API server.
pub fn server(app_state: Arc<AppState>, address: String, port: u16) -> std::io::Result<Server> {
    let cors_origins = app_state.configuration.cors_allowed_origins();

    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::new(cors_origins.clone()))
            .wrap(Authentication)
            .app_data(web::Data::from(app_state.clone()))
            .service(api::health::health)
            .service(api::route::routes())
            .default_service(web::route().to(api::route::not_found))
    })
    .bind((address, port))?
    .run())
}
