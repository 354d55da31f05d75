//! Main entry point for the Matraz API server.

use std::sync::Arc;

use matraz_server::{
    model::{AppState, Configuration},
    startup,
};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new();

    let _logging_guard = startup::init_logging(&configuration)?;

    let database_connection = configuration.database_connection().await?;
    info!("Database connection established");

    let address = configuration.server_address();
    let port = configuration.server_port();

    let app_state = Arc::new(AppState::new(configuration, database_connection));
    if !app_state.chatbot.is_configured() {
        info!("Chatbot webhook not configured; the widget will get fallback replies");
    }

    let server = startup::server(app_state, address.clone(), port)?;
    info!("Matraz server listening on {}:{}", address, port);

    server.await?;

    Ok(())
}
