//! Application state shared across all handlers

use sea_orm::DatabaseConnection;

use matraz_chatbot::WebhookClient;

use super::config::Configuration;

/// State handed to every handler through `web::Data`
#[derive(Clone)]
pub struct AppState {
    pub configuration: Configuration,
    pub database_connection: DatabaseConnection,
    pub chatbot: WebhookClient,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("configuration", &self.configuration)
            .field("database_connection", &"<DatabaseConnection>")
            .field("chatbot_configured", &self.chatbot.is_configured())
            .finish()
    }
}

impl AppState {
    pub fn new(configuration: Configuration, database_connection: DatabaseConnection) -> Self {
        let chatbot = WebhookClient::new(
            configuration.chatbot_webhook_url(),
            configuration.chatbot_webhook_timeout(),
        );

        Self {
            configuration,
            database_connection,
            chatbot,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.database_connection
    }
}
