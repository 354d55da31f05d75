//! Chatbot wire models
//!
//! The webhook payload and reply use camelCase keys because the widget
//! and the automation flow already speak that shape.

use serde::{Deserialize, Serialize};

/// Visitor contact data collected by the bot during a conversation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Payload POSTed to the configured webhook for each visitor message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayPayload {
    pub session_id: String,
    pub message: String,
    pub conversation_state: Option<String>,
    pub client_info: Option<ClientInfo>,
    pub timestamp: String,
}

/// Reply returned by the webhook.
///
/// Unknown fields are passed through untouched so the flow can extend the
/// contract without a server deploy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookReply {
    pub response: Option<String>,
    pub conversation_state: Option<String>,
    pub client_info: Option<ClientInfo>,
    pub client_info_complete: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Reply text shown to the visitor when the webhook is not configured
pub const FALLBACK_NOT_CONFIGURED: &str =
    "Lo siento, el chatbot no está configurado. Por favor, contacta al administrador.";

/// Reply text shown to the visitor when the webhook call fails
pub const FALLBACK_ERROR: &str =
    "Lo siento, hubo un error al procesar tu mensaje. Por favor, intenta de nuevo o contáctanos directamente.";

/// Bot text used when the webhook answered without a `response` field
pub const FALLBACK_EMPTY_RESPONSE: &str =
    "Gracias por tu mensaje. Un agente se pondrá en contacto contigo pronto.";

impl WebhookReply {
    pub fn fallback(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
            ..Default::default()
        }
    }

    /// Text stored as the bot's transcript turn
    pub fn response_text(&self) -> &str {
        self.response.as_deref().unwrap_or(FALLBACK_EMPTY_RESPONSE)
    }
}

/// Conversation counters for the admin dashboard
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationStats {
    pub total: u64,
    pub active: u64,
    pub closed: u64,
    pub awaiting_contact: u64,
    pub with_contact_info: u64,
}

/// Message counters for the admin dashboard
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStats {
    pub total: u64,
    pub from_users: u64,
    pub from_bot: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotStats {
    pub conversations: ConversationStats,
    pub messages: MessageStats,
}

/// Product match returned to the bot
#[derive(Debug, Clone, Serialize)]
pub struct ProductHit {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Category summary returned to the bot
#[derive(Debug, Clone, Serialize)]
pub struct CategoryHit {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
}

/// Market summary returned to the bot
#[derive(Debug, Clone, Serialize)]
pub struct MarketHit {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub solutions: Option<serde_json::Value>,
}

/// Technical service summary returned to the bot
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHit {
    pub id: i32,
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_reply_parses_minimal() {
        let reply: WebhookReply = serde_json::from_str(r#"{"response": "Hola!"}"#).unwrap();
        assert_eq!(reply.response_text(), "Hola!");
        assert!(reply.conversation_state.is_none());
        assert!(reply.extra.is_empty());
    }

    #[test]
    fn test_webhook_reply_keeps_unknown_fields() {
        let json = r#"{
            "response": "Dejanos tu correo",
            "conversationState": "awaiting_contact",
            "clientInfoComplete": false,
            "suggestedProducts": [1, 2, 3]
        }"#;
        let reply: WebhookReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.conversation_state.as_deref(), Some("awaiting_contact"));
        assert_eq!(reply.client_info_complete, Some(false));
        assert!(reply.extra.contains_key("suggestedProducts"));

        // Round-trips with the extra field intact
        let back = serde_json::to_value(&reply).unwrap();
        assert_eq!(back["suggestedProducts"][2], 3);
    }

    #[test]
    fn test_webhook_reply_empty_response_fallback() {
        let reply: WebhookReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.response_text(), FALLBACK_EMPTY_RESPONSE);
    }

    #[test]
    fn test_relay_payload_serialization() {
        let payload = RelayPayload {
            session_id: "abc-123".to_string(),
            message: "¿Tienen centrífugas?".to_string(),
            conversation_state: None,
            client_info: Some(ClientInfo {
                email: Some("visitor@example.com".to_string()),
                ..Default::default()
            }),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["sessionId"], "abc-123");
        assert_eq!(json["clientInfo"]["email"], "visitor@example.com");
        assert!(json["conversationState"].is_null());
    }
}
