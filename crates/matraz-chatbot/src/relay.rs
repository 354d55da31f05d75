//! HTTP client for the chatbot webhook

use std::time::Duration;

use matraz_common::MatrazError;

use crate::model::{RelayPayload, WebhookReply};

/// Client for the externally configured chatbot webhook.
///
/// The URL comes from server configuration; when it is absent the client
/// stays in unconfigured mode and `send` fails with
/// `MatrazError::WebhookNotConfigured`.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    url: Option<String>,
}

impl WebhookClient {
    pub fn new(url: Option<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: url.filter(|u| !u.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Forward a visitor message and parse the flow's reply.
    pub async fn send(&self, payload: &RelayPayload) -> anyhow::Result<WebhookReply> {
        let url = match &self.url {
            Some(url) => url,
            None => return Err(MatrazError::WebhookNotConfigured.into()),
        };

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| MatrazError::WebhookError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MatrazError::WebhookError(format!("HTTP {}", status.as_u16())).into());
        }

        let reply = response
            .json::<WebhookReply>()
            .await
            .map_err(|e| MatrazError::WebhookError(format!("invalid reply: {}", e)))?;

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FALLBACK_NOT_CONFIGURED;

    #[test]
    fn test_empty_url_means_unconfigured() {
        let client = WebhookClient::new(Some(String::new()), Duration::from_secs(30));
        assert!(!client.is_configured());

        let client = WebhookClient::new(None, Duration::from_secs(30));
        assert!(!client.is_configured());

        let client = WebhookClient::new(
            Some("https://flows.example.com/hook/abc".to_string()),
            Duration::from_secs(30),
        );
        assert!(client.is_configured());
    }

    #[tokio::test]
    async fn test_send_unconfigured_fails() {
        let client = WebhookClient::new(None, Duration::from_secs(1));
        let payload = RelayPayload {
            session_id: "s".to_string(),
            message: "hola".to_string(),
            conversation_state: None,
            client_info: None,
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        };

        let err = client.send(&payload).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrazError>(),
            Some(MatrazError::WebhookNotConfigured)
        ));
    }

    #[test]
    fn test_fallback_reply_text() {
        let reply = WebhookReply::fallback(FALLBACK_NOT_CONFIGURED);
        assert_eq!(reply.response_text(), FALLBACK_NOT_CONFIGURED);
    }
}
