//! Chatbot endpoints
//!
//! `/message` is the public relay used by the site widget; the search
//! endpoints are called back by the automation flow itself, and `/stats`
//! feeds the admin dashboard.

use actix_web::{HttpResponse, Responder, Scope, get, post, web};
use serde::Deserialize;

use matraz_chatbot::model::{
    ClientInfo, FALLBACK_ERROR, FALLBACK_NOT_CONFIGURED, RelayPayload, WebhookReply,
};
use matraz_chatbot::service::{conversation, search};
use matraz_common::{SENDER_BOT, SENDER_USER};

use crate::model::AppState;
use crate::model::response::{self, handle_service_error};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatMessageRequest {
    session_id: Option<String>,
    message: Option<String>,
    conversation_state: Option<String>,
    client_info: Option<ClientInfo>,
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    query: Option<String>,
    limit: Option<u64>,
}

#[post("/message")]
async fn message(data: web::Data<AppState>, body: web::Json<ChatMessageRequest>) -> impl Responder {
    let input = body.into_inner();
    let session_id = input.session_id.unwrap_or_default().trim().to_string();
    let text = input.message.unwrap_or_default().trim().to_string();

    if session_id.is_empty() || text.is_empty() {
        return response::bad_request("sessionId and message are required");
    }

    let conversation_row = match conversation::ensure(data.db(), &session_id).await {
        Ok(row) => row,
        Err(err) => return handle_service_error(err, "failed to open conversation"),
    };

    if let Err(err) =
        conversation::record_message(data.db(), conversation_row.id, SENDER_USER, &text).await
    {
        return handle_service_error(err, "failed to record message");
    }

    let payload = RelayPayload {
        session_id,
        message: text,
        conversation_state: input.conversation_state,
        client_info: input.client_info,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    // The widget must keep working when the flow is down, so every relay
    // failure degrades to a canned reply instead of an error status.
    let reply = if !data.chatbot.is_configured() {
        WebhookReply::fallback(FALLBACK_NOT_CONFIGURED)
    } else {
        match data.chatbot.send(&payload).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!("chatbot webhook call failed: {}", err);
                WebhookReply::fallback(FALLBACK_ERROR)
            }
        }
    };

    if let Err(err) =
        conversation::record_message(data.db(), conversation_row.id, SENDER_BOT, reply.response_text())
            .await
    {
        return handle_service_error(err, "failed to record message");
    }

    if let Err(err) = conversation::apply_reply(data.db(), conversation_row, &reply).await {
        return handle_service_error(err, "failed to update conversation");
    }

    HttpResponse::Ok().json(reply)
}

#[get("/stats")]
async fn stats(data: web::Data<AppState>) -> impl Responder {
    match conversation::stats(data.db()).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => handle_service_error(err, "failed to load chatbot stats"),
    }
}

#[post("/search/products")]
async fn search_products(
    data: web::Data<AppState>,
    body: web::Json<SearchRequest>,
) -> impl Responder {
    let query = body.query.clone().unwrap_or_default();

    match search::products(data.db(), &query, body.limit).await {
        Ok(hits) => HttpResponse::Ok().json(hits),
        Err(err) => handle_service_error(err, "failed to search products"),
    }
}

#[post("/search/categories")]
async fn search_categories(data: web::Data<AppState>) -> impl Responder {
    match search::categories(data.db()).await {
        Ok(hits) => HttpResponse::Ok().json(hits),
        Err(err) => handle_service_error(err, "failed to search categories"),
    }
}

#[post("/search/markets")]
async fn search_markets(data: web::Data<AppState>) -> impl Responder {
    match search::markets(data.db()).await {
        Ok(hits) => HttpResponse::Ok().json(hits),
        Err(err) => handle_service_error(err, "failed to search markets"),
    }
}

#[post("/search/services")]
async fn search_services(data: web::Data<AppState>) -> impl Responder {
    match search::services(data.db()).await {
        Ok(hits) => HttpResponse::Ok().json(hits),
        Err(err) => handle_service_error(err, "failed to search services"),
    }
}

pub fn routes() -> Scope {
    web::scope("/chatbot")
        .service(message)
        .service(stats)
        .service(search_products)
        .service(search_categories)
        .service(search_markets)
        .service(search_services)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_request_camel_case() {
        let json = r#"{
            "sessionId": "sess-1",
            "message": "Hola",
            "conversationState": "initial",
            "clientInfo": {"email": "v@example.com"}
        }"#;
        let req: ChatMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.session_id.as_deref(), Some("sess-1"));
        assert_eq!(req.conversation_state.as_deref(), Some("initial"));
        assert_eq!(
            req.client_info.unwrap().email.as_deref(),
            Some("v@example.com")
        );
    }

    #[test]
    fn test_search_request_defaults() {
        let req: SearchRequest = serde_json::from_str(r#"{"query": "centrifuga"}"#).unwrap();
        assert_eq!(req.query.as_deref(), Some("centrifuga"));
        assert!(req.limit.is_none());
    }
}
