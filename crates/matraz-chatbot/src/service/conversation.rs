//! Conversation and transcript store

use matraz_common::{
    CONVERSATION_ACTIVE, CONVERSATION_AWAITING_CONTACT, CONVERSATION_CLOSED, SENDER_BOT,
    SENDER_USER,
};
use matraz_persistence::entity::{chatbot_conversations, chatbot_messages};
use matraz_persistence::sea_orm::*;

use crate::model::{ChatbotStats, ConversationStats, MessageStats, WebhookReply};

/// Find the conversation for a widget session, creating it on first
/// contact.
pub async fn ensure(
    db: &DatabaseConnection,
    session_id: &str,
) -> anyhow::Result<chatbot_conversations::Model> {
    let existing = chatbot_conversations::Entity::find()
        .filter(chatbot_conversations::Column::SessionId.eq(session_id))
        .one(db)
        .await?;

    if let Some(conversation) = existing {
        return Ok(conversation);
    }

    let conversation = chatbot_conversations::ActiveModel {
        session_id: Set(session_id.to_string()),
        status: Set(CONVERSATION_ACTIVE.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(conversation)
}

pub async fn record_message(
    db: &DatabaseConnection,
    conversation_id: i32,
    sender: &str,
    content: &str,
) -> anyhow::Result<chatbot_messages::Model> {
    let message = chatbot_messages::ActiveModel {
        conversation_id: Set(conversation_id),
        sender: Set(sender.to_string()),
        content: Set(content.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(message)
}

/// Apply state reported back by the webhook to the conversation row.
///
/// No-op when the reply carries neither a state change nor completed
/// contact data.
pub async fn apply_reply(
    db: &DatabaseConnection,
    conversation: chatbot_conversations::Model,
    reply: &WebhookReply,
) -> anyhow::Result<()> {
    let set_contact = reply.client_info_complete.unwrap_or(false) && reply.client_info.is_some();
    if reply.conversation_state.is_none() && !set_contact {
        return Ok(());
    }

    let mut active: chatbot_conversations::ActiveModel = conversation.into();
    if let Some(state) = &reply.conversation_state {
        active.status = Set(state.clone());
    }
    if set_contact {
        if let Some(info) = &reply.client_info {
            active.client_name = Set(info.name.clone());
            active.client_email = Set(info.email.clone());
            active.client_phone = Set(info.phone.clone());
        }
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await?;

    Ok(())
}

/// Conversation and message counters for the admin dashboard.
pub async fn stats(db: &DatabaseConnection) -> anyhow::Result<ChatbotStats> {
    let conversations = ConversationStats {
        total: chatbot_conversations::Entity::find().count(db).await?,
        active: count_by_status(db, CONVERSATION_ACTIVE).await?,
        closed: count_by_status(db, CONVERSATION_CLOSED).await?,
        awaiting_contact: count_by_status(db, CONVERSATION_AWAITING_CONTACT).await?,
        with_contact_info: chatbot_conversations::Entity::find()
            .filter(chatbot_conversations::Column::ClientEmail.is_not_null())
            .count(db)
            .await?,
    };

    let messages = MessageStats {
        total: chatbot_messages::Entity::find().count(db).await?,
        from_users: count_by_sender(db, SENDER_USER).await?,
        from_bot: count_by_sender(db, SENDER_BOT).await?,
    };

    Ok(ChatbotStats {
        conversations,
        messages,
    })
}

async fn count_by_status(db: &DatabaseConnection, status: &str) -> anyhow::Result<u64> {
    let count = chatbot_conversations::Entity::find()
        .filter(chatbot_conversations::Column::Status.eq(status))
        .count(db)
        .await?;

    Ok(count)
}

async fn count_by_sender(db: &DatabaseConnection, sender: &str) -> anyhow::Result<u64> {
    let count = chatbot_messages::Entity::find()
        .filter(chatbot_messages::Column::Sender.eq(sender))
        .count(db)
        .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClientInfo;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    fn conversation(id: i32) -> chatbot_conversations::Model {
        chatbot_conversations::Model {
            id,
            session_id: "sess-1".to_string(),
            status: CONVERSATION_ACTIVE.to_string(),
            client_name: None,
            client_email: None,
            client_phone: None,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_ensure_returns_existing_conversation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![conversation(7)]])
            .into_connection();

        let found = ensure(&db, "sess-1").await.unwrap();
        assert_eq!(found.id, 7);

        // Only the lookup ran, no insert
        let log: Vec<Transaction> = db.into_transaction_log();
        assert_eq!(log.len(), 1);
    }

    #[tokio::test]
    async fn test_apply_reply_without_changes_is_noop() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let reply = WebhookReply {
            response: Some("Hola".to_string()),
            ..Default::default()
        };

        apply_reply(&db, conversation(1), &reply).await.unwrap();

        let log: Vec<Transaction> = db.into_transaction_log();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_apply_reply_ignores_incomplete_contact() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let reply = WebhookReply {
            client_info: Some(ClientInfo {
                email: Some("half@done.com".to_string()),
                ..Default::default()
            }),
            client_info_complete: Some(false),
            ..Default::default()
        };

        apply_reply(&db, conversation(1), &reply).await.unwrap();

        let log: Vec<Transaction> = db.into_transaction_log();
        assert!(log.is_empty());
    }
}
