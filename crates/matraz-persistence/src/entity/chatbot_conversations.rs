//! `SeaORM` Entity for the chatbot_conversations table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "chatbot_conversations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Widget-generated session identifier, stable per browser session
    #[sea_orm(unique)]
    pub session_id: String,
    /// "active", "closed" or "awaiting_contact"
    pub status: String,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::chatbot_messages::Entity")]
    ChatbotMessages,
}

impl Related<super::chatbot_messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatbotMessages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
