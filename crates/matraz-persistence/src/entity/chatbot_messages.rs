//! `SeaORM` Entity for the chatbot_messages table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "chatbot_messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub conversation_id: i32,
    /// "user" or "bot"
    pub sender: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::chatbot_conversations::Entity",
        from = "Column::ConversationId",
        to = "super::chatbot_conversations::Column::Id"
    )]
    ChatbotConversations,
}

impl Related<super::chatbot_conversations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatbotConversations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
