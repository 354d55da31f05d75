//! SeaORM entities for the Matraz schema

pub mod categories;
pub mod chatbot_conversations;
pub mod chatbot_messages;
pub mod heroes;
pub mod industries;
pub mod markets;
pub mod product_suppliers;
pub mod products;
pub mod settings;
pub mod social_links;
pub mod suppliers;
pub mod technical_services;
pub mod users;

pub mod prelude {
    pub use super::categories::Entity as Categories;
    pub use super::chatbot_conversations::Entity as ChatbotConversations;
    pub use super::chatbot_messages::Entity as ChatbotMessages;
    pub use super::heroes::Entity as Heroes;
    pub use super::industries::Entity as Industries;
    pub use super::markets::Entity as Markets;
    pub use super::product_suppliers::Entity as ProductSuppliers;
    pub use super::products::Entity as Products;
    pub use super::settings::Entity as Settings;
    pub use super::social_links::Entity as SocialLinks;
    pub use super::suppliers::Entity as Suppliers;
    pub use super::technical_services::Entity as TechnicalServices;
    pub use super::users::Entity as Users;
}
