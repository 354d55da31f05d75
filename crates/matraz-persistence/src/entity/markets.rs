//! `SeaORM` Entity for the markets table
//!
//! A market is a vertical the distributor sells into (clinical labs,
//! food industry, education, ...) with its own landing-page content.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "markets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image_url: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Rich-text body shown on the market landing page
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Offered solutions as a JSON array of strings
    #[sea_orm(column_type = "Json", nullable)]
    pub solutions: Option<Json>,
    pub position: i32,
    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
