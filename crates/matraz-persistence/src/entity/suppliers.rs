//! `SeaORM` Entity for the suppliers table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub slug: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub website: Option<String>,
    pub contact: Option<String>,
    pub logo_url: Option<String>,
    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_suppliers::Entity")]
    ProductSuppliers,
}

impl Related<super::product_suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductSuppliers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
