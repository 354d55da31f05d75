//! Catalog lookups exposed to the chatbot flow
//!
//! The automation flow calls these to answer visitor questions, so they
//! only ever see active rows.

use matraz_persistence::entity::{categories, markets, products, technical_services};
use matraz_persistence::sea_orm::sea_query::{Expr, Func};
use matraz_persistence::sea_orm::*;

use crate::model::{CategoryHit, MarketHit, ProductHit, ServiceHit};

pub const DEFAULT_SEARCH_LIMIT: u64 = 5;

/// Case-insensitive substring search over product names and descriptions,
/// featured products first.
pub async fn products(
    db: &DatabaseConnection,
    query: &str,
    limit: Option<u64>,
) -> anyhow::Result<Vec<ProductHit>> {
    let pattern = format!("%{}%", query.to_lowercase());

    let rows = products::Entity::find()
        .find_also_related(categories::Entity)
        .filter(products::Column::Active.eq(true))
        .filter(
            Condition::any()
                .add(
                    Expr::expr(Func::lower(Expr::col((
                        products::Entity,
                        products::Column::Name,
                    ))))
                    .like(pattern.clone()),
                )
                .add(
                    Expr::expr(Func::lower(Expr::col((
                        products::Entity,
                        products::Column::Description,
                    ))))
                    .like(pattern),
                ),
        )
        .order_by_desc(products::Column::Featured)
        .order_by_asc(products::Column::Name)
        .limit(limit.unwrap_or(DEFAULT_SEARCH_LIMIT))
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(product, category)| ProductHit {
            id: product.id,
            name: product.name,
            slug: product.slug,
            description: product.description,
            category: category.map(|c| c.name),
        })
        .collect())
}

pub async fn categories(db: &DatabaseConnection) -> anyhow::Result<Vec<CategoryHit>> {
    let rows = categories::Entity::find()
        .filter(categories::Column::Active.eq(true))
        .order_by_asc(categories::Column::Position)
        .order_by_asc(categories::Column::Name)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|c| CategoryHit {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
        })
        .collect())
}

pub async fn markets(db: &DatabaseConnection) -> anyhow::Result<Vec<MarketHit>> {
    let rows = markets::Entity::find()
        .filter(markets::Column::Active.eq(true))
        .order_by_asc(markets::Column::Position)
        .order_by_asc(markets::Column::Name)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|m| MarketHit {
            id: m.id,
            name: m.name,
            slug: m.slug,
            description: m.description,
            solutions: m.solutions,
        })
        .collect())
}

pub async fn services(db: &DatabaseConnection) -> anyhow::Result<Vec<ServiceHit>> {
    let rows = technical_services::Entity::find()
        .filter(technical_services::Column::Active.eq(true))
        .order_by_asc(technical_services::Column::Position)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|s| ServiceHit {
            id: s.id,
            title: s.title,
            description: s.description,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_products_maps_category_name() {
        let product = products::Model {
            id: 1,
            name: "Digital Centrifuge".to_string(),
            slug: "digital-centrifuge".to_string(),
            description: Some("Up to 6000 rpm".to_string()),
            category_id: Some(2),
            main_image: None,
            gallery: None,
            featured: true,
            active: true,
            created_at: chrono::Utc::now(),
            updated_at: None,
        };
        let category = categories::Model {
            id: 2,
            name: "Lab Equipment".to_string(),
            description: String::new(),
            slug: "lab-equipment".to_string(),
            icon_url: String::new(),
            position: 0,
            active: true,
            created_at: chrono::Utc::now(),
            updated_at: None,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(product, category)]])
            .into_connection();

        let hits = products(&db, "centrifuge", None).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category.as_deref(), Some("Lab Equipment"));
        assert_eq!(hits[0].slug, "digital-centrifuge");
    }
}
