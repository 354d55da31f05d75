//! Market landing-page service

use matraz_common::MatrazError;
use matraz_persistence::entity::markets;
use matraz_persistence::sea_orm::*;

use crate::model::{CreateMarket, UpdateMarket};

pub async fn list(
    db: &DatabaseConnection,
    include_inactive: bool,
) -> anyhow::Result<Vec<markets::Model>> {
    let mut select = markets::Entity::find();
    if !include_inactive {
        select = select.filter(markets::Column::Active.eq(true));
    }

    let rows = select
        .order_by_asc(markets::Column::Position)
        .all(db)
        .await?;

    Ok(rows)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<markets::Model> {
    markets::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| MatrazError::NotFound("market").into())
}

pub async fn find_by_slug(db: &DatabaseConnection, slug: &str) -> anyhow::Result<markets::Model> {
    markets::Entity::find()
        .filter(markets::Column::Slug.eq(slug))
        .one(db)
        .await?
        .ok_or_else(|| MatrazError::NotFound("market").into())
}

pub async fn create(db: &DatabaseConnection, input: CreateMarket) -> anyhow::Result<markets::Model> {
    let name = input.name.unwrap_or_default().trim().to_string();
    let slug = input.slug.unwrap_or_default().trim().to_string();
    if name.is_empty() || slug.is_empty() {
        return Err(MatrazError::IllegalArgument("name and slug are required".to_string()).into());
    }
    ensure_slug_free(db, &slug, None).await?;

    let market = markets::ActiveModel {
        name: Set(name),
        slug: Set(slug),
        hero_title: Set(input.hero_title.unwrap_or_default()),
        hero_subtitle: Set(input.hero_subtitle.unwrap_or_default()),
        hero_image_url: Set(input.hero_image_url.unwrap_or_default()),
        description: Set(input.description.unwrap_or_default()),
        content: Set(input.content.unwrap_or_default()),
        solutions: Set(Some(
            input.solutions.unwrap_or_else(|| serde_json::json!([])),
        )),
        position: Set(input.position.unwrap_or(0)),
        active: Set(input.active.unwrap_or(true)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(market)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateMarket,
) -> anyhow::Result<markets::Model> {
    let existing = markets::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(MatrazError::NotFound("market"))?;

    if let Some(slug) = input.slug.as_deref().filter(|s| !s.is_empty()) {
        if slug != existing.slug {
            ensure_slug_free(db, slug, Some(id)).await?;
        }
    }

    let mut market: markets::ActiveModel = existing.into();
    if let Some(name) = input.name {
        market.name = Set(name);
    }
    if let Some(slug) = input.slug.filter(|s| !s.is_empty()) {
        market.slug = Set(slug);
    }
    if let Some(hero_title) = input.hero_title {
        market.hero_title = Set(hero_title);
    }
    if let Some(hero_subtitle) = input.hero_subtitle {
        market.hero_subtitle = Set(hero_subtitle);
    }
    if let Some(hero_image_url) = input.hero_image_url {
        market.hero_image_url = Set(hero_image_url);
    }
    if let Some(description) = input.description {
        market.description = Set(description);
    }
    if let Some(content) = input.content {
        market.content = Set(content);
    }
    if let Some(solutions) = input.solutions {
        market.solutions = Set(Some(solutions));
    }
    if let Some(position) = input.position {
        market.position = Set(position);
    }
    if let Some(active) = input.active {
        market.active = Set(active);
    }
    market.updated_at = Set(Some(chrono::Utc::now()));

    let market = market.update(db).await?;

    Ok(market)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<()> {
    let result = markets::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(MatrazError::NotFound("market").into());
    }

    Ok(())
}

async fn ensure_slug_free(
    db: &DatabaseConnection,
    slug: &str,
    exclude_id: Option<i32>,
) -> anyhow::Result<()> {
    let mut select = markets::Entity::find().filter(markets::Column::Slug.eq(slug));
    if let Some(id) = exclude_id {
        select = select.filter(markets::Column::Id.ne(id));
    }

    if select.one(db).await?.is_some() {
        return Err(MatrazError::SlugExists(slug.to_string()).into());
    }

    Ok(())
}
