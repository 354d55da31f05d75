//! Industry service

use matraz_common::MatrazError;
use matraz_persistence::entity::industries;
use matraz_persistence::sea_orm::*;

use crate::model::{CreateIndustry, UpdateIndustry};

pub async fn list(
    db: &DatabaseConnection,
    include_inactive: bool,
) -> anyhow::Result<Vec<industries::Model>> {
    let mut select = industries::Entity::find();
    if !include_inactive {
        select = select.filter(industries::Column::Active.eq(true));
    }

    let rows = select
        .order_by_asc(industries::Column::Position)
        .all(db)
        .await?;

    Ok(rows)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<industries::Model> {
    industries::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| MatrazError::NotFound("industry").into())
}

pub async fn create(
    db: &DatabaseConnection,
    input: CreateIndustry,
) -> anyhow::Result<industries::Model> {
    let name = input.name.unwrap_or_default().trim().to_string();
    let slug = input.slug.unwrap_or_default().trim().to_string();
    if name.is_empty() || slug.is_empty() {
        return Err(MatrazError::IllegalArgument("name and slug are required".to_string()).into());
    }
    ensure_slug_free(db, &slug, None).await?;

    let industry = industries::ActiveModel {
        name: Set(name),
        slug: Set(slug),
        icon_url: Set(input.icon_url.unwrap_or_default()),
        position: Set(input.position.unwrap_or(0)),
        active: Set(input.active.unwrap_or(true)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(industry)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateIndustry,
) -> anyhow::Result<industries::Model> {
    let existing = industries::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(MatrazError::NotFound("industry"))?;

    if let Some(slug) = input.slug.as_deref().filter(|s| !s.is_empty()) {
        if slug != existing.slug {
            ensure_slug_free(db, slug, Some(id)).await?;
        }
    }

    let mut industry: industries::ActiveModel = existing.into();
    if let Some(name) = input.name {
        industry.name = Set(name);
    }
    if let Some(slug) = input.slug.filter(|s| !s.is_empty()) {
        industry.slug = Set(slug);
    }
    if let Some(icon_url) = input.icon_url {
        industry.icon_url = Set(icon_url);
    }
    if let Some(position) = input.position {
        industry.position = Set(position);
    }
    if let Some(active) = input.active {
        industry.active = Set(active);
    }
    industry.updated_at = Set(Some(chrono::Utc::now()));

    let industry = industry.update(db).await?;

    Ok(industry)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<()> {
    let result = industries::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(MatrazError::NotFound("industry").into());
    }

    Ok(())
}

async fn ensure_slug_free(
    db: &DatabaseConnection,
    slug: &str,
    exclude_id: Option<i32>,
) -> anyhow::Result<()> {
    let mut select = industries::Entity::find().filter(industries::Column::Slug.eq(slug));
    if let Some(id) = exclude_id {
        select = select.filter(industries::Column::Id.ne(id));
    }

    if select.one(db).await?.is_some() {
        return Err(MatrazError::SlugExists(slug.to_string()).into());
    }

    Ok(())
}
