//! Technical service cards (repair, calibration, installation offerings)

use matraz_common::MatrazError;
use matraz_persistence::entity::technical_services;
use matraz_persistence::sea_orm::*;

use crate::model::{CreateTechnicalService, UpdateTechnicalService};

pub async fn list(
    db: &DatabaseConnection,
    include_inactive: bool,
) -> anyhow::Result<Vec<technical_services::Model>> {
    let mut select = technical_services::Entity::find();
    if !include_inactive {
        select = select.filter(technical_services::Column::Active.eq(true));
    }

    let rows = select
        .order_by_asc(technical_services::Column::Position)
        .all(db)
        .await?;

    Ok(rows)
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> anyhow::Result<technical_services::Model> {
    technical_services::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| MatrazError::NotFound("technical service").into())
}

pub async fn create(
    db: &DatabaseConnection,
    input: CreateTechnicalService,
) -> anyhow::Result<technical_services::Model> {
    let title = input.title.unwrap_or_default().trim().to_string();
    let slug = input.slug.unwrap_or_default().trim().to_string();
    if title.is_empty() || slug.is_empty() {
        return Err(MatrazError::IllegalArgument("title and slug are required".to_string()).into());
    }
    ensure_slug_free(db, &slug, None).await?;

    let service = technical_services::ActiveModel {
        title: Set(title),
        slug: Set(slug),
        description: Set(input.description.unwrap_or_default()),
        image_url: Set(input.image_url.unwrap_or_default()),
        position: Set(input.position.unwrap_or(0)),
        active: Set(input.active.unwrap_or(true)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(service)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateTechnicalService,
) -> anyhow::Result<technical_services::Model> {
    let existing = technical_services::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(MatrazError::NotFound("technical service"))?;

    if let Some(slug) = input.slug.as_deref().filter(|s| !s.is_empty()) {
        if slug != existing.slug {
            ensure_slug_free(db, slug, Some(id)).await?;
        }
    }

    let mut service: technical_services::ActiveModel = existing.into();
    if let Some(title) = input.title {
        service.title = Set(title);
    }
    if let Some(slug) = input.slug.filter(|s| !s.is_empty()) {
        service.slug = Set(slug);
    }
    if let Some(description) = input.description {
        service.description = Set(description);
    }
    if let Some(image_url) = input.image_url {
        service.image_url = Set(image_url);
    }
    if let Some(position) = input.position {
        service.position = Set(position);
    }
    if let Some(active) = input.active {
        service.active = Set(active);
    }
    service.updated_at = Set(Some(chrono::Utc::now()));

    let service = service.update(db).await?;

    Ok(service)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<()> {
    let result = technical_services::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(MatrazError::NotFound("technical service").into());
    }

    Ok(())
}

async fn ensure_slug_free(
    db: &DatabaseConnection,
    slug: &str,
    exclude_id: Option<i32>,
) -> anyhow::Result<()> {
    let mut select =
        technical_services::Entity::find().filter(technical_services::Column::Slug.eq(slug));
    if let Some(id) = exclude_id {
        select = select.filter(technical_services::Column::Id.ne(id));
    }

    if select.one(db).await?.is_some() {
        return Err(MatrazError::SlugExists(slug.to_string()).into());
    }

    Ok(())
}
