//! Social link service

use matraz_common::MatrazError;
use matraz_persistence::entity::social_links;
use matraz_persistence::sea_orm::*;

use crate::model::{CreateSocialLink, UpdateSocialLink};

pub async fn list(
    db: &DatabaseConnection,
    include_inactive: bool,
) -> anyhow::Result<Vec<social_links::Model>> {
    let mut select = social_links::Entity::find();
    if !include_inactive {
        select = select.filter(social_links::Column::Active.eq(true));
    }

    let rows = select
        .order_by_asc(social_links::Column::Position)
        .all(db)
        .await?;

    Ok(rows)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<social_links::Model> {
    social_links::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| MatrazError::NotFound("social link").into())
}

pub async fn create(
    db: &DatabaseConnection,
    input: CreateSocialLink,
) -> anyhow::Result<social_links::Model> {
    let name = input.name.unwrap_or_default().trim().to_string();
    let url = input.url.unwrap_or_default().trim().to_string();
    if name.is_empty() || url.is_empty() {
        return Err(MatrazError::IllegalArgument("name and url are required".to_string()).into());
    }

    let link = social_links::ActiveModel {
        name: Set(name),
        url: Set(url),
        logo_url: Set(input.logo_url),
        position: Set(input.position.unwrap_or(0)),
        active: Set(input.active.unwrap_or(true)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(link)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateSocialLink,
) -> anyhow::Result<social_links::Model> {
    let existing = social_links::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(MatrazError::NotFound("social link"))?;

    let mut link: social_links::ActiveModel = existing.into();
    if let Some(name) = input.name {
        link.name = Set(name);
    }
    if let Some(url) = input.url {
        link.url = Set(url);
    }
    // The admin form always submits the logo field
    link.logo_url = Set(input.logo_url);
    if let Some(position) = input.position {
        link.position = Set(position);
    }
    if let Some(active) = input.active {
        link.active = Set(active);
    }
    link.updated_at = Set(Some(chrono::Utc::now()));

    let link = link.update(db).await?;

    Ok(link)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<()> {
    let result = social_links::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(MatrazError::NotFound("social link").into());
    }

    Ok(())
}
