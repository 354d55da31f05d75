//! Hero banner service
//!
//! Heroes are keyed by site section; the public pages fetch the banner
//! for a section, so the section value must stay unique.

use matraz_common::MatrazError;
use matraz_persistence::entity::heroes;
use matraz_persistence::sea_orm::*;

use crate::model::{CreateHero, UpdateHero};

pub async fn list(
    db: &DatabaseConnection,
    include_inactive: bool,
) -> anyhow::Result<Vec<heroes::Model>> {
    let mut select = heroes::Entity::find();
    if !include_inactive {
        select = select.filter(heroes::Column::Active.eq(true));
    }

    let rows = select.order_by_asc(heroes::Column::Section).all(db).await?;

    Ok(rows)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<heroes::Model> {
    heroes::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| MatrazError::NotFound("hero").into())
}

/// Active banner for a site section
pub async fn find_by_section(
    db: &DatabaseConnection,
    section: &str,
) -> anyhow::Result<heroes::Model> {
    heroes::Entity::find()
        .filter(heroes::Column::Section.eq(section))
        .filter(heroes::Column::Active.eq(true))
        .one(db)
        .await?
        .ok_or_else(|| MatrazError::NotFound("hero").into())
}

pub async fn create(db: &DatabaseConnection, input: CreateHero) -> anyhow::Result<heroes::Model> {
    let section = input.section.unwrap_or_default().trim().to_string();
    if section.is_empty() {
        return Err(MatrazError::IllegalArgument("section is required".to_string()).into());
    }
    ensure_section_free(db, &section, None).await?;

    let hero = heroes::ActiveModel {
        section: Set(section),
        title: Set(input.title.unwrap_or_default()),
        subtitle: Set(input.subtitle.unwrap_or_default()),
        image_url: Set(input.image_url.unwrap_or_default()),
        cta_text: Set(input.cta_text.unwrap_or_default()),
        cta_link: Set(input.cta_link.unwrap_or_default()),
        active: Set(input.active.unwrap_or(true)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(hero)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateHero,
) -> anyhow::Result<heroes::Model> {
    let existing = heroes::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(MatrazError::NotFound("hero"))?;

    if let Some(section) = input.section.as_deref().filter(|s| !s.is_empty()) {
        if section != existing.section {
            ensure_section_free(db, section, Some(id)).await?;
        }
    }

    let mut hero: heroes::ActiveModel = existing.into();
    if let Some(section) = input.section.filter(|s| !s.is_empty()) {
        hero.section = Set(section);
    }
    if let Some(title) = input.title {
        hero.title = Set(title);
    }
    if let Some(subtitle) = input.subtitle {
        hero.subtitle = Set(subtitle);
    }
    if let Some(image_url) = input.image_url {
        hero.image_url = Set(image_url);
    }
    if let Some(cta_text) = input.cta_text {
        hero.cta_text = Set(cta_text);
    }
    if let Some(cta_link) = input.cta_link {
        hero.cta_link = Set(cta_link);
    }
    if let Some(active) = input.active {
        hero.active = Set(active);
    }
    hero.updated_at = Set(Some(chrono::Utc::now()));

    let hero = hero.update(db).await?;

    Ok(hero)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<()> {
    let result = heroes::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(MatrazError::NotFound("hero").into());
    }

    Ok(())
}

async fn ensure_section_free(
    db: &DatabaseConnection,
    section: &str,
    exclude_id: Option<i32>,
) -> anyhow::Result<()> {
    let mut select = heroes::Entity::find().filter(heroes::Column::Section.eq(section));
    if let Some(id) = exclude_id {
        select = select.filter(heroes::Column::Id.ne(id));
    }

    if select.one(db).await?.is_some() {
        return Err(MatrazError::SectionExists(section.to_string()).into());
    }

    Ok(())
}
