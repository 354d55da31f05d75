//! Supplier service

use matraz_common::{MatrazError, slugify};
use matraz_persistence::entity::{product_suppliers, suppliers};
use matraz_persistence::sea_orm::*;

use crate::model::{CreateSupplier, UpdateSupplier};

pub async fn list(
    db: &DatabaseConnection,
    include_inactive: bool,
) -> anyhow::Result<Vec<suppliers::Model>> {
    let mut select = suppliers::Entity::find();
    if !include_inactive {
        select = select.filter(suppliers::Column::Active.eq(true));
    }

    let rows = select.order_by_asc(suppliers::Column::Name).all(db).await?;

    Ok(rows)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<suppliers::Model> {
    suppliers::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| MatrazError::NotFound("supplier").into())
}

pub async fn create(
    db: &DatabaseConnection,
    input: CreateSupplier,
) -> anyhow::Result<suppliers::Model> {
    let name = input.name.clone().unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return Err(MatrazError::IllegalArgument("name is required".to_string()).into());
    }

    let slug = input
        .slug
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| slugify(&name));

    let supplier = suppliers::ActiveModel {
        name: Set(name),
        slug: Set(Some(slug)),
        description: Set(input.description.unwrap_or_default()),
        website: Set(input.website),
        contact: Set(input.contact),
        logo_url: Set(input.logo_url),
        active: Set(input.active.unwrap_or(true)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(supplier)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateSupplier,
) -> anyhow::Result<suppliers::Model> {
    let existing = suppliers::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(MatrazError::NotFound("supplier"))?;

    let mut supplier: suppliers::ActiveModel = existing.into();
    if let Some(name) = input.name {
        supplier.name = Set(name);
    }
    if let Some(slug) = input.slug.filter(|s| !s.is_empty()) {
        supplier.slug = Set(Some(slug));
    }
    if let Some(description) = input.description {
        supplier.description = Set(description);
    }
    // Contact fields mirror the admin form, which always submits them
    supplier.website = Set(input.website);
    supplier.contact = Set(input.contact);
    supplier.logo_url = Set(input.logo_url);
    if let Some(active) = input.active {
        supplier.active = Set(active);
    }
    supplier.updated_at = Set(Some(chrono::Utc::now()));

    let supplier = supplier.update(db).await?;

    Ok(supplier)
}

/// Delete a supplier; refused while any product offer references it.
pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<()> {
    let in_use = product_suppliers::Entity::find()
        .filter(product_suppliers::Column::SupplierId.eq(id))
        .count(db)
        .await?;
    if in_use > 0 {
        return Err(MatrazError::ResourceInUse("supplier").into());
    }

    let result = suppliers::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(MatrazError::NotFound("supplier").into());
    }

    Ok(())
}
