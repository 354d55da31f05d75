//! Category service

use matraz_common::MatrazError;
use matraz_persistence::entity::{categories, products};
use matraz_persistence::sea_orm::*;

use crate::model::{CreateCategory, UpdateCategory};

pub async fn list(
    db: &DatabaseConnection,
    include_inactive: bool,
) -> anyhow::Result<Vec<categories::Model>> {
    let mut select = categories::Entity::find();
    if !include_inactive {
        select = select.filter(categories::Column::Active.eq(true));
    }

    let rows = select
        .order_by_asc(categories::Column::Position)
        .all(db)
        .await?;

    Ok(rows)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<categories::Model> {
    categories::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| MatrazError::NotFound("category").into())
}

pub async fn find_by_slug(db: &DatabaseConnection, slug: &str) -> anyhow::Result<categories::Model> {
    categories::Entity::find()
        .filter(categories::Column::Slug.eq(slug))
        .one(db)
        .await?
        .ok_or_else(|| MatrazError::NotFound("category").into())
}

pub async fn create(
    db: &DatabaseConnection,
    input: CreateCategory,
) -> anyhow::Result<categories::Model> {
    let name = input.name.unwrap_or_default().trim().to_string();
    let slug = input.slug.unwrap_or_default().trim().to_string();
    if name.is_empty() || slug.is_empty() {
        return Err(MatrazError::IllegalArgument("name and slug are required".to_string()).into());
    }
    ensure_slug_free(db, &slug, None).await?;

    let category = categories::ActiveModel {
        name: Set(name),
        slug: Set(slug),
        description: Set(input.description.unwrap_or_default()),
        icon_url: Set(input.icon_url.unwrap_or_default()),
        position: Set(input.position.unwrap_or(0)),
        active: Set(input.active.unwrap_or(true)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(category)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateCategory,
) -> anyhow::Result<categories::Model> {
    let existing = categories::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(MatrazError::NotFound("category"))?;

    if let Some(slug) = input.slug.as_deref().filter(|s| !s.is_empty()) {
        if slug != existing.slug {
            ensure_slug_free(db, slug, Some(id)).await?;
        }
    }

    let mut category: categories::ActiveModel = existing.into();
    if let Some(name) = input.name {
        category.name = Set(name);
    }
    if let Some(slug) = input.slug.filter(|s| !s.is_empty()) {
        category.slug = Set(slug);
    }
    if let Some(description) = input.description {
        category.description = Set(description);
    }
    if let Some(icon_url) = input.icon_url {
        category.icon_url = Set(icon_url);
    }
    if let Some(position) = input.position {
        category.position = Set(position);
    }
    if let Some(active) = input.active {
        category.active = Set(active);
    }
    category.updated_at = Set(Some(chrono::Utc::now()));

    let category = category.update(db).await?;

    Ok(category)
}

/// Delete a category; refused while any product still references it.
pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<()> {
    let in_use = products::Entity::find()
        .filter(products::Column::CategoryId.eq(id))
        .count(db)
        .await?;
    if in_use > 0 {
        return Err(MatrazError::ResourceInUse("category").into());
    }

    let result = categories::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(MatrazError::NotFound("category").into());
    }

    Ok(())
}

async fn ensure_slug_free(
    db: &DatabaseConnection,
    slug: &str,
    exclude_id: Option<i32>,
) -> anyhow::Result<()> {
    let mut select = categories::Entity::find().filter(categories::Column::Slug.eq(slug));
    if let Some(id) = exclude_id {
        select = select.filter(categories::Column::Id.ne(id));
    }

    if select.one(db).await?.is_some() {
        return Err(MatrazError::SlugExists(slug.to_string()).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn sample(id: i32, slug: &str) -> categories::Model {
        categories::Model {
            id,
            name: "Glassware".to_string(),
            description: String::new(),
            slug: slug.to_string(),
            icon_url: String::new(),
            position: 0,
            active: true,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_slug_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<categories::Model>::new()])
            .into_connection();

        let err = find_by_slug(&db, "ghost").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrazError>(),
            Some(MatrazError::NotFound("category"))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_slug() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample(1, "glassware")]])
            .into_connection();

        let input = CreateCategory {
            name: Some("Glassware".to_string()),
            slug: Some("glassware".to_string()),
            ..Default::default()
        };
        let err = create(&db, input).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrazError>(),
            Some(MatrazError::SlugExists(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_refused_while_in_use() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(3)]])
            .into_connection();

        let err = delete(&db, 1).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrazError>(),
            Some(MatrazError::ResourceInUse("category"))
        ));
    }

    fn count_row(n: i64) -> std::collections::BTreeMap<&'static str, sea_orm::Value> {
        let mut row = std::collections::BTreeMap::new();
        row.insert("num_items", sea_orm::Value::BigInt(Some(n)));
        row
    }
}
