//! Key/value settings service
//!
//! Settings rows are seeded at deploy time; the API only reads and
//! updates them, it never creates keys.

use matraz_common::MatrazError;
use matraz_persistence::entity::settings;
use matraz_persistence::sea_orm::*;

pub async fn list(db: &DatabaseConnection) -> anyhow::Result<Vec<settings::Model>> {
    let rows = settings::Entity::find()
        .order_by_asc(settings::Column::Key)
        .all(db)
        .await?;

    Ok(rows)
}

pub async fn find_by_key(db: &DatabaseConnection, key: &str) -> anyhow::Result<settings::Model> {
    settings::Entity::find_by_id(key)
        .one(db)
        .await?
        .ok_or_else(|| MatrazError::NotFound("setting").into())
}

pub async fn update(
    db: &DatabaseConnection,
    key: &str,
    value: Option<String>,
) -> anyhow::Result<settings::Model> {
    let existing = settings::Entity::find_by_id(key)
        .one(db)
        .await?
        .ok_or(MatrazError::NotFound("setting"))?;

    let mut setting: settings::ActiveModel = existing.into();
    setting.value = Set(value);
    setting.updated_at = Set(Some(chrono::Utc::now()));

    let setting = setting.update(db).await?;

    Ok(setting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_update_missing_key() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<settings::Model>::new()])
            .into_connection();

        let err = update(&db, "contact_email", Some("a@b.com".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrazError>(),
            Some(MatrazError::NotFound("setting"))
        ));
    }

    #[tokio::test]
    async fn test_find_by_key() {
        let row = settings::Model {
            key: "footer_text".to_string(),
            value: Some("Lab supplies since 1998".to_string()),
            updated_at: None,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let setting = find_by_key(&db, "footer_text").await.unwrap();
        assert_eq!(setting.value.as_deref(), Some("Lab supplies since 1998"));
    }
}
