//! Admin account service

use matraz_common::MatrazError;
use matraz_persistence::entity::users;
use matraz_persistence::sea_orm::*;

const BCRYPT_COST: u32 = 10;

pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> anyhow::Result<Option<users::Model>> {
    let user = users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(db)
        .await?;

    Ok(user)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<users::Model>> {
    let user = users::Entity::find_by_id(id).one(db).await?;

    Ok(user)
}

/// Create an account with a bcrypt-hashed password.
///
/// Fails when the email is already taken.
pub async fn register(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> anyhow::Result<users::Model> {
    if find_by_email(db, email).await?.is_some() {
        return Err(MatrazError::UserAlreadyExists(email.to_string()).into());
    }

    let hashed_password = bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| anyhow::anyhow!("failed to hash password: {}", e))?;

    let user = users::ActiveModel {
        email: Set(email.to_string()),
        password: Set(hashed_password),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(user)
}

/// Check credentials and return the account.
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn authenticate(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> anyhow::Result<users::Model> {
    let user = match find_by_email(db, email).await? {
        Some(user) => user,
        None => return Err(MatrazError::InvalidCredentials.into()),
    };

    let valid = bcrypt::verify(password, &user.password).unwrap_or(false);
    if !valid {
        return Err(MatrazError::InvalidCredentials.into());
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn user_with_password(password: &str) -> users::Model {
        users::Model {
            id: 1,
            email: "admin@example.com".to_string(),
            password: bcrypt::hash(password, 4).unwrap(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_ok() {
        let user = user_with_password("secret1");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user.clone()]])
            .into_connection();

        let found = authenticate(&db, "admin@example.com", "secret1")
            .await
            .unwrap();
        assert_eq!(found.id, user.id);
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let user = user_with_password("secret1");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user]])
            .into_connection();

        let err = authenticate(&db, "admin@example.com", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrazError>(),
            Some(MatrazError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();

        let err = authenticate(&db, "ghost@example.com", "whatever")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrazError>(),
            Some(MatrazError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_existing_email() {
        let user = user_with_password("secret1");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user]])
            .into_connection();

        let err = register(&db, "admin@example.com", "secret1")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrazError>(),
            Some(MatrazError::UserAlreadyExists(_))
        ));
    }
}
