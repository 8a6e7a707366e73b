use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::domain::user::ports::UserStore;
use crate::user::errors::UserError;

/// Row shape shared by the user lookup queries.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            name: row.name,
            email: row.email,
            phone: row.phone,
            password_hash: row.password_hash,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: UserId(row.id),
            name: row.name,
            email: row.email,
            phone: row.phone,
        }
    }
}

pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create(&self, user: NewUser) -> Result<UserId, UserError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, phone, password_hash)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // Email and phone each carry a unique index
                if db_err.is_unique_violation() {
                    return UserError::Conflict(db_err.message().to_string());
                }
            }
            UserError::Store(e.to_string())
        })?;

        Ok(UserId(result.last_insert_rowid()))
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, phone, password_hash
            FROM users
            WHERE email = ?1 OR phone = ?1
            "#,
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::Store(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, phone, password_hash
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::Store(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn list_all(&self) -> Result<Vec<UserProfile>, UserError> {
        let rows = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, name, email, phone
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::Store(e.to_string()))?;

        Ok(rows.into_iter().map(UserProfile::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    /// Store over a fresh in-memory database with the schema applied.
    ///
    /// A single connection keeps every query on the same in-memory database.
    async fn test_store() -> SqliteUserStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        SqliteUserStore::new(pool)
    }

    fn new_user(name: &str, email: &str, phone: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            password_hash: "$2b$04$placeholder_hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = test_store().await;

        let first = store
            .create(new_user("Ada", "ada@example.com", "5551234"))
            .await
            .expect("Failed to create user");
        let second = store
            .create(new_user("Bob", "bob@example.com", "5555678"))
            .await
            .expect("Failed to create user");

        assert!(second.into_inner() > first.into_inner());
    }

    #[tokio::test]
    async fn test_create_duplicate_email_is_conflict() {
        let store = test_store().await;

        store
            .create(new_user("Ada", "ada@example.com", "5551234"))
            .await
            .expect("Failed to create user");

        let result = store
            .create(new_user("Bob", "ada@example.com", "5555678"))
            .await;
        assert!(matches!(result, Err(UserError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_duplicate_phone_is_conflict() {
        let store = test_store().await;

        store
            .create(new_user("Ada", "ada@example.com", "5551234"))
            .await
            .expect("Failed to create user");

        let result = store
            .create(new_user("Bob", "bob@example.com", "5551234"))
            .await;
        assert!(matches!(result, Err(UserError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_find_by_identifier_matches_email_or_phone() {
        let store = test_store().await;

        let id = store
            .create(new_user("Ada", "ada@example.com", "5551234"))
            .await
            .expect("Failed to create user");

        let by_email = store
            .find_by_identifier("ada@example.com")
            .await
            .expect("Lookup failed");
        assert_eq!(by_email.map(|u| u.id), Some(id));

        let by_phone = store
            .find_by_identifier("5551234")
            .await
            .expect("Lookup failed");
        assert_eq!(by_phone.map(|u| u.id), Some(id));

        let missing = store
            .find_by_identifier("nobody@example.com")
            .await
            .expect("Lookup failed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_by_identifier_is_byte_exact() {
        let store = test_store().await;

        store
            .create(new_user("Ada", "ada@example.com", "5551234"))
            .await
            .expect("Failed to create user");

        let result = store
            .find_by_identifier("ADA@EXAMPLE.COM")
            .await
            .expect("Lookup failed");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = test_store().await;

        let id = store
            .create(new_user("Ada", "ada@example.com", "5551234"))
            .await
            .expect("Failed to create user");

        let found = store
            .find_by_id(id)
            .await
            .expect("Lookup failed")
            .expect("User not found");
        assert_eq!(found.name, "Ada");
        assert_eq!(found.email, "ada@example.com");
        assert_eq!(found.phone, "5551234");

        let missing = store.find_by_id(UserId(999)).await.expect("Lookup failed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_all_in_insertion_order_without_hashes() {
        let store = test_store().await;

        let first = store
            .create(new_user("Ada", "ada@example.com", "5551234"))
            .await
            .expect("Failed to create user");
        let second = store
            .create(new_user("Bob", "bob@example.com", "5555678"))
            .await
            .expect("Failed to create user");

        let profiles = store.list_all().await.expect("Listing failed");

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].id, first);
        assert_eq!(profiles[0].name, "Ada");
        assert_eq!(profiles[1].id, second);
        assert_eq!(profiles[1].name, "Bob");
    }
}
