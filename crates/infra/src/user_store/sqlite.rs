//! SQLite-backed user store.
//!
//! Reads use a named-column projection (`id, username, first_name, last_name`)
//! so extra columns in the `users` table are never scanned and column order
//! does not matter.
//!
//! ## Error Mapping
//!
//! | SQLx Error | UserStoreError | Scenario |
//! |------------|----------------|----------|
//! | any, during a select | `Query` | table missing, connection failure, bad row |
//! | any, during an update | `Write` | locked database, constraint violation |
//! | PoolClosed | `Query`/`Write` | pool shut down |
//!
//! ## Thread Safety
//!
//! `SqliteUserStore` is `Send + Sync` and cheap to clone; the SQLx pool handles
//! connection checkout and SQLite does its own locking.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{FromRow, Row, SqlitePool};
use tracing::instrument;

use useradmin_core::{User, UserId};

use super::r#trait::{UserStore, UserStoreError};

/// User store over a shared SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if needed) the database at `url`.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self::new(pool))
    }

    /// Private in-memory database for tests and demos.
    ///
    /// Every SQLite `:memory:` connection is its own database, so the pool is
    /// pinned to a single connection that never expires.
    pub async fn connect_in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `users` table if it does not exist.
    ///
    /// `created_at` and `updated_at` belong to the table but are not part of
    /// the `User` model; they are left for external tooling to maintain.
    pub async fn ensure_schema(&self) -> Result<(), UserStoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id          TEXT PRIMARY KEY NOT NULL,
                created_at  TEXT NULL,
                username    TEXT NOT NULL,
                first_name  TEXT NOT NULL DEFAULT '',
                last_name   TEXT NOT NULL DEFAULT '',
                updated_at  TEXT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("ensure_schema", e, UserStoreError::Write))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for SqliteUserStore {
    #[instrument(skip(self), err)]
    async fn list_by_username(&self) -> Result<Vec<User>, UserStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, first_name, last_name
            FROM users
            ORDER BY username ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_by_username", e, UserStoreError::Query))?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            let user = UserRow::from_row(&row)
                .map_err(|e| map_sqlx_error("list_by_username", e, UserStoreError::Query))?;
            users.push(user.into());
        }

        tracing::debug!(user_count = users.len(), "listed users");
        Ok(users)
    }

    #[instrument(skip_all, fields(user_id = %id), err)]
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, first_name, last_name
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_id", e, UserStoreError::Query))?;

        match row {
            Some(row) => {
                let user = UserRow::from_row(&row)
                    .map_err(|e| map_sqlx_error("find_by_id", e, UserStoreError::Query))?;
                Ok(Some(user.into()))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip_all, fields(user_id = %id), err)]
    async fn update_names(
        &self,
        id: &UserId,
        first_name: &str,
        last_name: &str,
    ) -> Result<u64, UserStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = ?1, last_name = ?2
            WHERE id = ?3
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_names", e, UserStoreError::Write))?;

        Ok(result.rows_affected())
    }
}

// SQLx row types

#[derive(Debug)]
struct UserRow {
    id: String,
    username: String,
    first_name: String,
    last_name: String,
}

impl<'r> FromRow<'r, SqliteRow> for UserRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(UserRow {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
        })
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.id, row.username, row.first_name, row.last_name)
    }
}

fn map_sqlx_error(
    operation: &str,
    err: sqlx::Error,
    kind: fn(String) -> UserStoreError,
) -> UserStoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            kind(format!("database error in {}: {}", operation, db_err.message()))
        }
        sqlx::Error::PoolClosed => kind(format!("connection pool closed in {}", operation)),
        _ => kind(format!("sqlx error in {}: {}", operation, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_store(users: &[User]) -> SqliteUserStore {
        let store = SqliteUserStore::connect_in_memory().await.unwrap();
        store.ensure_schema().await.unwrap();
        for user in users {
            sqlx::query(
                "INSERT INTO users (id, created_at, username, first_name, last_name, updated_at) \
                 VALUES (?1, '2024-01-01', ?2, ?3, ?4, NULL)",
            )
            .bind(user.id.as_str())
            .bind(&user.username)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .execute(store.pool())
            .await
            .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn list_is_empty_for_empty_table() {
        let store = seeded_store(&[]).await;
        assert!(store.list_by_username().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_orders_by_username() {
        let store = seeded_store(&[
            User::new("u3", "carol", "C", "C"),
            User::new("u1", "alice", "A", "A"),
            User::new("u2", "bob", "B", "B"),
        ])
        .await;

        let names: Vec<_> = store
            .list_by_username()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[tokio::test]
    async fn find_by_id_projects_named_columns() {
        let alice = User::new("u1", "alice", "A", "B");
        let store = seeded_store(&[alice.clone()]).await;

        assert_eq!(store.find_by_id(&UserId::new("u1")).await.unwrap(), Some(alice));
        assert_eq!(store.find_by_id(&UserId::new("nope")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_by_id_matches_ids_exactly() {
        let store = seeded_store(&[
            User::new(" u1", "alice", "A", "B"),
            User::new("u1", "bob", "C", "D"),
            User::new("q?x/50%", "quinn", "Q", "X"),
        ])
        .await;

        let spaced = store.find_by_id(&UserId::new(" u1")).await.unwrap().unwrap();
        let odd = store.find_by_id(&UserId::new("q?x/50%")).await.unwrap().unwrap();

        assert_eq!(spaced.username, "alice");
        assert_eq!(odd.username, "quinn");
    }

    #[tokio::test]
    async fn update_names_reports_rows_affected() {
        let store = seeded_store(&[User::new("u1", "alice", "A", "B")]).await;

        let hit = store
            .update_names(&UserId::new("u1"), "Alice", "Baker")
            .await
            .unwrap();
        let miss = store
            .update_names(&UserId::new("missing-id"), "X", "Y")
            .await
            .unwrap();

        assert_eq!(hit, 1);
        assert_eq!(miss, 0);
        assert_eq!(store.list_by_username().await.unwrap().len(), 1);
        assert_eq!(
            store.find_by_id(&UserId::new("u1")).await.unwrap(),
            Some(User::new("u1", "alice", "Alice", "Baker"))
        );
    }

    #[tokio::test]
    async fn missing_table_surfaces_query_error() {
        let store = SqliteUserStore::connect_in_memory().await.unwrap();

        let err = store.list_by_username().await.unwrap_err();
        assert!(matches!(err, UserStoreError::Query(_)));
    }

    #[tokio::test]
    async fn write_on_missing_table_surfaces_write_error() {
        let store = SqliteUserStore::connect_in_memory().await.unwrap();

        let err = store
            .update_names(&UserId::new("u1"), "A", "B")
            .await
            .unwrap_err();
        assert!(matches!(err, UserStoreError::Write(_)));
    }
}
