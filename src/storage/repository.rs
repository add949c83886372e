//! SQLite-backed user model.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use uuid::Uuid;

use crate::domain::{NewUser, User, UserPatch};
use crate::error::{UsersError, UsersResult};
use crate::storage::model::UserModel;
use crate::storage::models::UserRow;

/// User model persisted in SQLite.
#[derive(Clone)]
pub struct SqliteUserModel {
    pool: SqlitePool,
}

impl SqliteUserModel {
    /// Create a new model with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the database schema.
    pub async fn init_schema(&self) -> UsersResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_users_created_at ON users(created_at);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Map a unique-constraint violation to a client error.
fn map_write_error(e: sqlx::Error) -> UsersError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            UsersError::BadRequest("email already registered".to_string())
        }
        _ => UsersError::Database(e),
    }
}

#[async_trait]
impl UserModel for SqliteUserModel {
    async fn list(&self) -> UsersResult<Vec<User>> {
        let rows: Vec<UserRow> =
            sqlx::query_as("SELECT * FROM users ORDER BY created_at ASC, rowid ASC")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    async fn get(&self, id: Uuid) -> UsersResult<User> {
        let row: UserRow = sqlx::query_as("SELECT * FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| UsersError::NotFound(format!("User {} not found", id)))?;

        row.try_into()
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> UsersResult<User> {
        // Absent patch fields keep their stored value; only given columns are written.
        let row: UserRow = sqlx::query_as(
            r#"
            UPDATE users
            SET name = COALESCE(?, name),
                email = COALESCE(?, email),
                updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(patch.name)
        .bind(patch.email)
        .bind(Utc::now().to_rfc3339())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?
        .ok_or_else(|| UsersError::NotFound(format!("User {} not found", id)))?;

        row.try_into()
    }

    async fn remove(&self, id: Uuid) -> UsersResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(UsersError::NotFound(format!("User {} not found", id)));
        }

        Ok(())
    }

    async fn create(&self, new_user: NewUser) -> UsersResult<User> {
        let user = User::new(new_user);

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.created_at.to_rfc3339())
        .bind(user.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(user)
    }

    async fn ping(&self) -> UsersResult<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
