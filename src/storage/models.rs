//! Database models for the Users service.
//!
//! These are the row types returned by SQLx queries.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::User;
use crate::error::UsersError;

/// Database row for users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<UserRow> for User {
    type Error = UsersError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: Uuid::parse_str(&row.id).map_err(|e| UsersError::Internal(e.to_string()))?,
            name: row.name,
            email: row.email,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, UsersError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| UsersError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_with_corrupt_id_is_internal_error() {
        let row = UserRow {
            id: "garbage".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            created_at: Utc::now().to_rfc3339(),
            updated_at: Utc::now().to_rfc3339(),
        };

        let result: Result<User, _> = row.try_into();
        assert!(matches!(result, Err(UsersError::Internal(_))));
    }
}
