//! User domain types.
//!
//! A user is identified by a UUID and carries a display name and a unique
//! email address.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{UsersError, UsersResult};

/// A user of the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Validated fields for a user that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Validated partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Create a new user with a fresh id.
    pub fn new(new_user: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            created_at: now,
            updated_at: now,
        }
    }
}

impl NewUser {
    /// Validate raw field values into a `NewUser`.
    pub fn parse(name: Option<String>, email: Option<String>) -> UsersResult<Self> {
        let name = name.ok_or_else(|| UsersError::BadRequest("name is required".to_string()))?;
        let email =
            email.ok_or_else(|| UsersError::BadRequest("email is required".to_string()))?;

        Ok(Self {
            name: validate_name(&name)?,
            email: validate_email(&email)?,
        })
    }
}

impl UserPatch {
    /// Validate raw optional field values into a `UserPatch`.
    ///
    /// A patch that touches no field is rejected.
    pub fn parse(name: Option<String>, email: Option<String>) -> UsersResult<Self> {
        if name.is_none() && email.is_none() {
            return Err(UsersError::BadRequest(
                "At least one of 'name' or 'email' must be provided".to_string(),
            ));
        }

        Ok(Self {
            name: name.as_deref().map(validate_name).transpose()?,
            email: email.as_deref().map(validate_email).transpose()?,
        })
    }
}

/// Parse a path segment into a user id.
pub fn parse_user_id(raw: &str) -> UsersResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| UsersError::BadRequest(format!("Invalid user id '{}'", raw)))
}

fn validate_name(name: &str) -> UsersResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(UsersError::BadRequest("name must not be empty".to_string()));
    }
    Ok(name.to_string())
}

fn validate_email(email: &str) -> UsersResult<String> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !valid {
        return Err(UsersError::BadRequest(format!(
            "Invalid email address '{}'",
            email
        )));
    }
    Ok(email.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_trims_and_lowercases() {
        let new_user = NewUser::parse(
            Some("  Ada Lovelace ".to_string()),
            Some("Ada@Example.com".to_string()),
        )
        .unwrap();
        assert_eq!(new_user.name, "Ada Lovelace");
        assert_eq!(new_user.email, "ada@example.com");
    }

    #[test]
    fn test_new_user_requires_fields() {
        assert!(matches!(
            NewUser::parse(None, Some("a@b.c".to_string())),
            Err(UsersError::BadRequest(_))
        ));
        assert!(matches!(
            NewUser::parse(Some("Ada".to_string()), None),
            Err(UsersError::BadRequest(_))
        ));
        assert!(matches!(
            NewUser::parse(Some("   ".to_string()), Some("a@b.c".to_string())),
            Err(UsersError::BadRequest(_))
        ));
    }

    #[test]
    fn test_email_validation() {
        for bad in ["", "plain", "@example.com", "ada@", "a@b@c"] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
        assert!(validate_email("ada@example.com").is_ok());
    }

    #[test]
    fn test_empty_patch_rejected() {
        assert!(matches!(
            UserPatch::parse(None, None),
            Err(UsersError::BadRequest(_))
        ));
    }

    #[test]
    fn test_parse_user_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_user_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_user_id("not-a-uuid"),
            Err(UsersError::BadRequest(_))
        ));
        assert!(parse_user_id("42").is_err());
    }
}
