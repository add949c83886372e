//! API request and response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewUser, User, UserPatch};
use crate::error::UsersResult;

// ==================== Users ====================

/// Request to create a user.
///
/// Both fields are required; they are optional here so a missing field
/// surfaces as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUserRequest {
    pub fn into_new_user(self) -> UsersResult<NewUser> {
        NewUser::parse(self.name, self.email)
    }
}

/// Partial update of a user. Omitted fields are left unchanged.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_patch(self) -> UsersResult<UserPatch> {
        UserPatch::parse(self.name, self.email)
    }
}

/// Response for listing users.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListUsersResponse {
    /// All users, oldest first.
    pub users: Vec<User>,
    /// Number of users returned.
    pub total: usize,
}

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
    /// Timestamp.
    pub timestamp: String,
}
