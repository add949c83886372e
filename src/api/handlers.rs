//! HTTP request handlers.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    Json,
};

use crate::actions::UserActions;
use crate::api::extract::{JsonBody, UserId};
use crate::api::types::*;
use crate::domain::User;
use crate::error::{UsersError, UsersResult};

/// List all users.
///
/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = ListUsersResponse),
        (status = 500, description = "Internal error", body = crate::error::ErrorResponse)
    ),
    tag = "users"
)]
pub async fn list_users(
    State(actions): State<UserActions>,
) -> UsersResult<Json<ListUsersResponse>> {
    let users = actions.list().await?;

    tracing::debug!(count = users.len(), "Returning user list");

    Ok(Json(ListUsersResponse {
        total: users.len(),
        users,
    }))
}

/// Get a user by ID.
///
/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User ID (UUID)")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 400, description = "Malformed user ID", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_user(
    State(actions): State<UserActions>,
    UserId(id): UserId,
) -> UsersResult<Json<User>> {
    tracing::debug!(user_id = %id, "Getting user");

    let user = actions.get(id).await?;

    Ok(Json(user))
}

/// Update a user. Only the fields present in the body change.
///
/// PUT /users/{id}
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User ID (UUID)")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Malformed ID or invalid payload", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    ),
    tag = "users"
)]
pub async fn update_user(
    State(actions): State<UserActions>,
    UserId(id): UserId,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> UsersResult<Json<User>> {
    let patch = request.into_patch().inspect_err(|e| {
        tracing::warn!(user_id = %id, error = %e, "Rejected user update");
    })?;

    tracing::info!(
        user_id = %id,
        name = patch.name.is_some(),
        email = patch.email.is_some(),
        "Updating user"
    );

    let user = actions.update(id, patch).await?;

    Ok(Json(user))
}

/// Delete a user.
///
/// DELETE /users/{id}
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User ID (UUID)")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed user ID", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(actions): State<UserActions>,
    UserId(id): UserId,
) -> UsersResult<StatusCode> {
    tracing::info!(user_id = %id, "Deleting user");

    actions.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create a user.
///
/// POST /users
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid payload", body = crate::error::ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(actions): State<UserActions>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> UsersResult<(StatusCode, Json<User>)> {
    let new_user = request.into_new_user().inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected user creation");
    })?;

    tracing::info!(email = %new_user.email, "Creating user");

    let user = actions.create(new_user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(actions): State<UserActions>) -> Json<HealthResponse> {
    let (status, database) = match actions.ping().await {
        Ok(()) => ("healthy", "connected"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            ("degraded", "unavailable")
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Fallback for requests no route matched.
pub async fn not_found(uri: Uri) -> UsersError {
    UsersError::NotFound(format!("No route for {}", uri.path()))
}
