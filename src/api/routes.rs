//! Route definitions for the API.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::actions::UserActions;
use crate::api::handlers;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_users,
        handlers::get_user,
        handlers::update_user,
        handlers::delete_user,
        handlers::create_user,
        handlers::health_check,
    ),
    components(schemas(
        crate::api::types::CreateUserRequest,
        crate::api::types::UpdateUserRequest,
        crate::api::types::ListUsersResponse,
        crate::api::types::HealthResponse,
        crate::domain::User,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "users", description = "User CRUD endpoints"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Users Service API",
        version = "0.1.0",
        description = "CRUD endpoints for the Users resource",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Bind the five user routes under `base_path`.
///
/// The collection answers on both `{base}` and `{base}/`.
pub fn user_routes(base_path: &str, actions: UserActions) -> Router {
    let base = base_path.trim_end_matches('/');
    let collection = || get(handlers::list_users).post(handlers::create_user);

    let mut router = Router::new()
        .route(&format!("{base}/"), collection())
        .route(
            &format!("{base}/{{id}}"),
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        );

    if !base.is_empty() {
        router = router.route(base, collection());
    }

    router.with_state(actions)
}

/// Build the full application router around the user routes.
pub fn build_router(actions: UserActions, base_path: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let health = Router::new()
        .route("/health", get(handlers::health_check))
        .with_state(actions.clone());

    Router::new()
        .merge(user_routes(base_path, actions))
        .merge(health)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
