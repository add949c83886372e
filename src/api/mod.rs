//! HTTP API layer for the Users service.
//!
//! Binds the user CRUD handlers to their routes.

mod extract;
pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
