//! Storage layer for the Users service.
//!
//! Provides the `UserModel` capability and its SQLx/SQLite implementation.

mod model;
mod models;
mod repository;

pub use model::UserModel;
pub use repository::SqliteUserModel;

#[cfg(test)]
pub(crate) use repository::tests::setup_test_db;
