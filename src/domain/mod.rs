//! Domain types for the Users service.

mod user;

pub use user::*;
