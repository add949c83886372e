//! The data-access capability the Actions layer is written against.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewUser, User, UserPatch};
use crate::error::UsersResult;

/// CRUD primitives over stored users.
///
/// Implementations report an absent entity as `UsersError::NotFound` and a
/// rejected write (e.g. duplicate email) as `UsersError::BadRequest`.
#[async_trait]
pub trait UserModel: Send + Sync {
    /// All users, oldest first.
    async fn list(&self) -> UsersResult<Vec<User>>;

    /// Fetch a user by identifier.
    async fn get(&self, id: Uuid) -> UsersResult<User>;

    /// Apply a partial update and return the stored result.
    async fn update(&self, id: Uuid, patch: UserPatch) -> UsersResult<User>;

    /// Delete a user.
    async fn remove(&self, id: Uuid) -> UsersResult<()>;

    /// Persist a new user and return it with its assigned id.
    async fn create(&self, new_user: NewUser) -> UsersResult<User>;

    /// Check the backing store is reachable.
    async fn ping(&self) -> UsersResult<()> {
        Ok(())
    }
}
