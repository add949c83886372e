//! Actions: one call against the user model per CRUD intent.
//!
//! Handlers talk to `UserActions`, never to the model directly. Failures
//! from the model are propagated unchanged.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{NewUser, User, UserPatch};
use crate::error::UsersResult;
use crate::storage::UserModel;

/// CRUD actions over a shared user model.
#[derive(Clone)]
pub struct UserActions {
    model: Arc<dyn UserModel>,
}

impl UserActions {
    /// Build the actions layer over a model.
    pub fn new(model: Arc<dyn UserModel>) -> Self {
        Self { model }
    }

    pub async fn list(&self) -> UsersResult<Vec<User>> {
        let users = self.model.list().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    pub async fn get(&self, id: Uuid) -> UsersResult<User> {
        tracing::debug!(user_id = %id, "Fetching user");
        self.model.get(id).await
    }

    pub async fn update(&self, id: Uuid, patch: UserPatch) -> UsersResult<User> {
        let user = self.model.update(id, patch).await?;
        tracing::info!(user_id = %id, "User updated");
        Ok(user)
    }

    pub async fn remove(&self, id: Uuid) -> UsersResult<()> {
        self.model.remove(id).await?;
        tracing::info!(user_id = %id, "User removed");
        Ok(())
    }

    pub async fn create(&self, new_user: NewUser) -> UsersResult<User> {
        let user = self.model.create(new_user).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Whether the underlying store answers.
    pub async fn ping(&self) -> UsersResult<()> {
        self.model.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UsersError;
    use crate::storage::setup_test_db;

    async fn actions() -> UserActions {
        UserActions::new(Arc::new(setup_test_db().await))
    }

    #[tokio::test]
    async fn test_lifecycle_through_actions() {
        crate::logging::init_test();
        let actions = actions().await;

        let created = actions
            .create(NewUser {
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(actions.list().await.unwrap().len(), 1);

        let updated = actions
            .update(
                created.id,
                UserPatch {
                    name: Some("Grace Hopper".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Grace Hopper");
        assert_eq!(actions.get(created.id).await.unwrap(), updated);

        actions.remove(created.id).await.unwrap();
        assert!(matches!(
            actions.get(created.id).await,
            Err(UsersError::NotFound(_))
        ));
        assert!(actions.list().await.unwrap().is_empty());
    }
}
