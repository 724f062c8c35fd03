//! User account management service.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::auth::PasswordHasher;

/// Registration payload for a new account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Partial profile update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Account management service
pub struct UserService<U: UserRepository> {
    users: Arc<U>,
    hasher: PasswordHasher,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(users: Arc<U>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Registers a new account
    ///
    /// Usernames are unique; a duplicate registration is a conflict.
    pub async fn register(&self, new_user: NewUser) -> DomainResult<User> {
        if self
            .users
            .find_by_username(&new_user.username)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict {
                message: format!("Username '{}' is already taken", new_user.username),
            });
        }

        let digest = self.hasher.hash(&new_user.password)?;
        let mut user = User::new(new_user.username, new_user.email, digest);
        user.first_name = new_user.first_name;
        user.last_name = new_user.last_name;

        let user = self.users.insert(user).await?;
        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Fetches a single user by id
    pub async fn find_one(&self, id: i64) -> DomainResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("User {}", id),
            })
    }

    /// Applies a partial profile update
    pub async fn update_profile(&self, id: i64, update: UserUpdate) -> DomainResult<User> {
        let mut user = self.find_one(id).await?;

        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = update.last_name {
            user.last_name = Some(last_name);
        }

        self.users.update(user).await
    }

    /// Replaces the account's credential with a hash of the new password
    pub async fn update_password(&self, id: i64, new_password: &str) -> DomainResult<()> {
        self.find_one(id).await?;
        let digest = self.hasher.hash(new_password)?;
        self.users.update_password(id, &digest).await?;
        info!(user_id = id, "Password updated");
        Ok(())
    }

    /// Reactivates a deactivated account
    pub async fn activate(&self, id: i64) -> DomainResult<User> {
        let mut user = self.find_one(id).await?;
        if user.is_active {
            return Err(DomainError::Conflict {
                message: format!("User {} is already active", id),
            });
        }
        user.is_active = true;
        let user = self.users.update(user).await?;
        info!(user_id = id, "User activated");
        Ok(user)
    }

    /// Deactivates an account without deleting its data
    pub async fn deactivate(&self, id: i64) -> DomainResult<User> {
        let mut user = self.find_one(id).await?;
        if !user.is_active {
            return Err(DomainError::Conflict {
                message: format!("User {} is already deactivated", id),
            });
        }
        user.is_active = false;
        let user = self.users.update(user).await?;
        info!(user_id = id, "User deactivated");
        Ok(user)
    }

    /// Permanently removes an account
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.users.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: format!("User {}", id),
            });
        }
        info!(user_id = id, "User deleted");
        Ok(())
    }
}
