//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers. Usernames
/// are unique; `insert` must surface a duplicate as a `Conflict`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a user by their login name
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user and return it with its database-assigned id
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user's profile fields
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Replace the stored password hash for a user
    async fn update_password(&self, user_id: i64, password_hash: &str) -> Result<(), DomainError>;

    /// Delete a user
    ///
    /// Returns `true` if a row was removed.
    async fn delete(&self, user_id: i64) -> Result<bool, DomainError>;
}
