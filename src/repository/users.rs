//! User credential lookups

use async_trait::async_trait;

use super::Repository;
use crate::{error::AppResult, models::user::UserCredentials};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by username, together with its linked barber if any
    async fn find_credentials(&self, username: &str) -> AppResult<Option<UserCredentials>>;
}

#[async_trait]
impl UserStore for Repository {
    async fn find_credentials(&self, username: &str) -> AppResult<Option<UserCredentials>> {
        let row = sqlx::query_as::<_, UserCredentials>(
            r#"
            SELECT u.id AS user_id, u.username, u.password_hash,
                   b.id AS barber_id, b.name AS barber_name
            FROM users u
            LEFT JOIN barbers b ON b.user_id = u.id
            WHERE u.username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
