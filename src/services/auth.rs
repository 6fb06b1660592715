//! Barber authentication and session tokens

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{SessionBarber, SessionClaims},
    repository::UserStore,
};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const NO_BARBER_PROFILE: &str = "No barber profile linked";

/// Outcome of a login attempt; rejected credentials are not an error
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Authenticated { token: String, barber: SessionBarber },
    Rejected(&'static str),
}

/// Hash a password with argon2 and a random salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
        .unwrap_or(false)
}

/// Resolve a session token to the barber it was issued for
pub fn validate_token(token: &str, secret: &str) -> AppResult<SessionClaims> {
    SessionClaims::from_token(token, secret)
        .map_err(|e| AppError::Authentication(format!("Invalid session: {}", e)))
}

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, config: AuthConfig) -> Self {
        Self { users, config }
    }

    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let Some(user) = self.users.find_credentials(username.trim()).await? else {
            return Ok(LoginOutcome::Rejected(INVALID_CREDENTIALS));
        };

        if !verify_password(password, &user.password_hash) {
            tracing::warn!(username = %user.username, "Failed login attempt");
            return Ok(LoginOutcome::Rejected(INVALID_CREDENTIALS));
        }

        let (Some(barber_id), Some(barber_name)) = (user.barber_id, user.barber_name) else {
            return Ok(LoginOutcome::Rejected(NO_BARBER_PROFILE));
        };

        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: user.username,
            user_id: user.user_id,
            barber_id,
            barber_name,
            exp: now + (self.config.session_expiration_hours as i64 * 3600),
            iat: now,
        };

        let token = claims
            .create_token(&self.config.session_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        tracing::info!(barber_id, "Barber logged in");
        Ok(LoginOutcome::Authenticated {
            token,
            barber: claims.barber(),
        })
    }

    pub fn validate_token(&self, token: &str) -> AppResult<SessionClaims> {
        validate_token(token, &self.config.session_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserCredentials;
    use crate::repository::users::MockUserStore;

    fn config() -> AuthConfig {
        AuthConfig {
            session_secret: "test-secret".into(),
            session_expiration_hours: 168,
            seed_password: "unused".into(),
        }
    }

    fn store_with(barber: Option<(i32, &'static str)>) -> MockUserStore {
        let hash = hash_password("shearmagic123").unwrap();
        let mut store = MockUserStore::new();
        store.expect_find_credentials().returning(move |username| {
            Ok((username == "calvin").then(|| UserCredentials {
                user_id: 7,
                username: "calvin".into(),
                password_hash: hash.clone(),
                barber_id: barber.map(|(id, _)| id),
                barber_name: barber.map(|(_, name)| name.to_string()),
            }))
        });
        store
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("secret").unwrap();
        assert_ne!(hash, "secret");
        assert!(verify_password("secret", &hash));
        assert!(!verify_password("wrong", &hash));
        assert!(!verify_password("secret", "not-a-phc-string"));
    }

    #[tokio::test]
    async fn test_login_issues_valid_token() {
        let service = AuthService::new(Arc::new(store_with(Some((1, "Calvin Berkins")))), config());

        let outcome = service.login("calvin", "shearmagic123").await.unwrap();
        let LoginOutcome::Authenticated { token, barber } = outcome else {
            panic!("expected successful login");
        };
        assert_eq!(barber.id, 1);

        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.barber_id, 1);
        assert_eq!(claims.sub, "calvin");
        assert_eq!(claims.exp - claims.iat, 168 * 3600);
    }

    #[tokio::test]
    async fn test_login_rejections_are_structured() {
        let service = AuthService::new(Arc::new(store_with(Some((1, "Calvin Berkins")))), config());

        let wrong_password = service.login("calvin", "nope").await.unwrap();
        assert!(matches!(wrong_password, LoginOutcome::Rejected(INVALID_CREDENTIALS)));

        let unknown_user = service.login("nobody", "shearmagic123").await.unwrap();
        assert!(matches!(unknown_user, LoginOutcome::Rejected(INVALID_CREDENTIALS)));
    }

    #[tokio::test]
    async fn test_login_without_barber_profile() {
        let service = AuthService::new(Arc::new(store_with(None)), config());
        let outcome = service.login("calvin", "shearmagic123").await.unwrap();
        assert!(matches!(outcome, LoginOutcome::Rejected(NO_BARBER_PROFILE)));
    }

    #[test]
    fn test_validate_token_foreign_secret() {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: "calvin".into(),
            user_id: 7,
            barber_id: 1,
            barber_name: "Calvin Berkins".into(),
            exp: now + 60,
            iat: now,
        };
        let token = claims.create_token("someone-else").unwrap();
        assert!(matches!(validate_token(&token, "test-secret"), Err(AppError::Authentication(_))));
    }
}
