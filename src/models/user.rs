//! User credentials and session tokens

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Login row: a user joined with the barber profile it is linked to
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub user_id: i32,
    pub username: String,
    pub password_hash: String,
    pub barber_id: Option<i32>,
    pub barber_name: Option<String>,
}

/// Claims carried by a barber session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Username
    pub sub: String,
    pub user_id: i32,
    pub barber_id: i32,
    pub barber_name: String,
    pub exp: i64,
    pub iat: i64,
}

/// Identity of the logged-in barber, as returned by `/auth/me`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionBarber {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
}

impl SessionClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn barber(&self) -> SessionBarber {
        SessionBarber {
            id: self.barber_id,
            name: self.barber_name.clone(),
            user_id: self.user_id,
        }
    }
}
