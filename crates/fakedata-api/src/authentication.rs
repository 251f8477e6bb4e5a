//! Credential checks and token issuance for the `login` mutation

use fakedata_core::Authentication;
use fakedata_store::{verify_password, DataSource};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::jwt::JwtManager;

/// Login failures exposed to clients.
///
/// Unknown email and wrong password share one variant so callers cannot
/// tell which half of the credentials was wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("login failed")]
    LoginFailed,
}

/// Validates credentials against the store and signs tokens
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<dyn DataSource>,
    jwt_manager: Arc<JwtManager>,
}

impl Authenticator {
    /// Create a new authenticator
    pub fn new(store: Arc<dyn DataSource>, jwt_manager: Arc<JwtManager>) -> Self {
        Self { store, jwt_manager }
    }

    /// JWT manager used to sign tokens
    pub fn jwt_manager(&self) -> &JwtManager {
        &self.jwt_manager
    }

    /// Authenticate `email`/`password` and issue a token for the user
    #[instrument(skip(self, password))]
    pub fn login(&self, email: &str, password: &str) -> Result<Authentication, AuthError> {
        let user = self.store.get_user_with_email(email).ok_or_else(|| {
            debug!("Login rejected: unknown email");
            AuthError::InvalidCredentials
        })?;

        if !verify_password(password, &user.password_hash) {
            debug!(user_id = user.id, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let claims = self
            .jwt_manager
            .claims_for(user.id.to_string())
            .with_email(&user.email);

        let token = self
            .jwt_manager
            .generate_token_with_claims(&claims)
            .map_err(|e| {
                error!(user_id = user.id, error = %e, "Failed to sign token");
                AuthError::LoginFailed
            })?;

        info!(user_id = user.id, "User logged in");

        Ok(Authentication { token, user })
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("jwt_manager", &self.jwt_manager)
            .finish_non_exhaustive()
    }
}
