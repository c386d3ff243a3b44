use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::domain::{Email, IssuedTokens, Password, PasswordHasher, User, UserProfile, UserStore};
use crate::errors::AuthError;
use crate::services::deadline::with_deadline;
use crate::services::TokenService;
use crate::utils::{Clock, Config};

/// Account-facing operations: registration, credential sign-in and profile lookup.
/// Token work is delegated to [`TokenService`].
#[derive(Clone)]
pub struct AuthService {
    user_store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: TokenService,
    clock: Arc<dyn Clock>,
    store_timeout: Duration,
}

impl AuthService {
    pub fn new(
        config: &Config,
        clock: Arc<dyn Clock>,
        user_store: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: TokenService,
    ) -> Self {
        Self {
            user_store,
            hasher,
            tokens,
            clock,
            store_timeout: config.store_timeout(),
        }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    pub async fn sign_up(
        &self,
        first_name: String,
        last_name: String,
        email: Email,
        password: Password,
    ) -> Result<User, AuthError> {
        let existing = with_deadline(
            self.store_timeout,
            "user lookup",
            self.user_store.find_by_email(&email),
        )
        .await?;
        if existing.is_some() {
            log::info!("sign-up rejected, {email} is already registered");
            return Err(AuthError::EmailInUse);
        }

        let password_hash = self.hasher.hash(password.as_ref()).await?;
        let user = User::new(first_name, last_name, email, password_hash, self.clock.now());

        // A concurrent sign-up for the same email surfaces here as EmailInUse.
        with_deadline(
            self.store_timeout,
            "user insert",
            self.user_store.add_user(user.clone()),
        )
        .await?;

        log::info!("registered user {}", user.id);
        Ok(user)
    }

    /// Check credentials and start a session. Unknown email and wrong password are
    /// reported identically.
    pub async fn sign_in(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<IssuedTokens, AuthError> {
        let user = with_deadline(
            self.store_timeout,
            "user lookup",
            self.user_store.find_by_email(email),
        )
        .await?
        .ok_or_else(|| {
            log::info!("sign-in for unregistered email {email}");
            AuthError::InvalidCredentials
        })?;

        let matches = match self.hasher.verify(password.as_ref(), &user.password_hash).await {
            Ok(matches) => matches,
            Err(e) => {
                log::error!("stored password hash for {} is unusable: {e}", user.id);
                false
            }
        };
        if !matches {
            log::info!("password mismatch for user {}", user.id);
            return Err(AuthError::InvalidCredentials);
        }

        self.tokens.issue_session(&user).await
    }

    pub async fn user_profile(&self, user_id: Uuid) -> Result<UserProfile, AuthError> {
        with_deadline(
            self.store_timeout,
            "user lookup",
            self.user_store.find_by_id(user_id),
        )
        .await?
        .map(UserProfile::from)
        .ok_or(AuthError::UserNotFound)
    }
}
