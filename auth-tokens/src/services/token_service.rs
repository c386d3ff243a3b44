/// Token lifecycle service.
///
/// Coordinates the [`TokenCodec`] with the two stores:
/// - issuing an access + refresh pair on sign-in and recording the refresh token as the
///   user's single authoritative one (overwriting any previous one)
/// - verifying access tokens on every protected request, signature and expiry first and
///   only then the revocation denylist
/// - signing out by denylisting the presented access token until its own `exp`
/// - exchanging a refresh token for a new access token
///
/// The service holds no mutable state. Every store call runs under the configured
/// deadline and reports [`AuthError::OperationCancelled`] when it elapses.
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::domain::{
    AuthenticatedUser, IssuedTokens, RefreshGrant, RefreshStore, RefreshedToken,
    RevocationEntry, RevocationStore, User, UserStore,
};
use crate::errors::AuthError;
use crate::services::deadline::with_deadline;
use crate::services::TokenCodec;
use crate::utils::{Clock, Config};

#[derive(Clone)]
pub struct TokenService {
    codec: Arc<TokenCodec>,
    refresh_store: Arc<dyn RefreshStore>,
    revocation_store: Arc<dyn RevocationStore>,
    user_store: Arc<dyn UserStore>,
    clock: Arc<dyn Clock>,
    store_timeout: Duration,
}

impl TokenService {
    pub fn new(
        config: &Config,
        clock: Arc<dyn Clock>,
        refresh_store: Arc<dyn RefreshStore>,
        revocation_store: Arc<dyn RevocationStore>,
        user_store: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            codec: Arc::new(TokenCodec::new(config, clock.clone())),
            refresh_store,
            revocation_store,
            user_store,
            clock,
            store_timeout: config.store_timeout(),
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Mint an access + refresh pair for an already authenticated user and make the new
    /// refresh token the only valid one for that user.
    pub async fn issue_session(&self, user: &User) -> Result<IssuedTokens, AuthError> {
        let access = self
            .codec
            .issue_access(user.id, user.email.as_ref(), user.created_at)
            .inspect_err(|e| log::error!("failed to sign access token for {}: {e}", user.id))?;
        let refresh = self
            .codec
            .issue_refresh(user.id)
            .inspect_err(|e| log::error!("failed to sign refresh token for {}: {e}", user.id))?;

        let now = self.clock.now();
        let grant = RefreshGrant {
            user_id: user.id,
            token: refresh.token.clone(),
            expires_at: chrono::DateTime::from_timestamp(refresh.expires_at, 0).unwrap_or(now),
            issued_at: now,
        };
        with_deadline(
            self.store_timeout,
            "refresh token upsert",
            self.refresh_store.upsert(grant),
        )
        .await
        .inspect_err(|e| log::error!("could not store refresh token for {}: {e}", user.id))?;

        log::info!("issued session tokens for user {}", user.id);
        Ok(IssuedTokens {
            access_token: access.token,
            refresh_token: refresh.token,
        })
    }

    /// Authenticate an access token for a protected call.
    pub async fn verify(&self, access_token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.codec.verify_access(access_token).inspect_err(|e| {
            log::debug!("access token rejected: {e}");
        })?;

        let user_id = claims.user_data.id;
        let key = RevocationEntry::key(user_id, claims.exp);
        let denylisted = with_deadline(
            self.store_timeout,
            "revocation lookup",
            self.revocation_store.get(&key),
        )
        .await
        .inspect_err(|e| log::error!("revocation lookup failed for {user_id}: {e}"))?;

        if denylisted.as_deref() == Some(access_token) {
            log::warn!("revoked access token presented for user {user_id}");
            return Err(AuthError::Revoked);
        }

        Ok(AuthenticatedUser {
            user_id,
            email: claims.user_data.email,
            created_at: claims.user_data.created_at,
            expires_at: claims.exp,
            token: access_token.to_owned(),
        })
    }

    /// Denylist `access_token` until its own expiry. Repeating the call rewrites the same
    /// entry. An already expired token needs no entry and succeeds as a no-op.
    pub async fn sign_out(
        &self,
        user_id: Uuid,
        expires_at: i64,
        access_token: &str,
    ) -> Result<(), AuthError> {
        let now = self.clock.now_epoch();
        let Some(entry) = RevocationEntry::for_token(user_id, expires_at, access_token, now)
        else {
            log::debug!("sign-out for {user_id} with an already expired token");
            return Ok(());
        };

        with_deadline(
            self.store_timeout,
            "revocation put",
            self.revocation_store.put(&entry.key, &entry.token, entry.ttl),
        )
        .await
        .inspect_err(|e| log::error!("could not revoke token for {user_id}: {e}"))?;

        log::info!("signed out user {user_id}, token denylisted for {:?}", entry.ttl);
        Ok(())
    }

    /// Exchange a refresh token for a new access token. The refresh token itself is not
    /// rotated.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshedToken, AuthError> {
        let claims = self
            .codec
            .verify_refresh(refresh_token)
            .map_err(|e| match e {
                AuthError::ExpiredToken => AuthError::RefreshTokenExpired,
                _ => AuthError::InvalidRefreshToken,
            })
            .inspect_err(|e| log::info!("refresh rejected: {e}"))?;

        let record = with_deadline(
            self.store_timeout,
            "refresh token lookup",
            self.refresh_store.find(claims.id, refresh_token),
        )
        .await?;
        if record.is_none() {
            log::info!("refresh token for {} is not the current one", claims.id);
            return Err(AuthError::InvalidRefreshToken);
        }

        let user = with_deadline(
            self.store_timeout,
            "user lookup",
            self.user_store.find_by_id(claims.id),
        )
        .await?
        .ok_or_else(|| {
            log::warn!("refresh for deleted user {}", claims.id);
            AuthError::UserNotFound
        })?;

        let access = self
            .codec
            .issue_access(user.id, user.email.as_ref(), user.created_at)?;
        log::info!("refreshed access token for user {}", user.id);
        Ok(RefreshedToken {
            access_token: access.token,
        })
    }
}
