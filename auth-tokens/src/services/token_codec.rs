//! Signing and verification of access and refresh tokens.
//!
//! Both token kinds are HS256 JWTs, each signed with its own secret. Expiry is checked here
//! against the injected [`Clock`] rather than by `jsonwebtoken`, so the boundary is exact:
//! a token is accepted while `now < exp` and reported as [`AuthError::ExpiredToken`] from
//! its `exp` second onward. The signature is always checked first.
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, Header, Validation};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::domain::{
    AccessClaims, Expiring, JwtKeyStore, RefreshClaims, SignedToken, TokenKind, UserData,
};
use crate::errors::AuthError;
use crate::utils::{Clock, Config};

pub struct TokenCodec {
    keys: JwtKeyStore,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    pub fn new(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            keys: JwtKeyStore::from_config(config),
            access_ttl_seconds: config.access_ttl_seconds(),
            refresh_ttl_seconds: config.refresh_ttl_seconds(),
            clock,
        }
    }

    /// Access token for a user. `created_at` is the user record's creation time.
    pub fn issue_access(
        &self,
        user_id: Uuid,
        email: &str,
        created_at: DateTime<Utc>,
    ) -> Result<SignedToken, AuthError> {
        let exp = self.expiry_after(self.access_ttl_seconds)?;
        let claims = AccessClaims {
            user_data: UserData {
                id: user_id,
                email: email.to_owned(),
                created_at,
            },
            exp,
        };
        let token = self.sign(&claims, TokenKind::Access)?;
        Ok(SignedToken {
            token,
            expires_at: exp,
        })
    }

    pub fn issue_refresh(&self, user_id: Uuid) -> Result<SignedToken, AuthError> {
        let exp = self.expiry_after(self.refresh_ttl_seconds)?;
        let claims = RefreshClaims {
            id: user_id,
            exp,
            jti: Uuid::new_v4(),
        };
        let token = self.sign(&claims, TokenKind::Refresh)?;
        Ok(SignedToken {
            token,
            expires_at: exp,
        })
    }

    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, AuthError> {
        self.verify(token, TokenKind::Access)
    }

    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, AuthError> {
        self.verify(token, TokenKind::Refresh)
    }

    /// Parse `token`, check its signature against the secret for `kind`, then its expiry.
    pub fn verify<C>(&self, token: &str, kind: TokenKind) -> Result<C, AuthError>
    where
        C: DeserializeOwned + Expiring,
    {
        let data = decode::<C>(token, self.keys.decoding_key(kind), &validation())
            .map_err(map_decode_error)?;

        if self.clock.now_epoch() >= data.claims.expires_at() {
            return Err(AuthError::ExpiredToken);
        }
        Ok(data.claims)
    }

    fn sign<C: Serialize>(&self, claims: &C, kind: TokenKind) -> Result<String, AuthError> {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            self.keys.encoding_key(kind),
        )
        .map_err(|e| AuthError::SigningError(e.to_string()))
    }

    fn expiry_after(&self, ttl_seconds: i64) -> Result<i64, AuthError> {
        self.clock
            .now_epoch()
            .checked_add(ttl_seconds)
            .ok_or_else(|| AuthError::SigningError("token expiry overflow".to_owned()))
    }
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    // exp is compared against the injected clock in `verify`; the claim must still exist.
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.leeway = 0;
    validation
}

fn map_decode_error(e: jsonwebtoken::errors::Error) -> AuthError {
    match e.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => AuthError::BadSignature,
        ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        _ => AuthError::MalformedToken,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ManualClock;
    use chrono::Duration;

    const NOW: i64 = 1_700_000_000;

    fn codec_at(now: i64) -> (TokenCodec, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::at_epoch(now));
        let config = Config::new("access-secret-for-tests", "refresh-secret-for-tests");
        (TokenCodec::new(&config, clock.clone()), clock)
    }

    #[test]
    fn access_round_trip_recovers_identity() {
        let (codec, _) = codec_at(NOW);
        let id = Uuid::new_v4();
        let created = Utc::now();
        let issued = codec.issue_access(id, "jane@example.com", created).unwrap();

        assert_eq!(issued.expires_at, NOW + 900);
        assert_eq!(issued.token.split('.').count(), 3);

        let claims = codec.verify_access(&issued.token).unwrap();
        assert_eq!(claims.user_data.id, id);
        assert_eq!(claims.user_data.email, "jane@example.com");
        assert_eq!(claims.exp, NOW + 900);
    }

    #[test]
    fn refresh_expires_after_seven_days() {
        let (codec, _) = codec_at(NOW);
        let issued = codec.issue_refresh(Uuid::new_v4()).unwrap();
        assert_eq!(issued.expires_at, NOW + 7 * 24 * 3600);
    }

    #[test]
    fn refresh_tokens_issued_in_the_same_second_differ() {
        let (codec, _) = codec_at(NOW);
        let id = Uuid::new_v4();
        let first = codec.issue_refresh(id).unwrap();
        let second = codec.issue_refresh(id).unwrap();

        assert_eq!(first.expires_at, second.expires_at);
        assert_ne!(first.token, second.token);
        assert_eq!(codec.verify_refresh(&first.token).unwrap().id, id);
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let (codec, clock) = codec_at(NOW);
        let issued = codec.issue_access(Uuid::new_v4(), "a@b.io", Utc::now()).unwrap();

        clock.advance(Duration::seconds(899));
        assert!(codec.verify_access(&issued.token).is_ok());

        clock.advance(Duration::seconds(1));
        assert_eq!(
            codec.verify_access(&issued.token),
            Err(AuthError::ExpiredToken)
        );
    }

    #[test]
    fn secrets_are_not_interchangeable() {
        let (codec, _) = codec_at(NOW);
        let id = Uuid::new_v4();
        let refresh = codec.issue_refresh(id).unwrap();
        let access = codec.issue_access(id, "a@b.io", Utc::now()).unwrap();

        assert_eq!(
            codec.verify_access(&refresh.token),
            Err(AuthError::BadSignature)
        );
        assert_eq!(
            codec.verify_refresh(&access.token),
            Err(AuthError::BadSignature)
        );
    }

    #[test]
    fn garbage_is_malformed() {
        let (codec, _) = codec_at(NOW);
        assert_eq!(
            codec.verify_access("not-a-token"),
            Err(AuthError::MalformedToken)
        );
        assert_eq!(codec.verify_access(""), Err(AuthError::MalformedToken));
    }

    #[test]
    fn bad_signature_wins_over_expiry() {
        let (codec, clock) = codec_at(NOW);
        let other = Config::new("someone-else", "refresh-secret-for-tests");
        let foreign = TokenCodec::new(&other, clock.clone());
        let issued = foreign
            .issue_access(Uuid::new_v4(), "a@b.io", Utc::now())
            .unwrap();

        clock.advance(Duration::days(1));
        assert_eq!(
            codec.verify_access(&issued.token),
            Err(AuthError::BadSignature)
        );
    }
}
