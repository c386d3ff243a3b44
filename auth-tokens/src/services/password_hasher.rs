use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher as _, PasswordVerifier, Version,
};

use crate::domain::{PasswordHashError, PasswordHasher};

/// Argon2id hasher. Work runs on the blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    fn argon2() -> Result<Argon2<'static>, PasswordHashError> {
        let params = Params::new(15000, 2, 1, None)
            .map_err(|e| PasswordHashError::Hashing(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash(&self, plain: &str) -> Result<String, PasswordHashError> {
        let password = plain.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Self::argon2()?
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|e| PasswordHashError::Hashing(e.to_string()))
        })
        .await
        .map_err(|e| PasswordHashError::Hashing(e.to_string()))?
    }

    async fn verify(&self, plain: &str, hash: &str) -> Result<bool, PasswordHashError> {
        let password = plain.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed =
                PasswordHash::new(&hash).map_err(|e| PasswordHashError::Hashing(e.to_string()))?;
            // Parameters are read from the PHC string, so the default instance verifies any of them.
            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|e| PasswordHashError::Hashing(e.to_string()))?
    }
}
