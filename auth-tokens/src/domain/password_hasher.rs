use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PasswordHashError {
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// One-way password hashing collaborator.
#[async_trait::async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plain: &str) -> Result<String, PasswordHashError>;

    /// `Ok(false)` on mismatch. Errors only when the stored hash cannot be used at all.
    async fn verify(&self, plain: &str, hash: &str) -> Result<bool, PasswordHashError>;
}
