use thiserror::Error;

use super::{RefreshStoreError, UserStoreError};

// Error type shared by the SQL-backed repositories
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn database<E: ToString>(e: E) -> Self {
        RepositoryError::DatabaseError(e.to_string())
    }
}

// Helper trait to convert between domain models and database models
pub trait ModelConverter<DomainModel, DatabaseModel> {
    fn to_database_model(domain: &DomainModel) -> DatabaseModel;
    fn from_database_model(db_model: DatabaseModel) -> Result<DomainModel, RepositoryError>;
}

impl From<RepositoryError> for UserStoreError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::InvalidData(msg) => UserStoreError::InvalidData(msg),
            RepositoryError::DatabaseError(msg) => UserStoreError::Unavailable(msg),
        }
    }
}

impl From<RepositoryError> for RefreshStoreError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::InvalidData(msg) => RefreshStoreError::Corrupt(msg),
            RepositoryError::DatabaseError(msg) => RefreshStoreError::Unavailable(msg),
        }
    }
}
