pub mod base_repository;
pub mod jwt_key_store;
pub mod refresh_record;
pub mod refresh_store;
pub mod revocation_store;
pub mod user_store;

pub use base_repository::*;
pub use jwt_key_store::*;
pub use refresh_record::*;
pub use refresh_store::*;
pub use revocation_store::*;
pub use user_store::*;
