pub mod hashmap_refresh_store;
pub mod hashmap_revocation_store;
pub mod hashmap_user_store;
pub mod redis_revocation_store;
pub mod redis_service;
pub mod sql_refresh_store;
pub mod sql_users_store;

pub use hashmap_refresh_store::*;
pub use hashmap_revocation_store::*;
pub use hashmap_user_store::*;
pub use redis_revocation_store::*;
pub use redis_service::*;
pub use sql_refresh_store::*;
pub use sql_users_store::SqlUserStore;
