pub mod auth;
pub mod data_stores;
pub(crate) mod deadline;
pub mod password_hasher;
pub mod token_codec;
pub mod token_service;

pub use auth::*;
pub use data_stores::*;
pub use password_hasher::*;
pub use token_codec::*;
pub use token_service::*;
