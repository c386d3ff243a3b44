pub mod claims;
pub mod data_stores;
pub mod email;
pub mod issued_tokens;
pub mod models;
pub mod password;
pub mod password_hasher;
pub mod requests;
pub mod responses;
pub mod revocation_entry;
mod user;

pub use claims::*;
pub use data_stores::*;
pub use email::*;
pub use issued_tokens::*;
pub use models::{RefreshTokenModel, UserModel};
pub use password::*;
pub use password_hasher::*;
pub use requests::*;
pub use responses::*;
pub use revocation_entry::*;
pub use user::*;
