pub mod refresh_token;
pub mod user;

pub use refresh_token::RefreshTokenModel;
pub use user::UserModel;
