pub mod auth;
pub mod clock;
pub mod config;
pub mod consts;

pub use auth::*;
pub use clock::*;
pub use config::Config;
pub use consts::*;
