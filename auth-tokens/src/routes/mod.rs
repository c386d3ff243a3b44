pub(crate) mod authenticated;
pub(crate) mod ping;
pub(crate) mod refresh_token;
pub(crate) mod sign_in;
pub(crate) mod sign_out;
pub(crate) mod sign_up;
pub(crate) mod user_profile;

// re-export items from sub-modules
pub use authenticated::*;
pub use ping::*;
pub use refresh_token::*;
pub use sign_in::*;
pub use sign_out::*;
pub use sign_up::*;
pub use user_profile::*;
