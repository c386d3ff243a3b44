mod helpers;
mod ping;
mod refresh_token;
mod sign_in;
mod sign_out;
mod sign_up;
mod user_profile;
