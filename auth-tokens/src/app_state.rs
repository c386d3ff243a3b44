use std::sync::Arc;

use crate::services::{AuthService, TokenService};
use crate::utils::Config;

pub type AuthServiceType = Arc<AuthService>;
pub type ConfigType = Arc<Config>;

/// Shared handler state. Services are internally synchronized, so no outer lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthServiceType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(auth_service: AuthServiceType, config: ConfigType) -> Self {
        Self {
            auth_service,
            config,
        }
    }

    pub fn token_service(&self) -> &TokenService {
        self.auth_service.tokens()
    }
}
