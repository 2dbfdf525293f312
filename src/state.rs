use std::sync::Arc;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::database::{MovieRepository, UserRepository};
use crate::services::CredentialService;

/// Shared handles injected into every handler through axum `State`
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub credentials: CredentialService,
    pub movies: Arc<dyn MovieRepository>,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserRepository>,
        movies: Arc<dyn MovieRepository>,
        tokens: TokenService,
    ) -> Self {
        let credentials = CredentialService::new(users, config.security.bcrypt_cost);
        Self {
            config: Arc::new(config),
            credentials,
            movies,
            tokens,
        }
    }
}
