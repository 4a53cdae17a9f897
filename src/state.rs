use std::sync::Arc;

use crate::auth::{Authenticator, HashManager, IdGenerator};
use crate::config::AppConfig;
use crate::database::Storage;
use crate::services::{RecipeService, UserService};

/// Everything a handler needs, built once at startup and shared by reference.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub recipes: Arc<RecipeService>,
    pub storage: Storage,
}

impl AppState {
    pub fn new(storage: Storage, authenticator: Authenticator) -> Self {
        let authenticator = Arc::new(authenticator);

        let users = UserService::new(
            storage.users(),
            IdGenerator::new(),
            HashManager::new(),
            authenticator.clone(),
        );
        let recipes = RecipeService::new(storage.recipes(), IdGenerator::new(), authenticator);

        Self {
            users: Arc::new(users),
            recipes: Arc::new(recipes),
            storage,
        }
    }

    pub fn from_config(config: &AppConfig, storage: Storage) -> Result<Self, crate::auth::JwtError> {
        let authenticator = Authenticator::new(&config.security.jwt_secret, config.security.jwt_expiry_hours)?;
        Ok(Self::new(storage, authenticator))
    }
}
