//! Application state for dependency injection.

use std::sync::Arc;

use activity_feed_lib::ActivityLog;
use common::AppResult;
use user_repository_lib::{ResilientUserRepository, UserRepository};

use crate::config::GatewayConfig;
use crate::service::{Directory, DirectoryService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn DirectoryService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(directory: Arc<dyn DirectoryService>, config: GatewayConfig) -> Self {
        Self { directory, config }
    }

    /// Wire the real repository and activity feed from configuration.
    pub async fn from_config(config: GatewayConfig) -> AppResult<Self> {
        let users: Arc<dyn UserRepository> =
            Arc::new(ResilientUserRepository::from_config(config.api.clone())?);
        let activity = Arc::new(ActivityLog::load(&config.activity).await);
        let directory = Arc::new(Directory::new(users, activity));

        Ok(Self::new(directory, config))
    }
}
