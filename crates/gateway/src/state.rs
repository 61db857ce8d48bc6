//! Application state for dependency injection.

use std::sync::Arc;

use account_service_lib::infra::Database;
use account_service_lib::repository::AccountRepository;
use account_service_lib::service::{AccountManager, AccountService};

use crate::views::ViewRegistry;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountService>,
    pub views: Arc<ViewRegistry>,
    /// Absent when running against the in-memory store
    pub database: Option<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(accounts: Arc<dyn AccountService>, database: Option<Database>) -> Self {
        Self {
            accounts,
            views: Arc::new(ViewRegistry::new()),
            database,
        }
    }

    /// Replace the view registry with one bounded to `capacity` sessions.
    pub fn with_view_capacity(mut self, capacity: usize) -> Self {
        self.views = Arc::new(ViewRegistry::with_capacity(capacity));
        self
    }

    /// State backed by the given repository, without a database handle.
    pub fn with_repository(repo: Arc<dyn AccountRepository>) -> Self {
        Self::new(Arc::new(AccountManager::new(repo)), None)
    }
}
