//! Account service - registration and the authentication lookup.
//!
//! Registration never fails as a fault: a taken username or a store failure
//! comes back as a [`Rejection`] and is reported to the caller's
//! notification sink. The authentication lookup is the one path whose
//! failure propagates, so the login flow can reject the credential.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppError, AppResult};
use domain::{Account, NewAccount, NotificationSink, Rejection, UserDetails};

use crate::repository::AccountRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create an account if its username is free.
    ///
    /// On rejection exactly one notification is added to `messages`;
    /// a created account adds none.
    async fn create_account(
        &self,
        account: NewAccount,
        messages: &mut (dyn NotificationSink + Send),
    ) -> Result<Account, Rejection>;

    /// Build the authentication principal for `username`.
    ///
    /// Fails with `AccountNotFound` when no account matches.
    async fn load_user_by_username(&self, username: &str) -> AppResult<UserDetails>;

    /// True if no account holds `username`
    async fn check_available(&self, username: &str) -> AppResult<bool>;

    /// Retrieve the full account record by username
    async fn load_account_by_username(&self, username: &str) -> AppResult<Option<Account>>;
}

/// Concrete implementation of AccountService using a repository.
pub struct AccountManager {
    repo: Arc<dyn AccountRepository>,
}

impl AccountManager {
    /// Create new account service instance with repository
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    async fn try_create(&self, account: NewAccount) -> Result<Account, Rejection> {
        let available = self
            .repo
            .check_available(&account.username)
            .await
            .map_err(persistence_rejection)?;

        if !available {
            return Err(Rejection::UsernameUnavailable(account.username));
        }

        let username = account.username.clone();
        match self.repo.save(Account::from(account)).await {
            Ok(created) => Ok(created),
            // Lost a race for the name between the check and the insert
            Err(AppError::Conflict(_)) => Err(Rejection::UsernameUnavailable(username)),
            Err(e) => Err(persistence_rejection(e)),
        }
    }
}

/// Store failures are reported with the sanitised user-facing message;
/// internal detail only reaches the log.
fn persistence_rejection(err: AppError) -> Rejection {
    Rejection::persistence(err.user_message())
}

#[async_trait]
impl AccountService for AccountManager {
    async fn create_account(
        &self,
        account: NewAccount,
        messages: &mut (dyn NotificationSink + Send),
    ) -> Result<Account, Rejection> {
        let username = account.username.clone();

        match self.try_create(account).await {
            Ok(created) => {
                info!(account_id = %created.id, username = %created.username, "Account created");
                Ok(created)
            }
            Err(rejection) => {
                warn!(username = %username, reason = %rejection, "Account creation rejected");
                messages.add_global(rejection.notification());
                Err(rejection)
            }
        }
    }

    async fn load_user_by_username(&self, username: &str) -> AppResult<UserDetails> {
        debug!(username = %username, "Loading principal");

        self.repo
            .find_by_username(username)
            .await?
            .map(UserDetails::from)
            .ok_or_else(|| AppError::account_not_found(username))
    }

    async fn check_available(&self, username: &str) -> AppResult<bool> {
        self.repo.check_available(username).await
    }

    async fn load_account_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        self.repo.find_by_username(username).await
    }
}
