//! Account service flows across the public API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use account_service_lib::presentation::{
    check_availability_interactive, AvailabilityCheck, ViewLoad, ViewSession,
};
use account_service_lib::repository::{AccountRepository, CrudRepository, InMemoryAccountStore};
use account_service_lib::service::{AccountManager, AccountService};
use common::{AppError, AppResult};
use domain::{Account, MessageContext, NewAccount, Rejection, Severity, GROWL_CHANNEL};

/// Repository whose availability check passes but whose writes fail,
/// as a database losing its connection mid-request would.
#[derive(Default)]
struct BrokenStore {
    saves: AtomicUsize,
}

#[async_trait]
impl CrudRepository<Account, Uuid> for BrokenStore {
    async fn save(&self, _entity: Account) -> AppResult<Account> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Err(AppError::internal("relation \"accounts\" does not exist"))
    }

    async fn update(&self, _entity: Account) -> AppResult<Account> {
        Err(AppError::NotFound)
    }

    async fn delete(&self, _entity: Account) -> AppResult<()> {
        Err(AppError::NotFound)
    }

    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<Account>> {
        Ok(None)
    }

    async fn find_all(&self) -> AppResult<Vec<Account>> {
        Ok(Vec::new())
    }

    async fn flush(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for BrokenStore {
    async fn check_available(&self, _username: &str) -> AppResult<bool> {
        Ok(true)
    }

    async fn find_by_username(&self, _username: &str) -> AppResult<Option<Account>> {
        Ok(None)
    }
}

fn in_memory_service() -> AccountManager {
    AccountManager::new(Arc::new(InMemoryAccountStore::new()))
}

#[tokio::test]
async fn test_register_then_login_lookup() {
    let service = in_memory_service();
    let mut messages = MessageContext::new();

    let created = assert_ok!(
        service
            .create_account(NewAccount::new("alice", "$argon2id$stub"), &mut messages)
            .await
    );
    let details = assert_ok!(service.load_user_by_username("alice").await);

    assert_eq!(details.username, created.username);
    assert_eq!(details.password, "$argon2id$stub");
    assert!(details.has_authority("USER"));
    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_field_check_follows_registration() {
    let service = in_memory_service();
    let event = AvailabilityCheck::new("form:username", "bob");
    let mut messages = MessageContext::new();

    assert!(assert_ok!(
        check_availability_interactive(&service, &event, &mut messages).await
    ));
    assert_ok!(
        service
            .create_account(NewAccount::new("bob", "hash"), &mut messages)
            .await
    );
    assert!(!assert_ok!(
        check_availability_interactive(&service, &event, &mut messages).await
    ));

    let field: Vec<_> = messages.for_target(Some("form:username")).collect();
    assert_eq!(field.len(), 2);
    assert_eq!(field[0].severity, Severity::Info);
    assert_eq!(field[1].severity, Severity::Error);
    assert!(field.iter().all(|n| n.summary.is_none()));
}

#[tokio::test]
async fn test_store_failure_is_sanitised() {
    let store = Arc::new(BrokenStore::default());
    let service = AccountManager::new(store.clone());
    let mut messages = MessageContext::new();

    let rejection = assert_err!(
        service
            .create_account(NewAccount::new("carol", "hash"), &mut messages)
            .await
    );

    assert!(matches!(rejection, Rejection::Persistence(_)));
    assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    assert_eq!(messages.len(), 1);
    assert!(!rejection.to_string().contains("relation"));
}

#[tokio::test]
async fn test_unknown_account_propagates() {
    let service = AccountManager::new(Arc::new(BrokenStore::default()));

    let err = assert_err!(service.load_user_by_username("ghost").await);
    assert_eq!(err.to_string(), "No such user with name provided 'ghost'");
}

#[test]
fn test_welcome_lands_on_growl_channel() {
    let mut session = ViewSession::new();
    let mut messages = MessageContext::new();

    session.on_view_load(&ViewLoad::initial(Some("Grace"), Some("Hopper")), &mut messages);
    session.on_view_load(&ViewLoad::initial(Some("Grace"), Some("Hopper")), &mut messages);

    assert_eq!(messages.for_target(Some(GROWL_CHANNEL)).count(), 1);
}
