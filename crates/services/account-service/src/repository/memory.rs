//! In-memory account repository for local runs and tests.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use super::account_repository::AccountRepository;
use super::base::CrudRepository;
use common::{AppError, AppResult};
use domain::Account;

/// Account repository held in a process-local map.
///
/// `save` enforces username uniqueness the same way the relational unique
/// index does, so both stores reject a duplicate insert with `Conflict`.
#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.read().map(|accounts| accounts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<Uuid, Account>>> {
        self.accounts
            .read()
            .map_err(|_| AppError::internal("account store lock poisoned"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<Uuid, Account>>> {
        self.accounts
            .write()
            .map_err(|_| AppError::internal("account store lock poisoned"))
    }
}

#[async_trait]
impl CrudRepository<Account, Uuid> for InMemoryAccountStore {
    async fn save(&self, entity: Account) -> AppResult<Account> {
        let mut accounts = self.write()?;

        if accounts.values().any(|a| a.username == entity.username) {
            return Err(AppError::conflict("Username"));
        }
        if accounts.contains_key(&entity.id) {
            return Err(AppError::conflict("Account"));
        }

        accounts.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Account) -> AppResult<Account> {
        let mut accounts = self.write()?;

        if accounts
            .values()
            .any(|a| a.id != entity.id && a.username == entity.username)
        {
            return Err(AppError::conflict("Username"));
        }

        match accounts.get_mut(&entity.id) {
            Some(stored) => {
                *stored = entity.clone();
                Ok(entity)
            }
            None => Err(AppError::NotFound),
        }
    }

    async fn delete(&self, entity: Account) -> AppResult<()> {
        self.write()?
            .remove(&entity.id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Account>> {
        let mut accounts: Vec<Account> = self.read()?.values().cloned().collect();
        accounts.sort_by_key(|a| a.created_at);
        Ok(accounts)
    }

    async fn flush(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountStore {
    async fn check_available(&self, username: &str) -> AppResult<bool> {
        Ok(!self.read()?.values().any(|a| a.username == username))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        Ok(self
            .read()?
            .values()
            .find(|a| a.username == username)
            .cloned())
    }
}
