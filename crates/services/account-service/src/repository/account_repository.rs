//! Account repository: the generic contract plus username lookups.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, SqlErr,
};
use uuid::Uuid;

use super::base::CrudRepository;
use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use common::{AppError, AppResult};
use domain::Account;

/// Account repository trait for dependency injection.
///
/// Username comparisons are exact (case-sensitive).
#[async_trait]
pub trait AccountRepository: CrudRepository<Account, Uuid> {
    /// True if no account holds `username`
    async fn check_available(&self, username: &str) -> AppResult<bool>;

    /// Find a single account by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;
}

#[cfg(any(test, feature = "test-utils"))]
mockall::mock! {
    pub AccountRepo {}

    #[async_trait]
    impl CrudRepository<Account, Uuid> for AccountRepo {
        async fn save(&self, entity: Account) -> AppResult<Account>;
        async fn update(&self, entity: Account) -> AppResult<Account>;
        async fn delete(&self, entity: Account) -> AppResult<()>;
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;
        async fn find_all(&self) -> AppResult<Vec<Account>>;
        async fn flush(&self) -> AppResult<()>;
    }

    #[async_trait]
    impl AccountRepository for AccountRepo {
        async fn check_available(&self, username: &str) -> AppResult<bool>;
        async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use self::MockAccountRepo as MockAccountRepository;

/// SeaORM-backed account repository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// A unique index violation means the username was taken between the
/// availability check and the insert.
fn map_write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Username"),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl CrudRepository<Account, Uuid> for AccountStore {
    async fn save(&self, entity: Account) -> AppResult<Account> {
        let model = ActiveModel::from(entity)
            .insert(&self.db)
            .await
            .map_err(map_write_error)?;

        Ok(Account::from(model))
    }

    async fn update(&self, entity: Account) -> AppResult<Account> {
        match ActiveModel::from(entity).update(&self.db).await {
            Ok(model) => Ok(Account::from(model)),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
            Err(e) => Err(map_write_error(e)),
        }
    }

    async fn delete(&self, entity: Account) -> AppResult<()> {
        let result = AccountEntity::delete_by_id(entity.id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        let result = AccountEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Account>> {
        let models = AccountEntity::find()
            .order_by_asc(account::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Account::from).collect())
    }

    async fn flush(&self) -> AppResult<()> {
        // Statements run in autocommit mode; nothing is buffered.
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn check_available(&self, username: &str) -> AppResult<bool> {
        let taken = AccountEntity::find()
            .filter(account::Column::Username.eq(username))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(taken == 0)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }
}
