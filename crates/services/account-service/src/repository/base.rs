//! Generic persistence contract.
//!
//! Common CRUD operations shared by every repository. Entity-specific
//! lookups are declared on the repository traits that extend this one.

use async_trait::async_trait;

use common::AppResult;

/// CRUD operations over entities of type `T` identified by `Id`.
#[async_trait]
pub trait CrudRepository<T, Id>: Send + Sync
where
    T: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Persist a new entity
    async fn save(&self, entity: T) -> AppResult<T>;

    /// Overwrite an existing entity. Fails with `NotFound` if it is absent.
    async fn update(&self, entity: T) -> AppResult<T>;

    /// Remove an entity. Fails with `NotFound` if it is absent.
    async fn delete(&self, entity: T) -> AppResult<()>;

    /// Find entity by primary key
    async fn find_by_id(&self, id: Id) -> AppResult<Option<T>>;

    /// Find all entities
    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// Push pending writes to the backing store
    async fn flush(&self) -> AppResult<()>;
}
