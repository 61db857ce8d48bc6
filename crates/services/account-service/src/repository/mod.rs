//! Repository layer for data access.

mod account_repository;
mod base;
pub mod entities;
mod memory;

pub use account_repository::{AccountRepository, AccountStore};
pub use base::CrudRepository;
pub use memory::InMemoryAccountStore;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
