//! Domain layer - Accounts, principals and user-facing notifications.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Persistence and HTTP concerns live in the service and gateway crates.

pub mod account;
pub mod constants;
pub mod error;
pub mod notification;
pub mod password;

pub use account::{Account, AccountResponse, AccountRole, GrantedAuthority, NewAccount, UserDetails};
pub use constants::*;
pub use error::{DomainError, DomainResult, Rejection};
pub use notification::{MessageContext, Notification, NotificationSink, Severity, TargetedNotification};
pub use password::Password;
