//! Account domain entity, authentication principal and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::ROLE_USER;

/// Account roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountRole {
    User,
}

impl AccountRole {
    /// Authority label granted to principals holding this role
    pub fn authority(&self) -> GrantedAuthority {
        GrantedAuthority::new(self.to_string())
    }
}

impl From<&str> for AccountRole {
    fn from(_s: &str) -> Self {
        // Single-role model: anything stored maps to USER
        AccountRole::User
    }
}

impl From<AccountRole> for String {
    fn from(role: AccountRole) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountRole::User => write!(f, "{}", ROLE_USER),
        }
    }
}

/// Account domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    /// Stored credential; opaque to the domain
    #[serde(skip_serializing)]
    pub password: String,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with the default role
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password: password.into(),
            role: AccountRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the stored credential
    pub fn update_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.updated_at = Utc::now();
    }
}

/// Registration input: the username and the credential to store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
}

impl NewAccount {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl From<NewAccount> for Account {
    fn from(new: NewAccount) -> Self {
        Account::new(new.username, new.password)
    }
}

/// Capability label attached to an authenticated principal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct GrantedAuthority(String);

impl GrantedAuthority {
    pub fn new(authority: impl Into<String>) -> Self {
        Self(authority.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GrantedAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authentication principal handed to the login flow
#[derive(Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub username: String,
    pub password: String,
    pub authorities: Vec<GrantedAuthority>,
}

// Don't expose the credential in debug output
impl std::fmt::Debug for UserDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDetails")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("authorities", &self.authorities)
            .finish()
    }
}

impl UserDetails {
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a.as_str() == authority)
    }
}

/// Every principal carries exactly one authority, `USER`.
impl From<Account> for UserDetails {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
            password: account.password,
            authorities: vec![AccountRole::User.authority()],
        }
    }
}

/// Account response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AccountResponse {
    /// Unique account identifier
    pub id: Uuid,
    /// Login name
    pub username: String,
    /// Account role
    pub role: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            role: account.role.to_string(),
            created_at: account.created_at,
        }
    }
}
