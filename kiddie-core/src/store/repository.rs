use thiserror::Error;

use crate::models::Account;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("account '{0}' not found")]
    NotFound(String),

    #[error("account '{0}' already exists")]
    Duplicate(String),
}

/// Owned store of custodial accounts.
///
/// All reads return snapshots; callers never hold references into the
/// store's own state. Synchronous by design: the dashboard has exactly one
/// logical thread of execution, so there is nothing to await or lock.
/// There is no delete: accounts leave the book through custodial transfer
/// at majority, which is outside this system.
pub trait AccountRepository {
    /// Snapshot of every account, in insertion order.
    fn list(&self) -> Vec<Account>;

    /// Snapshot of a single account by id.
    fn get(&self, account_id: &str) -> Result<Account, RepositoryError>;

    /// Adds a new account. Fails if the id is already taken.
    fn insert(&mut self, account: Account) -> Result<(), RepositoryError>;

    /// Replaces an existing account with the same id.
    fn update(&mut self, account: Account) -> Result<(), RepositoryError>;
}
