//! Repository trait for account lookup.

use std::sync::Arc;

use crate::{Error, account::Account};

/// Repository that resolves usernames to accounts.
///
/// Implementations return a shared handle to the account so that lock
/// state applied through the handle is visible to later lookups of the
/// same username.
pub trait AccountRepository: Send + Sync + 'static {
    /// Resolve a username to its account.
    ///
    /// # Arguments
    ///
    /// * `username` - The username to resolve
    ///
    /// # Returns
    ///
    /// The account handle, or [`AuthError::UnknownUser`] when no account
    /// matches. Backends may surface [`Error::Storage`] for
    /// infrastructure faults.
    ///
    /// [`AuthError::UnknownUser`]: crate::error::AuthError::UnknownUser
    fn find_by_username(&self, username: &str) -> Result<Arc<dyn Account>, Error>;
}
