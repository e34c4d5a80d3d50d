//! In-memory storage backend for wicket.
//!
//! Accounts live in a concurrent map keyed by username and are handed out
//! as shared handles, so lock state applied during a login decision is
//! visible to every later lookup. Passwords are stored as argon2 hashes,
//! never as plaintext.
//!
//! This backend also carries the account lifecycle the login decision
//! treats as external: creating accounts, clearing a lockout, and
//! flipping the in-use flag.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use password_auth::{generate_hash, verify_password};
use wicket_core::{Account, AccountRepository, Error, error::AuthError};

#[derive(Debug, Default)]
struct AccountState {
    locked_at: Option<DateTime<Utc>>,
    in_use: bool,
    last_entry_at: Option<DateTime<Utc>>,
}

/// An account stored in memory.
///
/// The credential is kept as a password hash. Lock state, the in-use
/// flag, and the last recorded entry sit behind a mutex so the
/// [`Account`] operations can work through a shared handle.
pub struct MemoryAccount {
    password_hash: String,
    state: Mutex<AccountState>,
}

impl MemoryAccount {
    fn new(password: &str) -> Self {
        Self {
            password_hash: generate_hash(password),
            state: Mutex::new(AccountState::default()),
        }
    }

    // A poisoned lock still holds valid account state.
    fn state(&self) -> MutexGuard<'_, AccountState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// When the account was locked out, if it is.
    pub fn locked_at(&self) -> Option<DateTime<Utc>> {
        self.state().locked_at
    }

    /// Clear a lockout, restoring the account to a loggable state.
    pub fn unlock(&self) {
        self.state().locked_at = None;
    }

    /// Mark the account as having (or no longer having) an active
    /// session elsewhere.
    pub fn set_in_use(&self, in_use: bool) {
        self.state().in_use = in_use;
    }

    /// When the account last recorded a successful entry.
    pub fn last_entry_at(&self) -> Option<DateTime<Utc>> {
        self.state().last_entry_at
    }
}

impl Account for MemoryAccount {
    fn check_password(&self, candidate: &str) -> bool {
        verify_password(candidate, &self.password_hash).is_ok()
    }

    fn is_locked(&self) -> bool {
        self.state().locked_at.is_some()
    }

    fn is_in_use(&self) -> bool {
        self.state().in_use
    }

    fn lock(&self) {
        self.state().locked_at.get_or_insert_with(Utc::now);
    }

    fn record_entry(&self) {
        self.state().last_entry_at = Some(Utc::now());
    }
}

/// In-memory account repository keyed by username.
#[derive(Default)]
pub struct MemoryAccountRepository {
    accounts: DashMap<String, Arc<MemoryAccount>>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account, hashing the given password.
    ///
    /// If the username is already taken the existing account is returned
    /// unchanged; the password is not updated.
    pub fn create_account(&self, username: &str, password: &str) -> Arc<MemoryAccount> {
        let account = self
            .accounts
            .entry(username.to_string())
            .or_insert_with(|| Arc::new(MemoryAccount::new(password)))
            .clone();
        tracing::debug!(username = %username, "account available in memory store");
        account
    }

    /// Look up the concrete stored account, lifecycle operations included.
    pub fn get(&self, username: &str) -> Option<Arc<MemoryAccount>> {
        self.accounts.get(username).map(|entry| entry.value().clone())
    }
}

impl AccountRepository for MemoryAccountRepository {
    fn find_by_username(&self, username: &str) -> Result<Arc<dyn Account>, Error> {
        match self.accounts.get(username) {
            Some(entry) => Ok(entry.value().clone()),
            None => Err(AuthError::UnknownUser(username.to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_find() {
        let repository = MemoryAccountRepository::new();
        repository.create_account("pepe", "1234");

        let account = repository.find_by_username("pepe").unwrap();
        assert!(account.check_password("1234"));
        assert!(!account.check_password("1235"));
        assert!(!account.is_locked());
        assert!(!account.is_in_use());
    }

    #[test]
    fn test_find_unknown_user_errors() {
        let repository = MemoryAccountRepository::new();

        let result = repository.find_by_username("juan");

        assert!(matches!(
            result,
            Err(Error::Auth(AuthError::UnknownUser(ref username))) if username == "juan"
        ));
    }

    #[test]
    fn test_create_existing_keeps_original_password() {
        let repository = MemoryAccountRepository::new();
        repository.create_account("pepe", "1234");
        repository.create_account("pepe", "9999");

        let account = repository.get("pepe").unwrap();
        assert!(account.check_password("1234"));
        assert!(!account.check_password("9999"));
    }

    #[test]
    fn test_lock_is_shared_across_handles() {
        let repository = MemoryAccountRepository::new();
        repository.create_account("pepe", "1234");

        let first = repository.find_by_username("pepe").unwrap();
        let second = repository.find_by_username("pepe").unwrap();

        first.lock();

        assert!(second.is_locked());
        assert!(repository.get("pepe").unwrap().locked_at().is_some());
    }

    #[test]
    fn test_lock_keeps_first_timestamp() {
        let repository = MemoryAccountRepository::new();
        let account = repository.create_account("pepe", "1234");

        account.lock();
        let locked_at = account.locked_at().unwrap();
        account.lock();

        assert_eq!(account.locked_at(), Some(locked_at));
    }

    #[test]
    fn test_unlock_clears_lockout() {
        let repository = MemoryAccountRepository::new();
        let account = repository.create_account("pepe", "1234");

        account.lock();
        assert!(account.is_locked());

        account.unlock();
        assert!(!account.is_locked());
        assert!(account.locked_at().is_none());
    }

    #[test]
    fn test_in_use_flag() {
        let repository = MemoryAccountRepository::new();
        let account = repository.create_account("pepe", "1234");

        assert!(!account.is_in_use());
        account.set_in_use(true);
        assert!(account.is_in_use());
        account.set_in_use(false);
        assert!(!account.is_in_use());
    }

    #[test]
    fn test_record_entry_sets_timestamp() {
        let repository = MemoryAccountRepository::new();
        let account = repository.create_account("pepe", "1234");

        assert!(account.last_entry_at().is_none());
        account.record_entry();
        assert!(account.last_entry_at().is_some());
    }
}
