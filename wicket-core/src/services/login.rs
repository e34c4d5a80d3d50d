//! Login decision procedure with failure counting and account lockout.
//!
//! [`LoginManager`] validates credentials against an account store,
//! tracks consecutive failed attempts, and locks an account out once the
//! failures reach the configured threshold.
//!
//! # Example
//!
//! ```rust,ignore
//! use wicket_core::{LoginManager, LockoutPolicy};
//!
//! let mut manager = LoginManager::new(repository);
//!
//! match manager.login("pepe", "1234") {
//!     Ok(()) => { /* granted, or silently denied if locked */ }
//!     Err(e) => { /* unknown user or account in use */ }
//! }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Error, error::AuthError, repositories::AccountRepository};

/// Configuration for lockout behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockoutPolicy {
    /// Number of consecutive failed attempts that locks an account.
    /// Zero disables lockout.
    pub max_failed_attempts: u32,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_failed_attempts: 3,
        }
    }
}

/// The login decision procedure.
///
/// A `LoginManager` resolves usernames through its repository, delegates
/// the credential and lock checks to the resolved account, and maintains
/// one failure counter shared across every account it processes. The
/// counter resets to zero only when some account successfully
/// authenticates; switching usernames, lockouts, and unknown-user or
/// in-use errors leave it untouched.
///
/// One manager serves one login-handling context. [`login`] takes
/// `&mut self` and the counter carries no synchronization, so concurrent
/// use requires external coordination.
///
/// [`login`]: LoginManager::login
pub struct LoginManager<R: AccountRepository> {
    repository: Arc<R>,
    policy: LockoutPolicy,
    failed_attempts: u32,
}

impl<R: AccountRepository> LoginManager<R> {
    /// Create a new LoginManager with the default lockout policy.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_policy(repository, LockoutPolicy::default())
    }

    /// Create a new LoginManager with the given lockout policy.
    pub fn with_policy(repository: Arc<R>, policy: LockoutPolicy) -> Self {
        Self {
            repository,
            policy,
            failed_attempts: 0,
        }
    }

    /// Attempt to log a user in.
    ///
    /// Resolution failures propagate unchanged as
    /// [`AuthError::UnknownUser`], and an account with an active session
    /// elsewhere fails with [`AuthError::AccountInUse`]; neither touches
    /// the failure counter. A locked account is denied silently: the call
    /// returns `Ok(())` without consulting the credential. Otherwise the
    /// credential check decides: on success the account records the entry
    /// and the counter resets to zero, on failure the counter increments
    /// and, exactly when it reaches the threshold, the account is locked.
    ///
    /// A wrong password is never an error; it is observable only through
    /// [`failure_count`](LoginManager::failure_count) and the absence of
    /// a recorded entry.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), Error> {
        let account = self.repository.find_by_username(username)?;

        if account.is_locked() {
            tracing::warn!(username = %username, "access denied for locked account");
            return Ok(());
        }

        if account.is_in_use() {
            tracing::warn!(username = %username, "account is already in use");
            return Err(AuthError::AccountInUse.into());
        }

        if account.check_password(password) {
            account.record_entry();
            self.failed_attempts = 0;
            tracing::debug!(username = %username, "access granted");
            return Ok(());
        }

        self.failed_attempts += 1;
        tracing::warn!(
            username = %username,
            failed_attempts = self.failed_attempts,
            "access denied, wrong password"
        );

        if self.failed_attempts == self.policy.max_failed_attempts {
            account.lock();
            tracing::warn!(username = %username, "account locked after repeated failures");
        }

        Ok(())
    }

    /// The current value of the shared failure counter.
    pub fn failure_count(&self) -> u32 {
        self.failed_attempts
    }

    /// The lockout policy this manager applies.
    pub fn policy(&self) -> &LockoutPolicy {
        &self.policy
    }
}
