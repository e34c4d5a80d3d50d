//! The account capability as seen by the login decision
//!
//! An account owns its credential, its lock state, and its in-use flag.
//! The login decision never inspects any of that state directly; it only
//! asks the questions below and triggers the two side effects. How the
//! credential is stored or hashed, and who flips the in-use flag, are
//! backend concerns.

/// One user's credential and lock state.
///
/// State-changing operations take `&self`: accounts are handed out as
/// shared [`Arc<dyn Account>`](std::sync::Arc) handles by the repository,
/// and a lock applied through one handle must be visible through every
/// other. Implementations use interior mutability.
///
/// A locked account stays locked until some action outside the login
/// decision unlocks it.
pub trait Account: Send + Sync {
    /// Check a candidate password against the stored credential.
    fn check_password(&self, candidate: &str) -> bool;

    /// Whether the account is locked out.
    fn is_locked(&self) -> bool;

    /// Whether the account currently has an active session elsewhere.
    fn is_in_use(&self) -> bool;

    /// Lock the account. Called at most once per lockout transition.
    fn lock(&self);

    /// Record a successful entry into the account.
    fn record_entry(&self);
}
