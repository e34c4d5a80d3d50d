//! Services implementing the login decision logic
//!
//! Services coordinate between the repository layer and the caller. The
//! only service in this crate is [`LoginManager`], the login decision
//! procedure itself.

pub mod login;

pub use login::{LockoutPolicy, LoginManager};
