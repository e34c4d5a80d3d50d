//! Core functionality for the wicket project
//!
//! This crate contains the login gating logic for wicket: credential
//! validation against an account store, consecutive-failure tracking, and
//! automatic account lockout once the failure threshold is reached.
//!
//! The crate is organized around two capability traits and one service:
//!
//! - [`Account`] — one user's credential and lock state, as seen by the
//!   login decision. Backends implement it; see the `wicket-storage-memory`
//!   crate for an in-memory implementation.
//! - [`AccountRepository`] — resolves a username to an [`Account`].
//! - [`LoginManager`] — orchestrates lookup, delegates the credential and
//!   lock checks to the account, and maintains the shared failure counter
//!   that drives lockout.
//!
//! Everything here is synchronous and single-threaded. One `LoginManager`
//! serves one login-handling context; its failure counter carries no
//! synchronization of its own.

pub mod account;
pub mod error;
pub mod repositories;
pub mod services;

pub use account::Account;
pub use error::Error;
pub use repositories::AccountRepository;
pub use services::{LockoutPolicy, LoginManager};
