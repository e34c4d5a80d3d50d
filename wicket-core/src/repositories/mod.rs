//! Repository traits for account resolution
//!
//! This module defines the repository interface the login decision uses to
//! resolve usernames to accounts. Backends implement it over whatever
//! store they like; the decision logic only sees the trait.

pub mod account;

pub use account::AccountRepository;
