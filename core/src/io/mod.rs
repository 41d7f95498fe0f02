//! # IO Module
//!
//! Outbound side effects of the domain layer. Today that is user-visible
//! notifications only; data comes in through [`crate::storage`].

pub mod notifications;

pub use notifications::*;
