//! # fms-core
//!
//! Contains all non-UI logic behind the transaction pages of the personal
//! finance dashboard.
//!
//! The crate is UI-agnostic and builds for both native targets and
//! `wasm32`, so the Yew frontend and native tests drive exactly the same code.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! Domain Layer (view state, filtering, formatting, forms)
//!     ↓
//! Storage Layer (transaction sources)    IO Layer (notification sinks)
//! ```
//!
//! - **domain**: working set, filter state, pagination, table rows, forms
//! - **storage**: where transactions come from (sample data, remote API)
//! - **io**: where user-visible notifications go
//! - **config**: tunables shared by every layer

pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::AppConfig;
pub use domain::*;
pub use error::{ConfigError, DataSourceError};
pub use io::*;
pub use storage::*;
