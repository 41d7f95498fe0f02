//! # Domain Module
//!
//! Business logic of the transaction pages, independent of any UI framework
//! or data source.
//!
//! ## Module Organization
//!
//! - **transaction_filter**: filter state, search/category predicates, page windowing
//! - **transaction_view**: working set, load lifecycle, delete/add/update
//! - **transaction_table**: row formatting and pagination caption
//! - **transaction_form**: add/edit form validation and amount sign handling
//! - **navigation**: dashboard routes and sidebar entries
//!
//! ## Rules
//!
//! - A negative amount is an expense, anything else is income
//! - The "income" category is reserved and styled differently
//! - Visible rows are always derived, never stored

pub mod navigation;
pub mod transaction_filter;
pub mod transaction_form;
pub mod transaction_table;
pub mod transaction_view;

pub use navigation::*;
pub use transaction_filter::*;
pub use transaction_form::*;
pub use transaction_table::*;
pub use transaction_view::*;
