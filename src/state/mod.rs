//! Application state types.
//!
//! Split into small files: product/criteria/sort types, the modal enum, and
//! the central [`AppState`] container. Public API stays flat under
//! `crate::state::*` via re-exports.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{Criteria, Focus, Product, SortDir, SortField, ViewMode};
