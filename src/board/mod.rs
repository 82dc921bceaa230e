//! Board core: post collection plus the derived list view
//!
//! `store` owns the in-memory posts and their mutations; `view` turns the
//! collection and the current filter state into row and page-strip
//! descriptors. Nothing in here touches a terminal.

pub mod errors;
pub mod store;
pub mod view;

pub use errors::BoardError;
pub use store::BoardStore;
pub use view::{derive, ListQuery, PageControl, PageView, RowView, DEFAULT_PAGE_SIZE};
