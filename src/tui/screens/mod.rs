//! Screen states for the commu TUI

pub mod boards;
pub mod detail;
pub mod list;

pub use boards::BoardsScreen;
pub use detail::DetailScreen;
pub use list::{ListMode, ListScreen};
