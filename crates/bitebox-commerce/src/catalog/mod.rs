//! Restaurant catalog module.
//!
//! Contains restaurants, their menus, and the mapping from a menu item to a
//! cart candidate.

mod catalog;
mod category;
mod restaurant;

pub use catalog::Catalog;
pub use category::Category;
pub use restaurant::{MenuItem, Restaurant};
