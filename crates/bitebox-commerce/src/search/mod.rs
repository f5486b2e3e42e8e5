//! Search module.
//!
//! Filters restaurants by category and name the way the home screen does.

mod query;

pub use query::{RestaurantQuery, SortOption};
