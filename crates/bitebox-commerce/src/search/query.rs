//! Restaurant search query builder.

use crate::catalog::{Category, Restaurant};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Highest rated first.
    RatingDesc,
    /// Name A-Z.
    NameAsc,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::RatingDesc => "Highest Rated",
            SortOption::NameAsc => "Name: A-Z",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "featured" => Some(SortOption::Featured),
            "rating" | "rating_desc" => Some(SortOption::RatingDesc),
            "name" | "name_asc" => Some(SortOption::NameAsc),
            _ => None,
        }
    }

    /// Reorder results in place. Stable, so ties keep catalog order.
    pub fn apply(&self, restaurants: &mut [&Restaurant]) {
        match self {
            SortOption::Featured => {}
            SortOption::RatingDesc => restaurants.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
            SortOption::NameAsc => {
                restaurants.sort_by_key(|r| r.name.to_lowercase());
            }
        }
    }
}

/// A restaurant search: an optional category plus a name fragment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RestaurantQuery {
    /// Category to restrict to; `None` means all categories.
    pub category: Option<Category>,
    /// Case-insensitive substring of the restaurant name.
    pub text: String,
    /// Result ordering.
    pub sort: SortOption,
}

impl RestaurantQuery {
    /// Create a query that matches every restaurant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the name fragment.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Check a restaurant against the category and text filters.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        let category_ok = self
            .category
            .map(|c| c == restaurant.category)
            .unwrap_or(true);
        category_ok
            && restaurant
                .name
                .to_lowercase()
                .contains(&self.text.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let query = RestaurantQuery::new()
            .with_category(Category::Drinks)
            .with_text("bucks")
            .with_sort(SortOption::NameAsc);

        assert_eq!(query.category, Some(Category::Drinks));
        assert_eq!(query.text, "bucks");
        assert_eq!(query.sort, SortOption::NameAsc);
    }

    #[test]
    fn test_matches() {
        let starbucks = Restaurant::new("3", "Starbucks", Category::Drinks, 4.6);

        assert!(RestaurantQuery::new().matches(&starbucks));
        assert!(RestaurantQuery::new().with_text("  sTaR ").matches(&starbucks));
        assert!(!RestaurantQuery::new().with_text("king").matches(&starbucks));
        assert!(!RestaurantQuery::new()
            .with_category(Category::Pizza)
            .matches(&starbucks));
    }

    #[test]
    fn test_name_sort() {
        let a = Restaurant::new("1", "zaika", Category::FastFood, 4.0);
        let b = Restaurant::new("2", "Annapurna", Category::FastFood, 4.0);
        let mut found = vec![&a, &b];
        SortOption::NameAsc.apply(&mut found);
        assert_eq!(found[0].name, "Annapurna");
    }

    #[test]
    fn test_sort_from_str() {
        assert_eq!(SortOption::from_str("Rating"), Some(SortOption::RatingDesc));
        assert_eq!(SortOption::from_str("price"), None);
    }
}
