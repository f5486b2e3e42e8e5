//! Restaurant categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cuisine category used to group restaurants on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FastFood,
    Pizza,
    Desserts,
    Drinks,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::FastFood,
        Category::Pizza,
        Category::Desserts,
        Category::Drinks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FastFood => "fast_food",
            Category::Pizza => "pizza",
            Category::Desserts => "desserts",
            Category::Drinks => "drinks",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::FastFood => "Fast Food",
            Category::Pizza => "Pizza",
            Category::Desserts => "Desserts",
            Category::Drinks => "Drinks",
        }
    }

    /// Parse either the snake_case key or the display name, ignoring case.
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "fast_food" => Some(Category::FastFood),
            "pizza" => Some(Category::Pizza),
            "desserts" => Some(Category::Desserts),
            "drinks" => Some(Category::Drinks),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Category::from_str("Fast Food"), Some(Category::FastFood));
        assert_eq!(Category::from_str("fast-food"), Some(Category::FastFood));
        assert_eq!(Category::from_str("DRINKS"), Some(Category::Drinks));
        assert_eq!(Category::from_str("All"), None);
    }

    #[test]
    fn test_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
            assert_eq!(Category::from_str(category.display_name()), Some(category));
        }
    }
}
