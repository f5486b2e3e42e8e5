//! The restaurant catalog.

use crate::catalog::{Category, MenuItem, Restaurant};
use crate::error::CommerceError;
use crate::ids::RestaurantId;
use crate::search::RestaurantQuery;
use serde::{Deserialize, Serialize};

/// All restaurants available for ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// Create a catalog from a list of restaurants.
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    /// The built-in sample catalog.
    pub fn demo() -> Self {
        Self::new(vec![
            Restaurant::new("1", "Burger King", Category::FastFood, 4.5)
                .with_item("Whopper", 199)
                .with_item("Cheese Burger", 149)
                .with_item("Crispy Chicken Burger", 179)
                .with_item("French Fries", 99),
            Restaurant::new("2", "Sweet Tooth Desserts", Category::Desserts, 4.7)
                .with_item("Chocolate Lava Cake", 249)
                .with_item("Blueberry Cheesecake", 299)
                .with_item("Tiramisu", 350)
                .with_item("Macarons (6 pcs)", 200),
            Restaurant::new("3", "Starbucks", Category::Drinks, 4.6)
                .with_item("Cappuccino", 199)
                .with_item("Caramel Macchiato", 249)
                .with_item("Iced Latte", 179)
                .with_item("Mocha Frappe", 229),
            Restaurant::new("4", "Pizza Hut", Category::Pizza, 4.8)
                .with_item("Margherita Pizza", 299)
                .with_item("Pepperoni Pizza", 349)
                .with_item("BBQ Chicken Pizza", 399)
                .with_item("Veggie Supreme", 329),
        ])
    }

    /// Parse a catalog from JSON.
    pub fn from_json(source: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parse a catalog from TOML (`[[restaurants]]` tables).
    pub fn from_toml(source: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(source)?)
    }

    /// Look up a restaurant by id.
    pub fn get(&self, id: &RestaurantId) -> Result<&Restaurant, CommerceError> {
        self.restaurants
            .iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| CommerceError::RestaurantNotFound(id.to_string()))
    }

    /// Look up a dish on a restaurant's menu by name.
    pub fn find_menu_item(
        &self,
        restaurant_id: &RestaurantId,
        name: &str,
    ) -> Result<(&Restaurant, &MenuItem), CommerceError> {
        let restaurant = self.get(restaurant_id)?;
        let item = restaurant
            .menu_item(name)
            .ok_or_else(|| CommerceError::MenuItemNotFound {
                restaurant: restaurant.name.clone(),
                item: name.to_string(),
            })?;
        Ok((restaurant, item))
    }

    /// Restaurants matching a query, in the order the query asks for.
    pub fn search(&self, query: &RestaurantQuery) -> Vec<&Restaurant> {
        let mut found: Vec<&Restaurant> =
            self.restaurants.iter().filter(|r| query.matches(r)).collect();
        query.sort.apply(&mut found);
        found
    }

    /// Number of restaurants.
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Check if the catalog has no restaurants.
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::search::SortOption;

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.restaurants.iter().all(|r| r.menu.len() == 4));
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.get(&RestaurantId::new("3")).unwrap().name, "Starbucks");
        assert!(matches!(
            catalog.get(&RestaurantId::new("99")),
            Err(CommerceError::RestaurantNotFound(_))
        ));
    }

    #[test]
    fn test_find_menu_item() {
        let catalog = Catalog::demo();
        let (restaurant, item) = catalog
            .find_menu_item(&RestaurantId::new("4"), "pepperoni pizza")
            .unwrap();
        assert_eq!(restaurant.name, "Pizza Hut");
        assert_eq!(item.price, Money::new(349));

        let missing = catalog.find_menu_item(&RestaurantId::new("4"), "Whopper");
        assert!(matches!(missing, Err(CommerceError::MenuItemNotFound { .. })));
    }

    #[test]
    fn test_search_defaults_to_everything() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.search(&RestaurantQuery::new()).len(), 4);
    }

    #[test]
    fn test_search_by_category_and_text() {
        let catalog = Catalog::demo();

        let pizza = catalog.search(&RestaurantQuery::new().with_category(Category::Pizza));
        assert_eq!(pizza.len(), 1);
        assert_eq!(pizza[0].name, "Pizza Hut");

        let text = catalog.search(&RestaurantQuery::new().with_text("STAR"));
        assert_eq!(text.len(), 1);

        let none = catalog.search(
            &RestaurantQuery::new()
                .with_category(Category::Desserts)
                .with_text("burger"),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_search_sorted_by_rating() {
        let catalog = Catalog::demo();
        let found = catalog.search(&RestaurantQuery::new().with_sort(SortOption::RatingDesc));
        let names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Pizza Hut", "Sweet Tooth Desserts", "Starbucks", "Burger King"]
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "restaurants": [{
                "id": "7",
                "name": "Chaat Corner",
                "category": "fast_food",
                "rating": 4.2,
                "menu": [
                    { "name": "Pani Puri", "price": 60 },
                    { "id": "cc-2", "name": "Bhel Puri", "price": 70 }
                ]
            }]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        let restaurant = catalog.get(&RestaurantId::new("7")).unwrap();
        assert_eq!(restaurant.menu[0].cart_id(restaurant).as_str(), "7-Pani Puri");
        assert_eq!(restaurant.menu[1].cart_id(restaurant).as_str(), "cc-2");
    }

    #[test]
    fn test_from_toml() {
        let source = r#"
            [[restaurants]]
            id = "9"
            name = "Dosa Plaza"
            category = "fast_food"
            rating = 4.1

            [[restaurants.menu]]
            name = "Masala Dosa"
            price = 120
        "#;

        let catalog = Catalog::from_toml(source).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.restaurants[0].menu[0].price, Money::new(120));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CommerceError::SerializationError(_))
        ));
    }
}
