//! Store and menu-item domain types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crumbtrail_core::{Location, MenuItemId, StoreId};

/// A dish on a store's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique menu-item ID.
    pub item_id: MenuItemId,
    /// Display name of the dish.
    pub name: String,
    /// Ingredients the dish is made of. Set-like; order preserved.
    pub ingredients: Vec<String>,
    /// Price in dollars. Non-negative.
    pub price: f64,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(
        item_id: MenuItemId,
        name: impl Into<String>,
        ingredients: Vec<String>,
        price: f64,
    ) -> Self {
        Self {
            item_id,
            name: name.into(),
            ingredients,
            price,
        }
    }

    /// Whether any of the given ingredients appears in this dish.
    #[must_use]
    pub fn matches(&self, ingredients: &[String]) -> bool {
        ingredients
            .iter()
            .any(|ingredient| self.ingredients.contains(ingredient))
    }

    /// How many of the given interests appear in this dish.
    #[must_use]
    pub fn overlap(&self, interests: &HashSet<&str>) -> usize {
        interests
            .iter()
            .filter(|interest| {
                self.ingredients
                    .iter()
                    .any(|own| own.as_str() == **interest)
            })
            .count()
    }
}

/// A physical store and the menu it exclusively owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Unique store ID.
    pub store_id: StoreId,
    /// Display name of the store.
    pub name: String,
    /// Where the store is.
    pub location: Location,
    /// The store's menu, in menu order.
    pub menu_items: Vec<MenuItem>,
}

impl Store {
    /// Create a new store.
    pub fn new(
        store_id: StoreId,
        name: impl Into<String>,
        location: Location,
        menu_items: Vec<MenuItem>,
    ) -> Self {
        Self {
            store_id,
            name: name.into(),
            location,
            menu_items,
        }
    }

    /// Canonical web link for this store.
    #[must_use]
    pub fn link(&self) -> String {
        format!("https://www.example.com/store/{}", self.store_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: &str, ingredients: &[&str]) -> MenuItem {
        MenuItem::new(
            MenuItemId::new(id),
            id.to_uppercase(),
            ingredients.iter().map(|s| (*s).to_owned()).collect(),
            9.50,
        )
    }

    #[test]
    fn test_matches_any_ingredient() {
        let burger = item("burger", &["beef", "bread", "cheese"]);
        assert!(burger.matches(&["cheese".to_owned()]));
        assert!(burger.matches(&["rice".to_owned(), "beef".to_owned()]));
        assert!(!burger.matches(&["rice".to_owned()]));
        assert!(!burger.matches(&[]));
    }

    #[test]
    fn test_overlap_counts_interests() {
        let burger = item("burger", &["beef", "bread", "cheese"]);
        let interests: HashSet<&str> = ["beef", "cheese", "pasta"].into_iter().collect();
        assert_eq!(burger.overlap(&interests), 2);
        assert_eq!(burger.overlap(&HashSet::new()), 0);
    }

    #[test]
    fn test_store_link() {
        let store = Store::new(
            StoreId::new("store-3"),
            "Corner Deli",
            Location::new(0.0, 0.0),
            Vec::new(),
        );
        assert_eq!(store.link(), "https://www.example.com/store/store-3");
    }

    #[test]
    fn test_wire_format() {
        let store = Store::new(
            StoreId::new("store-3"),
            "Corner Deli",
            Location::new(40.0, -74.0),
            vec![item("burger", &["beef", "bread"])],
        );
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["location"], serde_json::json!([40.0, -74.0]));
        assert_eq!(json["menu_items"][0]["item_id"], "burger");
        assert!(json["menu_items"][0]["price"].is_number());
    }
}
