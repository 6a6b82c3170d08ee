//! Shared fixtures for Crumbtrail integration tests.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use chrono::{DateTime, TimeZone, Utc};

use crumbtrail_core::{CustomerId, Email, Location, MenuItemId, ReceiptId, StoreId};
use crumbtrail_loyalty::{Customer, MenuItem, Receipt, ReceiptSystem, Store};

/// Install a fmt subscriber so `RUST_LOG` controls test logging.
///
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A fixed, timezone-stable upload date.
pub fn upload_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 10, 30, 0).unwrap()
}

/// A customer with the given id/email and no credential.
pub fn customer(id: &str, email: &str, favorite_food: &[&str]) -> Customer {
    Customer::new(
        CustomerId::new(id),
        Email::parse(email).unwrap(),
        Utc.with_ymd_and_hms(1990, 4, 12, 0, 0, 0).unwrap(),
        "female",
        "12 Baker St",
        favorite_food.iter().map(|s| (*s).to_owned()).collect(),
    )
}

/// An unprocessed receipt with no image attached.
pub fn receipt(id: &str) -> Receipt {
    Receipt::new(ReceiptId::new(id), upload_date(), None, 1)
}

/// A menu item priced at a flat rate.
pub fn menu_item(id: &str, ingredients: &[&str]) -> MenuItem {
    MenuItem::new(
        MenuItemId::new(id),
        id.to_uppercase(),
        ingredients.iter().map(|s| (*s).to_owned()).collect(),
        8.75,
    )
}

/// A store at a fixed location with the given menu.
pub fn store(id: &str, menu_items: Vec<MenuItem>) -> Store {
    Store::new(
        StoreId::new(id),
        format!("Store {id}"),
        Location::new(40.7128, -74.006),
        menu_items,
    )
}

/// A system with two customers and one store, no receipts yet.
pub fn populated_system() -> ReceiptSystem {
    let mut system = ReceiptSystem::new();
    system
        .register_customer(customer("c1", "jo@example.com", &["cheese"]))
        .unwrap();
    system
        .register_customer(customer("c2", "sam@example.com", &[]))
        .unwrap();
    system
        .add_store(store(
            "s1",
            vec![
                menu_item("salad", &["lettuce", "tomato"]),
                menu_item("toastie", &["bread", "cheese"]),
                menu_item("curry", &["rice", "chicken"]),
            ],
        ))
        .unwrap();
    system
}
