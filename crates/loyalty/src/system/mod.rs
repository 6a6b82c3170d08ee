//! The receipt-system aggregate.
//!
//! [`ReceiptSystem`] owns the customer list, the store list, and the
//! per-customer receipt index, and is the only place cross-entity
//! invariants are enforced: customer IDs are unique, emails are unique,
//! store IDs are unique, every registered customer has a (possibly empty)
//! receipt list, and a receipt lands in the index only when it was
//! processed with a recognized customer ID.

mod error;

pub use error::RegistrationError;

use std::collections::{HashMap, HashSet};

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crumbtrail_core::CustomerId;

use crate::models::{Customer, MenuItem, Receipt, Store};
use crate::{ocr, recommend};

/// The operation surface of the loyalty system.
///
/// [`ReceiptSystem`] is the in-memory implementation. Alternative storage
/// backends can implement the same contract so callers and tests are not
/// tied to one representation. RNG-taking operations accept
/// `&mut dyn RngCore` to keep the trait object-safe.
pub trait LoyaltyService {
    /// Register a new customer, enforcing ID and email uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] if the ID or exact email is taken.
    fn register_customer(&mut self, customer: Customer) -> Result<(), RegistrationError>;

    /// Add a new store, enforcing store-ID uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] if the store ID is taken.
    fn add_store(&mut self, store: Store) -> Result<(), RegistrationError>;

    /// Find a customer by email, ignoring case.
    fn get_customer_by_email(&self, email: &str) -> Option<&Customer>;

    /// Replace a stored customer record by ID. True when a record was found.
    fn update_customer(&mut self, customer: Customer) -> bool;

    /// Authenticate by email and password.
    ///
    /// Unknown email and wrong password both yield `None`.
    fn authenticate_customer(&mut self, email: &str, password: &str) -> Option<&Customer>;

    /// Scan a receipt and, when the customer ID is recognized, file it.
    fn process_receipt(
        &mut self,
        receipt: &mut Receipt,
        customer_id: Option<&CustomerId>,
        rng: &mut dyn RngCore,
    );

    /// Recommend menu items for a customer.
    fn get_recommendations(&self, customer: &Customer, rng: &mut dyn RngCore) -> Vec<MenuItem>;
}

/// In-memory aggregate for customers, stores, and receipts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptSystem {
    customers: Vec<Customer>,
    stores: Vec<Store>,
    receipts: HashMap<CustomerId, Vec<Receipt>>,
}

impl ReceiptSystem {
    /// Create an empty system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered customers, in registration order.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Registered stores, in registration order.
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Receipts filed for a customer, in processing order.
    ///
    /// Empty both for customers with no receipts and for unknown IDs.
    #[must_use]
    pub fn receipts_for(&self, customer_id: &CustomerId) -> &[Receipt] {
        self.receipts
            .get(customer_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Register a new customer.
    ///
    /// On success the customer is appended and gets an empty receipt list.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::DuplicateCustomerId`] when the ID is
    /// taken, or [`RegistrationError::DuplicateEmail`] when the exact email
    /// string is taken. Nothing is mutated on failure.
    pub fn register_customer(&mut self, customer: Customer) -> Result<(), RegistrationError> {
        if self
            .customers
            .iter()
            .any(|c| c.customer_id == customer.customer_id)
        {
            return Err(RegistrationError::DuplicateCustomerId(
                customer.customer_id,
            ));
        }

        // Exact comparison here, while lookups compare case-insensitively.
        // The asymmetry is long-standing observable behavior, kept on
        // purpose; see DESIGN.md.
        if self.customers.iter().any(|c| c.email == customer.email) {
            return Err(RegistrationError::DuplicateEmail(customer.email));
        }

        info!(customer_id = %customer.customer_id, "registered customer");
        self.receipts
            .insert(customer.customer_id.clone(), Vec::new());
        self.customers.push(customer);
        Ok(())
    }

    /// Add a new store.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::DuplicateStoreId`] when the ID is taken.
    /// Nothing is mutated on failure.
    pub fn add_store(&mut self, store: Store) -> Result<(), RegistrationError> {
        if self.stores.iter().any(|s| s.store_id == store.store_id) {
            return Err(RegistrationError::DuplicateStoreId(store.store_id));
        }

        info!(store_id = %store.store_id, menu_items = store.menu_items.len(), "added store");
        self.stores.push(store);
        Ok(())
    }

    /// Find a customer by email, ignoring case. First match wins.
    #[must_use]
    pub fn get_customer_by_email(&self, email: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.email.eq_ignore_case(email))
    }

    /// Replace a stored customer record by ID, preserving its position.
    ///
    /// Returns false (and changes nothing) when the ID is unknown. The
    /// receipt index is untouched either way.
    pub fn update_customer(&mut self, customer: Customer) -> bool {
        match self
            .customers
            .iter_mut()
            .find(|c| c.customer_id == customer.customer_id)
        {
            Some(stored) => {
                debug!(customer_id = %customer.customer_id, "updated customer");
                *stored = customer;
                true
            }
            None => false,
        }
    }

    /// Authenticate a customer by email and password.
    ///
    /// On success, records the login time and returns the customer.
    /// Unknown email and wrong password both yield `None`, so callers cannot
    /// tell whether the account exists.
    pub fn authenticate_customer(&mut self, email: &str, password: &str) -> Option<&Customer> {
        let index = self
            .customers
            .iter()
            .position(|c| c.email.eq_ignore_case(email))?;
        let customer = self.customers.get_mut(index)?;

        if !customer.verify_password(password) {
            return None;
        }

        customer.record_login();
        debug!(customer_id = %customer.customer_id, "customer authenticated");
        self.customers.get(index)
    }

    /// Scan a receipt: extract ingredients, synthesize its text, and compute
    /// its shelf life. The receipt is mutated in place.
    ///
    /// When `customer_id` names a registered customer, a copy of the
    /// processed receipt is filed under that customer. An unrecognized or
    /// absent ID processes the receipt without filing it, silently; the
    /// caller keeps the processed receipt either way.
    pub fn process_receipt<R: Rng + ?Sized>(
        &mut self,
        receipt: &mut Receipt,
        customer_id: Option<&CustomerId>,
        rng: &mut R,
    ) {
        receipt.ingredients = ocr::extract_ingredients(rng);
        receipt.ocr_text = ocr::receipt_text(
            &receipt.receipt_id,
            receipt.upload_date,
            &receipt.ingredients,
            rng,
        );
        receipt.shelf_life = ocr::shelf_life(receipt.upload_date, &receipt.ingredients);
        debug!(
            receipt_id = %receipt.receipt_id,
            ingredients = ?receipt.ingredients,
            "processed receipt"
        );

        if let Some(id) = customer_id {
            match self.receipts.get_mut(id) {
                Some(filed) => filed.push(receipt.clone()),
                None => {
                    debug!(customer_id = %id, "unknown customer, receipt not filed");
                }
            }
        }
    }

    /// Recommend up to three menu items for a customer.
    ///
    /// The candidate pool is every menu item across every store, in store
    /// order then menu order. Items are ranked by overlap with the
    /// customer's interest set: their declared favorites plus every
    /// ingredient on their filed receipts. When nothing overlaps, a random
    /// 1-3 item sample of the pool is returned instead; an empty pool
    /// yields an empty result.
    #[must_use]
    pub fn get_recommendations<R: Rng + ?Sized>(
        &self,
        customer: &Customer,
        rng: &mut R,
    ) -> Vec<MenuItem> {
        let pool: Vec<&MenuItem> = self
            .stores
            .iter()
            .flat_map(|store| store.menu_items.iter())
            .collect();
        if pool.is_empty() {
            return Vec::new();
        }

        let mut interests: HashSet<&str> =
            customer.favorite_food.iter().map(String::as_str).collect();
        if let Some(filed) = self.receipts.get(&customer.customer_id) {
            for receipt in filed {
                interests.extend(receipt.ingredients.iter().map(String::as_str));
            }
        }

        let ranked = recommend::ranked_matches(&pool, &interests);
        if ranked.is_empty() {
            debug!(
                customer_id = %customer.customer_id,
                pool = pool.len(),
                "no ingredient overlap, sampling fallback recommendations"
            );
            return recommend::fallback_sample(&pool, rng);
        }

        debug!(
            customer_id = %customer.customer_id,
            matches = ranked.len(),
            "ranked recommendations"
        );
        ranked
    }
}

impl LoyaltyService for ReceiptSystem {
    fn register_customer(&mut self, customer: Customer) -> Result<(), RegistrationError> {
        Self::register_customer(self, customer)
    }

    fn add_store(&mut self, store: Store) -> Result<(), RegistrationError> {
        Self::add_store(self, store)
    }

    fn get_customer_by_email(&self, email: &str) -> Option<&Customer> {
        Self::get_customer_by_email(self, email)
    }

    fn update_customer(&mut self, customer: Customer) -> bool {
        Self::update_customer(self, customer)
    }

    fn authenticate_customer(&mut self, email: &str, password: &str) -> Option<&Customer> {
        Self::authenticate_customer(self, email, password)
    }

    fn process_receipt(
        &mut self,
        receipt: &mut Receipt,
        customer_id: Option<&CustomerId>,
        rng: &mut dyn RngCore,
    ) {
        Self::process_receipt(self, receipt, customer_id, rng);
    }

    fn get_recommendations(&self, customer: &Customer, rng: &mut dyn RngCore) -> Vec<MenuItem> {
        Self::get_recommendations(self, customer, rng)
    }
}
