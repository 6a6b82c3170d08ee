//! Crumbtrail loyalty engine.
//!
//! In-memory customer loyalty and receipt tracking: customer and store
//! registration, receipt ingestion through a simulated OCR step, and
//! ingredient-overlap menu recommendations.
//!
//! # Architecture
//!
//! The [`ReceiptSystem`] aggregate owns every cross-entity invariant:
//! customer and store identity uniqueness and receipt ownership. Callers
//! construct the entity records in [`models`], hand them to the aggregate,
//! and drive [`ReceiptSystem::process_receipt`] and
//! [`ReceiptSystem::get_recommendations`]. Everything random (ingredient
//! sampling, synthetic prices, fallback recommendations) takes the RNG as a
//! parameter, so tests run against a seeded generator.
//!
//! Whole-system state round-trips through [`snapshot`] as a tree of JSON
//! primitives.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod credential;
pub mod models;
pub mod ocr;
pub mod recommend;
pub mod snapshot;
pub mod system;

pub use models::{Customer, MenuItem, Receipt, Store};
pub use snapshot::SnapshotError;
pub use system::{LoyaltyService, ReceiptSystem, RegistrationError};
