//! Crumbtrail Core - Shared types library.
//!
//! This crate provides common types used across all Crumbtrail components:
//! - `loyalty` - The in-memory loyalty and receipt-tracking engine
//! - `integration-tests` - Cross-crate end-to-end tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage, no clocks.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and locations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
