//! Core types for Crumbtrail.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod location;

pub use email::{Email, EmailError};
pub use id::*;
pub use location::Location;
