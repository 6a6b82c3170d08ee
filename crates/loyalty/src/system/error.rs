//! Registration errors.

use thiserror::Error;

use crumbtrail_core::{CustomerId, Email, StoreId};

/// A registration conflicted with an identity already in the system.
///
/// Uniqueness is checked before any mutation, so a failed registration
/// leaves the system exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A customer with this ID is already registered.
    #[error("customer {0} is already registered")]
    DuplicateCustomerId(CustomerId),

    /// A customer with this exact email is already registered.
    #[error("email {0} is already registered")]
    DuplicateEmail(Email),

    /// A store with this ID is already registered.
    #[error("store {0} is already registered")]
    DuplicateStoreId(StoreId),
}
