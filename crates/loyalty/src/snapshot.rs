//! Whole-system snapshots.
//!
//! A snapshot is a tree of JSON primitives (mappings, sequences, strings,
//! numbers): customers and stores as arrays in registration order, and the
//! receipt index keyed by customer ID. Loading parses the whole tree
//! atomically: stores, customers, and receipts all materialize before a
//! system is returned, so a malformed snapshot never yields a partial one.

use serde_json::Value;
use thiserror::Error;

use crate::system::ReceiptSystem;

/// Failure to rebuild a system from snapshot data.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot structure or one of its fields failed to parse:
    /// a missing required field, a bad timestamp, or bad base64.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ReceiptSystem {
    /// Snapshot the whole system as a tree of JSON primitives.
    #[must_use]
    pub fn to_snapshot(&self) -> Value {
        // Derived serialization of this shape (string keys, no non-finite
        // floats introduced by the engine) has no failure paths.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Rebuild a system from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Malformed`] when any field fails to parse;
    /// the whole load is aborted and no partial system is returned.
    pub fn from_snapshot(snapshot: Value) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_value(snapshot)?)
    }

    /// Snapshot the whole system as a JSON string.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.to_snapshot().to_string()
    }

    /// Rebuild a system from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Malformed`] when the string is not valid
    /// JSON or any field fails to parse.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
