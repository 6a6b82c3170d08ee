//! Customer domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crumbtrail_core::{CustomerId, Email};

use crate::credential;

/// A registered (or to-be-registered) customer.
///
/// `password_hash` and `salt` are either both present or both absent; the
/// credential methods below are the only writers and always set the pair
/// together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID.
    pub customer_id: CustomerId,
    /// Customer's email address. Unique within a system.
    pub email: Email,
    /// Date of birth.
    pub birthdate: DateTime<Utc>,
    /// Self-reported gender.
    pub gender: String,
    /// Postal address.
    pub address: String,
    /// Declared favorite ingredients, in declaration order.
    pub favorite_food: Vec<String>,
    /// Hex-encoded salted password digest, if a password has been set.
    pub password_hash: Option<String>,
    /// Hex-encoded salt paired with `password_hash`.
    pub salt: Option<String>,
    /// When the customer last authenticated successfully.
    pub last_login: Option<DateTime<Utc>>,
}

impl Customer {
    /// Create a customer with no credential and no login history.
    pub fn new(
        customer_id: CustomerId,
        email: Email,
        birthdate: DateTime<Utc>,
        gender: impl Into<String>,
        address: impl Into<String>,
        favorite_food: Vec<String>,
    ) -> Self {
        Self {
            customer_id,
            email,
            birthdate,
            gender: gender.into(),
            address: address.into(),
            favorite_food,
            password_hash: None,
            salt: None,
            last_login: None,
        }
    }

    /// Set a new password, generating a fresh salt.
    ///
    /// Unconditionally overwrites any previous hash and salt.
    pub fn set_password(&mut self, password: &str) {
        let salt = credential::generate_salt();
        self.password_hash = Some(credential::hash_password(password, &salt));
        self.salt = Some(salt);
    }

    /// Check a password attempt against the stored credential.
    ///
    /// Always false when no credential is set.
    #[must_use]
    pub fn verify_password(&self, password: &str) -> bool {
        match (&self.password_hash, &self.salt) {
            (Some(hash), Some(salt)) => *hash == credential::hash_password(password, salt),
            _ => false,
        }
    }

    /// Record the current time as the last successful login.
    pub fn record_login(&mut self) {
        self.last_login = Some(Utc::now());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn customer() -> Customer {
        Customer::new(
            CustomerId::new("cust-1"),
            Email::parse("jo@example.com").unwrap(),
            Utc.with_ymd_and_hms(1990, 4, 12, 0, 0, 0).unwrap(),
            "female",
            "12 Baker St",
            vec!["cheese".to_owned()],
        )
    }

    #[test]
    fn test_new_customer_has_no_credential() {
        let customer = customer();
        assert!(customer.password_hash.is_none());
        assert!(customer.salt.is_none());
        assert!(customer.last_login.is_none());
    }

    #[test]
    fn test_set_then_verify_password() {
        let mut customer = customer();
        customer.set_password("p1");
        assert!(customer.verify_password("p1"));
        assert!(!customer.verify_password("wrong"));
    }

    #[test]
    fn test_verify_without_credential_is_false() {
        assert!(!customer().verify_password("anything"));
    }

    #[test]
    fn test_set_password_rotates_salt() {
        let mut customer = customer();
        customer.set_password("p1");
        let first_salt = customer.salt.clone().unwrap();
        let first_hash = customer.password_hash.clone().unwrap();

        customer.set_password("p1");
        assert_ne!(customer.salt.unwrap(), first_salt);
        assert_ne!(customer.password_hash.unwrap(), first_hash);
    }

    #[test]
    fn test_record_login() {
        let mut customer = customer();
        customer.record_login();
        assert!(customer.last_login.is_some());
    }

    #[test]
    fn test_wire_format() {
        let customer = customer();
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["customer_id"], "cust-1");
        assert_eq!(json["email"], "jo@example.com");
        assert_eq!(json["favorite_food"], serde_json::json!(["cheese"]));
        assert!(json["password_hash"].is_null());
        assert!(json["salt"].is_null());
        assert!(json["last_login"].is_null());
        assert!(json["birthdate"].is_string());
    }

    #[test]
    fn test_roundtrip() {
        let mut customer = customer();
        customer.set_password("p1");
        let json = serde_json::to_string(&customer).unwrap();
        let parsed: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, customer);
    }
}
