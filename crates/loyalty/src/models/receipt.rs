//! Receipt domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crumbtrail_core::ReceiptId;

/// An uploaded receipt.
///
/// Created with placeholder text/ingredients/shelf life; those fields are
/// populated by [`crate::system::ReceiptSystem::process_receipt`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique receipt ID.
    pub receipt_id: ReceiptId,
    /// When the receipt was uploaded.
    pub upload_date: DateTime<Utc>,
    /// Raw scan bytes, if an image was attached. Base64 on the wire.
    #[serde(with = "image_data")]
    pub image_data: Option<Vec<u8>>,
    /// Extracted receipt text.
    pub ocr_text: String,
    /// Ingredients recognized on the receipt, in extraction order.
    pub ingredients: Vec<String>,
    /// Number of items purchased.
    pub quantity: u32,
    /// Computed expiry timestamp for the goods.
    pub shelf_life: DateTime<Utc>,
}

impl Receipt {
    /// Create an unprocessed receipt.
    ///
    /// `ocr_text` and `ingredients` start empty and `shelf_life` starts at
    /// the upload date until processing overwrites them.
    pub fn new(
        receipt_id: ReceiptId,
        upload_date: DateTime<Utc>,
        image_data: Option<Vec<u8>>,
        quantity: u32,
    ) -> Self {
        Self {
            receipt_id,
            upload_date,
            image_data,
            ocr_text: String::new(),
            ingredients: Vec::new(),
            quantity,
            shelf_life: upload_date,
        }
    }
}

/// Base64 wire representation for the optional scan bytes.
mod image_data {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
