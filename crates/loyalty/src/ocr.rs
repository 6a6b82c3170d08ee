//! Simulated OCR and ingredient extraction.
//!
//! Stands in for a real image/NLP pipeline: ingredients are drawn at random
//! from a fixed vocabulary and the receipt text is synthesized to match.
//! Every function takes its randomness as a parameter so scans are
//! reproducible under a seeded generator.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crumbtrail_core::ReceiptId;

/// Vocabulary the simulated extractor draws from.
pub const INGREDIENT_VOCABULARY: [&str; 10] = [
    "beef", "chicken", "lettuce", "tomato", "cheese", "bread", "milk", "eggs", "rice", "pasta",
];

/// Bounds on how many ingredients a single scan yields.
const MIN_INGREDIENTS: usize = 2;
const MAX_INGREDIENTS: usize = 5;

/// Synthetic line-item price range, in dollars.
const MIN_LINE_PRICE: f64 = 1.99;
const MAX_LINE_PRICE: f64 = 15.99;

/// Default shelf life, in days.
const DEFAULT_SHELF_LIFE_DAYS: i64 = 7;
/// Shelf life when perishable dairy ingredients were scanned, in days.
const PERISHABLE_SHELF_LIFE_DAYS: i64 = 3;

/// Ingredients that shorten a receipt's shelf life.
const PERISHABLES: [&str; 2] = ["milk", "eggs"];

/// Draw 2-5 distinct ingredients from the vocabulary, in drawn order.
pub fn extract_ingredients<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.random_range(MIN_INGREDIENTS..=MAX_INGREDIENTS);
    rand::seq::index::sample(rng, INGREDIENT_VOCABULARY.len(), count)
        .into_iter()
        .map(|index| INGREDIENT_VOCABULARY[index].to_owned())
        .collect()
}

/// Render the synthetic receipt text for a scan.
///
/// One header line, a `YYYY-MM-DD` date line, an `Items:` line, then one
/// line per ingredient with a random price. Every line is
/// newline-terminated.
pub fn receipt_text<R: Rng + ?Sized>(
    receipt_id: &ReceiptId,
    upload_date: DateTime<Utc>,
    ingredients: &[String],
    rng: &mut R,
) -> String {
    let mut text = format!("Receipt #{receipt_id}\n");
    text.push_str(&format!("Date: {}\n", upload_date.format("%Y-%m-%d")));
    text.push_str("Items:\n");
    for ingredient in ingredients {
        let price = rng.random_range(MIN_LINE_PRICE..=MAX_LINE_PRICE);
        text.push_str(&format!("- {} ${price:.2}\n", capitalize(ingredient)));
    }
    text
}

/// Compute the expiry timestamp for a set of scanned ingredients.
///
/// Perishables shorten the window to three days; everything else keeps the
/// seven-day default. The offsets never combine.
#[must_use]
pub fn shelf_life(upload_date: DateTime<Utc>, ingredients: &[String]) -> DateTime<Utc> {
    let days = if ingredients
        .iter()
        .any(|ingredient| PERISHABLES.contains(&ingredient.as_str()))
    {
        PERISHABLE_SHELF_LIFE_DAYS
    } else {
        DEFAULT_SHELF_LIFE_DAYS
    };
    upload_date + Duration::days(days)
}

/// Uppercase the first letter of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
