//! Ingredient-overlap menu recommendations.
//!
//! Two-stage selection: rank the catalog by overlap with the customer's
//! interest set, and when nothing overlaps at all, fall back to a small
//! random sample so the customer still sees something.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::models::MenuItem;

/// Maximum number of recommendations the ranked path returns.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Bounds on the size of the random fallback sample.
const MIN_FALLBACK: usize = 1;
const MAX_FALLBACK: usize = 3;

/// Rank the pool by overlap with the interest set and keep the best matches.
///
/// Only items sharing at least one ingredient with the interests are
/// considered. The sort is stable, so items with equal overlap keep their
/// catalog order. Returns an empty vector when nothing overlaps; the caller
/// decides whether to fall back to [`fallback_sample`].
#[must_use]
pub fn ranked_matches(pool: &[&MenuItem], interests: &HashSet<&str>) -> Vec<MenuItem> {
    let mut matching: Vec<(&MenuItem, usize)> = pool
        .iter()
        .map(|item| (*item, item.overlap(interests)))
        .filter(|(_, overlap)| *overlap > 0)
        .collect();

    matching.sort_by(|a, b| b.1.cmp(&a.1));
    matching
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(item, _)| item.clone())
        .collect()
}

/// Uniform sample of the catalog, used when no item overlaps.
///
/// Draws `min(pool size, 1-3)` items without replacement.
pub fn fallback_sample<R: Rng + ?Sized>(pool: &[&MenuItem], rng: &mut R) -> Vec<MenuItem> {
    let amount = pool.len().min(rng.random_range(MIN_FALLBACK..=MAX_FALLBACK));
    pool.choose_multiple(rng, amount)
        .map(|item| (*item).clone())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crumbtrail_core::MenuItemId;

    use super::*;

    fn item(id: &str, ingredients: &[&str]) -> MenuItem {
        MenuItem::new(
            MenuItemId::new(id),
            id.to_uppercase(),
            ingredients.iter().map(|s| (*s).to_owned()).collect(),
            7.25,
        )
    }

    #[test]
    fn test_best_overlap_ranks_first() {
        let toast = item("toast", &["bread", "cheese"]);
        let omelette = item("omelette", &["eggs", "cheese", "tomato"]);
        let salad = item("salad", &["lettuce"]);
        let pool: Vec<&MenuItem> = vec![&toast, &omelette, &salad];

        let picks = ranked_matches(&pool, &["cheese", "tomato"].into_iter().collect());
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].item_id, MenuItemId::new("omelette"));
        assert_eq!(picks[1].item_id, MenuItemId::new("toast"));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let first = item("first", &["rice"]);
        let second = item("second", &["rice"]);
        let third = item("third", &["rice"]);
        let pool: Vec<&MenuItem> = vec![&first, &second, &third];

        let picks = ranked_matches(&pool, &["rice"].into_iter().collect());
        let ids: Vec<&str> = picks.iter().map(|i| i.item_id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_ranked_is_capped_at_three() {
        let items: Vec<MenuItem> = (0..5).map(|i| item(&format!("i{i}"), &["rice"])).collect();
        let pool: Vec<&MenuItem> = items.iter().collect();

        let picks = ranked_matches(&pool, &["rice"].into_iter().collect());
        assert_eq!(picks.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_no_overlap_means_empty_ranked() {
        let toast = item("toast", &["bread"]);
        let pool: Vec<&MenuItem> = vec![&toast];
        assert!(ranked_matches(&pool, &["rice"].into_iter().collect()).is_empty());
        assert!(ranked_matches(&pool, &HashSet::new()).is_empty());
    }

    #[test]
    fn test_fallback_bounds_and_membership() {
        let items: Vec<MenuItem> = (0..5).map(|i| item(&format!("i{i}"), &["rice"])).collect();
        let pool: Vec<&MenuItem> = items.iter().collect();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let picks = fallback_sample(&pool, &mut rng);
            assert!((MIN_FALLBACK..=MAX_FALLBACK).contains(&picks.len()));
            for pick in &picks {
                assert!(items.contains(pick));
            }
        }
    }

    #[test]
    fn test_fallback_never_oversamples_small_pools() {
        let only = item("only", &["rice"]);
        let pool: Vec<&MenuItem> = vec![&only];
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..10 {
            assert_eq!(fallback_sample(&pool, &mut rng).len(), 1);
        }
    }
}
