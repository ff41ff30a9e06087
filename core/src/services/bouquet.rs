//! Bouquet yield engine
//!
//! Pure functions over a recipe and the current stem availability; callers
//! recompute on every read from the harvest ledger snapshot.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use shared::BouquetRecipe;

/// Retail and wholesale value of an assembled yield
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldValue {
    pub retail: Decimal,
    pub wholesale: Decimal,
}

/// Maximum number of complete bouquets assemblable from the available
/// stems. The scarcest required variety decides; a variety with no stems
/// on hand zeroes the yield, and an empty recipe yields nothing rather
/// than an unbounded count.
pub fn max_bouquets(recipe: &BouquetRecipe, available: &BTreeMap<String, u32>) -> u32 {
    recipe
        .stem_counts
        .iter()
        .map(|(variety, &required)| {
            let on_hand = available.get(variety).copied().unwrap_or(0);
            if required == 0 {
                0
            } else {
                on_hand / required
            }
        })
        .min()
        .unwrap_or(0)
}

/// Value of `bouquet_count` bouquets at the recipe's prices
pub fn yield_value(recipe: &BouquetRecipe, bouquet_count: u32) -> YieldValue {
    let count = Decimal::from(bouquet_count);
    YieldValue {
        retail: count * recipe.retail_price,
        wholesale: count * recipe.wholesale_price,
    }
}
