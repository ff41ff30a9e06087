//! Bouquet recipe models

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fixed combination of stem counts per variety that defines one sellable
/// bouquet. Reference data; not user-editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BouquetRecipe {
    pub id: Uuid,
    pub name: String,
    /// Required stems per variety; every count is positive
    pub stem_counts: BTreeMap<String, u32>,
    pub retail_price: Decimal,
    pub wholesale_price: Decimal,
}

/// The fixed recipes offered by the cutting page
pub fn standard_recipes() -> Vec<BouquetRecipe> {
    vec![
        BouquetRecipe {
            id: Uuid::from_u128(1),
            name: "Summer Sunshine".to_string(),
            stem_counts: BTreeMap::from([
                ("Sunflower - Mammoth".to_string(), 3),
                ("Zinnia - State Fair Mix".to_string(), 5),
                ("Cosmos - Sensation Mix".to_string(), 4),
            ]),
            retail_price: Decimal::from(15),
            wholesale_price: Decimal::from(8),
        },
        BouquetRecipe {
            id: Uuid::from_u128(2),
            name: "Garden Mix".to_string(),
            stem_counts: BTreeMap::from([
                ("Zinnia - State Fair Mix".to_string(), 8),
                ("Cosmos - Sensation Mix".to_string(), 6),
                ("Marigold - African".to_string(), 4),
            ]),
            retail_price: Decimal::from(12),
            wholesale_price: Decimal::from(6),
        },
    ]
}
