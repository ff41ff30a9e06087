//! Harvest models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Quality grade assigned to a harvest entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QualityGrade {
    Premium,
    Good,
    Fair,
}

impl QualityGrade {
    /// Currency value of a single stem at this grade
    pub fn stem_value(&self) -> Decimal {
        match self {
            QualityGrade::Premium => Decimal::new(15, 1),
            QualityGrade::Good => Decimal::ONE,
            QualityGrade::Fair => Decimal::new(7, 1),
        }
    }
}

impl std::fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityGrade::Premium => write!(f, "Premium"),
            QualityGrade::Good => write!(f, "Good"),
            QualityGrade::Fair => write!(f, "Fair"),
        }
    }
}

/// A cutting-session record, appended once and never edited
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Free-text identifier matching a flower name/variety string
    pub variety: String,
    pub stem_count: u32,
    pub quality: QualityGrade,
    /// Space the stems were cut from, when recorded
    pub space_id: Option<Uuid>,
    pub notes: Option<String>,
}

impl HarvestEntry {
    /// Estimated value of this entry alone. The grade multiplier applies
    /// per entry, never to aggregated counts.
    pub fn value(&self) -> Decimal {
        Decimal::from(self.stem_count) * self.quality.stem_value()
    }
}
