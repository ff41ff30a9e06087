//! Planting log models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How far along a planting is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlantingStatus {
    Planted,
    Germinated,
    Established,
}

impl std::fmt::Display for PlantingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlantingStatus::Planted => write!(f, "planted"),
            PlantingStatus::Germinated => write!(f, "germinated"),
            PlantingStatus::Established => write!(f, "established"),
        }
    }
}

/// A recorded planting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub variety: String,
    pub space_id: Option<Uuid>,
    pub quantity: u32,
    /// Free text, e.g. "6 inches"
    pub spacing: Option<String>,
    pub notes: Option<String>,
    pub status: PlantingStatus,
}
