//! Planting log

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use shared::{validate_name, PlantingRecord, PlantingStatus};

use crate::error::{AppError, AppResult};

/// Input for recording a planting
#[derive(Debug, Clone)]
pub struct NewPlanting {
    pub variety: String,
    pub space_id: Option<Uuid>,
    pub quantity: u32,
    pub spacing: Option<String>,
    pub notes: Option<String>,
    /// Defaults to today when absent
    pub date: Option<NaiveDate>,
}

/// Record of what went into the ground, in entry order
#[derive(Debug, Default)]
pub struct PlantingLog {
    records: Vec<PlantingRecord>,
}

impl PlantingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a planting. New records start as `Planted`.
    pub fn record(&mut self, input: NewPlanting) -> AppResult<PlantingRecord> {
        validate_name(&input.variety).map_err(|msg| AppError::validation("variety", msg))?;
        let record = PlantingRecord {
            id: Uuid::new_v4(),
            date: input.date.unwrap_or_else(|| Utc::now().date_naive()),
            variety: input.variety,
            space_id: input.space_id,
            quantity: input.quantity,
            spacing: input.spacing,
            notes: input.notes,
            status: PlantingStatus::Planted,
        };
        tracing::info!(variety = %record.variety, quantity = record.quantity, "logged planting");
        self.records.push(record.clone());
        Ok(record)
    }

    pub fn list(&self) -> &[PlantingRecord] {
        &self.records
    }

    /// Move a planting along its lifecycle
    pub fn update_status(&mut self, id: Uuid, status: PlantingStatus) -> AppResult<PlantingRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| AppError::NotFound("Planting".to_string()))?;
        record.status = status;
        Ok(record.clone())
    }

    /// Total plants put in the ground
    pub fn total_plants(&self) -> u64 {
        self.records
            .iter()
            .map(|record| u64::from(record.quantity))
            .sum()
    }
}
