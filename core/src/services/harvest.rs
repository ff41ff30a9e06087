//! Harvest ledger and stem accounting

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::{validate_name, HarvestEntry, QualityGrade};

use crate::error::{AppError, AppResult};

/// Input for logging a harvest
#[derive(Debug, Clone)]
pub struct NewHarvest {
    pub variety: String,
    pub stem_count: u32,
    pub quality: QualityGrade,
    pub space_id: Option<Uuid>,
    pub notes: Option<String>,
    /// Defaults to today when absent
    pub date: Option<NaiveDate>,
}

/// Append-only list of harvest entries, in insertion order
#[derive(Debug, Default)]
pub struct HarvestLedger {
    entries: Vec<HarvestEntry>,
}

impl HarvestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a harvest. Ids are assigned here; the entry date is today
    /// unless the input carries one.
    pub fn append(&mut self, input: NewHarvest) -> AppResult<HarvestEntry> {
        validate_name(&input.variety).map_err(|msg| AppError::validation("variety", msg))?;

        let entry = HarvestEntry {
            id: Uuid::new_v4(),
            date: input.date.unwrap_or_else(|| Utc::now().date_naive()),
            variety: input.variety,
            stem_count: input.stem_count,
            quality: input.quality,
            space_id: input.space_id,
            notes: input.notes,
        };
        tracing::info!(
            variety = %entry.variety,
            stems = entry.stem_count,
            quality = %entry.quality,
            "logged harvest"
        );
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Entries in insertion order
    pub fn list(&self) -> &[HarvestEntry] {
        &self.entries
    }

    /// Stems available per variety across all entries, quality and space
    /// ignored. This is exactly the availability map the bouquet engine
    /// consumes.
    pub fn totals_by_variety(&self) -> BTreeMap<String, u32> {
        let mut totals: BTreeMap<String, u32> = BTreeMap::new();
        for entry in &self.entries {
            *totals.entry(entry.variety.clone()).or_insert(0) += entry.stem_count;
        }
        totals
    }

    /// All stems cut so far
    pub fn total_stems(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.stem_count))
            .sum()
    }

    /// Premium stems cut so far
    pub fn premium_stems(&self) -> u64 {
        self.entries
            .iter()
            .filter(|entry| entry.quality == QualityGrade::Premium)
            .map(|entry| u64::from(entry.stem_count))
            .sum()
    }

    /// Estimated value of everything in the ledger. The grade multiplier
    /// applies per entry and the results are summed; mixed grades within a
    /// variety never average out.
    pub fn estimated_value(&self) -> Decimal {
        self.entries.iter().map(HarvestEntry::value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn harvest(variety: &str, stems: u32, quality: QualityGrade) -> NewHarvest {
        NewHarvest {
            variety: variety.to_string(),
            stem_count: stems,
            quality,
            space_id: None,
            notes: None,
            date: None,
        }
    }

    #[test]
    fn test_append_assigns_id_and_today() {
        let mut ledger = HarvestLedger::new();
        let entry = ledger
            .append(harvest("Sunflower - Mammoth", 15, QualityGrade::Premium))
            .unwrap();
        assert_eq!(entry.date, Utc::now().date_naive());

        let other = ledger
            .append(harvest("Sunflower - Mammoth", 10, QualityGrade::Good))
            .unwrap();
        assert_ne!(entry.id, other.id);
    }

    #[test]
    fn test_append_rejects_blank_variety() {
        let mut ledger = HarvestLedger::new();
        let err = ledger.append(harvest("  ", 5, QualityGrade::Good)).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_totals_by_variety_ignore_quality_and_space() {
        let mut ledger = HarvestLedger::new();
        ledger
            .append(harvest("Zinnia - State Fair Mix", 20, QualityGrade::Good))
            .unwrap();
        ledger
            .append(harvest("Zinnia - State Fair Mix", 12, QualityGrade::Fair))
            .unwrap();
        ledger
            .append(harvest("Cosmos - Sensation Mix", 8, QualityGrade::Premium))
            .unwrap();

        let totals = ledger.totals_by_variety();
        assert_eq!(totals.get("Zinnia - State Fair Mix"), Some(&32));
        assert_eq!(totals.get("Cosmos - Sensation Mix"), Some(&8));
        assert_eq!(ledger.total_stems(), 40);
    }

    #[test]
    fn test_estimated_value_multiplies_per_entry() {
        let mut ledger = HarvestLedger::new();
        ledger
            .append(harvest("Sunflower - Mammoth", 5, QualityGrade::Good))
            .unwrap();
        ledger
            .append(harvest("Sunflower - Mammoth", 15, QualityGrade::Premium))
            .unwrap();
        // 5 * 1.0 + 15 * 1.5 = 27.5, not 20 * average(1.0, 1.5) = 25
        assert_eq!(ledger.estimated_value(), dec("27.5"));
    }

    #[test]
    fn test_empty_ledger_aggregates_to_zero() {
        let ledger = HarvestLedger::new();
        assert!(ledger.totals_by_variety().is_empty());
        assert_eq!(ledger.total_stems(), 0);
        assert_eq!(ledger.estimated_value(), Decimal::ZERO);
    }
}
