//! Garden setup store, the single source of truth for the user's
//! configuration

use rust_decimal::Decimal;

use shared::{parse_amount, GardenSetup};

/// Holds the chosen garden type, flower selection and container details.
/// Owned by the composition root and handed to collaborators by reference,
/// so tests can construct isolated instances.
#[derive(Debug, Default)]
pub struct GardenSetupStore {
    setup: GardenSetup,
}

impl GardenSetupStore {
    /// Create a store with empty defaults, as at app start
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_setup(setup: GardenSetup) -> Self {
        Self { setup }
    }

    /// Snapshot of the current setup
    pub fn get(&self) -> GardenSetup {
        self.setup.clone()
    }

    /// Replace the whole setup; last write wins
    pub fn set(&mut self, setup: GardenSetup) {
        tracing::debug!(
            garden_type = %setup.garden_type,
            flowers = setup.flower_types.len(),
            "garden setup replaced"
        );
        self.setup = setup;
    }

    /// Season goal as an amount. The goal is stored as free text and may be
    /// unparsable; it then reads as zero, never an error.
    pub fn season_goal_amount(&self) -> Decimal {
        parse_amount(&self.setup.season_goal)
    }
}
