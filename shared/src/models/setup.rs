//! Garden setup models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Growing styles offered during setup
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GardenType {
    RaisedBeds,
    Container,
    Rows,
    /// Setup not finished yet
    #[default]
    Unset,
}

impl std::fmt::Display for GardenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GardenType::RaisedBeds => write!(f, "Raised Beds"),
            GardenType::Container => write!(f, "Container Growing"),
            GardenType::Rows => write!(f, "Row Planting"),
            GardenType::Unset => write!(f, "Unset"),
        }
    }
}

/// Container shapes supported by the capacity math
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContainerShape {
    Round,
    Rectangular,
    Square,
}

/// Container details collected during setup, all measurements in inches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContainerSpecs {
    pub shape: ContainerShape,
    pub diameter_in: Option<Decimal>,
    pub length_in: Option<Decimal>,
    pub width_in: Option<Decimal>,
    pub height_in: Option<Decimal>,
}

impl Default for ContainerSpecs {
    /// The 18 x 12 x 10 in rectangular planter assumed when setup never
    /// recorded container details.
    fn default() -> Self {
        Self {
            shape: ContainerShape::Rectangular,
            diameter_in: None,
            length_in: Some(Decimal::from(18)),
            width_in: Some(Decimal::from(12)),
            height_in: Some(Decimal::from(10)),
        }
    }
}

/// The user's garden configuration, created empty at startup and replaced
/// wholesale by the setup flow
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GardenSetup {
    pub garden_type: GardenType,
    /// Free-text season revenue goal; parsed leniently at point of use
    pub season_goal: String,
    /// Selected flower types, in selection order
    pub flower_types: Vec<String>,
    pub container_specs: Option<ContainerSpecs>,
}
