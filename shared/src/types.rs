//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Computed footprint of a planting space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Footprint {
    /// Growing area of a bed, in square feet
    AreaSqFt(Decimal),
    /// Capacity of a container, in US gallons (rounded for display)
    VolumeGal(Decimal),
}

impl std::fmt::Display for Footprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Footprint::AreaSqFt(v) => write!(f, "{} sq ft", v),
            Footprint::VolumeGal(v) => write!(f, "{} gal", v),
        }
    }
}

/// Whether the onboarding wizard still needs to be shown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WelcomeState {
    #[default]
    Unset,
    Completed,
    Skipped,
}

impl WelcomeState {
    /// Value written to browser-style key/value storage; `None` clears the key.
    pub fn storage_value(&self) -> Option<&'static str> {
        match self {
            WelcomeState::Unset => None,
            WelcomeState::Completed => Some("true"),
            WelcomeState::Skipped => Some("skipped"),
        }
    }

    /// Any stored value other than "skipped" counts as completed.
    pub fn from_storage_value(value: Option<&str>) -> Self {
        match value {
            None => WelcomeState::Unset,
            Some("skipped") => WelcomeState::Skipped,
            Some(_) => WelcomeState::Completed,
        }
    }
}

/// Flower varieties offered on the setup page
pub const POPULAR_FLOWERS: &[&str] = &[
    "Sunflowers",
    "Zinnias",
    "Cosmos",
    "Marigolds",
    "Celosia",
    "Dahlias",
    "Rudbeckia",
    "Delphiniums",
    "Larkspur",
    "Sweet Peas",
];

/// Display color for unknown varieties
pub const FALLBACK_FLOWER_COLOR: &str = "#DDA0DD";

/// Display color for a flower variety, by common name
pub fn flower_color(name: &str) -> &'static str {
    match name {
        "Sunflowers" => "#FFD700",
        "Zinnias" => "#FF6B6B",
        "Cosmos" => "#FF69B4",
        "Marigolds" => "#FFA500",
        "Celosia" => "#DC143C",
        "Dahlias" => "#C71585",
        "Rudbeckia" => "#DAA520",
        "Delphiniums" => "#4169E1",
        "Larkspur" => "#9370DB",
        "Sweet Peas" => "#FFB6C1",
        _ => FALLBACK_FLOWER_COLOR,
    }
}
