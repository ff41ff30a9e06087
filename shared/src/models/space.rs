//! Planting space models

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::ContainerShape;
use crate::types::Footprint;

/// Cubic inches per US gallon
const GALLON_CUBIC_INCHES: u32 = 231;

/// Kind of planting space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpaceKind {
    Bed,
    Container,
}

impl std::fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpaceKind::Bed => write!(f, "Bed"),
            SpaceKind::Container => write!(f, "Container"),
        }
    }
}

/// Raised by [`Dimensions::from_raw`] when a form submission lacks a field
/// the declared shape requires. Callers render an incomplete-data state,
/// never a zero footprint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DimensionError {
    #[error("missing {field} for a {shape}")]
    Missing {
        shape: &'static str,
        field: &'static str,
    },
}

/// Physical dimensions of a planting space, tagged by shape so the required
/// fields are known at the type level. Beds measure in feet, containers in
/// inches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Dimensions {
    Bed {
        length_ft: Decimal,
        width_ft: Decimal,
    },
    RoundContainer {
        diameter_in: Decimal,
        height_in: Decimal,
    },
    RectContainer {
        length_in: Decimal,
        width_in: Decimal,
        height_in: Decimal,
    },
}

/// Dimension fields as they arrive from a form, all optional
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RawDimensions {
    pub length: Option<Decimal>,
    pub width: Option<Decimal>,
    pub diameter: Option<Decimal>,
    pub height: Option<Decimal>,
}

impl Dimensions {
    /// Convert form input into tagged dimensions for the given space kind.
    /// Containers without a declared shape are treated as rectangular.
    pub fn from_raw(
        kind: SpaceKind,
        shape: Option<ContainerShape>,
        raw: &RawDimensions,
    ) -> Result<Self, DimensionError> {
        let missing = |shape: &'static str, field: &'static str| DimensionError::Missing {
            shape,
            field,
        };
        match kind {
            SpaceKind::Bed => Ok(Dimensions::Bed {
                length_ft: raw.length.ok_or_else(|| missing("bed", "length"))?,
                width_ft: raw.width.ok_or_else(|| missing("bed", "width"))?,
            }),
            SpaceKind::Container => match shape.unwrap_or(ContainerShape::Rectangular) {
                ContainerShape::Round => Ok(Dimensions::RoundContainer {
                    diameter_in: raw
                        .diameter
                        .ok_or_else(|| missing("round container", "diameter"))?,
                    height_in: raw
                        .height
                        .ok_or_else(|| missing("round container", "height"))?,
                }),
                ContainerShape::Rectangular | ContainerShape::Square => {
                    Ok(Dimensions::RectContainer {
                        length_in: raw.length.ok_or_else(|| missing("container", "length"))?,
                        width_in: raw.width.ok_or_else(|| missing("container", "width"))?,
                        height_in: raw.height.ok_or_else(|| missing("container", "height"))?,
                    })
                }
            },
        }
    }

    /// Area (beds) or capacity (containers) of the space. Total on the
    /// tagged representation; every shape carries the fields it needs.
    pub fn footprint(&self) -> Footprint {
        match self {
            Dimensions::Bed {
                length_ft,
                width_ft,
            } => Footprint::AreaSqFt(*length_ft * *width_ft),
            Dimensions::RoundContainer {
                diameter_in,
                height_in,
            } => {
                let radius = *diameter_in / Decimal::TWO;
                Footprint::VolumeGal(round_gallons(Decimal::PI * radius * radius * *height_in))
            }
            Dimensions::RectContainer {
                length_in,
                width_in,
                height_in,
            } => Footprint::VolumeGal(round_gallons(*length_in * *width_in * *height_in)),
        }
    }
}

/// Capacity in whole gallons, rounded half away from zero for display
fn round_gallons(cubic_inches: Decimal) -> Decimal {
    (cubic_inches / Decimal::from(GALLON_CUBIC_INCHES))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// A flower planned into a space
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowerAssignment {
    pub name: String,
    pub variety: Option<String>,
    /// Display color as a hex string, e.g. "#FFD700"
    pub color: String,
    pub quantity: u32,
}

/// A bed or container the user is actively growing flowers in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingSpace {
    pub id: Uuid,
    pub name: String,
    pub kind: SpaceKind,
    /// Present only when `kind` is `Container`
    pub container_shape: Option<ContainerShape>,
    pub dimensions: Dimensions,
    pub flowers: Vec<FlowerAssignment>,
}

impl PlantingSpace {
    pub fn footprint(&self) -> Footprint {
        self.dimensions.footprint()
    }

    /// Total plants planned into this space
    pub fn plant_count(&self) -> u64 {
        self.flowers.iter().map(|f| u64::from(f.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_bed_footprint_is_area() {
        let dims = Dimensions::Bed {
            length_ft: dec("8"),
            width_ft: dec("4"),
        };
        assert_eq!(dims.footprint(), Footprint::AreaSqFt(dec("32")));
    }

    #[test]
    fn test_round_container_footprint() {
        // pi * 6^2 * 10 / 231 = 4.896..., rounds to 5 gallons
        let dims = Dimensions::RoundContainer {
            diameter_in: dec("12"),
            height_in: dec("10"),
        };
        assert_eq!(dims.footprint(), Footprint::VolumeGal(dec("5")));
    }

    #[test]
    fn test_rect_container_footprint() {
        // 18 * 12 * 10 / 231 = 9.35..., rounds to 9 gallons
        let dims = Dimensions::RectContainer {
            length_in: dec("18"),
            width_in: dec("12"),
            height_in: dec("10"),
        };
        assert_eq!(dims.footprint(), Footprint::VolumeGal(dec("9")));
    }

    #[test]
    fn test_from_raw_bed_missing_width() {
        let raw = RawDimensions {
            length: Some(dec("8")),
            ..RawDimensions::default()
        };
        let err = Dimensions::from_raw(SpaceKind::Bed, None, &raw).unwrap_err();
        assert_eq!(
            err,
            DimensionError::Missing {
                shape: "bed",
                field: "width"
            }
        );
    }

    #[test]
    fn test_from_raw_round_container_requires_diameter() {
        let raw = RawDimensions {
            height: Some(dec("10")),
            ..RawDimensions::default()
        };
        let err =
            Dimensions::from_raw(SpaceKind::Container, Some(ContainerShape::Round), &raw)
                .unwrap_err();
        assert_eq!(
            err,
            DimensionError::Missing {
                shape: "round container",
                field: "diameter"
            }
        );
    }

    #[test]
    fn test_from_raw_container_defaults_to_rectangular() {
        let raw = RawDimensions {
            length: Some(dec("18")),
            width: Some(dec("12")),
            height: Some(dec("10")),
            ..RawDimensions::default()
        };
        let dims = Dimensions::from_raw(SpaceKind::Container, None, &raw).unwrap();
        assert!(matches!(dims, Dimensions::RectContainer { .. }));
    }

    #[test]
    fn test_plant_count_sums_assignments() {
        let space = PlantingSpace {
            id: Uuid::new_v4(),
            name: "Bed 1".to_string(),
            kind: SpaceKind::Bed,
            container_shape: None,
            dimensions: Dimensions::Bed {
                length_ft: dec("8"),
                width_ft: dec("4"),
            },
            flowers: vec![
                FlowerAssignment {
                    name: "Sunflowers".to_string(),
                    variety: None,
                    color: "#FFD700".to_string(),
                    quantity: 12,
                },
                FlowerAssignment {
                    name: "Zinnias".to_string(),
                    variety: None,
                    color: "#FF6B6B".to_string(),
                    quantity: 24,
                },
            ],
        };
        assert_eq!(space.plant_count(), 36);
    }
}
