//! Footprint calculator property-based and unit tests
//!
//! Covers bed area, container capacity rounding, and the missing-dimension
//! error raised when form input is incomplete for its declared shape.

use proptest::prelude::*;
use rust_decimal::Decimal;

use shared::{
    ContainerShape, DimensionError, Dimensions, Footprint, RawDimensions, SpaceKind,
};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Dimension lengths from 0.1 to 100.0
fn length_strategy() -> impl Strategy<Value = Decimal> {
    (1..=1000i64).prop_map(|n| Decimal::new(n, 1))
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Bed area is exactly length x width
    #[test]
    fn test_bed_area_is_product(
        length in length_strategy(),
        width in length_strategy()
    ) {
        let dims = Dimensions::Bed { length_ft: length, width_ft: width };
        prop_assert_eq!(dims.footprint(), Footprint::AreaSqFt(length * width));
    }

    /// Container capacity is a whole, non-negative gallon figure
    #[test]
    fn test_container_capacity_is_whole_gallons(
        length in length_strategy(),
        width in length_strategy(),
        height in length_strategy()
    ) {
        let dims = Dimensions::RectContainer {
            length_in: length,
            width_in: width,
            height_in: height,
        };
        match dims.footprint() {
            Footprint::VolumeGal(gallons) => {
                prop_assert!(gallons >= Decimal::ZERO);
                prop_assert_eq!(gallons, gallons.trunc());
            }
            Footprint::AreaSqFt(_) => prop_assert!(false, "container must report volume"),
        }
    }

    /// A round container never reports more capacity than the rectangular
    /// box it fits inside
    #[test]
    fn test_round_capacity_bounded_by_bounding_box(
        diameter in length_strategy(),
        height in length_strategy()
    ) {
        let round = Dimensions::RoundContainer { diameter_in: diameter, height_in: height };
        let boxed = Dimensions::RectContainer {
            length_in: diameter,
            width_in: diameter,
            height_in: height,
        };
        let gallons = |footprint| match footprint {
            Footprint::VolumeGal(v) => v,
            Footprint::AreaSqFt(_) => unreachable!(),
        };
        prop_assert!(gallons(round.footprint()) <= gallons(boxed.footprint()));
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_demo_bed_area() {
    let dims = Dimensions::Bed {
        length_ft: dec("8"),
        width_ft: dec("4"),
    };
    assert_eq!(dims.footprint(), Footprint::AreaSqFt(dec("32")));
}

#[test]
fn test_round_pot_capacity_rounds_to_display_gallons() {
    // pi * (12/2)^2 * 10 / 231 = 4.896..., displayed as 5 gal
    let dims = Dimensions::RoundContainer {
        diameter_in: dec("12"),
        height_in: dec("10"),
    };
    assert_eq!(dims.footprint(), Footprint::VolumeGal(dec("5")));
}

#[test]
fn test_default_planter_capacity() {
    // 18 * 12 * 10 / 231 = 9.35..., displayed as 9 gal
    let dims = Dimensions::RectContainer {
        length_in: dec("18"),
        width_in: dec("12"),
        height_in: dec("10"),
    };
    assert_eq!(dims.footprint(), Footprint::VolumeGal(dec("9")));
}

#[test]
fn test_missing_dimension_is_an_error_not_a_zero() {
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
fn test_round_container_needs_diameter_and_height() {
    let raw = RawDimensions {
        diameter: Some(dec("12")),
        ..RawDimensions::default()
    };
    let err = Dimensions::from_raw(SpaceKind::Container, Some(ContainerShape::Round), &raw)
        .unwrap_err();
    assert_eq!(
        err,
        DimensionError::Missing {
            shape: "round container",
            field: "height"
        }
    );
}

#[test]
fn test_square_container_uses_rect_math() {
    let raw = RawDimensions {
        length: Some(dec("12")),
        width: Some(dec("12")),
        height: Some(dec("12")),
        ..RawDimensions::default()
    };
    let dims = Dimensions::from_raw(SpaceKind::Container, Some(ContainerShape::Square), &raw)
        .unwrap();
    // 12^3 / 231 = 7.48..., displayed as 7 gal
    assert_eq!(dims.footprint(), Footprint::VolumeGal(dec("7")));
}
