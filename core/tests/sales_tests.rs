//! Sales aggregation property-based and unit tests
//!
//! Covers the derived-total invariant, empty-list aggregation, venue
//! grouping determinism and tie-breaking.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use bloom_grow_core::services::sales::{
    self, average_sale, revenue_by_venue, top_venue, total_revenue, NewSale, NewSaleItem,
    SalesLedger,
};
use shared::{PaymentMethod, Sale, SaleItem, SaleItemKind, Venue};

// ============================================================================
// Property Test Strategies
// ============================================================================

fn venue_strategy() -> impl Strategy<Value = Venue> {
    prop::sample::select(Venue::ALL.to_vec())
}

/// Generate a sale line: quantity 1-20, unit price 0.00-50.00
fn item_strategy() -> impl Strategy<Value = NewSaleItem> {
    ("[A-Za-z ]{1,12}", 1..=20u32, 0..=5000i64).prop_map(|(description, quantity, cents)| {
        NewSaleItem {
            kind: SaleItemKind::Bouquet,
            description,
            quantity,
            unit_price: Decimal::new(cents, 2),
        }
    })
}

fn sale_strategy() -> impl Strategy<Value = NewSale> {
    (venue_strategy(), prop::collection::vec(item_strategy(), 1..=4)).prop_map(|(venue, items)| {
        NewSale {
            customer: "Property Customer".to_string(),
            venue,
            payment_method: PaymentMethod::Cash,
            items,
            date: Some(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()),
        }
    })
}

fn recorded_sales(inputs: Vec<NewSale>) -> Vec<Sale> {
    let mut ledger = SalesLedger::new();
    for input in inputs {
        ledger.record(input).unwrap();
    }
    ledger.list().to_vec()
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Every recorded sale's total equals the sum of quantity x unit price
    /// over its lines
    #[test]
    fn test_sale_total_matches_lines(inputs in prop::collection::vec(sale_strategy(), 1..=8)) {
        for sale in recorded_sales(inputs) {
            let expected: Decimal = sale
                .items
                .iter()
                .map(|item| Decimal::from(item.quantity) * item.unit_price)
                .sum();
            prop_assert_eq!(sale.total, expected);
        }
    }

    /// Venue revenues sum to total revenue
    #[test]
    fn test_venue_revenues_partition_total(inputs in prop::collection::vec(sale_strategy(), 0..=8)) {
        let sales = recorded_sales(inputs);
        let by_venue: Decimal = revenue_by_venue(&sales).values().copied().sum();
        prop_assert_eq!(by_venue, total_revenue(&sales));
    }

    /// Grouping the same immutable list twice yields identical mappings
    #[test]
    fn test_revenue_by_venue_deterministic(inputs in prop::collection::vec(sale_strategy(), 0..=8)) {
        let sales = recorded_sales(inputs);
        prop_assert_eq!(revenue_by_venue(&sales), revenue_by_venue(&sales));
    }

    /// The average never exceeds the largest sale nor undercuts the smallest
    #[test]
    fn test_average_bounded_by_extremes(inputs in prop::collection::vec(sale_strategy(), 1..=8)) {
        let sales = recorded_sales(inputs);
        let average = average_sale(&sales);
        let max = sales.iter().map(|s| s.total).max().unwrap();
        let min = sales.iter().map(|s| s.total).min().unwrap();
        prop_assert!(average <= max && average >= min);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

fn sale(venue: Venue, total_cents: i64) -> Sale {
    Sale::new(
        NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
        "Unit Customer".to_string(),
        venue,
        vec![SaleItem::new(
            SaleItemKind::Bucket,
            "Mixed bucket".to_string(),
            1,
            Decimal::new(total_cents, 2),
        )],
        PaymentMethod::Cash,
    )
}

#[test]
fn test_average_of_empty_is_zero_not_nan() {
    assert_eq!(average_sale(&[]), Decimal::ZERO);
}

#[test]
fn test_top_venue_of_empty_is_none() {
    assert_eq!(top_venue(&[]), None);
}

#[test]
fn test_top_venue_picks_highest_revenue() {
    let sales = vec![
        sale(Venue::Csa, 1000),
        sale(Venue::FarmersMarket, 3000),
        sale(Venue::Csa, 1500),
    ];
    let (venue, revenue) = top_venue(&sales).unwrap();
    assert_eq!(venue, Venue::FarmersMarket);
    assert_eq!(revenue, Decimal::new(3000, 2));
}

#[test]
fn test_top_venue_tie_goes_to_first_encountered() {
    let sales = vec![
        sale(Venue::SpecialEvent, 2000),
        sale(Venue::Florist, 2000),
    ];
    let (venue, _) = top_venue(&sales).unwrap();
    assert_eq!(venue, Venue::SpecialEvent);
}

#[test]
fn test_breakdown_lists_all_venues_for_display() {
    let sales = vec![sale(Venue::Florist, 3600)];
    let breakdown = sales::venue_breakdown(&sales);
    let venues: Vec<Venue> = breakdown.iter().map(|row| row.venue).collect();
    assert_eq!(venues, Venue::ALL.to_vec());
    assert!(breakdown
        .iter()
        .filter(|row| row.venue != Venue::Florist)
        .all(|row| row.revenue == Decimal::ZERO && row.sale_count == 0));
}

#[test]
fn test_export_csv_includes_every_line() {
    let sales = vec![sale(Venue::Csa, 2500), sale(Venue::Florist, 3600)];
    let csv = sales::export_csv(&sales).unwrap();
    let lines: Vec<&str> = csv.trim_end().lines().collect();
    assert_eq!(lines.len(), 3); // header + one line per sale
    assert!(lines[1].contains("CSA"));
    assert!(lines[2].contains("Florist"));
}
