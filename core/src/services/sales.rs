//! Sales ledger, revenue aggregation and report export

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use shared::{
    validate_name, validate_sale_items, PaymentMethod, Sale, SaleItem, SaleItemKind, Venue,
};

use crate::error::{AppError, AppResult};

/// One line of a sale being entered
#[derive(Debug, Clone)]
pub struct NewSaleItem {
    pub kind: SaleItemKind,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// Input for recording a sale. Line and sale totals are derived during
/// recording; callers never supply them.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub customer: String,
    pub venue: Venue,
    pub payment_method: PaymentMethod,
    pub items: Vec<NewSaleItem>,
    /// Defaults to today when absent
    pub date: Option<NaiveDate>,
}

/// Recorded sales, in entry order
#[derive(Debug, Default)]
pub struct SalesLedger {
    sales: Vec<Sale>,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sale, deriving every total from the line inputs
    pub fn record(&mut self, input: NewSale) -> AppResult<Sale> {
        validate_name(&input.customer).map_err(|msg| AppError::validation("customer", msg))?;

        let items: Vec<SaleItem> = input
            .items
            .into_iter()
            .map(|item| SaleItem::new(item.kind, item.description, item.quantity, item.unit_price))
            .collect();
        validate_sale_items(&items).map_err(|msg| AppError::validation("items", msg))?;

        let sale = Sale::new(
            input.date.unwrap_or_else(|| Utc::now().date_naive()),
            input.customer,
            input.venue,
            items,
            input.payment_method,
        );
        tracing::info!(
            customer = %sale.customer,
            venue = %sale.venue,
            total = %sale.total,
            "recorded sale"
        );
        self.sales.push(sale.clone());
        Ok(sale)
    }

    pub fn list(&self) -> &[Sale] {
        &self.sales
    }
}

/// Sum of sale totals
pub fn total_revenue(sales: &[Sale]) -> Decimal {
    sales.iter().map(|sale| sale.total).sum()
}

/// Mean sale total; zero for an empty list, never a division by zero
pub fn average_sale(sales: &[Sale]) -> Decimal {
    if sales.is_empty() {
        return Decimal::ZERO;
    }
    total_revenue(sales) / Decimal::from(sales.len())
}

/// Revenue summed per venue, covering only venues present in the input
pub fn revenue_by_venue(sales: &[Sale]) -> BTreeMap<Venue, Decimal> {
    let mut revenue: BTreeMap<Venue, Decimal> = BTreeMap::new();
    for sale in sales {
        *revenue.entry(sale.venue).or_insert(Decimal::ZERO) += sale.total;
    }
    revenue
}

/// One row of the venue breakdown table
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VenueBreakdown {
    pub venue: Venue,
    pub revenue: Decimal,
    pub sale_count: usize,
}

/// All four known venues in canonical order, zero-filled where a venue has
/// no sales. Display-side counterpart of [`revenue_by_venue`].
pub fn venue_breakdown(sales: &[Sale]) -> Vec<VenueBreakdown> {
    Venue::ALL
        .iter()
        .map(|&venue| {
            let matching = sales.iter().filter(|sale| sale.venue == venue);
            VenueBreakdown {
                venue,
                revenue: matching.clone().map(|sale| sale.total).sum(),
                sale_count: matching.count(),
            }
        })
        .collect()
}

/// The venue with the highest summed revenue, or `None` when there are no
/// sales. Ties go to the venue encountered first in the sales list.
pub fn top_venue(sales: &[Sale]) -> Option<(Venue, Decimal)> {
    let mut grouped: Vec<(Venue, Decimal)> = Vec::new();
    for sale in sales {
        match grouped.iter_mut().find(|(venue, _)| *venue == sale.venue) {
            Some((_, revenue)) => *revenue += sale.total,
            None => grouped.push((sale.venue, sale.total)),
        }
    }
    let mut best: Option<(Venue, Decimal)> = None;
    for (venue, revenue) in grouped {
        match best {
            Some((_, top)) if revenue <= top => {}
            _ => best = Some((venue, revenue)),
        }
    }
    best
}

/// Revenue and units for one product across all sales
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductSummary {
    pub description: String,
    pub units_sold: u64,
    pub revenue: Decimal,
}

/// Products grouped by description, best revenue first. Ties keep
/// first-encountered order.
pub fn best_sellers(sales: &[Sale]) -> Vec<ProductSummary> {
    let mut products: Vec<ProductSummary> = Vec::new();
    for item in sales.iter().flat_map(|sale| &sale.items) {
        match products
            .iter_mut()
            .find(|product| product.description == item.description)
        {
            Some(product) => {
                product.units_sold += u64::from(item.quantity);
                product.revenue += item.total;
            }
            None => products.push(ProductSummary {
                description: item.description.clone(),
                units_sold: u64::from(item.quantity),
                revenue: item.total,
            }),
        }
    }
    products.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    products
}

/// Percent of the season goal covered by revenue so far; zero when no goal
/// is set
pub fn season_progress(goal: Decimal, revenue: Decimal) -> Decimal {
    if goal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (revenue / goal * Decimal::ONE_HUNDRED).round_dp(1)
}

/// One CSV row per sale line
#[derive(Debug, Serialize)]
struct SaleLine<'a> {
    date: NaiveDate,
    customer: &'a str,
    venue: &'static str,
    payment_method: PaymentMethod,
    item: &'a str,
    kind: SaleItemKind,
    quantity: u32,
    unit_price: Decimal,
    line_total: Decimal,
    sale_total: Decimal,
}

/// Export the sales list as CSV, one row per sale line
pub fn export_csv(sales: &[Sale]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for sale in sales {
        for item in &sale.items {
            writer
                .serialize(SaleLine {
                    date: sale.date,
                    customer: &sale.customer,
                    venue: sale.venue.label(),
                    payment_method: sale.payment_method,
                    item: &item.description,
                    kind: item.kind,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    line_total: item.total,
                    sale_total: sale.total,
                })
                .map_err(|e| AppError::Report(format!("CSV serialization error: {}", e)))?;
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Report(format!("CSV writer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Report(format!("UTF-8 conversion error: {}", e)))
}
