//! Sales models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sales channel categories
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "kebab-case")]
pub enum Venue {
    FarmersMarket,
    Csa,
    Florist,
    SpecialEvent,
}

impl Venue {
    /// The four known venues, in canonical display order
    pub const ALL: [Venue; 4] = [
        Venue::FarmersMarket,
        Venue::Csa,
        Venue::Florist,
        Venue::SpecialEvent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Venue::FarmersMarket => "Farmers Market",
            Venue::Csa => "CSA",
            Venue::Florist => "Florist",
            Venue::SpecialEvent => "Special Event",
        }
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Payment methods accepted at sale entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Check,
    Venmo,
    Square,
    Stripe,
    Paypal,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Check => write!(f, "check"),
            PaymentMethod::Venmo => write!(f, "venmo"),
            PaymentMethod::Square => write!(f, "square"),
            PaymentMethod::Stripe => write!(f, "stripe"),
            PaymentMethod::Paypal => write!(f, "paypal"),
        }
    }
}

/// What a sale line is made of
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SaleItemKind {
    Bouquet,
    Stems,
    Bucket,
}

/// One line of a sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleItem {
    pub id: Uuid,
    pub kind: SaleItemKind,
    /// Bouquet name or variety, as shown on the receipt
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    /// Always `quantity * unit_price`; derived at construction
    pub total: Decimal,
}

impl SaleItem {
    pub fn new(kind: SaleItemKind, description: String, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            description,
            quantity,
            unit_price,
            total: Decimal::from(quantity) * unit_price,
        }
    }
}

/// A recorded sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: Uuid,
    pub date: NaiveDate,
    pub customer: String,
    pub venue: Venue,
    pub items: Vec<SaleItem>,
    /// Always the sum of line totals; derived at construction
    pub total: Decimal,
    pub payment_method: PaymentMethod,
}

impl Sale {
    /// Build a sale whose total is computed from its lines. There is no
    /// second, independently maintained total to drift from the items.
    pub fn new(
        date: NaiveDate,
        customer: String,
        venue: Venue,
        items: Vec<SaleItem>,
        payment_method: PaymentMethod,
    ) -> Self {
        let total = items.iter().map(|item| item.total).sum();
        Self {
            id: Uuid::new_v4(),
            date,
            customer,
            venue,
            items,
            total,
            payment_method,
        }
    }
}
