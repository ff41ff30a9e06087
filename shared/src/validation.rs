//! Validation utilities for Bloom & Grow
//!
//! Includes the lenient numeric parsing the form inputs rely on: unparsable
//! values recover to zero instead of surfacing an error.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::SaleItem;

// ============================================================================
// Lenient numeric parsing
// ============================================================================

/// Parse a currency or measurement amount from free text, taking the
/// leading numeric prefix: "12.5" -> 12.5, "2 hours" -> 2, "abc" -> 0.
pub fn parse_amount(input: &str) -> Decimal {
    leading_number(input)
        .and_then(|prefix| prefix.parse().ok())
        .unwrap_or(Decimal::ZERO)
}

/// Parse a count from free text, taking the leading digits:
/// "24" -> 24, "24abc" -> 24, "" -> 0.
pub fn parse_count(input: &str) -> u32 {
    let trimmed = input.trim();
    let digits: &str = match trimmed.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &trimmed[..end],
        None => trimmed,
    };
    digits.parse().unwrap_or(0)
}

/// Longest prefix that reads as a signed decimal number
fn leading_number(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in trimmed.char_indices() {
        match c {
            '-' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            c if c.is_ascii_digit() => seen_digit = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if seen_digit {
        Some(&trimmed[..end])
    } else {
        None
    }
}

// ============================================================================
// Structural checks
// ============================================================================

/// Validate that a name is not blank
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name cannot be blank");
    }
    Ok(())
}

/// Validate that every required stem count in a recipe is positive
pub fn validate_stem_counts(stem_counts: &BTreeMap<String, u32>) -> Result<(), &'static str> {
    if stem_counts.values().any(|&count| count == 0) {
        return Err("Recipe stem counts must be positive");
    }
    Ok(())
}

/// Validate that a sale carries at least one line with a positive quantity
pub fn validate_sale_items(items: &[SaleItem]) -> Result<(), &'static str> {
    if items.is_empty() {
        return Err("A sale needs at least one item");
    }
    if items.iter().any(|item| item.quantity == 0) {
        return Err("Sale item quantities must be positive");
    }
    Ok(())
}
