use crate::domain::category::ProductCategory;
use crate::error::{Result, TaxError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a base value typed by the user.
///
/// Only the number format is checked; positivity is enforced by the engine.
/// Digit separators such as `1_000` are rejected even though `Decimal` accepts them.
pub fn parse_base_value(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    let invalid = || TaxError::InvalidArgument(format!("invalid base value: '{trimmed}'"));
    if trimmed.contains('_') {
        return Err(invalid());
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| invalid())
}

/// Parses a 1-based category number as shown in the category listing.
pub fn parse_category_number(text: &str) -> Result<ProductCategory> {
    let trimmed = text.trim();
    let index = trimmed.parse::<usize>().map_err(|_| {
        TaxError::InvalidArgument(format!("invalid category number: '{trimmed}'"))
    })?;
    ProductCategory::from_menu_index(index)
}

/// Resolves a category given as a menu number, a display label or a machine id.
pub fn parse_category(text: &str) -> Result<ProductCategory> {
    let trimmed = text.trim();
    if trimmed.chars().all(|c| c.is_ascii_digit()) && !trimmed.is_empty() {
        parse_category_number(trimmed)
    } else {
        trimmed.parse()
    }
}
