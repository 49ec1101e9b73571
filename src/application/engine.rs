use crate::domain::breakdown::{LineItem, TaxBreakdown};
use crate::domain::category::{CategoryTaxMap, ProductCategory};
use crate::domain::tax::TaxKind;
use crate::error::{Result, TaxError};
use rust_decimal::Decimal;

/// Computes sales taxes for a product from its base value and category.
///
/// `TaxEngine` owns the category→taxes table it was built with and never
/// mutates it, so a single instance can serve every caller for the lifetime of
/// the process.
#[derive(Debug, Clone, Default)]
pub struct TaxEngine {
    table: CategoryTaxMap,
}

impl TaxEngine {
    /// Creates an engine over the standard national table.
    pub fn new() -> Self {
        Self::with_table(CategoryTaxMap::standard())
    }

    /// Creates an engine over a custom table.
    ///
    /// Categories missing from `table` are rejected as invalid arguments.
    pub fn with_table(table: CategoryTaxMap) -> Self {
        Self { table }
    }

    /// Computes the tax breakdown for `base_value` in `category`.
    ///
    /// Fails with `InvalidArgument` when `base_value` is not strictly positive
    /// or the category has no entry in the table. Amounts are not rounded.
    pub fn compute(&self, base_value: Decimal, category: ProductCategory) -> Result<TaxBreakdown> {
        if base_value <= Decimal::ZERO {
            return Err(TaxError::non_positive_base_value(base_value));
        }
        let kinds = self.taxes_for(category)?;

        // Trailing zeros don't count against the 28 fractional digits a Decimal holds.
        let base = base_value.normalize();
        for rate in kinds.iter().filter_map(|kind| kind.rate()) {
            if base.scale() + rate.normalize().scale() > MAX_SCALE {
                return Err(TaxError::too_many_decimal_places(base_value));
            }
        }

        let mut line_items = Vec::with_capacity(kinds.len());
        let mut total_tax = Decimal::ZERO;
        for &kind in kinds {
            let amount = match kind.rate() {
                None => Decimal::ZERO,
                Some(rate) => {
                    let amount = exact_mul(base, rate.normalize())?;
                    total_tax = exact_add(total_tax, amount)?;
                    amount
                }
            };
            line_items.push(LineItem { kind, amount });
        }
        let total_value = exact_add(base_value, total_tax)?;

        tracing::debug!(
            %base_value,
            %category,
            %total_tax,
            %total_value,
            "computed tax breakdown"
        );

        Ok(TaxBreakdown {
            base_value,
            category,
            line_items,
            total_tax,
            total_value,
        })
    }

    /// Display names of all categories in canonical order.
    pub fn list_categories(&self) -> Vec<&'static str> {
        ProductCategory::ALL.iter().map(|c| c.label()).collect()
    }

    /// Display names of the taxes applied to `category`, in breakdown order.
    pub fn list_taxes_for_category(&self, category: ProductCategory) -> Result<Vec<&'static str>> {
        Ok(self
            .taxes_for(category)?
            .iter()
            .map(|kind| kind.label())
            .collect())
    }

    fn taxes_for(&self, category: ProductCategory) -> Result<&[TaxKind]> {
        self.table
            .get(category)
            .ok_or_else(|| TaxError::invalid_category(category))
    }
}

/// Most fractional digits a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

fn too_large() -> TaxError {
    TaxError::InvalidArgument("base value is too large to compute taxes".to_string())
}

// rust_decimal rounds instead of failing when a result needs more than 96
// bits of mantissa; a scale lower than the exact one means digits were lost.
fn exact_mul(a: Decimal, b: Decimal) -> Result<Decimal> {
    let product = a.checked_mul(b).ok_or_else(too_large)?;
    if product.scale() < a.scale() + b.scale() {
        return Err(TaxError::too_many_significant_digits());
    }
    Ok(product)
}

fn exact_add(a: Decimal, b: Decimal) -> Result<Decimal> {
    let sum = a.checked_add(b).ok_or_else(too_large)?;
    if sum.scale() < a.scale().max(b.scale()) {
        return Err(TaxError::too_many_significant_digits());
    }
    Ok(sum)
}
