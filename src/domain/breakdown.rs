use super::category::ProductCategory;
use super::tax::TaxKind;
use rust_decimal::Decimal;
use serde::Serialize;

/// Amount charged for a single tax kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineItem {
    #[serde(rename = "tax")]
    pub kind: TaxKind,
    pub amount: Decimal,
}

impl LineItem {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Itemized result of a tax computation.
///
/// `line_items` keeps the order of the category's tax table, and amounts carry
/// full precision. Rounding is left to whoever displays the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxBreakdown {
    pub base_value: Decimal,
    pub category: ProductCategory,
    pub line_items: Vec<LineItem>,
    pub total_tax: Decimal,
    pub total_value: Decimal,
}

impl TaxBreakdown {
    /// Looks up the amount charged for `kind`, if it applies to this breakdown.
    pub fn amount_for(&self, kind: TaxKind) -> Option<Decimal> {
        self.line_items
            .iter()
            .find(|item| item.kind == kind)
            .map(|item| item.amount)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.line_items.iter().map(LineItem::label).collect()
    }

    /// True when no line item charges anything.
    pub fn is_tax_free(&self) -> bool {
        self.line_items.iter().all(|item| item.amount.is_zero())
    }
}
