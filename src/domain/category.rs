use super::tax::TaxKind;
use crate::error::TaxError;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Product classification that decides which taxes apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProductCategory {
    #[serde(rename = "Basic Foods")]
    BasicFoods,
    #[serde(rename = "Liquors")]
    Liquors,
    #[serde(rename = "Plastic Bags")]
    PlasticBags,
    #[serde(rename = "Fuels")]
    Fuels,
    #[serde(rename = "Public Utilities")]
    PublicUtilities,
    #[serde(rename = "Other")]
    Other,
}

impl ProductCategory {
    /// Every category in canonical declaration order. Menu numbers index into this.
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::BasicFoods,
        ProductCategory::Liquors,
        ProductCategory::PlasticBags,
        ProductCategory::Fuels,
        ProductCategory::PublicUtilities,
        ProductCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProductCategory::BasicFoods => "Basic Foods",
            ProductCategory::Liquors => "Liquors",
            ProductCategory::PlasticBags => "Plastic Bags",
            ProductCategory::Fuels => "Fuels",
            ProductCategory::PublicUtilities => "Public Utilities",
            ProductCategory::Other => "Other",
        }
    }

    /// Short machine id accepted on the command line and in CSV input.
    pub fn id(self) -> &'static str {
        match self {
            ProductCategory::BasicFoods => "basic-foods",
            ProductCategory::Liquors => "liquors",
            ProductCategory::PlasticBags => "plastic-bags",
            ProductCategory::Fuels => "fuels",
            ProductCategory::PublicUtilities => "public-utilities",
            ProductCategory::Other => "other",
        }
    }

    /// Resolves a 1-based menu number.
    pub fn from_menu_index(index: usize) -> Result<Self, TaxError> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| {
                TaxError::InvalidArgument(format!("invalid category number: {index}"))
            })
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductCategory {
    type Err = TaxError;

    /// Matches either the exact display label or the machine id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s || c.id() == s)
            .ok_or_else(|| TaxError::invalid_category(s))
    }
}

/// Read-only table from category to the ordered taxes it carries.
///
/// Order within each entry is significant: it is the order of the line items
/// in every breakdown computed for that category.
#[derive(Debug, Clone)]
pub struct CategoryTaxMap {
    entries: HashMap<ProductCategory, Vec<TaxKind>>,
}

impl CategoryTaxMap {
    /// The fixed national table.
    pub fn standard() -> Self {
        Self::from_entries([
            (ProductCategory::BasicFoods, vec![TaxKind::Vat5]),
            (
                ProductCategory::Liquors,
                vec![TaxKind::Vat19, TaxKind::LiquorTax],
            ),
            (
                ProductCategory::PlasticBags,
                vec![TaxKind::Vat19, TaxKind::PlasticBagTax],
            ),
            (
                ProductCategory::Fuels,
                vec![TaxKind::Vat19, TaxKind::NationalConsumptionTax],
            ),
            (ProductCategory::PublicUtilities, vec![TaxKind::Exempt]),
            (ProductCategory::Other, vec![TaxKind::Vat19]),
        ])
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (ProductCategory, Vec<TaxKind>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, category: ProductCategory) -> Option<&[TaxKind]> {
        self.entries.get(&category).map(Vec::as_slice)
    }
}

impl Default for CategoryTaxMap {
    fn default() -> Self {
        Self::standard()
    }
}
