use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

/// A named sales tax with a fixed rate, or the exemption marker.
///
/// Serializes as its display name so JSON output matches the console labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TaxKind {
    #[serde(rename = "Exempt")]
    Exempt,
    #[serde(rename = "VAT 5%")]
    Vat5,
    #[serde(rename = "VAT 19%")]
    Vat19,
    #[serde(rename = "National Consumption Tax")]
    NationalConsumptionTax,
    #[serde(rename = "Liquor Tax")]
    LiquorTax,
    #[serde(rename = "Plastic Bag Tax")]
    PlasticBagTax,
}

impl TaxKind {
    pub const ALL: [TaxKind; 6] = [
        TaxKind::Exempt,
        TaxKind::Vat5,
        TaxKind::Vat19,
        TaxKind::NationalConsumptionTax,
        TaxKind::LiquorTax,
        TaxKind::PlasticBagTax,
    ];

    /// Fraction of the base value charged by this tax. `None` for `Exempt`.
    pub fn rate(self) -> Option<Decimal> {
        match self {
            TaxKind::Exempt => None,
            TaxKind::Vat5 => Some(dec!(0.05)),
            TaxKind::Vat19 => Some(dec!(0.19)),
            TaxKind::NationalConsumptionTax => Some(dec!(0.08)),
            TaxKind::LiquorTax => Some(dec!(0.25)),
            TaxKind::PlasticBagTax => Some(dec!(0.20)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaxKind::Exempt => "Exempt",
            TaxKind::Vat5 => "VAT 5%",
            TaxKind::Vat19 => "VAT 19%",
            TaxKind::NationalConsumptionTax => "National Consumption Tax",
            TaxKind::LiquorTax => "Liquor Tax",
            TaxKind::PlasticBagTax => "Plastic Bag Tax",
        }
    }

    pub fn is_exempt(self) -> bool {
        self == TaxKind::Exempt
    }
}

impl fmt::Display for TaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
