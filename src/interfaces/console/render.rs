use crate::domain::breakdown::TaxBreakdown;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, Write};

pub const WIDE_RULE: &str = "==================================================";
pub const WIDE_LINE: &str = "--------------------------------------------------";
pub const NARROW_RULE: &str = "========================================";
pub const NARROW_LINE: &str = "----------------------------------------";

/// Formats amounts for humans. All display rounding happens here.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleRenderer {
    precision: u32,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl ConsoleRenderer {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    /// `$` prefixed, thousands grouped with `,`, rounded half away from zero.
    pub fn money(&self, value: Decimal) -> String {
        let mut rounded =
            value.round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.precision);

        let text = rounded.abs().to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (text.as_str(), None),
        };

        let mut out = String::with_capacity(text.len() + text.len() / 3 + 2);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push('$');
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(digit);
        }
        // `rescale` stops short of the requested scale near `Decimal::MAX`.
        if self.precision > 0 {
            let frac_part = frac_part.unwrap_or("");
            out.push('.');
            out.push_str(frac_part);
            for _ in frac_part.len()..self.precision as usize {
                out.push('0');
            }
        }
        out
    }

    pub fn write_breakdown<W: Write>(&self, out: &mut W, breakdown: &TaxBreakdown) -> io::Result<()> {
        writeln!(out, "Base value: {}", self.money(breakdown.base_value))?;
        writeln!(out, "Category: {}", breakdown.category)?;
        writeln!(out, "{WIDE_LINE}")?;
        writeln!(out, "TAX BREAKDOWN:")?;
        if breakdown.is_tax_free() {
            writeln!(out, "   • Exempt from taxes")?;
        } else {
            for item in breakdown.line_items.iter().filter(|i| !i.amount.is_zero()) {
                writeln!(out, "   • {}: {}", item.label(), self.money(item.amount))?;
            }
        }
        writeln!(out, "{WIDE_LINE}")?;
        writeln!(out, "Total taxes: {}", self.money(breakdown.total_tax))?;
        writeln!(out, "TOTAL VALUE: {}", self.money(breakdown.total_value))?;
        Ok(())
    }

    /// Numbered list, 1-based, matching the menu numbers.
    pub fn write_numbered<W: Write>(&self, out: &mut W, entries: &[&str]) -> io::Result<()> {
        for (i, entry) in entries.iter().enumerate() {
            writeln!(out, "{}. {entry}", i + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::TaxEngine;
    use crate::domain::category::ProductCategory;
    use rust_decimal_macros::dec;

    fn render(breakdown: &TaxBreakdown) -> String {
        let mut out = Vec::new();
        ConsoleRenderer::default()
            .write_breakdown(&mut out, breakdown)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_money_grouping_and_rounding() {
        let r = ConsoleRenderer::default();
        assert_eq!(r.money(dec!(1050)), "$1,050.00");
        assert_eq!(r.money(dec!(12700000)), "$12,700,000.00");
        assert_eq!(r.money(dec!(1716.049367)), "$1,716.05");
        assert_eq!(r.money(dec!(0.005)), "$0.01");
        assert_eq!(r.money(dec!(999.999)), "$1,000.00");
        assert_eq!(r.money(dec!(-1234.5)), "-$1,234.50");
    }

    #[test]
    fn test_money_precision() {
        assert_eq!(ConsoleRenderer::new(0).money(dec!(1234.5)), "$1,235");
        assert_eq!(ConsoleRenderer::new(4).money(dec!(0.0105)), "$0.0105");
    }

    #[test]
    fn test_money_pads_digits_rescale_cannot_hold() {
        assert_eq!(
            ConsoleRenderer::new(10).money(Decimal::MAX),
            "$79,228,162,514,264,337,593,543,950,335.0000000000"
        );
        assert_eq!(
            ConsoleRenderer::new(2).money(Decimal::MAX),
            "$79,228,162,514,264,337,593,543,950,335.00"
        );
    }

    #[test]
    fn test_breakdown_lists_taxes_in_order() {
        let b = TaxEngine::new()
            .compute(dec!(2000), ProductCategory::Liquors)
            .unwrap();
        let text = render(&b);

        assert!(text.contains("Base value: $2,000.00"));
        assert!(text.contains("Category: Liquors"));
        let vat = text.find("• VAT 19%: $380.00").unwrap();
        let liquor = text.find("• Liquor Tax: $500.00").unwrap();
        assert!(vat < liquor);
        assert!(text.contains("Total taxes: $880.00"));
        assert!(text.contains("TOTAL VALUE: $2,880.00"));
    }

    #[test]
    fn test_exempt_breakdown() {
        let b = TaxEngine::new()
            .compute(dec!(150000), ProductCategory::PublicUtilities)
            .unwrap();
        let text = render(&b);

        assert!(text.contains("Exempt from taxes"));
        assert!(!text.contains("• Exempt:"));
        assert!(text.contains("TOTAL VALUE: $150,000.00"));
    }
}
