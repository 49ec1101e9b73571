use crate::domain::breakdown::TaxBreakdown;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct BreakdownRecord {
    base_value: Decimal,
    category: &'static str,
    taxes: String,
    total_tax: Decimal,
    total_value: Decimal,
}

impl From<&TaxBreakdown> for BreakdownRecord {
    fn from(breakdown: &TaxBreakdown) -> Self {
        let taxes = breakdown
            .line_items
            .iter()
            .map(|item| format!("{}={}", item.label(), item.amount.normalize()))
            .collect::<Vec<_>>()
            .join(";");
        Self {
            base_value: breakdown.base_value.normalize(),
            category: breakdown.category.label(),
            taxes,
            total_tax: breakdown.total_tax.normalize(),
            total_value: breakdown.total_value.normalize(),
        }
    }
}

/// Writes one CSV row per breakdown.
///
/// Amounts keep full precision with trailing zeros stripped. The header is
/// emitted with the first row.
pub struct BreakdownWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> BreakdownWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_breakdown(&mut self, breakdown: &TaxBreakdown) -> Result<()> {
        self.writer.serialize(BreakdownRecord::from(breakdown))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
