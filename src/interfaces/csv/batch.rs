use super::breakdown_writer::BreakdownWriter;
use super::item_reader::ItemReader;
use crate::application::engine::TaxEngine;
use crate::domain::category::ProductCategory;
use crate::error::Result;
use std::io::{Read, Write};

/// Counts of rows handled by a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub computed: usize,
    pub rejected: usize,
}

/// Streams every item from `source` through the engine into `sink`.
///
/// Rows that cannot be read or computed are reported on stderr and skipped.
/// Only failures writing to `sink` abort the run.
pub fn run_batch<R: Read, W: Write>(engine: &TaxEngine, source: R, sink: W) -> Result<BatchSummary> {
    let reader = ItemReader::new(source);
    let mut writer = BreakdownWriter::new(sink);
    let mut summary = BatchSummary::default();

    for item in reader.items() {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                eprintln!("Error reading item: {}", e);
                summary.rejected += 1;
                continue;
            }
        };

        let computed = item
            .category
            .parse::<ProductCategory>()
            .and_then(|category| engine.compute(item.base_value, category));
        match computed {
            Ok(breakdown) => {
                writer.write_breakdown(&breakdown)?;
                summary.computed += 1;
            }
            Err(e) => {
                eprintln!("Error computing taxes: {}", e);
                summary.rejected += 1;
            }
        }
    }

    writer.flush()?;
    tracing::info!(
        computed = summary.computed,
        rejected = summary.rejected,
        "batch finished"
    );
    Ok(summary)
}
