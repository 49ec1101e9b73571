use crate::error::{Result, TaxError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One `base_value,category` row of batch input.
///
/// `category` is kept as text and resolved by the batch loop, so a row naming
/// an unknown category is reported as `invalid category: <text>` and counted as
/// rejected by the engine, not as an unreadable row.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ItemRecord {
    pub base_value: Decimal,
    pub category: String,
}

/// Streams `ItemRecord`s out of a batch CSV file.
///
/// Cells are trimmed, so `1000, Basic Foods` reads the same as
/// `1000,Basic Foods`.
pub struct ItemReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ItemReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// One result per data row; a bad row does not end the iteration.
    pub fn items(self) -> impl Iterator<Item = Result<ItemRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(TaxError::from))
    }
}
