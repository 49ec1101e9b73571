use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const CATEGORY_IDS: [&str; 6] = [
    "basic-foods",
    "liquors",
    "plastic-bags",
    "fuels",
    "public-utilities",
    "other",
];

/// Writes `rows` items cycling through every category, with base values 1..=rows.
pub fn generate_items_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["base_value", "category"])?;

    for i in 1..=rows {
        wtr.write_record([&i.to_string(), CATEGORY_IDS[(i - 1) % CATEGORY_IDS.len()]])?;
    }

    wtr.flush()?;
    Ok(())
}
