pub mod batch;
pub mod breakdown_writer;
pub mod item_reader;
