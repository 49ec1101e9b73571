//! Application layer containing the tax computation.
//!
//! `TaxEngine` is the single entry point the console, CLI and CSV interfaces
//! call into. It is synchronous and holds only read-only tables.

pub mod engine;
