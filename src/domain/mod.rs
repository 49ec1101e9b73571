//! Domain types: tax kinds and their rates, product categories, the
//! category→taxes table, and the breakdown a computation produces.

pub mod breakdown;
pub mod category;
pub mod tax;
