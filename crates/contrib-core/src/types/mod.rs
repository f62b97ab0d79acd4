//! Period-indexed tables and series shared across Contrib crates.

pub mod series;
pub mod table;

pub use series::PeriodSeries;
pub use table::PeriodTable;
