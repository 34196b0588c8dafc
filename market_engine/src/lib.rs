pub mod aggregates;
pub mod error;
pub mod format;
pub mod ranking;

pub use error::{MarketError, MarketResult};
pub use ranking::{SortDirection, SortField, SortState};
