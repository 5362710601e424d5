//! Portfolio-level aggregation of per-property projections

mod aggregate;

pub use aggregate::{aggregate, PortfolioSnapshot};
