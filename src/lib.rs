//! Rental Projection - 30-year financial projection engine for rental property portfolios
//!
//! This library provides:
//! - Per-property projections (appreciation, amortization, cash flow, equity, ROI)
//! - Portfolio-level aggregation across any number of properties
//! - Depreciation recapture estimates (simplified straight-line model)
//! - CSV portfolio loading with boundary validation

pub mod assumptions;
pub mod portfolio;
pub mod projection;
pub mod property;
pub mod report;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use portfolio::{aggregate, PortfolioSnapshot};
pub use projection::{ProjectionEngine, ProjectionResult, YearSnapshot, PROJECTION_YEARS};
pub use property::{Property, PropertyError};
