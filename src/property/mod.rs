//! Property records and portfolio input loading

mod data;
pub mod loader;

pub use data::{Property, PropertyError};
pub use loader::{load_portfolio, PortfolioError};
