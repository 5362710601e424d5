//! Per-property projection engine

mod engine;
mod snapshot;
mod state;

pub use engine::{ProjectionEngine, PROJECTION_YEARS};
pub use snapshot::{ProjectionResult, ProjectionSummary, YearSnapshot};
pub use state::SimulationState;
