//! Sum per-property projections into portfolio-level rows

use crate::projection::{ProjectionEngine, ProjectionResult, YearSnapshot, PROJECTION_YEARS};
use crate::property::Property;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Portfolio-level projection row: every currency field is the sum of the
/// corresponding per-property field at that year
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub year: u32,
    pub property_value: f64,
    pub equity: f64,
    pub annual_rental_income: f64,
    pub property_tax: f64,
    pub cash_flow: f64,
    pub mortgage_payment: f64,
    pub remaining_loan_balance: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub recapture_estimate: f64,
    pub total_return: f64,

    /// Recomputed from aggregate total return over aggregate down
    /// payment, not summed from per-property ROI
    pub roi: f64,
}

impl PortfolioSnapshot {
    fn new(year: u32) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    /// Add one property's snapshot for this year into the totals
    fn accumulate(&mut self, row: &YearSnapshot) {
        self.property_value += row.property_value;
        self.equity += row.equity;
        self.annual_rental_income += row.annual_rental_income;
        self.property_tax += row.property_tax;
        self.cash_flow += row.cash_flow;
        self.mortgage_payment += row.mortgage_payment;
        self.remaining_loan_balance += row.remaining_loan_balance;
        self.principal_paid += row.principal_paid;
        self.interest_paid += row.interest_paid;
        self.recapture_estimate += row.recapture_estimate;
        self.total_return += row.total_return;
    }
}

/// Aggregate the whole portfolio into a 31-row projection sequence
///
/// Properties are simulated independently (in parallel; ordering cannot
/// affect the per-year sums) and merged by year. An empty portfolio
/// yields all-zero rows. Portfolio ROI is total return over total down
/// payment, 0 when the portfolio has no down payment at all.
pub fn aggregate(engine: &ProjectionEngine, portfolio: &[Property]) -> Vec<PortfolioSnapshot> {
    let results: Vec<ProjectionResult> = portfolio
        .par_iter()
        .map(|property| engine.project_property(property))
        .collect();

    let total_down_payment: f64 = portfolio.iter().map(|p| p.down_payment).sum();

    (0..=PROJECTION_YEARS)
        .map(|year| {
            let mut row = PortfolioSnapshot::new(year);
            for result in &results {
                row.accumulate(&result.years[year as usize]);
            }
            row.roi = if total_down_payment > 0.0 {
                row.total_return / total_down_payment * 100.0
            } else {
                0.0
            };
            row
        })
        .collect()
}
