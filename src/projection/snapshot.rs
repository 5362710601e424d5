//! Projection output structures

use serde::{Deserialize, Serialize};

/// A single row of projection output for one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearSnapshot {
    /// Projection year, 0..=30
    pub year: u32,

    /// Property value before this year's appreciation is applied
    pub property_value: f64,

    /// Property value minus remaining loan balance
    /// (by convention, the down payment at year 0)
    pub equity: f64,

    /// Rent collected over the year
    pub annual_rental_income: f64,

    /// Property tax for the year, on the current value
    pub property_tax: f64,

    /// Rental income minus mortgage payments minus property tax
    pub cash_flow: f64,

    /// Total mortgage payments made during the year
    pub mortgage_payment: f64,

    /// Outstanding loan balance at year end, floored at 0
    pub remaining_loan_balance: f64,

    /// Principal retired during the year
    pub principal_paid: f64,

    /// Interest paid during the year
    pub interest_paid: f64,

    /// Estimated depreciation recapture tax if sold this year
    pub recapture_estimate: f64,

    /// Equity growth plus cumulative cash flow minus recapture
    pub total_return: f64,

    /// Total return over the down payment, percent
    pub roi: f64,
}

/// Complete projection result for one property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Property identifier
    pub property_id: u32,

    /// Yearly snapshots, years 0..=30 in order
    pub years: Vec<YearSnapshot>,
}

impl ProjectionResult {
    pub fn new(property_id: u32) -> Self {
        Self {
            property_id,
            years: Vec::new(),
        }
    }

    /// Add a yearly snapshot
    pub fn add_row(&mut self, row: YearSnapshot) {
        self.years.push(row);
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let cumulative_cash_flow: f64 = self.years.iter().map(|r| r.cash_flow).sum();
        // Balances within a cent count as retired
        let payoff_year = self
            .years
            .iter()
            .find(|r| r.remaining_loan_balance < 0.01)
            .map(|r| r.year);

        let last = self.years.last();
        ProjectionSummary {
            projection_years: self.years.len().saturating_sub(1) as u32,
            final_property_value: last.map(|r| r.property_value).unwrap_or(0.0),
            final_equity: last.map(|r| r.equity).unwrap_or(0.0),
            cumulative_cash_flow,
            final_roi: last.map(|r| r.roi).unwrap_or(0.0),
            payoff_year,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub projection_years: u32,
    pub final_property_value: f64,
    pub final_equity: f64,
    pub cumulative_cash_flow: f64,
    pub final_roi: f64,

    /// First year with a fully retired loan, if the loan pays off within
    /// the horizon (year 0 for an all-cash purchase)
    pub payoff_year: Option<u32>,
}
