//! Derived reporting views over aggregated projections

use crate::portfolio::PortfolioSnapshot;
use serde::{Deserialize, Serialize};

/// One row of the combined income report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedIncomeRow {
    pub year: u32,
    pub annual_rental_income: f64,
    pub cash_flow: f64,
    pub recapture_estimate: f64,

    /// `(rental income + cash flow) - recapture estimate`
    pub net_combined_income: f64,
}

/// Build the combined income view from an aggregated projection
pub fn combined_income(rows: &[PortfolioSnapshot]) -> Vec<CombinedIncomeRow> {
    rows.iter()
        .map(|row| CombinedIncomeRow {
            year: row.year,
            annual_rental_income: row.annual_rental_income,
            cash_flow: row.cash_flow,
            recapture_estimate: row.recapture_estimate,
            net_combined_income: (row.annual_rental_income + row.cash_flow)
                - row.recapture_estimate,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::aggregate;
    use crate::projection::ProjectionEngine;
    use crate::property::Property;
    use approx::assert_relative_eq;

    #[test]
    fn test_combined_income_derives_from_engine_output_alone() {
        let property = Property::new(
            1,
            "Maple St Duplex",
            600_000.0,
            150_000.0,
            6.0,
            0.51,
            2_500.0,
            5.0,
            4.5,
            30,
        );
        let rows = aggregate(&ProjectionEngine::default(), &[property]);
        let report = combined_income(&rows);

        assert_eq!(report.len(), 31);
        for (report_row, agg_row) in report.iter().zip(&rows) {
            assert_eq!(report_row.year, agg_row.year);
            assert_relative_eq!(
                report_row.net_combined_income,
                agg_row.annual_rental_income + agg_row.cash_flow - agg_row.recapture_estimate
            );
        }
    }
}
