//! Core projection engine for yearly property projections

use super::snapshot::{ProjectionResult, YearSnapshot};
use super::state::SimulationState;
use crate::assumptions::Assumptions;
use crate::property::Property;

/// Projection horizon in years; every projection has exactly
/// `PROJECTION_YEARS + 1` rows (years 0 through 30 inclusive)
pub const PROJECTION_YEARS: u32 = 30;

/// Main projection engine
///
/// Pure computation: same property in, same 31-row sequence out. The
/// engine holds only assumptions; all per-run state lives in a
/// [`SimulationState`] scoped to a single call.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given assumptions
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Run the 30-year projection for a single property
    ///
    /// Each year runs 12 monthly amortization steps, then prices tax and
    /// rent off the current (pre-appreciation) value before appreciation
    /// is applied for the following year. Year N's tax and rent therefore
    /// reflect year N-1's appreciated value; the one-year lag is part of
    /// the contract.
    pub fn project_property(&self, property: &Property) -> ProjectionResult {
        let mut result = ProjectionResult::new(property.property_id);
        let mut state = SimulationState::from_property(property);

        let monthly_rate = property.monthly_rate();
        let monthly_payment = property.monthly_payment();

        // Depreciable basis is fixed at purchase, never reappreciated
        let depreciable_basis = self.assumptions.depreciable_basis(property.property_value);
        let annual_depreciation = self.assumptions.annual_depreciation(property.property_value);

        result.add_row(year_zero(property));

        for year in 1..=PROJECTION_YEARS {
            let amortization = state.amortize_year(monthly_payment, monthly_rate);

            let property_tax = state.property_value * property.property_tax_rate / 100.0;
            let annual_rental_income = state.monthly_rent * 12.0;
            let cash_flow = annual_rental_income - amortization.payment - property_tax;
            state.cumulative_cash_flow += cash_flow;

            let equity = state.property_value - state.remaining_balance;

            let cumulative_depreciation =
                (annual_depreciation * year as f64).min(depreciable_basis);
            let recapture_estimate = cumulative_depreciation * self.assumptions.recapture_rate;

            let total_return =
                (equity - property.down_payment) + state.cumulative_cash_flow - recapture_estimate;
            // Non-finite when the down payment is 0; the per-property
            // contract propagates rather than special-casing
            let roi = total_return / property.down_payment * 100.0;

            result.add_row(YearSnapshot {
                year,
                property_value: state.property_value,
                equity,
                annual_rental_income,
                property_tax,
                cash_flow,
                mortgage_payment: amortization.payment,
                remaining_loan_balance: state.remaining_balance,
                principal_paid: amortization.principal,
                interest_paid: amortization.interest,
                recapture_estimate,
                total_return,
                roi,
            });

            state.apply_appreciation(property);
        }

        result
    }
}

/// Year-0 snapshot: position at purchase, all flow fields zero
fn year_zero(property: &Property) -> YearSnapshot {
    YearSnapshot {
        year: 0,
        property_value: property.property_value,
        equity: property.down_payment,
        annual_rental_income: property.monthly_rent * 12.0,
        property_tax: property.property_value * property.property_tax_rate / 100.0,
        cash_flow: 0.0,
        mortgage_payment: 0.0,
        remaining_loan_balance: property.loan_amount(),
        principal_paid: 0.0,
        interest_paid: 0.0,
        recapture_estimate: 0.0,
        total_return: 0.0,
        roi: 0.0,
    }
}
