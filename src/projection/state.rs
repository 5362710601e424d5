//! Simulation state tracking for a single property

use crate::property::Property;

/// Mutable state of one property during a projection run
///
/// All fields are local to a single `project_property` call; nothing
/// persists across invocations.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Current property value (appreciates year over year)
    pub property_value: f64,

    /// Current monthly rent (appreciates year over year)
    pub monthly_rent: f64,

    /// Outstanding loan balance, floored at 0
    pub remaining_balance: f64,

    /// Running total of cash flow across all years simulated so far
    pub cumulative_cash_flow: f64,
}

/// Totals for one year of monthly amortization steps
#[derive(Debug, Clone, Copy, Default)]
pub struct YearAmortization {
    pub interest: f64,
    pub principal: f64,
    pub payment: f64,
}

impl SimulationState {
    /// Initialize state from a property at projection start
    pub fn from_property(property: &Property) -> Self {
        Self {
            property_value: property.property_value,
            monthly_rent: property.monthly_rent,
            remaining_balance: property.loan_amount(),
            cumulative_cash_flow: 0.0,
        }
    }

    /// Run 12 monthly amortization steps against the current balance
    ///
    /// Each month splits the level payment into interest and principal,
    /// with principal capped at the remaining balance so the final
    /// installment of the loan term may be partial. Once the balance
    /// reaches 0 no further payments occur.
    pub fn amortize_year(&mut self, monthly_payment: f64, monthly_rate: f64) -> YearAmortization {
        let mut year = YearAmortization::default();

        for _month in 0..12 {
            if self.remaining_balance <= 0.0 {
                break;
            }
            let interest = self.remaining_balance * monthly_rate;
            let principal = (monthly_payment - interest).min(self.remaining_balance);
            self.remaining_balance -= principal;

            year.interest += interest;
            year.principal += principal;
            year.payment += interest + principal;
        }

        year
    }

    /// Apply one year of value and rent appreciation
    pub fn apply_appreciation(&mut self, property: &Property) {
        self.property_value *= 1.0 + property.annual_appreciation / 100.0;
        self.monthly_rent *= 1.0 + property.rental_appreciation / 100.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn test_property() -> Property {
        Property::new(
            1,
            "Test",
            600_000.0,
            150_000.0,
            6.0,
            0.51,
            2_500.0,
            5.0,
            4.5,
            30,
        )
    }

    #[test]
    fn test_from_property() {
        let state = SimulationState::from_property(&test_property());

        assert_relative_eq!(state.property_value, 600_000.0);
        assert_relative_eq!(state.monthly_rent, 2_500.0);
        assert_relative_eq!(state.remaining_balance, 450_000.0);
        assert_eq!(state.cumulative_cash_flow, 0.0);
    }

    #[test]
    fn test_amortize_year_reduces_balance() {
        let property = test_property();
        let mut state = SimulationState::from_property(&property);

        let year = state.amortize_year(property.monthly_payment(), property.monthly_rate());

        // 12 full payments in year 1
        assert_abs_diff_eq!(year.payment, property.monthly_payment() * 12.0, epsilon = 1e-6);
        assert_abs_diff_eq!(year.payment, year.interest + year.principal, epsilon = 1e-6);
        assert!(state.remaining_balance < 450_000.0);
        assert_abs_diff_eq!(
            state.remaining_balance,
            450_000.0 - year.principal,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_amortize_year_stops_at_zero_balance() {
        let mut state = SimulationState::from_property(&test_property());
        state.remaining_balance = 0.0;

        let year = state.amortize_year(2_280.08, 0.045 / 12.0);

        assert_eq!(year.payment, 0.0);
        assert_eq!(state.remaining_balance, 0.0);
    }

    #[test]
    fn test_final_installment_is_partial() {
        let mut state = SimulationState::from_property(&test_property());
        state.remaining_balance = 1_000.0;

        let year = state.amortize_year(2_280.08, 0.045 / 12.0);

        // First month pays the loan off entirely, no negative balance
        assert_eq!(state.remaining_balance, 0.0);
        assert_abs_diff_eq!(year.principal, 1_000.0, epsilon = 1e-9);
        assert!(year.payment < 2_280.08);
    }

    #[test]
    fn test_apply_appreciation() {
        let property = test_property();
        let mut state = SimulationState::from_property(&property);

        state.apply_appreciation(&property);

        assert_relative_eq!(state.property_value, 636_000.0);
        assert_relative_eq!(state.monthly_rent, 2_625.0);
    }
}
