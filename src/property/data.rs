//! Property data structures matching the portfolio input format

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a single property record
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PropertyError {
    #[error("property value must be positive, got {0}")]
    NonPositiveValue(f64),

    #[error("down payment must be non-negative, got {0}")]
    NegativeDownPayment(f64),

    #[error("down payment {down_payment} exceeds property value {property_value}")]
    DownPaymentExceedsValue {
        down_payment: f64,
        property_value: f64,
    },

    #[error("monthly rent must be non-negative, got {0}")]
    NegativeRent(f64),

    #[error("interest rate must be non-negative, got {0}")]
    NegativeInterestRate(f64),

    #[error("loan term must be at least one year")]
    ZeroLoanTerm,
}

/// A single rental property record in the portfolio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Unique property identifier within the portfolio
    pub property_id: u32,

    /// Display name, may be empty
    pub name: String,

    /// Purchase price of the property
    pub property_value: f64,

    /// Cash down payment at purchase
    pub down_payment: f64,

    /// Annual property value appreciation, percent per year
    pub annual_appreciation: f64,

    /// Annual property tax, percent of current property value
    pub property_tax_rate: f64,

    /// Monthly rent at purchase
    pub monthly_rent: f64,

    /// Annual rent appreciation, percent per year
    pub rental_appreciation: f64,

    /// Nominal annual mortgage interest rate, percent, compounded monthly
    pub interest_rate: f64,

    /// Loan term in years (typically 15 or 30)
    pub loan_term_years: u32,
}

impl Property {
    /// Create a new property record
    pub fn new(
        property_id: u32,
        name: impl Into<String>,
        property_value: f64,
        down_payment: f64,
        annual_appreciation: f64,
        property_tax_rate: f64,
        monthly_rent: f64,
        rental_appreciation: f64,
        interest_rate: f64,
        loan_term_years: u32,
    ) -> Self {
        Self {
            property_id,
            name: name.into(),
            property_value,
            down_payment,
            annual_appreciation,
            property_tax_rate,
            monthly_rent,
            rental_appreciation,
            interest_rate,
            loan_term_years,
        }
    }

    /// Financed amount: purchase price minus down payment
    pub fn loan_amount(&self) -> f64 {
        self.property_value - self.down_payment
    }

    /// Fixed monthly interest rate
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }

    /// Level monthly payment for the amortizing loan
    ///
    /// Standard formula `P * r * (1+r)^n / ((1+r)^n - 1)`. The formula
    /// degenerates at rate 0, where the payment is straight-line
    /// `P / n`. A non-positive loan amount means no mortgage at all and
    /// the payment is 0.
    pub fn monthly_payment(&self) -> f64 {
        let principal = self.loan_amount();
        if principal <= 0.0 {
            return 0.0;
        }

        let n = (self.loan_term_years * 12) as f64;
        let r = self.monthly_rate();
        if r == 0.0 {
            return principal / n;
        }

        let growth = (1.0 + r).powf(n);
        principal * r * growth / (growth - 1.0)
    }

    /// Reject inputs that would make the simulation numerically degenerate
    ///
    /// A down payment above the purchase price implies a negative loan and
    /// is refused here rather than amortized.
    pub fn validate(&self) -> Result<(), PropertyError> {
        if self.property_value <= 0.0 {
            return Err(PropertyError::NonPositiveValue(self.property_value));
        }
        if self.down_payment < 0.0 {
            return Err(PropertyError::NegativeDownPayment(self.down_payment));
        }
        if self.down_payment > self.property_value {
            return Err(PropertyError::DownPaymentExceedsValue {
                down_payment: self.down_payment,
                property_value: self.property_value,
            });
        }
        if self.monthly_rent < 0.0 {
            return Err(PropertyError::NegativeRent(self.monthly_rent));
        }
        if self.interest_rate < 0.0 {
            return Err(PropertyError::NegativeInterestRate(self.interest_rate));
        }
        if self.loan_term_years == 0 {
            return Err(PropertyError::ZeroLoanTerm);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn test_property() -> Property {
        Property::new(
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
        )
    }

    #[test]
    fn test_loan_amount_and_rate() {
        let property = test_property();

        assert_relative_eq!(property.loan_amount(), 450_000.0);
        assert_relative_eq!(property.monthly_rate(), 0.045 / 12.0);
    }

    #[test]
    fn test_monthly_payment_standard_loan() {
        // 450k at 4.5% over 30 years
        let property = test_property();
        assert_abs_diff_eq!(property.monthly_payment(), 2_280.08, epsilon = 0.05);
    }

    #[test]
    fn test_monthly_payment_zero_rate_is_straight_line() {
        let mut property = test_property();
        property.interest_rate = 0.0;

        assert_relative_eq!(property.monthly_payment(), 450_000.0 / 360.0);
    }

    #[test]
    fn test_monthly_payment_zero_loan() {
        let mut property = test_property();
        property.down_payment = property.property_value;

        assert_eq!(property.monthly_payment(), 0.0);
    }

    #[test]
    fn test_validate_accepts_well_formed_record() {
        assert!(test_property().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_down_payment_above_value() {
        let mut property = test_property();
        property.down_payment = 700_000.0;

        assert_eq!(
            property.validate(),
            Err(PropertyError::DownPaymentExceedsValue {
                down_payment: 700_000.0,
                property_value: 600_000.0,
            })
        );
    }

    #[test]
    fn test_validate_rejects_degenerate_inputs() {
        let mut property = test_property();
        property.property_value = 0.0;
        property.down_payment = 0.0;
        assert!(matches!(
            property.validate(),
            Err(PropertyError::NonPositiveValue(_))
        ));

        let mut property = test_property();
        property.interest_rate = -1.0;
        assert!(matches!(
            property.validate(),
            Err(PropertyError::NegativeInterestRate(_))
        ));

        let mut property = test_property();
        property.loan_term_years = 0;
        assert_eq!(property.validate(), Err(PropertyError::ZeroLoanTerm));
    }
}
