//! Tax assumptions used by the projection engine

/// Depreciation and recapture assumptions for a projection run
///
/// Defaults match the residential rental convention: 80% of the purchase
/// price is depreciable (the rest is land), recovered straight-line over
/// 27.5 years, with a flat 25% recapture rate on sale.
#[derive(Debug, Clone)]
pub struct Assumptions {
    /// Fraction of the purchase price that is depreciable
    pub depreciable_fraction: f64,

    /// Straight-line recovery period in years
    pub recovery_period_years: f64,

    /// Flat recapture rate applied to cumulative depreciation
    pub recapture_rate: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            depreciable_fraction: 0.8,
            recovery_period_years: 27.5,
            recapture_rate: 0.25,
        }
    }
}

impl Assumptions {
    /// Depreciable basis for a given purchase price, fixed at purchase
    pub fn depreciable_basis(&self, purchase_price: f64) -> f64 {
        purchase_price * self.depreciable_fraction
    }

    /// Annual straight-line depreciation for a given purchase price
    pub fn annual_depreciation(&self, purchase_price: f64) -> f64 {
        self.depreciable_basis(purchase_price) / self.recovery_period_years
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_basis_and_depreciation() {
        let assumptions = Assumptions::default();

        assert_relative_eq!(assumptions.depreciable_basis(600_000.0), 480_000.0);
        assert_relative_eq!(
            assumptions.annual_depreciation(600_000.0),
            480_000.0 / 27.5
        );
    }
}
