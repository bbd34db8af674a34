use crate::data_structures::{Series, MONTHS};
use crate::pricing::{
    GEN2_CREDIT_EFFICIENCY, GEN2_PAUSE_EFFICIENCY, GEN2_SCALING_CAP, GEN2_SCALING_STEP,
};

pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn monthly_credits(
        &self,
        warehouses: u32,
        credit_multiplier: f64,
        hours_per_day: f64,
        active_days: u32,
    ) -> f64 {
        f64::from(warehouses) * credit_multiplier * hours_per_day * f64::from(active_days)
    }

    /// Consolidation bonus for Gen-2 warehouses: 5% per extra warehouse,
    /// capped at a 20% reduction.
    pub fn gen2_scaling_factor(&self, warehouses: u32) -> f64 {
        if warehouses <= 1 {
            return 1.0;
        }

        let discount = (f64::from(warehouses - 1) * GEN2_SCALING_STEP).min(GEN2_SCALING_CAP);
        1.0 - discount
    }

    pub fn apply_gen2(&self, credits: f64, warehouses: u32, paused: bool) -> f64 {
        let mut credits = credits * GEN2_CREDIT_EFFICIENCY;
        credits *= self.gen2_scaling_factor(warehouses);

        if paused {
            credits *= GEN2_PAUSE_EFFICIENCY;
        }

        credits
    }

    /// Compute growth is linear in the month index: month `m` costs
    /// `base * (1 + m * growth / 100)`.
    pub fn linear_growth_series(&self, base_monthly_cost: f64, growth_pct: f64) -> Series {
        let mut series = [0.0; MONTHS];
        for (month, value) in series.iter_mut().enumerate() {
            *value = base_monthly_cost * (1.0 + (month as f64 * growth_pct / 100.0));
        }
        series
    }

    /// Prices a running level that compounds by `growth_pct` after each month.
    pub fn compounding_series<F>(&self, starting_level: f64, growth_pct: f64, price: F) -> Series
    where
        F: Fn(f64) -> f64,
    {
        let mut series = [0.0; MONTHS];
        let mut level = starting_level;

        for value in series.iter_mut() {
            *value = price(level);
            level *= 1.0 + growth_pct / 100.0;
        }

        series
    }

    pub fn apply_discount(&self, series: &Series, discount_pct: f64) -> Series {
        let factor = 1.0 - discount_pct / 100.0;
        series.map(|value| value * factor)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Savings as a percentage of the baseline; 0 when the baseline is 0.
pub fn savings_pct(baseline_total: f64, optimized_total: f64) -> f64 {
    if baseline_total > 0.0 {
        (baseline_total - optimized_total) / baseline_total * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_monthly_credits() {
        let calculator = Calculator::new();
        assert_eq!(calculator.monthly_credits(1, 1.0, 10.0, 20), 200.0);
        assert_eq!(calculator.monthly_credits(5, 4.0, 8.0, 22), 3520.0);
    }

    #[test]
    fn test_scaling_factor_single_warehouse() {
        let calculator = Calculator::new();
        assert_eq!(calculator.gen2_scaling_factor(0), 1.0);
        assert_eq!(calculator.gen2_scaling_factor(1), 1.0);
    }

    #[test]
    fn test_scaling_factor_steps() {
        let calculator = Calculator::new();
        assert_close(calculator.gen2_scaling_factor(2), 0.95);
        assert_close(calculator.gen2_scaling_factor(3), 0.90);
        assert_close(calculator.gen2_scaling_factor(4), 0.85);
    }

    #[test]
    fn test_scaling_factor_is_capped() {
        let calculator = Calculator::new();
        for warehouses in 5..200 {
            assert_eq!(calculator.gen2_scaling_factor(warehouses), 0.80);
        }
    }

    #[test]
    fn test_gen2_reduces_credits_by_thirty_percent() {
        let calculator = Calculator::new();
        assert_close(calculator.apply_gen2(200.0, 1, false), 140.0);
        assert_close(calculator.apply_gen2(200.0, 1, true), 126.0);
        assert_close(calculator.apply_gen2(1000.0, 3, false), 1000.0 * 0.70 * 0.90);
    }

    #[test]
    fn test_linear_growth_series() {
        let calculator = Calculator::new();
        let series = calculator.linear_growth_series(400.0, 10.0);
        assert_eq!(series[0], 400.0);
        assert_close(series[1], 440.0);
        assert_close(series[11], 840.0);
    }

    #[test]
    fn test_compounding_series() {
        let calculator = Calculator::new();
        let series = calculator.compounding_series(5.0, 2.0, |tb| tb * 40.0);
        assert_eq!(series[0], 200.0);
        assert_close(series[1], 204.0);
        assert_close(series[2], 5.0 * 1.02 * 1.02 * 40.0);
    }

    #[test]
    fn test_apply_discount() {
        let calculator = Calculator::new();
        let discounted = calculator.apply_discount(&[100.0; MONTHS], 25.0);
        assert!(discounted.iter().all(|value| *value == 75.0));

        let free = calculator.apply_discount(&[100.0; MONTHS], 100.0);
        assert!(free.iter().all(|value| *value == 0.0));
    }

    #[test]
    fn test_savings_pct() {
        assert_eq!(savings_pct(0.0, 0.0), 0.0);
        assert_eq!(savings_pct(200.0, 150.0), 25.0);
        assert_eq!(savings_pct(100.0, 100.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_scaling_factor_never_below_cap(warehouses in 0u32..10_000) {
            let factor = Calculator::new().gen2_scaling_factor(warehouses);
            prop_assert!(factor >= 1.0 - GEN2_SCALING_CAP);
            prop_assert!(factor <= 1.0);
        }

        #[test]
        fn prop_linear_growth_from_first_month(base in 0.0f64..1e6, growth in 0.0f64..=20.0) {
            let series = Calculator::new().linear_growth_series(base, growth);
            for (month, value) in series.iter().enumerate() {
                let expected = series[0] * (1.0 + month as f64 * growth / 100.0);
                prop_assert!((value - expected).abs() <= 1e-9 * expected.max(1.0));
            }
        }

        #[test]
        fn prop_compounding_matches_power(level in 0.0f64..1e4, growth in 0.0f64..=20.0) {
            let series = Calculator::new().compounding_series(level, growth, |tb| tb * 40.0);
            for (month, value) in series.iter().enumerate() {
                let expected = level * 40.0 * (1.0 + growth / 100.0).powi(month as i32);
                prop_assert!((value - expected).abs() <= 1e-9 * expected.max(1.0));
            }
        }
    }
}
