use crate::calculator::savings_pct;
use crate::error::{EstimateError, EstimateResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of every projected series.
pub const MONTHS: usize = 12;

pub type Series = [f64; MONTHS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WarehouseSize {
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
}

impl WarehouseSize {
    pub const ALL: [WarehouseSize; 5] = [
        WarehouseSize::XSmall,
        WarehouseSize::Small,
        WarehouseSize::Medium,
        WarehouseSize::Large,
        WarehouseSize::XLarge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WarehouseSize::XSmall => "X-Small",
            WarehouseSize::Small => "Small",
            WarehouseSize::Medium => "Medium",
            WarehouseSize::Large => "Large",
            WarehouseSize::XLarge => "X-Large",
        }
    }

    /// Position in the size ladder, smallest first.
    pub fn index(&self) -> usize {
        match self {
            WarehouseSize::XSmall => 0,
            WarehouseSize::Small => 1,
            WarehouseSize::Medium => 2,
            WarehouseSize::Large => 3,
            WarehouseSize::XLarge => 4,
        }
    }

    pub fn smaller(&self) -> Option<WarehouseSize> {
        self.index()
            .checked_sub(1)
            .map(|index| WarehouseSize::ALL[index])
    }

    pub fn larger(&self) -> Option<WarehouseSize> {
        WarehouseSize::ALL.get(self.index() + 1).copied()
    }
}

impl fmt::Display for WarehouseSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WarehouseSize {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "xsmall" | "xs" => Ok(WarehouseSize::XSmall),
            "small" | "s" => Ok(WarehouseSize::Small),
            "medium" | "m" => Ok(WarehouseSize::Medium),
            "large" | "l" => Ok(WarehouseSize::Large),
            "xlarge" | "xl" => Ok(WarehouseSize::XLarge),
            _ => Err(EstimateError::invalid(
                "size",
                format!("unknown warehouse size '{}'", s),
            )),
        }
    }
}

impl TryFrom<String> for WarehouseSize {
    type Error = EstimateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WarehouseSize> for String {
    fn from(size: WarehouseSize) -> Self {
        size.name().to_string()
    }
}

/// Target size for the optimized scenario. `Same` keeps the configured size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SizeReduction {
    #[default]
    Same,
    To(WarehouseSize),
}

impl SizeReduction {
    pub fn resolve(&self, current: WarehouseSize) -> WarehouseSize {
        match self {
            SizeReduction::Same => current,
            SizeReduction::To(size) => *size,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SizeReduction::Same => "Same",
            SizeReduction::To(size) => size.name(),
        }
    }
}

impl fmt::Display for SizeReduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeReduction {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "same" | "none" | "" => Ok(SizeReduction::Same),
            _ => s
                .parse::<WarehouseSize>()
                .map(SizeReduction::To)
                .map_err(|_| {
                    EstimateError::invalid(
                        "reduced_size",
                        format!("unknown warehouse size '{}'", s),
                    )
                }),
        }
    }
}

impl TryFrom<String> for SizeReduction {
    type Error = EstimateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SizeReduction> for String {
    fn from(reduction: SizeReduction) -> Self {
        reduction.name().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizationOptions {
    pub pause_hours_per_day: f64,
    pub reduced_size: SizeReduction,
    pub extra_discount_pct: f64,
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self {
            pause_hours_per_day: 0.0,
            reduced_size: SizeReduction::Same,
            extra_discount_pct: 0.0,
        }
    }
}

/// Usage parameters for one projection. Percentages are whole-number
/// percents (`2.0` means 2%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageConfig {
    pub warehouses: u32,
    pub size: WarehouseSize,
    pub hours_per_day: f64,
    pub active_days_per_month: u32,
    pub compute_growth_pct: f64,
    pub storage_tb: f64,
    pub storage_growth_pct: f64,
    pub transfer_tb: f64,
    pub transfer_growth_pct: f64,
    pub base_discount_pct: f64,
    pub optimization: OptimizationOptions,
    pub gen2: bool,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            warehouses: 2,
            size: WarehouseSize::XSmall,
            hours_per_day: 12.0,
            active_days_per_month: 22,
            compute_growth_pct: 0.0,
            storage_tb: 5.0,
            storage_growth_pct: 2.0,
            transfer_tb: 1.0,
            transfer_growth_pct: 3.0,
            base_discount_pct: 0.0,
            optimization: OptimizationOptions::default(),
            gen2: false,
        }
    }
}

pub const MAX_HOURS_PER_DAY: f64 = 24.0;
pub const MAX_ACTIVE_DAYS: u32 = 31;
pub const MAX_GROWTH_PCT: f64 = 20.0;
pub const MAX_DISCOUNT_PCT: f64 = 50.0;

impl UsageConfig {
    pub fn validate(&self) -> EstimateResult<()> {
        if self.warehouses == 0 {
            return Err(EstimateError::invalid("warehouses", "must be at least 1"));
        }

        check_finite("hours_per_day", self.hours_per_day)?;
        if self.hours_per_day <= 0.0 || self.hours_per_day > MAX_HOURS_PER_DAY {
            return Err(EstimateError::invalid(
                "hours_per_day",
                format!(
                    "must be greater than 0 and at most {}, got {}",
                    MAX_HOURS_PER_DAY, self.hours_per_day
                ),
            ));
        }

        if !(1..=MAX_ACTIVE_DAYS).contains(&self.active_days_per_month) {
            return Err(EstimateError::invalid(
                "active_days_per_month",
                format!(
                    "must be between 1 and {}, got {}",
                    MAX_ACTIVE_DAYS, self.active_days_per_month
                ),
            ));
        }

        check_range("compute_growth_pct", self.compute_growth_pct, 0.0, MAX_GROWTH_PCT)?;
        check_non_negative("storage_tb", self.storage_tb)?;
        check_range("storage_growth_pct", self.storage_growth_pct, 0.0, MAX_GROWTH_PCT)?;
        check_non_negative("transfer_tb", self.transfer_tb)?;
        check_range("transfer_growth_pct", self.transfer_growth_pct, 0.0, MAX_GROWTH_PCT)?;
        check_range("base_discount_pct", self.base_discount_pct, 0.0, MAX_DISCOUNT_PCT)?;

        check_range(
            "pause_hours_per_day",
            self.optimization.pause_hours_per_day,
            0.0,
            MAX_HOURS_PER_DAY,
        )?;
        check_range(
            "extra_discount_pct",
            self.optimization.extra_discount_pct,
            0.0,
            MAX_DISCOUNT_PCT,
        )?;

        Ok(())
    }

    pub fn optimized_size(&self) -> WarehouseSize {
        self.optimization.reduced_size.resolve(self.size)
    }

    /// Hours left per day once the pause is applied, never below zero.
    pub fn effective_hours_per_day(&self) -> f64 {
        (self.hours_per_day - self.optimization.pause_hours_per_day).max(0.0)
    }

    pub fn combined_discount_pct(&self) -> f64 {
        self.base_discount_pct + self.optimization.extra_discount_pct
    }
}

fn check_finite(field: &'static str, value: f64) -> EstimateResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EstimateError::invalid(field, "must be a finite number"))
    }
}

fn check_non_negative(field: &'static str, value: f64) -> EstimateResult<()> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(EstimateError::invalid(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> EstimateResult<()> {
    check_finite(field, value)?;
    if value < min || value > max {
        return Err(EstimateError::invalid(
            field,
            format!("must be between {} and {}, got {}", min, max, value),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Compute,
    Storage,
    Transfer,
}

impl CostCategory {
    pub const ALL: [CostCategory; 3] = [
        CostCategory::Compute,
        CostCategory::Storage,
        CostCategory::Transfer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CostCategory::Compute => "Compute",
            CostCategory::Storage => "Storage",
            CostCategory::Transfer => "Data Transfer",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Twelve months of compute, storage and transfer cost for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySeries {
    compute: Series,
    storage: Series,
    transfer: Series,
}

impl MonthlySeries {
    pub fn new(compute: Series, storage: Series, transfer: Series) -> Self {
        Self {
            compute,
            storage,
            transfer,
        }
    }

    pub fn compute(&self) -> &Series {
        &self.compute
    }

    pub fn storage(&self) -> &Series {
        &self.storage
    }

    pub fn transfer(&self) -> &Series {
        &self.transfer
    }

    pub fn series(&self, category: CostCategory) -> &Series {
        match category {
            CostCategory::Compute => &self.compute,
            CostCategory::Storage => &self.storage,
            CostCategory::Transfer => &self.transfer,
        }
    }

    pub fn category_total(&self, category: CostCategory) -> f64 {
        self.series(category).iter().sum()
    }

    pub fn total(&self) -> f64 {
        CostCategory::ALL
            .iter()
            .map(|category| self.category_total(*category))
            .sum()
    }

    pub fn monthly_totals(&self) -> Series {
        let mut totals = [0.0; MONTHS];
        for (month, total) in totals.iter_mut().enumerate() {
            *total = self.compute[month] + self.storage[month] + self.transfer[month];
        }
        totals
    }

    pub fn breakdown(&self) -> Vec<CategoryCost> {
        let total = self.total();
        CostCategory::ALL
            .iter()
            .map(|category| {
                let cost = self.category_total(*category);
                let share_pct = if total > 0.0 {
                    cost / total * 100.0
                } else {
                    0.0
                };
                CategoryCost::new(*category, cost, share_pct)
            })
            .collect()
    }

    pub fn peak_month_total(&self) -> f64 {
        self.monthly_totals().iter().copied().fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCost {
    category: CostCategory,
    cost: f64,
    share_pct: f64,
}

impl CategoryCost {
    pub fn new(category: CostCategory, cost: f64, share_pct: f64) -> Self {
        Self {
            category,
            cost,
            share_pct,
        }
    }

    pub fn category(&self) -> CostCategory {
        self.category
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn share_pct(&self) -> f64 {
        self.share_pct
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    baseline: MonthlySeries,
    optimized: MonthlySeries,
    baseline_total: f64,
    optimized_total: f64,
    savings: f64,
    savings_pct: f64,
}

impl ProjectionResult {
    pub fn new(baseline: MonthlySeries, optimized: MonthlySeries) -> Self {
        let baseline_total = baseline.total();
        let optimized_total = optimized.total();

        Self {
            baseline,
            optimized,
            baseline_total,
            optimized_total,
            savings: baseline_total - optimized_total,
            savings_pct: savings_pct(baseline_total, optimized_total),
        }
    }

    pub fn baseline(&self) -> &MonthlySeries {
        &self.baseline
    }

    pub fn optimized(&self) -> &MonthlySeries {
        &self.optimized
    }

    pub fn baseline_total(&self) -> f64 {
        self.baseline_total
    }

    pub fn optimized_total(&self) -> f64 {
        self.optimized_total
    }

    pub fn savings(&self) -> f64 {
        self.savings
    }

    pub fn savings_pct(&self) -> f64 {
        self.savings_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_parsing_accepts_display_names() {
        for size in WarehouseSize::ALL {
            assert_eq!(size.name().parse::<WarehouseSize>().unwrap(), size);
        }
        assert_eq!("x-large".parse::<WarehouseSize>().unwrap(), WarehouseSize::XLarge);
        assert_eq!("XS".parse::<WarehouseSize>().unwrap(), WarehouseSize::XSmall);
    }

    #[test]
    fn test_unknown_size_is_invalid_input() {
        let err = "XX-Large".parse::<WarehouseSize>().unwrap_err();
        assert_eq!(err.field(), "size");
    }

    #[test]
    fn test_size_ladder() {
        assert_eq!(WarehouseSize::XSmall.smaller(), None);
        assert_eq!(WarehouseSize::Small.smaller(), Some(WarehouseSize::XSmall));
        assert_eq!(WarehouseSize::Large.larger(), Some(WarehouseSize::XLarge));
        assert_eq!(WarehouseSize::XLarge.larger(), None);
    }

    #[test]
    fn test_size_reduction_resolve() {
        assert_eq!(
            SizeReduction::Same.resolve(WarehouseSize::Medium),
            WarehouseSize::Medium
        );
        assert_eq!(
            SizeReduction::To(WarehouseSize::Small).resolve(WarehouseSize::Medium),
            WarehouseSize::Small
        );
        assert_eq!("same".parse::<SizeReduction>().unwrap(), SizeReduction::Same);
        assert!("tiny".parse::<SizeReduction>().is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(UsageConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_warehouses_rejected() {
        let config = UsageConfig {
            warehouses: 0,
            ..UsageConfig::default()
        };
        assert_eq!(config.validate().unwrap_err().field(), "warehouses");
    }

    #[test]
    fn test_out_of_range_inputs_rejected() {
        let cases = vec![
            (
                UsageConfig {
                    hours_per_day: 0.0,
                    ..UsageConfig::default()
                },
                "hours_per_day",
            ),
            (
                UsageConfig {
                    active_days_per_month: 32,
                    ..UsageConfig::default()
                },
                "active_days_per_month",
            ),
            (
                UsageConfig {
                    storage_growth_pct: -1.0,
                    ..UsageConfig::default()
                },
                "storage_growth_pct",
            ),
            (
                UsageConfig {
                    transfer_tb: -0.5,
                    ..UsageConfig::default()
                },
                "transfer_tb",
            ),
            (
                UsageConfig {
                    base_discount_pct: 51.0,
                    ..UsageConfig::default()
                },
                "base_discount_pct",
            ),
            (
                UsageConfig {
                    storage_tb: f64::NAN,
                    ..UsageConfig::default()
                },
                "storage_tb",
            ),
        ];

        for (config, field) in cases {
            assert_eq!(config.validate().unwrap_err().field(), field);
        }
    }

    #[test]
    fn test_effective_hours_never_negative() {
        let mut config = UsageConfig::default();
        config.hours_per_day = 6.0;
        config.optimization.pause_hours_per_day = 10.0;
        assert_eq!(config.effective_hours_per_day(), 0.0);
    }

    #[test]
    fn test_breakdown_shares_sum_to_hundred() {
        let series = MonthlySeries::new([3.0; MONTHS], [1.0; MONTHS], [0.0; MONTHS]);
        let breakdown = series.breakdown();

        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].category(), CostCategory::Compute);
        assert_eq!(breakdown[0].share_pct(), 75.0);
        assert_eq!(breakdown[2].share_pct(), 0.0);
        let total_share: f64 = breakdown.iter().map(|row| row.share_pct()).sum();
        assert!((total_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_of_empty_series_has_zero_shares() {
        let series = MonthlySeries::new([0.0; MONTHS], [0.0; MONTHS], [0.0; MONTHS]);
        assert!(series.breakdown().iter().all(|row| row.share_pct() == 0.0));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: UsageConfig =
            serde_json::from_str(r#"{"warehouses": 4, "size": "Medium", "gen2": true}"#).unwrap();
        assert_eq!(config.warehouses, 4);
        assert_eq!(config.size, WarehouseSize::Medium);
        assert!(config.gen2);
        assert_eq!(config.hours_per_day, 12.0);
        assert_eq!(config.optimization.reduced_size, SizeReduction::Same);
    }

    #[test]
    fn test_config_rejects_unknown_size() {
        let result = serde_json::from_str::<UsageConfig>(r#"{"size": "Gigantic"}"#);
        assert!(result.is_err());
    }
}
