use crate::data_structures::{SizeReduction, UsageConfig, WarehouseSize};
use std::fmt;

/// A lever the optimized scenario pulls relative to the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum AppliedOptimization {
    PausedHours(f64),
    ReducedSize(WarehouseSize),
    ExtraDiscount(f64),
    Gen2Pricing,
}

impl fmt::Display for AppliedOptimization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppliedOptimization::PausedHours(hours) => write!(
                f,
                "Paused warehouses for {} hours/day to reduce compute usage.",
                hours
            ),
            AppliedOptimization::ReducedSize(size) => write!(
                f,
                "Reduced warehouse size to {} for lower compute costs.",
                size
            ),
            AppliedOptimization::ExtraDiscount(pct) => {
                write!(f, "Applied an extra {}% discount due to optimized usage.", pct)
            }
            AppliedOptimization::Gen2Pricing => f.write_str(
                "Enabled Gen 2 Warehouse Pricing with 30% credit efficiency and scaling discounts.",
            ),
        }
    }
}

pub const NO_OPTIMIZATIONS: &str = "No additional optimizations applied.";

pub fn applied_optimizations(config: &UsageConfig) -> Vec<AppliedOptimization> {
    let mut applied = Vec::new();

    if config.optimization.pause_hours_per_day > 0.0 {
        applied.push(AppliedOptimization::PausedHours(
            config.optimization.pause_hours_per_day,
        ));
    }

    if let SizeReduction::To(size) = config.optimization.reduced_size {
        applied.push(AppliedOptimization::ReducedSize(size));
    }

    if config.optimization.extra_discount_pct > 0.0 {
        applied.push(AppliedOptimization::ExtraDiscount(
            config.optimization.extra_discount_pct,
        ));
    }

    if config.gen2 {
        applied.push(AppliedOptimization::Gen2Pricing);
    }

    applied
}
