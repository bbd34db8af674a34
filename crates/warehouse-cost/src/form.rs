//! Form fields backing the input panel. Each field knows how to display
//! itself and how to step its value within the documented bounds.

use warehouse_cost_estimator::data_structures::{
    MAX_ACTIVE_DAYS, MAX_DISCOUNT_PCT, MAX_GROWTH_PCT, MAX_HOURS_PER_DAY,
};
use warehouse_cost_estimator::{SizeReduction, UsageConfig, WarehouseSize};

const MAX_WAREHOUSES: u32 = 100;
const VOLUME_STEP_TB: f64 = 0.5;
const MIN_STEPPED_HOURS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Warehouses,
    Size,
    HoursPerDay,
    ActiveDays,
    ComputeGrowth,
    StorageTb,
    StorageGrowth,
    TransferTb,
    TransferGrowth,
    BaseDiscount,
    PauseHours,
    ReducedSize,
    ExtraDiscount,
    Gen2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Down,
    Up,
}

impl FormField {
    pub const ALL: [FormField; 14] = [
        FormField::Warehouses,
        FormField::Size,
        FormField::HoursPerDay,
        FormField::ActiveDays,
        FormField::ComputeGrowth,
        FormField::StorageTb,
        FormField::StorageGrowth,
        FormField::TransferTb,
        FormField::TransferGrowth,
        FormField::BaseDiscount,
        FormField::PauseHours,
        FormField::ReducedSize,
        FormField::ExtraDiscount,
        FormField::Gen2,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Warehouses => "Virtual Warehouses",
            FormField::Size => "Warehouse Size",
            FormField::HoursPerDay => "Hours per Day",
            FormField::ActiveDays => "Active Days / Month",
            FormField::ComputeGrowth => "Compute Growth",
            FormField::StorageTb => "Storage",
            FormField::StorageGrowth => "Storage Growth",
            FormField::TransferTb => "Data Transfer Out",
            FormField::TransferGrowth => "Transfer Growth",
            FormField::BaseDiscount => "Base Discount",
            FormField::PauseHours => "Pause Hours / Day",
            FormField::ReducedSize => "Reduced Size",
            FormField::ExtraDiscount => "Extra Discount",
            FormField::Gen2 => "Gen 2 Pricing",
        }
    }

    /// Fields in the "Potential Savings" group of the form.
    pub fn is_optimization(&self) -> bool {
        matches!(
            self,
            FormField::PauseHours | FormField::ReducedSize | FormField::ExtraDiscount
        )
    }

    pub fn display_value(&self, config: &UsageConfig) -> String {
        match self {
            FormField::Warehouses => config.warehouses.to_string(),
            FormField::Size => config.size.to_string(),
            FormField::HoursPerDay => format!("{}", config.hours_per_day),
            FormField::ActiveDays => config.active_days_per_month.to_string(),
            FormField::ComputeGrowth => format!("{}%", config.compute_growth_pct),
            FormField::StorageTb => format!("{:.1} TB", config.storage_tb),
            FormField::StorageGrowth => format!("{}%", config.storage_growth_pct),
            FormField::TransferTb => format!("{:.1} TB", config.transfer_tb),
            FormField::TransferGrowth => format!("{}%", config.transfer_growth_pct),
            FormField::BaseDiscount => format!("{}%", config.base_discount_pct),
            FormField::PauseHours => format!("{}", config.optimization.pause_hours_per_day),
            FormField::ReducedSize => config.optimization.reduced_size.to_string(),
            FormField::ExtraDiscount => format!("{}%", config.optimization.extra_discount_pct),
            FormField::Gen2 => (if config.gen2 { "On" } else { "Off" }).to_string(),
        }
    }

    pub fn step(&self, config: &mut UsageConfig, step: Step) {
        let delta = match step {
            Step::Down => -1.0,
            Step::Up => 1.0,
        };

        match self {
            FormField::Warehouses => {
                config.warehouses = match step {
                    Step::Down => config.warehouses.saturating_sub(1).max(1),
                    Step::Up => (config.warehouses + 1).min(MAX_WAREHOUSES),
                };
            }
            FormField::Size => {
                let next = match step {
                    Step::Down => config.size.smaller(),
                    Step::Up => config.size.larger(),
                };
                if let Some(size) = next {
                    config.size = size;
                }
            }
            FormField::HoursPerDay => {
                // Loaded configs may run below one hour; stepping never raises them.
                let floor = config.hours_per_day.min(MIN_STEPPED_HOURS);
                config.hours_per_day =
                    clamp_step(config.hours_per_day, delta, floor, MAX_HOURS_PER_DAY);
            }
            FormField::ActiveDays => {
                config.active_days_per_month = match step {
                    Step::Down => config.active_days_per_month.saturating_sub(1).max(1),
                    Step::Up => (config.active_days_per_month + 1).min(MAX_ACTIVE_DAYS),
                };
            }
            FormField::ComputeGrowth => {
                config.compute_growth_pct =
                    clamp_step(config.compute_growth_pct, delta, 0.0, MAX_GROWTH_PCT);
            }
            FormField::StorageTb => {
                config.storage_tb =
                    clamp_step(config.storage_tb, delta * VOLUME_STEP_TB, 0.0, f64::MAX);
            }
            FormField::StorageGrowth => {
                config.storage_growth_pct =
                    clamp_step(config.storage_growth_pct, delta, 0.0, MAX_GROWTH_PCT);
            }
            FormField::TransferTb => {
                config.transfer_tb =
                    clamp_step(config.transfer_tb, delta * VOLUME_STEP_TB, 0.0, f64::MAX);
            }
            FormField::TransferGrowth => {
                config.transfer_growth_pct =
                    clamp_step(config.transfer_growth_pct, delta, 0.0, MAX_GROWTH_PCT);
            }
            FormField::BaseDiscount => {
                config.base_discount_pct =
                    clamp_step(config.base_discount_pct, delta, 0.0, MAX_DISCOUNT_PCT);
            }
            FormField::PauseHours => {
                config.optimization.pause_hours_per_day = clamp_step(
                    config.optimization.pause_hours_per_day,
                    delta,
                    0.0,
                    MAX_HOURS_PER_DAY,
                );
            }
            FormField::ReducedSize => {
                config.optimization.reduced_size =
                    step_reduction(config.optimization.reduced_size, step);
            }
            FormField::ExtraDiscount => {
                config.optimization.extra_discount_pct = clamp_step(
                    config.optimization.extra_discount_pct,
                    delta,
                    0.0,
                    MAX_DISCOUNT_PCT,
                );
            }
            FormField::Gen2 => config.gen2 = !config.gen2,
        }
    }
}

fn clamp_step(value: f64, delta: f64, min: f64, max: f64) -> f64 {
    (value + delta).clamp(min, max)
}

// Same, X-Small, Small, ... X-Large
fn step_reduction(current: SizeReduction, step: Step) -> SizeReduction {
    match (current, step) {
        (SizeReduction::Same, Step::Down) => SizeReduction::Same,
        (SizeReduction::Same, Step::Up) => SizeReduction::To(WarehouseSize::XSmall),
        (SizeReduction::To(size), Step::Down) => size
            .smaller()
            .map(SizeReduction::To)
            .unwrap_or(SizeReduction::Same),
        (SizeReduction::To(size), Step::Up) => {
            SizeReduction::To(size.larger().unwrap_or(size))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warehouses_never_below_one() {
        let mut config = UsageConfig {
            warehouses: 1,
            ..UsageConfig::default()
        };
        FormField::Warehouses.step(&mut config, Step::Down);
        assert_eq!(config.warehouses, 1);
        FormField::Warehouses.step(&mut config, Step::Up);
        assert_eq!(config.warehouses, 2);
    }

    #[test]
    fn test_hours_below_one_are_not_raised_by_stepping_down() {
        let mut config = UsageConfig {
            hours_per_day: 0.5,
            ..UsageConfig::default()
        };
        FormField::HoursPerDay.step(&mut config, Step::Down);
        assert_eq!(config.hours_per_day, 0.5);
        FormField::HoursPerDay.step(&mut config, Step::Up);
        assert_eq!(config.hours_per_day, 1.5);

        let mut config = UsageConfig {
            hours_per_day: 1.5,
            ..UsageConfig::default()
        };
        FormField::HoursPerDay.step(&mut config, Step::Down);
        assert_eq!(config.hours_per_day, 1.0);
        FormField::HoursPerDay.step(&mut config, Step::Down);
        assert_eq!(config.hours_per_day, 1.0);
    }

    #[test]
    fn test_growth_clamped_to_twenty() {
        let mut config = UsageConfig {
            storage_growth_pct: 20.0,
            ..UsageConfig::default()
        };
        FormField::StorageGrowth.step(&mut config, Step::Up);
        assert_eq!(config.storage_growth_pct, 20.0);
    }

    #[test]
    fn test_volume_steps_by_half_terabyte() {
        let mut config = UsageConfig {
            transfer_tb: 0.0,
            ..UsageConfig::default()
        };
        FormField::TransferTb.step(&mut config, Step::Down);
        assert_eq!(config.transfer_tb, 0.0);
        FormField::TransferTb.step(&mut config, Step::Up);
        assert_eq!(config.transfer_tb, 0.5);
    }

    #[test]
    fn test_reduced_size_cycles_from_same() {
        let mut config = UsageConfig::default();
        FormField::ReducedSize.step(&mut config, Step::Up);
        assert_eq!(
            config.optimization.reduced_size,
            SizeReduction::To(WarehouseSize::XSmall)
        );
        FormField::ReducedSize.step(&mut config, Step::Down);
        assert_eq!(config.optimization.reduced_size, SizeReduction::Same);
    }

    #[test]
    fn test_gen2_toggles() {
        let mut config = UsageConfig::default();
        FormField::Gen2.step(&mut config, Step::Up);
        assert!(config.gen2);
        assert_eq!(FormField::Gen2.display_value(&config), "On");
        FormField::Gen2.step(&mut config, Step::Down);
        assert!(!config.gen2);
    }

    #[test]
    fn test_stepping_keeps_config_valid() {
        let mut config = UsageConfig::default();
        for field in FormField::ALL {
            for _ in 0..40 {
                field.step(&mut config, Step::Up);
            }
            assert!(config.validate().is_ok(), "{} went out of range", field.label());
            for _ in 0..80 {
                field.step(&mut config, Step::Down);
            }
            assert!(config.validate().is_ok(), "{} went out of range", field.label());
        }
    }
}
