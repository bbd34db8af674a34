pub mod calculator;
pub mod calendar;
pub mod data_structures;
pub mod error;
pub mod loader;
pub mod optimizations;
pub mod pricing;
pub mod projector;

pub use calculator::Calculator;
pub use calendar::month_labels;
pub use data_structures::{
    CategoryCost, CostCategory, MonthlySeries, OptimizationOptions, ProjectionResult,
    SizeReduction, UsageConfig, WarehouseSize, MONTHS,
};
pub use error::{EstimateError, EstimateResult};
pub use loader::{ConfigLoader, EstimatorConfig};
pub use optimizations::{applied_optimizations, AppliedOptimization};
pub use pricing::{
    PriceSheet, PricingProvider, CREDIT_UNIT_PRICE, STORAGE_UNIT_PRICE, TRANSFER_UNIT_PRICE,
};
pub use projector::{project, CostProjector};

pub use anyhow::Result;

pub mod prelude {
    pub use crate::data_structures::{
        CostCategory, OptimizationOptions, ProjectionResult, SizeReduction, UsageConfig,
        WarehouseSize,
    };
    pub use crate::projector::{project, CostProjector};
    pub use anyhow::Result;
}
