use crate::calculator::Calculator;
use crate::data_structures::{
    CostCategory, MonthlySeries, ProjectionResult, Series, UsageConfig,
};
use crate::error::{EstimateError, EstimateResult};
use crate::pricing::{PriceSheet, PricingProvider};
use tracing::{debug, warn};

/// Projects twelve months of baseline and optimized spend from a
/// [`UsageConfig`]. Holds no per-projection state.
pub struct CostProjector {
    pricing_provider: PricingProvider,
    calculator: Calculator,
}

impl CostProjector {
    pub fn new() -> Self {
        Self {
            pricing_provider: PricingProvider::new(),
            calculator: Calculator::new(),
        }
    }

    pub fn with_price_sheet(price_sheet: PriceSheet) -> EstimateResult<Self> {
        Ok(Self {
            pricing_provider: PricingProvider::with_price_sheet(price_sheet)?,
            calculator: Calculator::new(),
        })
    }

    pub fn price_sheet(&self) -> &PriceSheet {
        self.pricing_provider.price_sheet()
    }

    pub fn project(&self, config: &UsageConfig) -> EstimateResult<ProjectionResult> {
        if let Err(e) = config.validate() {
            warn!(field = e.field(), "rejected usage config: {}", e);
            return Err(e);
        }

        let compute = self.baseline_compute(config);
        let storage = self.storage_series(config);
        let transfer = self.transfer_series(config);
        let optimized_compute = self.optimized_compute(config);

        let base_discount = config.base_discount_pct;
        let baseline = MonthlySeries::new(
            self.calculator.apply_discount(&compute, base_discount),
            self.calculator.apply_discount(&storage, base_discount),
            self.calculator.apply_discount(&transfer, base_discount),
        );

        // Storage and transfer have no optimization lever; only the
        // combined discount differs.
        let combined_discount = config.combined_discount_pct();
        let optimized = MonthlySeries::new(
            self.calculator
                .apply_discount(&optimized_compute, combined_discount),
            self.calculator.apply_discount(&storage, combined_discount),
            self.calculator.apply_discount(&transfer, combined_discount),
        );

        for scenario in [&baseline, &optimized] {
            if let Some(category) = overflowing_category(scenario) {
                let e = EstimateError::invalid(
                    input_field(category),
                    format!("{} projection overflows", category.name().to_lowercase()),
                );
                warn!(field = e.field(), "rejected usage config: {}", e);
                return Err(e);
            }
        }

        let result = ProjectionResult::new(baseline, optimized);
        debug!(
            baseline_total = result.baseline_total(),
            optimized_total = result.optimized_total(),
            savings_pct = result.savings_pct(),
            "projected annual spend"
        );

        Ok(result)
    }

    fn baseline_compute(&self, config: &UsageConfig) -> Series {
        let mut credits = self.calculator.monthly_credits(
            config.warehouses,
            self.pricing_provider.credit_multiplier(config.size),
            config.hours_per_day,
            config.active_days_per_month,
        );

        if config.gen2 {
            credits = self.calculator.apply_gen2(credits, config.warehouses, false);
        }

        self.calculator.linear_growth_series(
            self.pricing_provider.compute_cost(credits),
            config.compute_growth_pct,
        )
    }

    fn optimized_compute(&self, config: &UsageConfig) -> Series {
        let mut credits = self.calculator.monthly_credits(
            config.warehouses,
            self.pricing_provider
                .credit_multiplier(config.optimized_size()),
            config.effective_hours_per_day(),
            config.active_days_per_month,
        );

        if config.gen2 {
            let paused = config.optimization.pause_hours_per_day > 0.0;
            credits = self.calculator.apply_gen2(credits, config.warehouses, paused);
        }

        self.calculator.linear_growth_series(
            self.pricing_provider.compute_cost(credits),
            config.compute_growth_pct,
        )
    }

    fn storage_series(&self, config: &UsageConfig) -> Series {
        self.calculator
            .compounding_series(config.storage_tb, config.storage_growth_pct, |tb| {
                self.pricing_provider.storage_cost(tb)
            })
    }

    fn transfer_series(&self, config: &UsageConfig) -> Series {
        self.calculator
            .compounding_series(config.transfer_tb, config.transfer_growth_pct, |tb| {
                self.pricing_provider.transfer_cost(tb)
            })
    }
}

impl Default for CostProjector {
    fn default() -> Self {
        Self::new()
    }
}

/// First category whose yearly cost is not a finite number. When each
/// category is finite but their sum is not, the largest one is blamed.
fn overflowing_category(series: &MonthlySeries) -> Option<CostCategory> {
    let by_category = CostCategory::ALL
        .into_iter()
        .find(|category| !series.category_total(*category).is_finite());
    if by_category.is_some() || series.total().is_finite() {
        return by_category;
    }

    CostCategory::ALL.into_iter().max_by(|a, b| {
        series
            .category_total(*a)
            .total_cmp(&series.category_total(*b))
    })
}

fn input_field(category: CostCategory) -> &'static str {
    match category {
        CostCategory::Compute => "warehouses",
        CostCategory::Storage => "storage_tb",
        CostCategory::Transfer => "transfer_tb",
    }
}

/// Projects `config` against the default price sheet.
pub fn project(config: &UsageConfig) -> EstimateResult<ProjectionResult> {
    CostProjector::new().project(config)
}
