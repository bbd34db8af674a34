use crate::data_structures::WarehouseSize;
use crate::error::{EstimateError, EstimateResult};
use serde::{Deserialize, Serialize};

pub const CREDIT_UNIT_PRICE: f64 = 2.0; // $ per credit
pub const STORAGE_UNIT_PRICE: f64 = 40.0; // $ per TB per month
pub const TRANSFER_UNIT_PRICE: f64 = 90.0; // $ per TB per month

/// Credits per warehouse-hour, X-Small through X-Large.
pub const SIZE_CREDIT_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 4.0, 8.0, 16.0];

pub const GEN2_CREDIT_EFFICIENCY: f64 = 0.70;
pub const GEN2_SCALING_STEP: f64 = 0.05;
pub const GEN2_SCALING_CAP: f64 = 0.20;
pub const GEN2_PAUSE_EFFICIENCY: f64 = 0.90;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeMultipliers {
    #[serde(rename = "X-Small")]
    pub x_small: f64,
    #[serde(rename = "Small")]
    pub small: f64,
    #[serde(rename = "Medium")]
    pub medium: f64,
    #[serde(rename = "Large")]
    pub large: f64,
    #[serde(rename = "X-Large")]
    pub x_large: f64,
}

impl SizeMultipliers {
    pub fn get(&self, size: WarehouseSize) -> f64 {
        match size {
            WarehouseSize::XSmall => self.x_small,
            WarehouseSize::Small => self.small,
            WarehouseSize::Medium => self.medium,
            WarehouseSize::Large => self.large,
            WarehouseSize::XLarge => self.x_large,
        }
    }
}

impl Default for SizeMultipliers {
    fn default() -> Self {
        let [x_small, small, medium, large, x_large] = SIZE_CREDIT_MULTIPLIERS;
        Self {
            x_small,
            small,
            medium,
            large,
            x_large,
        }
    }
}

/// Unit prices used by a projection. Defaults to the published list prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceSheet {
    pub credit_unit_price: f64,
    pub storage_unit_price: f64,
    pub transfer_unit_price: f64,
    pub size_credit_multipliers: SizeMultipliers,
}

impl Default for PriceSheet {
    fn default() -> Self {
        Self {
            credit_unit_price: CREDIT_UNIT_PRICE,
            storage_unit_price: STORAGE_UNIT_PRICE,
            transfer_unit_price: TRANSFER_UNIT_PRICE,
            size_credit_multipliers: SizeMultipliers::default(),
        }
    }
}

impl PriceSheet {
    pub fn validate(&self) -> EstimateResult<()> {
        let prices = [
            ("credit_unit_price", self.credit_unit_price),
            ("storage_unit_price", self.storage_unit_price),
            ("transfer_unit_price", self.transfer_unit_price),
        ];
        for (field, price) in prices {
            if !price.is_finite() || price < 0.0 {
                return Err(EstimateError::invalid(
                    field,
                    format!("must be a non-negative price, got {}", price),
                ));
            }
        }

        for size in WarehouseSize::ALL {
            let multiplier = self.size_credit_multipliers.get(size);
            if !multiplier.is_finite() || multiplier <= 0.0 {
                return Err(EstimateError::invalid(
                    "size_credit_multipliers",
                    format!("{} multiplier must be positive, got {}", size, multiplier),
                ));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PricingProvider {
    price_sheet: PriceSheet,
}

impl PricingProvider {
    pub fn new() -> Self {
        Self {
            price_sheet: PriceSheet::default(),
        }
    }

    pub fn with_price_sheet(price_sheet: PriceSheet) -> EstimateResult<Self> {
        price_sheet.validate()?;
        Ok(Self { price_sheet })
    }

    pub fn price_sheet(&self) -> &PriceSheet {
        &self.price_sheet
    }

    pub fn credit_multiplier(&self, size: WarehouseSize) -> f64 {
        self.price_sheet.size_credit_multipliers.get(size)
    }

    pub fn compute_cost(&self, credits: f64) -> f64 {
        credits * self.price_sheet.credit_unit_price
    }

    pub fn storage_cost(&self, terabytes: f64) -> f64 {
        terabytes * self.price_sheet.storage_unit_price
    }

    pub fn transfer_cost(&self, terabytes: f64) -> f64 {
        terabytes * self.price_sheet.transfer_unit_price
    }
}

impl Default for PricingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_multipliers_follow_size_ladder() {
        let provider = PricingProvider::new();
        let multipliers: Vec<f64> = WarehouseSize::ALL
            .iter()
            .map(|size| provider.credit_multiplier(*size))
            .collect();
        assert_eq!(multipliers, vec![1.0, 2.0, 4.0, 8.0, 16.0]);
    }

    #[test]
    fn test_unit_costs() {
        let provider = PricingProvider::new();
        assert_eq!(provider.compute_cost(200.0), 400.0);
        assert_eq!(provider.storage_cost(5.0), 200.0);
        assert_eq!(provider.transfer_cost(2.0), 180.0);
    }

    #[test]
    fn test_overridden_price_sheet() {
        let sheet = PriceSheet {
            credit_unit_price: 3.0,
            ..PriceSheet::default()
        };
        let provider = PricingProvider::with_price_sheet(sheet).unwrap();
        assert_eq!(provider.compute_cost(10.0), 30.0);
    }

    #[test]
    fn test_invalid_price_sheet_rejected() {
        let negative = PriceSheet {
            storage_unit_price: -1.0,
            ..PriceSheet::default()
        };
        assert_eq!(
            PricingProvider::with_price_sheet(negative).err().unwrap().field(),
            "storage_unit_price"
        );

        let mut zero_multiplier = PriceSheet::default();
        zero_multiplier.size_credit_multipliers.medium = 0.0;
        assert!(PricingProvider::with_price_sheet(zero_multiplier).is_err());
    }

    #[test]
    fn test_price_sheet_partial_json() {
        let sheet: PriceSheet =
            serde_json::from_str(r#"{"credit_unit_price": 3.1, "size_credit_multipliers": {"X-Large": 20}}"#)
                .unwrap();
        assert_eq!(sheet.credit_unit_price, 3.1);
        assert_eq!(sheet.storage_unit_price, STORAGE_UNIT_PRICE);
        assert_eq!(sheet.size_credit_multipliers.get(WarehouseSize::XLarge), 20.0);
        assert_eq!(sheet.size_credit_multipliers.get(WarehouseSize::Small), 2.0);
    }
}
