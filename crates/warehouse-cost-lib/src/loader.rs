use crate::data_structures::UsageConfig;
use crate::pricing::PriceSheet;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// On-disk estimator settings: the usage form plus an optional price
/// override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub usage: UsageConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PriceSheet>,
}

impl EstimatorConfig {
    pub fn price_sheet(&self) -> PriceSheet {
        self.pricing.clone().unwrap_or_default()
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<EstimatorConfig> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        let config = self
            .parse_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded estimator config");
        Ok(config)
    }

    pub fn parse_str(&self, content: &str) -> Result<EstimatorConfig> {
        let config: EstimatorConfig =
            serde_json::from_str(content).context("Failed to parse JSON")?;

        config.usage.validate()?;
        if let Some(pricing) = &config.pricing {
            pricing.validate()?;
        }

        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, config: &EstimatorConfig) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        info!(path = %path.display(), "saved estimator config");
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
