use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable estimator settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct EstimatorOptions {
    /// Page estimates are rounded up to a multiple of this
    pub signature_pages: u64,
    /// Smallest estimate ever reported; 0 keeps empty manuscripts at 0 pages
    pub minimum_pages: u64,
    pub default_royalty_percent: f64,
    pub currency: String,
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self {
            signature_pages: DEFAULT_SIGNATURE_PAGES,
            minimum_pages: 0,
            default_royalty_percent: DEFAULT_ROYALTY_PERCENT,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl EstimatorOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| EstimateError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| EstimateError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.signature_pages == 0 {
            return Err(EstimateError::Config(
                "Signature size must be at least one page".to_string(),
            ));
        }

        if !self.default_royalty_percent.is_finite()
            || !(0.0..=100.0).contains(&self.default_royalty_percent)
        {
            return Err(EstimateError::Config(format!(
                "Default royalty must be between 0 and 100 percent, got {}",
                self.default_royalty_percent
            )));
        }

        if self.currency.trim().is_empty() {
            return Err(EstimateError::Config("Currency code is empty".to_string()));
        }

        Ok(())
    }
}
