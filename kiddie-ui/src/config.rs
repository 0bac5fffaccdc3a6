//! TOML configuration for the dashboard.
//!
//! Everything has a default, so running without a config file gives the
//! standard 2025 setup. Example:
//!
//! ```toml
//! parent_rate = 32
//! planning_threshold = 2700
//! savings_estimate = "analyzed"
//! analysis_tax_free_amount = 1350
//! analysis_child_rate_amount = 1350
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use kiddie_core::models::{TaxThresholds, planning_threshold_2025};

/// Which aggregate-savings estimate the dashboard card shows.
///
/// The two estimates are independent by design and produce different
/// numbers; the config picks one, it never blends them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsPolicy {
    /// Full per-account kiddie-tax analysis.
    Analyzed,
    /// Simplified `excess × bracket × 0.5` haircut estimate.
    Haircut,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Parent marginal rate (percent) used by the savings estimates.
    pub parent_rate: Decimal,

    /// Flat threshold for the account-edit strategy rule.
    pub planning_threshold: Decimal,

    /// Which savings estimate feeds the dashboard card.
    pub savings_estimate: SavingsPolicy,

    /// Bracket widths for the what-if analysis view.
    pub analysis_tax_free_amount: Decimal,
    pub analysis_child_rate_amount: Decimal,
}

impl Default for AppConfig {
    fn default() -> Self {
        let analysis = TaxThresholds::irs_2025();
        Self {
            parent_rate: Decimal::from(24),
            planning_threshold: planning_threshold_2025(),
            savings_estimate: SavingsPolicy::Haircut,
            analysis_tax_free_amount: analysis.tax_free_amount,
            analysis_child_rate_amount: analysis.child_rate_amount,
        }
    }
}

impl AppConfig {
    /// Thresholds for the what-if analysis view.
    pub fn analysis_thresholds(&self) -> TaxThresholds {
        TaxThresholds::new(self.analysis_tax_free_amount, self.analysis_child_rate_amount)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn defaults_match_the_2025_setup() {
        let config = AppConfig::default();

        assert_eq!(config.parent_rate, dec!(24));
        assert_eq!(config.planning_threshold, dec!(2700));
        assert_eq!(config.savings_estimate, SavingsPolicy::Haircut);
        assert_eq!(config.analysis_thresholds(), TaxThresholds::irs_2025());
    }

    #[test]
    fn partial_toml_fills_the_rest_with_defaults() {
        let config: AppConfig = toml::from_str("parent_rate = 32\n").unwrap();

        assert_eq!(config.parent_rate, dec!(32));
        assert_eq!(config.planning_threshold, dec!(2700));
    }

    #[test]
    fn savings_policy_parses_lowercase_names() {
        let config: AppConfig = toml::from_str("savings_estimate = \"analyzed\"\n").unwrap();

        assert_eq!(config.savings_estimate, SavingsPolicy::Analyzed);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("kiddie_threshold = 2700\n");

        assert!(result.is_err());
    }

    #[test]
    fn custom_analysis_brackets_flow_into_thresholds() {
        let config: AppConfig = toml::from_str(
            "analysis_tax_free_amount = 1000\nanalysis_child_rate_amount = 2000\n",
        )
        .unwrap();

        assert_eq!(
            config.analysis_thresholds(),
            TaxThresholds::new(dec!(1000), dec!(2000))
        );
    }
}
