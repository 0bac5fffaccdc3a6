//! Kiddie-tax calculation modules.
//!
//! This module provides the tax-liability analysis, the harvesting-strategy
//! recommendation rules, and the portfolio-wide aggregate metrics. All
//! calculations are pure functions over the domain models.

pub mod common;
pub mod kiddie_tax;
pub mod metrics;
pub mod strategy;

pub use kiddie_tax::{KiddieTaxCalculator, KiddieTaxError, TaxAnalysis};
pub use metrics::{
    PortfolioMetrics, analyzed_savings, haircut_savings, partial_realization_haircut,
    portfolio_metrics,
};
pub use strategy::{StrategyInputs, StrategyPreview, StrategyRecommendation, preview, recommend};
