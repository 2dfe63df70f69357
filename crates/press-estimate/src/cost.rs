//! Print-run economics: production cost, revenue, royalties and profit

use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Production parameters for a single print run
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CostEstimationInput {
    pub page_count: f64,
    /// Number of copies printed
    pub print_run_size: f64,
    pub cost_per_page: f64,
    pub cover_price: f64,
    /// Author royalty as a percentage of the cover price, 0..=100
    pub royalty_percent: f64,
}

/// Monetary results in currency units. Profits go negative when costs exceed revenue.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CostEstimationResult {
    pub unit_production_cost: f64,
    pub total_production_cost: f64,
    pub gross_revenue: f64,
    pub total_author_royalties: f64,
    pub publisher_profit: f64,
    pub profit_per_unit: f64,
}

impl CostEstimationInput {
    /// Check every field before any arithmetic happens
    pub fn validate(&self) -> Result<()> {
        require_finite("page_count", self.page_count)?;
        if self.page_count <= 0.0 {
            return Err(EstimateError::invalid(
                "page_count",
                InvalidReason::NotPositive,
            ));
        }

        require_finite("print_run_size", self.print_run_size)?;
        if self.print_run_size <= 0.0 {
            return Err(EstimateError::DivisionByZero);
        }

        require_non_negative("cost_per_page", self.cost_per_page)?;
        require_non_negative("cover_price", self.cover_price)?;
        require_non_negative("royalty_percent", self.royalty_percent)?;
        if self.royalty_percent > 100.0 {
            return Err(EstimateError::invalid(
                "royalty_percent",
                InvalidReason::OutOfRange,
            ));
        }

        Ok(())
    }

    /// Cover price at which the publisher breaks even on this run.
    ///
    /// `None` when the author takes the whole cover price, since no price
    /// can then cover production.
    pub fn break_even_cover_price(&self) -> Result<Option<f64>> {
        self.validate()?;
        let publisher_share = 1.0 - self.royalty_percent / 100.0;
        if publisher_share <= 0.0 {
            return Ok(None);
        }
        Ok(Some(self.page_count * self.cost_per_page / publisher_share))
    }
}

/// Compute the economics of a print run.
pub fn estimate_cost(input: &CostEstimationInput) -> Result<CostEstimationResult> {
    input.validate()?;

    let unit_production_cost = input.page_count * input.cost_per_page;
    let total_production_cost = unit_production_cost * input.print_run_size;
    let gross_revenue = input.cover_price * input.print_run_size;
    let total_author_royalties =
        (input.cover_price * (input.royalty_percent / 100.0)) * input.print_run_size;
    let publisher_profit = gross_revenue - total_production_cost - total_author_royalties;
    let profit_per_unit = publisher_profit / input.print_run_size;

    let result = CostEstimationResult {
        unit_production_cost,
        total_production_cost,
        gross_revenue,
        total_author_royalties,
        publisher_profit,
        profit_per_unit,
    };

    // Finite inputs can still exceed f64 range when multiplied
    let outputs = [
        ("total_production_cost", result.total_production_cost),
        ("gross_revenue", result.gross_revenue),
        ("total_author_royalties", result.total_author_royalties),
        ("publisher_profit", result.publisher_profit),
    ];
    if let Some((field, _)) = outputs.into_iter().find(|(_, value)| !value.is_finite()) {
        return Err(EstimateError::invalid(field, InvalidReason::Overflow));
    }

    Ok(result)
}

fn require_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EstimateError::invalid(field, InvalidReason::NotFinite))
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(EstimateError::invalid(field, InvalidReason::Negative));
    }
    Ok(())
}
