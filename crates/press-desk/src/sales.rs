//! Monthly sales goals for the commercial team

use crate::types::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub name: String,
    /// Personal sales target for the month, in currency units
    pub personal_goal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub seller_id: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// One seller's row in the monthly ranking
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStanding {
    pub seller_id: String,
    pub name: String,
    pub personal_goal: f64,
    pub total_sold: f64,
    /// `total_sold / personal_goal * 100`, or 0 without a positive goal
    pub progress_percent: f64,
    pub goal_reached: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    pub year: i32,
    pub month: u32,
    pub total_sold: f64,
    pub overall_goal: Option<f64>,
    /// Set only when the best seller actually sold something
    pub top_seller_id: Option<String>,
    /// Sorted by total sold, highest first
    pub standings: Vec<SellerStanding>,
}

impl SalesReport {
    /// Progress of the whole team against the overall goal
    pub fn overall_progress_percent(&self) -> f64 {
        self.overall_goal
            .map(|goal| progress_percent(self.total_sold, goal))
            .unwrap_or(0.0)
    }
}

pub fn progress_percent(total: f64, goal: f64) -> f64 {
    if goal > 0.0 { total / goal * 100.0 } else { 0.0 }
}

/// Build the ranking for one calendar month.
///
/// Sales dated outside the month, or belonging to unknown sellers, are ignored.
pub fn monthly_report(
    sellers: &[Seller],
    sales: &[Sale],
    year: i32,
    month: u32,
    overall_goal: Option<f64>,
) -> Result<SalesReport> {
    if !(1..=12).contains(&month) {
        return Err(DeskError::Validation(format!("Invalid month: {}", month)));
    }
    if let Some(bad) = sales.iter().find(|s| !s.amount.is_finite()) {
        return Err(DeskError::Validation(format!(
            "Sale for seller {} has a non-finite amount",
            bad.seller_id
        )));
    }

    let mut totals: HashMap<&str, f64> = HashMap::new();
    for sale in sales
        .iter()
        .filter(|s| s.date.year() == year && s.date.month() == month)
    {
        *totals.entry(sale.seller_id.as_str()).or_default() += sale.amount;
    }

    let mut standings: Vec<SellerStanding> = sellers
        .iter()
        .map(|seller| {
            let total_sold = totals.get(seller.id.as_str()).copied().unwrap_or(0.0);
            let progress = progress_percent(total_sold, seller.personal_goal);
            SellerStanding {
                seller_id: seller.id.clone(),
                name: seller.name.clone(),
                personal_goal: seller.personal_goal,
                total_sold,
                progress_percent: progress,
                goal_reached: progress >= 100.0,
            }
        })
        .collect();

    // First seller wins ties
    let top_seller_id = standings
        .iter()
        .fold(None::<&SellerStanding>, |best, s| match best {
            Some(b) if s.total_sold <= b.total_sold => Some(b),
            _ => Some(s),
        })
        .filter(|s| s.total_sold > 0.0)
        .map(|s| s.seller_id.clone());

    let total_sold: f64 = standings.iter().map(|s| s.total_sold).sum();

    standings.sort_by(|a, b| b.total_sold.total_cmp(&a.total_sold));

    Ok(SalesReport {
        year,
        month,
        total_sold,
        overall_goal,
        top_seller_id,
        standings,
    })
}
