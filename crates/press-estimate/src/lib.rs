pub mod cost;
pub mod input;
mod constants;
mod options;
pub mod pages;
mod ratio;
mod types;

pub use constants::*;
pub use cost::{CostEstimationInput, CostEstimationResult, estimate_cost};
pub use input::{parse_amount, parse_count, parse_lenient};
pub use options::*;
pub use pages::{PageEstimationInput, PageEstimationResult, estimate_pages, estimate_pages_with};
pub use ratio::Ratio;
pub use types::*;
