//! Printed page-count estimation from manuscript structure

use crate::constants::*;
use crate::options::EstimatorOptions;
use crate::ratio::Ratio;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Structural metrics of a manuscript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PageEstimationInput {
    pub character_count: u64,
    pub subtitle_count: u64,
    pub chapter_count: u64,
    pub small_image_count: u64,
    pub medium_image_count: u64,
    pub large_image_count: u64,
    pub authorship: Authorship,
    pub trim_size: TrimSize,
}

/// Estimated length of the printed book
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageEstimationResult {
    /// Page count rounded up to whole signatures
    pub estimated_pages: u64,
    /// Small, medium and large images together
    pub total_image_count: u64,
    /// Unrounded page total, for display only
    pub raw_pages: f64,
    /// Number of signatures the estimate fills
    pub signatures: u64,
}

/// Estimate the page count with the default signature size and no floor.
pub fn estimate_pages(input: &PageEstimationInput) -> Result<PageEstimationResult> {
    estimate_pages_with(input, &EstimatorOptions::default())
}

/// Estimate the page count using the signature size and minimum from `options`.
pub fn estimate_pages_with(
    input: &PageEstimationInput,
    options: &EstimatorOptions,
) -> Result<PageEstimationResult> {
    options.validate()?;

    let total_image_count = input
        .small_image_count
        .checked_add(input.medium_image_count)
        .and_then(|n| n.checked_add(input.large_image_count))
        .ok_or(EstimateError::invalid(
            "total_image_count",
            InvalidReason::Overflow,
        ))?;

    let raw = raw_page_total(input)?;
    let signature = options.signature_pages;

    let rounded = raw
        .ceil_to_multiple(signature)
        .ok_or(EstimateError::invalid("estimated_pages", InvalidReason::Overflow))?;
    let floor = Ratio::whole(options.minimum_pages)
        .ceil_to_multiple(signature)
        .ok_or(EstimateError::invalid("minimum_pages", InvalidReason::Overflow))?;

    let estimated_pages = u64::try_from(rounded.max(floor))
        .map_err(|_| EstimateError::invalid("estimated_pages", InvalidReason::Overflow))?;

    Ok(PageEstimationResult {
        estimated_pages,
        total_image_count,
        raw_pages: raw.to_f64(),
        signatures: estimated_pages / signature,
    })
}

/// Sum of all page contributions before signature rounding
fn raw_page_total(input: &PageEstimationInput) -> Result<Ratio> {
    let chars_per_page = Ratio::whole(input.trim_size.chars_per_page())
        .checked_mul(input.authorship.density())
        .ok_or(EstimateError::invalid("trim_size", InvalidReason::Overflow))?;

    let text = Ratio::whole(input.character_count)
        .checked_div(chars_per_page)
        .ok_or(EstimateError::invalid(
            "character_count",
            InvalidReason::Overflow,
        ))?;

    let weighted = [
        ("subtitle_count", input.subtitle_count, PAGES_PER_SUBTITLE),
        ("small_image_count", input.small_image_count, PAGES_PER_SMALL_IMAGE),
        ("medium_image_count", input.medium_image_count, PAGES_PER_MEDIUM_IMAGE),
        ("large_image_count", input.large_image_count, PAGES_PER_LARGE_IMAGE),
        ("chapter_count", input.chapter_count, PAGES_PER_CHAPTER_BREAK),
    ];

    let mut total = text;
    for (field, count, pages_each) in weighted {
        total = pages_each
            .checked_mul_int(count)
            .and_then(|pages| total.checked_add(pages))
            .ok_or(EstimateError::invalid(field, InvalidReason::Overflow))?;
    }

    Ok(total)
}
