//! Shared constants for book-length and print-run estimation
//!
//! The page model weights are kept as exact ratios so that the rounding to
//! whole signatures never depends on floating-point drift.

use crate::ratio::Ratio;

// =============================================================================
// Text Density
// =============================================================================

/// Characters per page on the larger 16x23 cm trim
pub const CHARS_PER_PAGE_16X23: u64 = 1500;

/// Characters per page on the smaller 14x21 cm trim
pub const CHARS_PER_PAGE_14X21: u64 = 1000;

/// Density multiplier for co-authored manuscripts (1.1, set in a smaller font)
pub const CO_AUTHORED_DENSITY: Ratio = Ratio::new(11, 10);

// =============================================================================
// Structural Elements
// =============================================================================

/// Pages consumed by each subtitle
pub const PAGES_PER_SUBTITLE: Ratio = Ratio::new(1, 10);

/// Pages consumed by each chapter opening (heading plus whitespace)
pub const PAGES_PER_CHAPTER_BREAK: Ratio = Ratio::whole(2);

// =============================================================================
// Images
// =============================================================================

/// Small images fit three to a page
pub const PAGES_PER_SMALL_IMAGE: Ratio = Ratio::new(1, 3);

/// Medium images fit two to a page
pub const PAGES_PER_MEDIUM_IMAGE: Ratio = Ratio::new(1, 2);

/// Large images take a full page
pub const PAGES_PER_LARGE_IMAGE: Ratio = Ratio::whole(1);

// =============================================================================
// Signatures
// =============================================================================

/// Pages per printed signature; estimates are rounded up to a multiple of this
pub const DEFAULT_SIGNATURE_PAGES: u64 = 8;

// =============================================================================
// Pricing
// =============================================================================

/// Author royalty offered when none is specified (percent of cover price)
pub const DEFAULT_ROYALTY_PERCENT: f64 = 10.0;

/// Currency code used when presenting monetary results
pub const DEFAULT_CURRENCY: &str = "BRL";
