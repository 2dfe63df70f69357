use crate::constants::*;
use crate::ratio::Ratio;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: InvalidReason,
    },
    #[error("Print run must be greater than zero")]
    DivisionByZero,
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EstimateError {
    pub(crate) fn invalid(field: &'static str, reason: InvalidReason) -> Self {
        EstimateError::Validation { field, reason }
    }
}

pub type Result<T> = std::result::Result<T, EstimateError>;

/// Why an input value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Missing,
    NotANumber,
    NotFinite,
    Negative,
    NotPositive,
    OutOfRange,
    Unrecognized,
    Overflow,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvalidReason::Missing => "value is required",
            InvalidReason::NotANumber => "not a number",
            InvalidReason::NotFinite => "must be a finite number",
            InvalidReason::Negative => "must not be negative",
            InvalidReason::NotPositive => "must be greater than zero",
            InvalidReason::OutOfRange => "out of range",
            InvalidReason::Unrecognized => "unrecognized value",
            InvalidReason::Overflow => "too large",
        };
        f.write_str(s)
    }
}

/// Physical page size of the printed book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrimSize {
    /// 16 x 23 cm
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "16x23"))]
    Cm16x23,
    /// 14 x 21 cm
    #[cfg_attr(feature = "serde", serde(rename = "14x21"))]
    Cm14x21,
}

impl TrimSize {
    /// Baseline text density before any authorship adjustment
    pub fn chars_per_page(self) -> u64 {
        match self {
            TrimSize::Cm16x23 => CHARS_PER_PAGE_16X23,
            TrimSize::Cm14x21 => CHARS_PER_PAGE_14X21,
        }
    }

    /// Width and height in millimeters
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            TrimSize::Cm16x23 => (160.0, 230.0),
            TrimSize::Cm14x21 => (140.0, 210.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TrimSize::Cm16x23 => "16x23",
            TrimSize::Cm14x21 => "14x21",
        }
    }
}

impl fmt::Display for TrimSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cm", self.name())
    }
}

impl FromStr for TrimSize {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(' ', "");
        match normalized.trim_end_matches("cm") {
            "16x23" => Ok(TrimSize::Cm16x23),
            "14x21" => Ok(TrimSize::Cm14x21),
            _ => Err(EstimateError::invalid(
                "trim_size",
                InvalidReason::Unrecognized,
            )),
        }
    }
}

/// Whether a manuscript has a single author or several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Authorship {
    #[default]
    Solo,
    CoAuthored,
}

impl Authorship {
    /// Multiplier applied to the characters-per-page baseline
    pub fn density(self) -> Ratio {
        match self {
            Authorship::Solo => Ratio::whole(1),
            Authorship::CoAuthored => CO_AUTHORED_DENSITY,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Authorship::Solo => "Solo",
            Authorship::CoAuthored => "Co-authored",
        }
    }
}

impl fmt::Display for Authorship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Authorship {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solo" => Ok(Authorship::Solo),
            "co-authored" | "coauthored" | "co_authored" => Ok(Authorship::CoAuthored),
            _ => Err(EstimateError::invalid(
                "authorship",
                InvalidReason::Unrecognized,
            )),
        }
    }
}
