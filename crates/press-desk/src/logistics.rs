//! Print logistics board: tracking print runs from the printer to the shelf

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::types::*;

/// Board columns, in the order a print run moves through them
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PrintStage {
    #[default]
    SentToPrinter,
    AtPrinter,
    ArrivedAtPublisher,
    AuthorQuota,
}

impl PrintStage {
    pub const ALL: [PrintStage; 4] = [
        PrintStage::SentToPrinter,
        PrintStage::AtPrinter,
        PrintStage::ArrivedAtPublisher,
        PrintStage::AuthorQuota,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<PrintStage> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<PrintStage> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn label(self) -> &'static str {
        match self {
            PrintStage::SentToPrinter => "Sent to printer",
            PrintStage::AtPrinter => "At the printer",
            PrintStage::ArrivedAtPublisher => "Arrived at publisher",
            PrintStage::AuthorQuota => "Author quota",
        }
    }

    fn key(self) -> &'static str {
        match self {
            PrintStage::SentToPrinter => "sent-to-printer",
            PrintStage::AtPrinter => "at-printer",
            PrintStage::ArrivedAtPublisher => "arrived-at-publisher",
            PrintStage::AuthorQuota => "author-quota",
        }
    }
}

impl fmt::Display for PrintStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PrintStage {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        PrintStage::ALL
            .into_iter()
            .find(|stage| stage.key() == wanted)
            .ok_or_else(|| DeskError::Validation(format!("Unknown print stage: {}", s)))
    }
}

/// One print run tracked on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    pub id: String,
    pub book_title: String,
    pub isbn: String,
    pub invoice: String,
    pub sent_on: Option<NaiveDate>,
    pub expected_on: Option<NaiveDate>,
    pub arrived_on: Option<NaiveDate>,
    pub requested_copies: u32,
    pub received_copies: Option<u32>,
    /// Whether part of the run is reserved for the authors
    pub author_quota: bool,
    pub stage: PrintStage,
}

impl PrintJob {
    /// Move to the next column. Returns false if already in the last one.
    pub fn advance(&mut self) -> bool {
        match self.stage.next() {
            Some(stage) => {
                self.stage = stage;
                true
            }
            None => false,
        }
    }

    /// Move to the previous column. Returns false if already in the first one.
    pub fn retreat(&mut self) -> bool {
        match self.stage.previous() {
            Some(stage) => {
                self.stage = stage;
                true
            }
            None => false,
        }
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&self.book_title, &self.isbn, &self.invoice]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    /// Copies still owed by the printer, once a delivery has been counted
    pub fn missing_copies(&self) -> Option<u32> {
        self.received_copies
            .map(|received| self.requested_copies.saturating_sub(received))
    }

    pub fn is_late(&self, today: NaiveDate) -> bool {
        match (self.expected_on, self.arrived_on) {
            (Some(expected), None) => today > expected,
            _ => false,
        }
    }
}

/// Jobs grouped into board columns. Every stage is present, possibly empty.
pub fn group_by_stage(jobs: &[PrintJob]) -> BTreeMap<PrintStage, Vec<&PrintJob>> {
    let mut columns: BTreeMap<PrintStage, Vec<&PrintJob>> =
        PrintStage::ALL.into_iter().map(|s| (s, Vec::new())).collect();
    for job in jobs {
        columns.entry(job.stage).or_default().push(job);
    }
    columns
}
