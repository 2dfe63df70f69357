use crate::types::*;
use chrono::{DateTime, Utc};
use press_estimate::Authorship;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review state of a submitted chapter
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Received,
    UnderReview,
    Approved,
    AdjustmentsRequested,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 4] = [
        SubmissionStatus::Received,
        SubmissionStatus::UnderReview,
        SubmissionStatus::Approved,
        SubmissionStatus::AdjustmentsRequested,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Received => "Received",
            SubmissionStatus::UnderReview => "Under review",
            SubmissionStatus::Approved => "Approved",
            SubmissionStatus::AdjustmentsRequested => "Adjustments requested",
        }
    }

    fn key(self) -> &'static str {
        match self {
            SubmissionStatus::Received => "received",
            SubmissionStatus::UnderReview => "under_review",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::AdjustmentsRequested => "adjustments_requested",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SubmissionStatus {
    type Err = DeskError;

    /// Accepts either the serialized key (`under_review`) or the label (`Under review`)
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        SubmissionStatus::ALL
            .into_iter()
            .find(|status| status.key() == wanted)
            .ok_or_else(|| DeskError::Validation(format!("Unknown submission status: {}", s)))
    }
}

/// A manuscript chapter sent in by an author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub author_name: String,
    pub email: String,
    pub book: String,
    pub participation: Authorship,
    pub chapter_title: String,
    pub file_url: String,
    pub status: SubmissionStatus,
    /// Note from the editorial staff, shown to the author
    pub admin_note: Option<String>,
    /// Free-form comment left by the author at submission time
    pub author_comment: Option<String>,
    pub responsible_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Staff edit of a submission row. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionUpdate {
    pub status: Option<SubmissionStatus>,
    /// An empty note clears the existing one
    pub admin_note: Option<String>,
    /// An empty id unassigns the submission
    pub responsible_user_id: Option<String>,
}

impl Submission {
    pub fn apply_update(&mut self, update: SubmissionUpdate, now: DateTime<Utc>) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(note) = update.admin_note {
            self.admin_note = non_blank(note);
        }
        if let Some(user_id) = update.responsible_user_id {
            self.responsible_user_id = non_blank(user_id);
        }
        self.updated_at = now;
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
