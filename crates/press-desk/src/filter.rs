//! Search and filtering for the submissions table

use crate::submission::{Submission, SubmissionStatus};

/// Table filter. Each `None` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionFilter {
    /// Case-insensitive substring over author, email, book and chapter title
    pub search: Option<String>,
    pub status: Option<SubmissionStatus>,
    pub responsible_user_id: Option<String>,
}

impl SubmissionFilter {
    pub fn matches(&self, submission: &Submission) -> bool {
        if let Some(status) = self.status {
            if submission.status != status {
                return false;
            }
        }

        if let Some(ref user_id) = self.responsible_user_id {
            if submission.responsible_user_id.as_deref() != Some(user_id.as_str()) {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                [
                    &submission.author_name,
                    &submission.email,
                    &submission.book,
                    &submission.chapter_title,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
            }
        }
    }

    /// Matching submissions, newest first
    pub fn apply<'a>(&self, submissions: &'a [Submission]) -> Vec<&'a Submission> {
        let mut matched: Vec<&Submission> =
            submissions.iter().filter(|s| self.matches(s)).collect();
        // Stable sort keeps input order for equal timestamps
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }
}
