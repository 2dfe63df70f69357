//! Author-facing notices for review status changes
//!
//! Only the message is composed here; delivery belongs to the mail relay.

use crate::submission::{Submission, SubmissionStatus};
use crate::types::*;

const SIGN_OFF: &str = "The Editorial Team";

/// Staff request asking an author to revise a chapter
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentRequest {
    pub submission_id: String,
    pub admin_note: String,
}

impl AdjustmentRequest {
    pub fn validate(&self) -> Result<()> {
        if self.submission_id.trim().is_empty() || self.admin_note.trim().is_empty() {
            return Err(DeskError::Validation(
                "Submission id and admin note are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// A composed plain-text message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Compose the notice for a status change, if that status warrants one.
pub fn compose_notice(submission: &Submission, status: SubmissionStatus) -> Option<Notice> {
    match status {
        SubmissionStatus::Approved => Some(approval_notice(submission)),
        SubmissionStatus::AdjustmentsRequested => Some(adjustment_notice(
            submission,
            submission.admin_note.as_deref(),
        )),
        SubmissionStatus::Received | SubmissionStatus::UnderReview => None,
    }
}

/// Compose the adjustments notice for an explicit staff request.
pub fn compose_adjustment_notice(
    submissions: &[Submission],
    request: &AdjustmentRequest,
) -> Result<Notice> {
    request.validate()?;

    let submission = submissions
        .iter()
        .find(|s| s.id == request.submission_id)
        .ok_or_else(|| DeskError::NotFound(format!("submission {}", request.submission_id)))?;

    if submission.email.trim().is_empty() || submission.author_name.trim().is_empty() {
        return Err(DeskError::Validation(format!(
            "Submission {} has no author name or email",
            submission.id
        )));
    }

    Ok(adjustment_notice(submission, Some(&request.admin_note)))
}

fn approval_notice(submission: &Submission) -> Notice {
    let body = format!(
        "Hello {name},\n\n\
         Good news! Your chapter \"{chapter}\" for the book \"{book}\" has been APPROVED \
         by our editorial team.\n\n\
         We will be in touch soon with the next steps.\n\n\
         {SIGN_OFF}\n",
        name = submission.author_name,
        chapter = submission.chapter_title,
        book = submission.book,
    );

    Notice {
        to: submission.email.clone(),
        subject: "Your chapter has been approved".to_string(),
        body,
    }
}

fn adjustment_notice(submission: &Submission, note: Option<&str>) -> Notice {
    let mut body = format!(
        "Hello {name},\n\n\
         Our editorial team has reviewed your chapter \"{chapter}\" for the book \"{book}\".\n\n\
         A few points need adjusting before it can move on to approval. \
         Please get in touch so we can guide you through the changes.\n",
        name = submission.author_name,
        chapter = submission.chapter_title,
        book = submission.book,
    );

    if let Some(note) = note.map(str::trim).filter(|n| !n.is_empty()) {
        body.push_str("\nNotes from the editorial team:\n");
        body.push_str(note);
        body.push('\n');
    }

    body.push('\n');
    body.push_str(SIGN_OFF);
    body.push('\n');

    Notice {
        to: submission.email.clone(),
        subject: "Adjustments needed on your submitted chapter".to_string(),
        body,
    }
}
