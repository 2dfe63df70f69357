use chrono::{TimeZone, Utc};
use press_desk::*;
use press_estimate::Authorship;

fn submission() -> Submission {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    Submission {
        id: "s-1".to_string(),
        author_name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        book: "Leadership Stories".to_string(),
        participation: Authorship::Solo,
        chapter_title: "Leading with care".to_string(),
        file_url: "uploads/s-1.docx".to_string(),
        status: SubmissionStatus::UnderReview,
        admin_note: None,
        author_comment: None,
        responsible_user_id: None,
        created_at: created,
        updated_at: created,
    }
}

#[test]
fn test_approval_notice() {
    let notice = compose_notice(&submission(), SubmissionStatus::Approved).unwrap();
    assert_eq!(notice.to, "ana@example.com");
    assert_eq!(notice.subject, "Your chapter has been approved");
    assert!(notice.body.starts_with("Hello Ana Souza,"));
    assert!(notice.body.contains("\"Leading with care\""));
    assert!(notice.body.contains("\"Leadership Stories\""));
}

#[test]
fn test_adjustment_notice_quotes_note() {
    let mut row = submission();
    let without_note = compose_notice(&row, SubmissionStatus::AdjustmentsRequested).unwrap();
    assert!(!without_note.body.contains("Notes from the editorial team"));

    row.admin_note = Some("Please cite your sources.".to_string());
    let with_note = compose_notice(&row, SubmissionStatus::AdjustmentsRequested).unwrap();
    assert_eq!(
        with_note.subject,
        "Adjustments needed on your submitted chapter"
    );
    assert!(with_note
        .body
        .contains("Notes from the editorial team:\nPlease cite your sources.\n"));
}

#[test]
fn test_no_notice_for_intermediate_statuses() {
    assert!(compose_notice(&submission(), SubmissionStatus::Received).is_none());
    assert!(compose_notice(&submission(), SubmissionStatus::UnderReview).is_none());
}

#[test]
fn test_adjustment_request_validation() {
    let rows = vec![submission()];

    let missing_note = AdjustmentRequest {
        submission_id: "s-1".to_string(),
        admin_note: "  ".to_string(),
    };
    assert!(matches!(
        compose_adjustment_notice(&rows, &missing_note),
        Err(DeskError::Validation(_))
    ));

    let unknown = AdjustmentRequest {
        submission_id: "s-9".to_string(),
        admin_note: "Fix typos".to_string(),
    };
    assert!(matches!(
        compose_adjustment_notice(&rows, &unknown),
        Err(DeskError::NotFound(_))
    ));

    let ok = AdjustmentRequest {
        submission_id: "s-1".to_string(),
        admin_note: "Fix typos".to_string(),
    };
    let notice = compose_adjustment_notice(&rows, &ok).unwrap();
    assert!(notice.body.contains("Fix typos"));
}

#[test]
fn test_adjustment_request_needs_contact() {
    let mut row = submission();
    row.email = String::new();
    let request = AdjustmentRequest {
        submission_id: "s-1".to_string(),
        admin_note: "Fix typos".to_string(),
    };
    assert!(matches!(
        compose_adjustment_notice(&[row], &request),
        Err(DeskError::Validation(_))
    ));
}
