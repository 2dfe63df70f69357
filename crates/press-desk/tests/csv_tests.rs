use chrono::{NaiveDate, TimeZone, Utc};
use press_desk::*;
use press_estimate::Authorship;
use tempfile::NamedTempFile;

fn sample_submissions() -> Vec<Submission> {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
    vec![
        Submission {
            id: "s-1".to_string(),
            author_name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            book: "Leadership Stories".to_string(),
            participation: Authorship::CoAuthored,
            chapter_title: "Leading, with care".to_string(),
            file_url: "uploads/s-1.docx".to_string(),
            status: SubmissionStatus::AdjustmentsRequested,
            admin_note: Some("Shorten the intro".to_string()),
            author_comment: None,
            responsible_user_id: Some("editor-1".to_string()),
            created_at: created,
            updated_at: created,
        },
        Submission {
            id: "s-2".to_string(),
            author_name: "Bruno Lima".to_string(),
            email: "bruno@example.com".to_string(),
            book: "Leadership Stories".to_string(),
            participation: Authorship::Solo,
            chapter_title: "Quiet \"strength\"".to_string(),
            file_url: "uploads/s-2.docx".to_string(),
            status: SubmissionStatus::Received,
            admin_note: None,
            author_comment: Some("Second draft".to_string()),
            responsible_user_id: None,
            created_at: created,
            updated_at: created,
        },
    ]
}

#[tokio::test]
async fn test_export_and_load_submissions() {
    let submissions = sample_submissions();
    let temp_file = NamedTempFile::new().unwrap();

    export_to_csv(&submissions, temp_file.path()).await.unwrap();
    let loaded = load_from_csv(temp_file.path()).await.unwrap();

    assert_eq!(loaded, submissions);
}

#[test]
fn test_csv_layout() {
    let bytes = to_csv_bytes(&sample_submissions()).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let mut lines = text.lines();

    assert_eq!(
        lines.next().unwrap(),
        "id,author_name,email,book,participation,chapter_title,file_url,status,\
         admin_note,author_comment,responsible_user_id,created_at,updated_at"
    );
    let first = lines.next().unwrap();
    assert!(first.starts_with("s-1,Ana Souza,ana@example.com,Leadership Stories,co-authored,"));
    assert!(first.contains("\"Leading, with care\""));
    assert!(first.contains("adjustments_requested"));
}

#[test]
fn test_empty_export_is_empty() {
    let rows: Vec<Submission> = Vec::new();
    assert!(to_csv_bytes(&rows).unwrap().is_empty());
}

#[tokio::test]
async fn test_load_rejects_unknown_status() {
    let temp_file = NamedTempFile::new().unwrap();
    let csv = "id,author_name,email,book,participation,chapter_title,file_url,status,\
               admin_note,author_comment,responsible_user_id,created_at,updated_at\n\
               x,A,a@example.com,B,solo,C,f,archived,,,,2024-05-01T09:30:00Z,2024-05-01T09:30:00Z\n";
    tokio::fs::write(temp_file.path(), csv).await.unwrap();

    let result = load_from_csv(temp_file.path()).await;
    assert!(matches!(result, Err(DeskError::Csv(_))));
}

#[tokio::test]
async fn test_load_missing_file() {
    let result = load_from_csv("/nonexistent/submissions.csv").await;
    assert!(matches!(result, Err(DeskError::Io(_))));
}

#[tokio::test]
async fn test_print_jobs_round_trip() {
    let jobs = vec![PrintJob {
        id: "p-1".to_string(),
        book_title: "Healthy Habits".to_string(),
        isbn: "978-65-0000-000-1".to_string(),
        invoice: "NF-123".to_string(),
        sent_on: NaiveDate::from_ymd_opt(2024, 4, 2),
        expected_on: NaiveDate::from_ymd_opt(2024, 4, 20),
        arrived_on: None,
        requested_copies: 500,
        received_copies: None,
        author_quota: true,
        stage: PrintStage::AtPrinter,
    }];
    let temp_file = NamedTempFile::new().unwrap();

    save_print_jobs(&jobs, temp_file.path()).await.unwrap();
    let loaded = load_print_jobs(temp_file.path()).await.unwrap();

    assert_eq!(loaded, jobs);
}
