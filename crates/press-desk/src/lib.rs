pub mod comments;
mod csv_io;
pub mod filter;
pub mod logistics;
pub mod notice;
pub mod sales;
mod submission;
mod types;

pub use comments::{ChapterComment, CommentThread, threads_by_chapter};
pub use csv_io::{
    export_to_csv, load_from_csv, load_print_jobs, read_records, save_print_jobs, to_csv_bytes,
    write_records,
};
pub use filter::SubmissionFilter;
pub use logistics::{PrintJob, PrintStage, group_by_stage};
pub use notice::{AdjustmentRequest, Notice, compose_adjustment_notice, compose_notice};
pub use sales::{Sale, SalesReport, Seller, SellerStanding, monthly_report, progress_percent};
pub use submission::*;
pub use types::*;
