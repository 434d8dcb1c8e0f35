mod config;
mod importer;
mod inbox;
mod row;
mod submission;
mod workbook;

pub use config::ImportConfig;
pub use importer::{run, ImportReport, SkipReason, Skipped};
pub use inbox::{pending_submissions, read_submission};
pub use row::{DirectoryRow, COLUMNS};
pub use submission::{escape_html, Field, RawSubmission, Submission, ValidationError};
pub use workbook::{append_rows, WorkbookError};

pub use anyhow;
