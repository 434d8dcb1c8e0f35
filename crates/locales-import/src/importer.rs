use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;

use crate::config::ImportConfig;
use crate::inbox::{pending_submissions, read_submission};
use crate::row::DirectoryRow;
use crate::submission::ValidationError;
use crate::workbook::append_rows;

#[derive(Error, Debug)]
pub enum SkipReason {
    #[error("unreadable file: {0}")]
    Unreadable(String),

    #[error("invalid submission: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Debug)]
pub struct Skipped {
    pub file: PathBuf,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    /// Number of json files found in the inbox
    pub pending: usize,
    /// Files whose submission was appended to the workbook
    pub imported: Vec<PathBuf>,
    pub skipped: Vec<Skipped>,
    /// Imported files that couldn't be deleted, with the error
    pub undeleted: Vec<(PathBuf, String)>,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Imports every valid submission of the inbox into the workbook.
///
/// The workbook is only opened when at least one submission is valid, and
/// imported files are only deleted once the workbook is saved. Invalid or
/// unreadable files stay in the inbox.
pub fn run(config: &ImportConfig) -> Result<ImportReport> {
    log::info!(
        "Looking for approved submissions in {}",
        config.inbox_dir.display()
    );
    let files = pending_submissions(&config.inbox_dir)?;

    let mut report = ImportReport {
        pending: files.len(),
        ..Default::default()
    };

    if files.is_empty() {
        log::info!("No approved submission to process");
        return Ok(report);
    }
    log::info!("Found {} file(s)", files.len());

    let mut rows = vec![];
    let mut accepted = vec![];
    for path in files {
        let reason = match read_submission(&path) {
            Ok(raw) => match raw.validate() {
                Ok(submission) => {
                    rows.push(DirectoryRow::from(submission));
                    accepted.push(path);
                    continue;
                }
                Err(e) => SkipReason::from(e),
            },
            Err(e) => SkipReason::Unreadable(format!("{e:#}")),
        };
        log::warn!("Skipping {}: {reason}", file_name(&path));
        report.skipped.push(Skipped { file: path, reason });
    }

    if rows.is_empty() {
        log::warn!("No valid submission");
        return Ok(report);
    }

    log::info!(
        "Inserting {} new business(es) into {} (sheet {:?})",
        rows.len(),
        config.workbook.display(),
        config.sheet
    );
    append_rows(&config.workbook, &config.sheet, &rows)?;

    log::info!("Deleting processed files");
    delete_imported(accepted, &mut report);

    Ok(report)
}

/// Deletes every imported file, a failed deletion being recorded without stopping the others.
fn delete_imported(paths: Vec<PathBuf>, report: &mut ImportReport) {
    for path in paths {
        if let Err(e) = fs_err::remove_file(&path) {
            log::error!("Couldn't delete {}: {e}", file_name(&path));
            report.undeleted.push((path.clone(), e.to_string()));
        }
        report.imported.push(path);
    }
}
