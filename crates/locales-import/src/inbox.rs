use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;

use crate::submission::RawSubmission;

/// Json files waiting in the inbox, sorted by name.
pub fn pending_submissions(inbox: &Path) -> Result<Vec<PathBuf>> {
    if !inbox.is_dir() {
        anyhow::bail!("Inbox directory not found: {}", inbox.display());
    }

    let inbox_str = inbox
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Inbox path is not valid UTF-8: {}", inbox.display()))?;
    let pattern = format!("{}/*.json", Pattern::escape(inbox_str));
    let mut files = vec![];
    for path in glob::glob(&pattern)? {
        let path = path?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn read_submission(path: &Path) -> Result<RawSubmission> {
    let content = fs_err::read_to_string(path)?;
    let raw = serde_json::from_str(&content)
        .with_context(|| format!("Invalid submission {}", path.display()))?;
    Ok(raw)
}
