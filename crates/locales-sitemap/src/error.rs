use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("Site directory not found: {0}")]
    MissingSiteDir(PathBuf),
}
