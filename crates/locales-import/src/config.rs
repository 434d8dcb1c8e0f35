use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportConfig {
    /// Directory holding the approved submissions, one json file each
    #[serde(default = "default_inbox_dir")]
    pub inbox_dir: PathBuf,

    #[serde(default = "default_workbook")]
    pub workbook: PathBuf,

    #[serde(default = "default_sheet")]
    pub sheet: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            inbox_dir: default_inbox_dir(),
            workbook: default_workbook(),
            sheet: default_sheet(),
        }
    }
}

fn default_inbox_dir() -> PathBuf {
    PathBuf::from("approved")
}

fn default_workbook() -> PathBuf {
    PathBuf::from("Informations sur les entreprises.xlsx")
}

fn default_sheet() -> String {
    String::from("Entreprises")
}
