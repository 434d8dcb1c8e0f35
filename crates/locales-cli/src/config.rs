use std::path::Path;

use locales_import::ImportConfig;
use locales_sitemap::SitemapConfig;
use serde::{Deserialize, Serialize};

/// Content of the optional yaml configuration file, one section per job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalesConfig {
    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub import: ImportConfig,
}

impl LocalesConfig {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Ok(serde_yaml::from_reader(fs_err::File::open(path)?)?),
            None => Ok(Self::default()),
        }
    }
}
