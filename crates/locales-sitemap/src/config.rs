use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapConfig {
    #[serde(default = "default_site_dir")]
    pub site_dir: PathBuf,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Pages starting with one of these are never listed (site-verification tokens)
    #[serde(default = "default_excluded_prefixes")]
    pub excluded_prefixes: Vec<String>,

    #[serde(default = "default_excluded_files")]
    pub excluded_files: Vec<String>,

    #[serde(default = "default_home_page")]
    pub home_page: String,

    #[serde(default = "default_home_priority")]
    pub home_priority: f32,

    #[serde(default = "default_page_priority")]
    pub page_priority: f32,

    #[serde(default = "default_sitemap_file")]
    pub sitemap_file: String,

    #[serde(default = "default_robots_file")]
    pub robots_file: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            site_dir: default_site_dir(),
            base_url: default_base_url(),
            excluded_prefixes: default_excluded_prefixes(),
            excluded_files: default_excluded_files(),
            home_page: default_home_page(),
            home_priority: default_home_priority(),
            page_priority: default_page_priority(),
            sitemap_file: default_sitemap_file(),
            robots_file: default_robots_file(),
        }
    }
}

impl SitemapConfig {
    /// Base URL without its trailing slashes, ready to be joined with a file name.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Absolute URL of a page located at the root of the site.
    pub fn page_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_url(), file_name)
    }

    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.excluded_prefixes
            .iter()
            .any(|prefix| file_name.starts_with(prefix.as_str()))
            || self.excluded_files.iter().any(|name| name == file_name)
    }

    pub fn priority_of(&self, file_name: &str) -> f32 {
        if file_name == self.home_page {
            self.home_priority
        } else {
            self.page_priority
        }
    }
}

fn default_site_dir() -> PathBuf {
    PathBuf::from("site")
}

fn default_base_url() -> String {
    String::from("https://projet-uqo.github.io/entreprises-locales")
}

fn default_excluded_prefixes() -> Vec<String> {
    vec![String::from("google")]
}

fn default_excluded_files() -> Vec<String> {
    vec![String::from("carte_pme_individuelle.html")]
}

fn default_home_page() -> String {
    String::from("index.html")
}

fn default_home_priority() -> f32 {
    1.0
}

fn default_page_priority() -> f32 {
    0.8
}

fn default_sitemap_file() -> String {
    String::from("sitemap.xml")
}

fn default_robots_file() -> String {
    String::from("robots.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excluded_names() {
        let conf = SitemapConfig::default();
        assert!(conf.is_excluded("google1234abcd.html"));
        assert!(conf.is_excluded("carte_pme_individuelle.html"));
        assert!(!conf.is_excluded("carte_pme.html"));
        assert!(!conf.is_excluded("index.html"));
    }

    #[test]
    fn page_url_ignores_trailing_slash() {
        let conf = SitemapConfig {
            base_url: "https://example.org/site/".into(),
            ..Default::default()
        };
        assert_eq!("https://example.org/site/a.html", conf.page_url("a.html"));
    }

    #[test]
    fn binary_priority() {
        let conf = SitemapConfig::default();
        assert_eq!(1.0, conf.priority_of("index.html"));
        assert_eq!(0.8, conf.priority_of("secteurs.html"));
    }
}
