use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;

use crate::config::SitemapConfig;
use crate::entry::SitemapEntry;
use crate::error::SitemapError;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone)]
pub struct SitemapReport {
    pub entries: Vec<SitemapEntry>,
    pub sitemap_path: PathBuf,
    pub robots_path: PathBuf,
}

impl SitemapReport {
    pub fn preview(&self, n: usize) -> &[SitemapEntry] {
        &self.entries[..n.min(self.entries.len())]
    }
}

/// Lists the html pages of the site directory that belong in the sitemap, sorted by name.
pub fn collect_pages(config: &SitemapConfig) -> Result<Vec<String>> {
    let mut pages = vec![];
    for dir_entry in fs_err::read_dir(&config.site_dir)? {
        let dir_entry = dir_entry?;
        if !dir_entry.path().is_file() {
            continue;
        }
        let file_name = match dir_entry.file_name().into_string() {
            Ok(file_name) => file_name,
            Err(name) => {
                log::warn!("Skipping non UTF-8 file name: {name:?}");
                continue;
            }
        };
        if !file_name.ends_with(".html") || config.is_excluded(&file_name) {
            continue;
        }
        pages.push(file_name);
    }
    pages.sort();
    Ok(pages)
}

pub fn build_entries(
    config: &SitemapConfig,
    pages: &[String],
    today: NaiveDate,
) -> Vec<SitemapEntry> {
    pages
        .iter()
        .map(|page| SitemapEntry {
            loc: config.page_url(page),
            lastmod: today,
            priority: config.priority_of(page),
        })
        .collect()
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{SITEMAP_NS}\">\n"));
    for entry in entries {
        xml.push_str(&format!("  {entry}\n"));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Allows every crawler and points them to the sitemap.
pub fn render_robots(sitemap_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {sitemap_url}\n")
}

/// Writes the sitemap and robots files into the site directory.
///
/// Every entry gets `today` as its last modification date, whatever the actual
/// modification time of the page is.
pub fn generate(config: &SitemapConfig, today: NaiveDate) -> Result<SitemapReport> {
    if !config.site_dir.is_dir() {
        return Err(SitemapError::MissingSiteDir(config.site_dir.clone()).into());
    }

    let pages = collect_pages(config)?;
    let entries = build_entries(config, &pages, today);
    log::info!(
        "Found {} page(s) in {}",
        entries.len(),
        config.site_dir.display()
    );

    let sitemap_path = config.site_dir.join(&config.sitemap_file);
    fs_err::write(&sitemap_path, render_sitemap(&entries))?;
    log::info!("Wrote {}", sitemap_path.display());

    let robots_path = config.site_dir.join(&config.robots_file);
    let sitemap_url = config.page_url(&config.sitemap_file);
    fs_err::write(&robots_path, render_robots(&sitemap_url))?;
    log::info!("Wrote {}", robots_path.display());

    Ok(SitemapReport {
        entries,
        sitemap_path,
        robots_path,
    })
}
