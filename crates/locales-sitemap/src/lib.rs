mod config;
mod entry;
mod error;
mod generator;

pub use config::SitemapConfig;
pub use entry::{escape_xml, SitemapEntry};
pub use error::SitemapError;
pub use generator::{
    build_entries, collect_pages, generate, render_robots, render_sitemap, SitemapReport,
    SITEMAP_NS,
};

pub use anyhow;
