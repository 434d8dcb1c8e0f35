use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use locales_sitemap::{generate, SitemapConfig, SitemapError, SITEMAP_NS};
use sxd_document::parser;
use texting_robots::Robot;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
}

fn site_with(files: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for f in files {
        fs::write(dir.path().join(f), "<html></html>").unwrap();
    }
    dir
}

fn config_for(dir: &Path) -> SitemapConfig {
    SitemapConfig {
        site_dir: dir.to_path_buf(),
        base_url: "https://example.org/entreprises".into(),
        ..Default::default()
    }
}

/// Returns `(loc, lastmod, priority)` for each `<url>` in document order.
fn read_sitemap(path: &Path) -> Vec<(String, String, String)> {
    let xml = fs::read_to_string(path).unwrap();
    let package = parser::parse(&xml).unwrap();
    let document = package.as_document();

    let mut context = sxd_xpath::Context::new();
    context.set_namespace("sm", SITEMAP_NS);
    let factory = sxd_xpath::Factory::new();

    let eval = |expr: &str| -> Vec<String> {
        let xpath = factory.build(expr).unwrap().unwrap();
        match xpath.evaluate(&context, document.root()).unwrap() {
            sxd_xpath::Value::Nodeset(nodes) => nodes
                .document_order()
                .into_iter()
                .map(|n| n.string_value())
                .collect(),
            other => panic!("Unexpected xpath value: {other:?}"),
        }
    };

    let locs = eval("//sm:url/sm:loc");
    let lastmods = eval("//sm:url/sm:lastmod");
    let priorities = eval("//sm:url/sm:priority");
    assert_eq!(locs.len(), lastmods.len());
    assert_eq!(locs.len(), priorities.len());

    locs.into_iter()
        .zip(lastmods)
        .zip(priorities)
        .map(|((l, m), p)| (l, m, p))
        .collect()
}

#[test]
fn missing_site_dir() {
    let dir = tempfile::tempdir().unwrap();
    let conf = config_for(&dir.path().join("nope"));

    let err = generate(&conf, today()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SitemapError>(),
        Some(SitemapError::MissingSiteDir(_))
    ));
    assert!(!dir.path().join("nope").exists());
}

#[test]
fn no_html_pages() {
    let dir = site_with(&["style.css", "data.json"]);
    let conf = config_for(dir.path());

    let report = generate(&conf, today()).unwrap();

    assert!(report.entries.is_empty());
    assert!(read_sitemap(&report.sitemap_path).is_empty());
    assert!(report.robots_path.exists());
}

#[test]
fn sorted_entries_with_priorities() {
    let dir = site_with(&["secteurs.html", "index.html", "apropos.html", "carte.html"]);
    let conf = config_for(dir.path());

    let report = generate(&conf, today()).unwrap();
    let urls = read_sitemap(&report.sitemap_path);

    assert_eq!(
        vec![
            (
                "https://example.org/entreprises/apropos.html".to_string(),
                "2024-05-17".to_string(),
                "0.8".to_string()
            ),
            (
                "https://example.org/entreprises/carte.html".to_string(),
                "2024-05-17".to_string(),
                "0.8".to_string()
            ),
            (
                "https://example.org/entreprises/index.html".to_string(),
                "2024-05-17".to_string(),
                "1.0".to_string()
            ),
            (
                "https://example.org/entreprises/secteurs.html".to_string(),
                "2024-05-17".to_string(),
                "0.8".to_string()
            ),
        ],
        urls
    );
    assert_eq!(2, report.preview(2).len());
    assert_eq!(4, report.preview(10).len());
}

#[test]
fn excluded_pages() {
    let dir = site_with(&[
        "index.html",
        "google0a1b2c3d.html",
        "carte_pme_individuelle.html",
        "notes.txt",
    ]);
    fs::create_dir(dir.path().join("archive.html")).unwrap();
    let conf = config_for(dir.path());

    let report = generate(&conf, today()).unwrap();
    let locs: Vec<_> = read_sitemap(&report.sitemap_path)
        .into_iter()
        .map(|(loc, _, _)| loc)
        .collect();

    assert_eq!(vec!["https://example.org/entreprises/index.html"], locs);
}

#[test]
fn special_characters_in_names() {
    let dir = site_with(&["r&d.html"]);
    let conf = config_for(dir.path());

    let report = generate(&conf, today()).unwrap();
    let urls = read_sitemap(&report.sitemap_path);

    assert_eq!("https://example.org/entreprises/r&d.html", urls[0].0);
}

#[test]
fn robots_points_to_sitemap() {
    let dir = site_with(&["index.html"]);
    let conf = config_for(dir.path());

    let report = generate(&conf, today()).unwrap();
    let robots_txt = fs::read_to_string(&report.robots_path).unwrap();

    assert_eq!(
        "User-agent: *\nAllow: /\n\nSitemap: https://example.org/entreprises/sitemap.xml\n",
        robots_txt
    );

    let robot = Robot::new("SomeBot", robots_txt.as_bytes()).unwrap();
    assert!(robot.allowed("https://example.org/entreprises/index.html"));
    assert_eq!(
        vec!["https://example.org/entreprises/sitemap.xml".to_string()],
        robot.sitemaps
    );
}

#[test]
fn overwrites_previous_output() {
    let dir = site_with(&["index.html"]);
    fs::write(dir.path().join("sitemap.xml"), "stale").unwrap();
    fs::write(dir.path().join("robots.txt"), "stale").unwrap();
    let conf = config_for(dir.path());

    let report = generate(&conf, today()).unwrap();

    assert_eq!(1, read_sitemap(&report.sitemap_path).len());
    assert!(fs::read_to_string(&report.robots_path)
        .unwrap()
        .starts_with("User-agent: *"));
}

#[test]
fn yaml_config_defaults() {
    let conf: SitemapConfig =
        serde_yaml::from_str("siteDir: public\nbaseUrl: https://example.org\n").unwrap();

    assert_eq!(Path::new("public"), conf.site_dir);
    assert_eq!("https://example.org", conf.base_url);
    assert_eq!(vec!["google".to_string()], conf.excluded_prefixes);
    assert_eq!("index.html", conf.home_page);
    assert_eq!("sitemap.xml", conf.sitemap_file);
}
