use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use env_logger::{Env, Target};
use locales_import::ImportConfig;
use locales_sitemap::SitemapConfig;

mod config;

use config::LocalesConfig;

/// Static site tooling for the local businesses directory
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Args {
    #[clap(subcommand)]
    pub cmd: SubCommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommand {
    #[clap(name = "sitemap")]
    Sitemap(SitemapArgs),
    #[clap(name = "import")]
    Import(ImportArgs),
    #[clap(hide = true)]
    Completion,
}

/// Generate sitemap.xml and robots.txt for the site directory
#[derive(Debug, clap::Args)]
pub struct SitemapArgs {
    /// Optional yaml configuration file
    #[clap(env = "LOCALES_CONFIG", parse(from_os_str), long)]
    pub config: Option<PathBuf>,
    /// Override the directory holding the generated html pages
    #[clap(parse(from_os_str), long)]
    pub site_dir: Option<PathBuf>,
    /// Override the public URL of the site
    #[clap(long)]
    pub base_url: Option<String>,
    /// When quiet no logs are outputted
    #[clap(long, short)]
    pub quiet: bool,
}

impl TryFrom<&SitemapArgs> for SitemapConfig {
    type Error = anyhow::Error;

    fn try_from(args: &SitemapArgs) -> Result<Self, Self::Error> {
        let mut conf = LocalesConfig::load(args.config.as_deref())?.sitemap;
        if let Some(site_dir) = &args.site_dir {
            conf.site_dir = site_dir.clone();
        }
        if let Some(base_url) = &args.base_url {
            conf.base_url = base_url.to_string();
        }
        Ok(conf)
    }
}

pub fn sitemap(args: SitemapArgs) -> anyhow::Result<()> {
    let conf: SitemapConfig = (&args).try_into()?;
    let today = chrono::Local::now().date_naive();
    let report = locales_sitemap::generate(&conf, today)?;

    println!("{} generated", report.sitemap_path.display());
    println!("{} page(s) added to the sitemap", report.entries.len());
    println!("Sample URLs:");
    for entry in report.preview(3) {
        println!("{entry}");
    }
    println!("{} generated", report.robots_path.display());
    Ok(())
}

/// Append approved submissions to the businesses workbook
#[derive(Debug, clap::Args)]
pub struct ImportArgs {
    /// Optional yaml configuration file
    #[clap(env = "LOCALES_CONFIG", parse(from_os_str), long)]
    pub config: Option<PathBuf>,
    /// Override the directory holding approved json submissions
    #[clap(parse(from_os_str), long)]
    pub inbox: Option<PathBuf>,
    /// Override the xlsx workbook to append to
    #[clap(parse(from_os_str), long)]
    pub workbook: Option<PathBuf>,
    /// Override the sheet holding the directory
    #[clap(long)]
    pub sheet: Option<String>,
    /// When quiet no logs are outputted
    #[clap(long, short)]
    pub quiet: bool,
}

impl TryFrom<&ImportArgs> for ImportConfig {
    type Error = anyhow::Error;

    fn try_from(args: &ImportArgs) -> Result<Self, Self::Error> {
        let mut conf = LocalesConfig::load(args.config.as_deref())?.import;
        if let Some(inbox) = &args.inbox {
            conf.inbox_dir = inbox.clone();
        }
        if let Some(workbook) = &args.workbook {
            conf.workbook = workbook.clone();
        }
        if let Some(sheet) = &args.sheet {
            conf.sheet = sheet.to_string();
        }
        Ok(conf)
    }
}

pub fn import(args: ImportArgs) -> anyhow::Result<()> {
    let conf: ImportConfig = (&args).try_into()?;
    let report = locales_import::run(&conf)?;

    if report.pending == 0 {
        println!("Nothing to import");
        return Ok(());
    }
    println!(
        "{} submission(s) imported, {} skipped",
        report.imported.len(),
        report.skipped.len()
    );
    for skipped in &report.skipped {
        println!("Skipped {}: {}", skipped.file.display(), skipped.reason);
    }
    for (file, e) in &report.undeleted {
        println!("Imported but not deleted {}: {e}", file.display());
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_env(
        Env::default().default_filter_or("locales_sitemap=info,locales_import=info"),
    )
    .target(Target::Stdout)
    .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.cmd {
        SubCommand::Sitemap(args) => {
            if !args.quiet {
                init_logger();
            }
            sitemap(args)
        }
        SubCommand::Import(args) => {
            if !args.quiet {
                init_logger();
            }
            import(args)
        }
        SubCommand::Completion => {
            generate(Shell::Bash, &mut Args::command(), "locales", &mut io::stdout());
            Ok(())
        }
    }
}
