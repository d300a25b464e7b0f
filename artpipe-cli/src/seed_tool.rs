//! Seed tool: generate placeholder articles and persist them atomically
//!
//! **Usage:**
//! ```bash
//! json-io <output_path> <item_count> [--extra PATH]
//! ```
//!
//! Steps:
//! 1. Generate `item_count` articles (at least one)
//! 2. Merge an extra articles file if present (generated entries win)
//! 3. Save atomically to `output_path`
//! 4. Re-read the file and report count and first title

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use artpipe_common::config::TomlConfig;
use artpipe_common::merge::merge;
use artpipe_common::pipeline::summarize;
use artpipe_common::seed::generate_articles;
use artpipe_common::{normalize, store, Article, NormalizeMode, RawRecord};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, info};

use crate::{report_error, Exit, Streams};

/// Extra articles file looked up next to the output file
pub const EXTRA_FILE_NAME: &str = "articles.extra.json";

/// Generate placeholder articles, merge extras and write them atomically
#[derive(Parser, Debug)]
#[command(name = "json-io")]
pub struct SeedArgs {
    /// Destination JSON file
    pub output: PathBuf,

    /// Number of articles to generate (values below 1 mean 1)
    #[arg(allow_negative_numbers = true)]
    pub count: i64,

    /// Extra articles file to merge (must exist when given)
    #[arg(long, value_name = "PATH")]
    pub extra: Option<PathBuf>,
}

/// Run the seed tool
pub fn run<I, T>(args: I, config: &TomlConfig, streams: &mut Streams<'_>) -> Exit
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = match SeedArgs::try_parse_from(args) {
        Ok(parsed) => parsed,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(streams.stdout, "{}", e.render());
            return Exit::Success;
        }
        Err(e) => {
            let _ = write!(streams.stderr, "[ERR] {}", e.render());
            return Exit::Failure;
        }
    };

    match execute(&parsed, config, streams.stdout) {
        Ok(()) => Exit::Success,
        Err(e) => {
            report_error(streams.stderr, "[ERR]", &e);
            Exit::Failure
        }
    }
}

/// Where extra articles come from and whether they must exist
fn extra_source(args: &SeedArgs, config: &TomlConfig) -> (PathBuf, bool) {
    if let Some(path) = &args.extra {
        return (path.clone(), true);
    }
    if let Some(path) = &config.seed.extra_file {
        return (path.clone(), false);
    }
    let dir = args.output.parent().unwrap_or_else(|| Path::new(""));
    (dir.join(EXTRA_FILE_NAME), false)
}

/// Load extra records and normalize them as generic records
pub fn load_extra(path: &Path) -> Result<Vec<Article>> {
    let raw: Vec<RawRecord> = store::load(path)
        .with_context(|| format!("Unable to merge {}", path.display()))?;
    Ok(raw
        .iter()
        .map(|record| normalize(record, NormalizeMode::Record))
        .collect())
}

fn execute(args: &SeedArgs, config: &TomlConfig, out: &mut dyn Write) -> Result<()> {
    let count = usize::try_from(args.count.max(1)).unwrap_or(usize::MAX);
    let mut articles = generate_articles(count, &config.seed.tags);
    debug!("Generated {} article(s)", articles.len());

    let (extra_path, required) = extra_source(args, config);
    if required || extra_path.exists() {
        let extra = load_extra(&extra_path)?;
        articles = merge(articles, extra);
        writeln!(
            out,
            "[OK] Merged with {} ({} articles)",
            extra_path.display(),
            articles.len()
        )?;
    }

    store::save(&args.output, &articles)?;
    writeln!(out, "[OK] Seed written: {}", args.output.display())?;

    let loaded: Vec<Article> = store::load(&args.output)?;
    writeln!(out, "[OK] Reloaded: {} article(s).", loaded.len())?;
    writeln!(
        out,
        "First title: {}",
        loaded.first().map_or("N/A", |a| a.title.as_str())
    )?;

    let summary = summarize(&loaded);
    info!(
        "Seed summary: {} article(s), {} published, {} total views",
        summary.count, summary.published, summary.views_sum
    );

    Ok(())
}
