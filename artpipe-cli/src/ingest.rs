//! CSV ingest: CSV rows in, normalized article JSON out
//!
//! **Usage:**
//! ```bash
//! seed-generator --input=PATH|- [--published-only] [--limit[=N]] [--help]
//! ```
//!
//! The header row must name at least `title` and `published`. Rows are
//! padded or truncated to the header length, normalized in CSV mode,
//! optionally filtered and limited, then printed as a JSON array.

use std::ffi::OsString;
use std::fs::File;
use std::io::{Read, Write};

use anyhow::{bail, Context, Result};
use artpipe_common::pipeline::{published_only, take_limit};
use artpipe_common::store::to_pretty_json;
use artpipe_common::{normalize, Article, NormalizeMode, RawRecord};
use clap::{CommandFactory, Parser};
use serde_json::Value;
use tracing::{debug, info};

use crate::{report_error, Exit, Streams};

/// Columns the header row must contain
pub const REQUIRED_COLUMNS: [&str; 2] = ["title", "published"];

/// Sentinel input path for standard input
pub const STDIN_SENTINEL: &str = "-";

const EXAMPLES: &str = "\
Examples:
  seed-generator --input=articles.csv --published-only --limit=2
  cat articles.csv | seed-generator --input=-";

/// Convert a CSV file (title,excerpt,views,published,author) to normalized JSON
#[derive(Parser, Debug)]
#[command(name = "seed-generator")]
#[command(disable_help_flag = true, after_help = EXAMPLES)]
pub struct IngestArgs {
    /// Path to CSV file or '-' for standard input (required)
    #[arg(long, value_name = "PATH|-")]
    pub input: Option<String>,

    /// Include only published articles
    #[arg(long)]
    pub published_only: bool,

    /// Limit the number of articles output (bare flag means 1)
    #[arg(
        long,
        value_name = "N",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "1"
    )]
    pub limit: Option<String>,

    /// Display this help
    #[arg(long)]
    pub help: bool,
}

/// Run the CSV ingest tool
pub fn run<I, T>(args: I, streams: &mut Streams<'_>) -> Exit
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // --help short-circuits everything else, valid or not
    if args.iter().skip(1).any(|a| a.as_os_str() == "--help") {
        print_usage(streams.stdout);
        return Exit::Success;
    }

    let parsed = match IngestArgs::try_parse_from(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            let _ = write!(streams.stderr, "{}", e.render());
            print_usage(streams.stdout);
            return Exit::Usage;
        }
    };

    let Some(input) = parsed.input.as_deref() else {
        let _ = writeln!(streams.stderr, "Error: --input is required (path or '-')\n");
        print_usage(streams.stdout);
        return Exit::Usage;
    };

    let limit = match parsed.limit.as_deref().map(parse_limit).transpose() {
        Ok(limit) => limit,
        Err(message) => {
            let _ = writeln!(streams.stderr, "Error: {}\n", message);
            print_usage(streams.stdout);
            return Exit::Usage;
        }
    };

    let result = ingest(input, streams.stdin, parsed.published_only, limit)
        .and_then(|articles| write_json(streams.stdout, &articles));

    match result {
        Ok(()) => Exit::Success,
        Err(e) => {
            report_error(streams.stderr, "Error:", &e);
            Exit::Data
        }
    }
}

/// Parse `--limit`; values below 1 are raised to 1
pub fn parse_limit(value: &str) -> std::result::Result<usize, String> {
    let n: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("--limit expects an integer, got '{}'", value))?;
    Ok(usize::try_from(n.max(1)).unwrap_or(usize::MAX))
}

/// Read, normalize, filter and limit
pub fn ingest(
    input: &str,
    stdin: &mut dyn Read,
    only_published: bool,
    limit: Option<usize>,
) -> Result<Vec<Article>> {
    let rows = if input == STDIN_SENTINEL {
        read_csv(stdin)?
    } else {
        let file = File::open(input).with_context(|| format!("Unable to open input: {}", input))?;
        read_csv(file)?
    };
    info!("Read {} CSV row(s) from {}", rows.len(), input);

    let mut articles: Vec<Article> = rows
        .iter()
        .map(|row| normalize(row, NormalizeMode::Csv))
        .collect();

    if only_published {
        articles = published_only(articles);
        debug!("{} published article(s) kept", articles.len());
    }

    Ok(take_limit(articles, limit))
}

/// Parse CSV with a mandatory header row into raw records
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = reader.records();

    let header: Vec<String> = match records.next() {
        Some(record) => record
            .context("Unable to read CSV header")?
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == 0 {
                    name.trim_start_matches('\u{feff}').to_string()
                } else {
                    name.to_string()
                }
            })
            .collect(),
        None => Vec::new(),
    };

    if !REQUIRED_COLUMNS
        .iter()
        .all(|column| header.iter().any(|h| h == column))
    {
        bail!(
            "Invalid CSV headers (requires {})",
            REQUIRED_COLUMNS.join(",")
        );
    }

    let mut rows = Vec::new();
    for (line, record) in records.enumerate() {
        let record = record.with_context(|| format!("Malformed CSV at data row {}", line + 1))?;
        let mut raw = RawRecord::new();
        for (i, name) in header.iter().enumerate() {
            let cell = record.get(i).unwrap_or("");
            raw.insert(name.clone(), Value::String(cell.to_string()));
        }
        rows.push(raw);
    }

    Ok(rows)
}

fn write_json(stdout: &mut dyn Write, articles: &[Article]) -> Result<()> {
    let mut bytes = to_pretty_json(articles).context("Unable to encode JSON")?;
    bytes.push(b'\n');
    stdout
        .write_all(&bytes)
        .and_then(|()| stdout.flush())
        .context("Unable to write to standard output")
}

fn print_usage(stdout: &mut dyn Write) {
    let help = IngestArgs::command().render_help();
    let _ = writeln!(stdout, "{}", help);
}
