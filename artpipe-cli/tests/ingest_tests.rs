//! Integration tests for the CSV ingest tool
//!
//! Tests cover:
//! - Published filter and limit
//! - Standard input and file input
//! - Usage errors (exit 2) and data errors (exit 3)
//! - Help short-circuit

use artpipe_cli::{ingest, Exit, Streams};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Test helper: Run the tool in-process with captured streams
fn run_ingest(args: &[&str], stdin: &str) -> (Exit, String, String) {
    let mut input = stdin.as_bytes();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit = {
        let mut streams = Streams {
            stdin: &mut input,
            stdout: &mut out,
            stderr: &mut err,
        };
        let argv = std::iter::once("seed-generator").chain(args.iter().copied());
        ingest::run(argv, &mut streams)
    };
    (
        exit,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

/// Test helper: Parse stdout as a JSON array
fn parse_output(stdout: &str) -> Vec<Value> {
    let value: Value = serde_json::from_str(stdout).expect("stdout should be JSON");
    value.as_array().expect("stdout should be an array").clone()
}

const SAMPLE: &str = "\
title,excerpt,views,published,author
  Intro Laravel  ,First steps,120,true,Amina
PHP 8 en pratique,,300,no,Yassine
Composer & Autoload,  Tools  ,-5,YES,
";

#[test]
fn test_published_only_filters_rows() {
    let (exit, stdout, _) = run_ingest(
        &["--input=-", "--published-only"],
        "title,published\nA,true\nB,false\n",
    );

    assert_eq!(exit, Exit::Success);
    let items = parse_output(&stdout);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "A");
}

#[test]
fn test_normalizes_csv_rows() {
    let (exit, stdout, stderr) = run_ingest(&["--input=-"], SAMPLE);

    assert_eq!(exit, Exit::Success, "stderr: {}", stderr);
    let items = parse_output(&stdout);
    assert_eq!(items.len(), 3);

    assert_eq!(items[0]["title"], "Intro Laravel");
    assert_eq!(items[0]["slug"], "intro-laravel");
    assert_eq!(items[0]["excerpt"], "First steps");
    assert_eq!(items[0]["views"], 120);
    assert_eq!(items[0]["published"], true);
    assert_eq!(items[0]["author"], "Amina");

    assert_eq!(items[1]["excerpt"], Value::Null);
    assert_eq!(items[1]["published"], false);

    assert_eq!(items[2]["excerpt"], "Tools");
    assert_eq!(items[2]["views"], 0);
    assert_eq!(items[2]["published"], true);
    assert_eq!(items[2]["author"], "N/A");
}

#[test]
fn test_limit_truncates_output() {
    let (exit, stdout, _) = run_ingest(&["--input=-", "--limit=2"], SAMPLE);

    assert_eq!(exit, Exit::Success);
    assert_eq!(parse_output(&stdout).len(), 2);
}

#[test]
fn test_bare_limit_means_one() {
    let (exit, stdout, _) = run_ingest(&["--input=-", "--limit"], SAMPLE);

    assert_eq!(exit, Exit::Success);
    assert_eq!(parse_output(&stdout).len(), 1);
}

#[test]
fn test_filter_applies_before_limit() {
    let (exit, stdout, _) = run_ingest(&["--input=-", "--published-only", "--limit=5"], SAMPLE);

    assert_eq!(exit, Exit::Success);
    let titles: Vec<String> = parse_output(&stdout)
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Intro Laravel", "Composer & Autoload"]);
}

#[test]
fn test_reads_named_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("articles.csv");
    fs::write(&path, SAMPLE).unwrap();
    let arg = format!("--input={}", path.display());

    let (exit, stdout, _) = run_ingest(&[arg.as_str()], "");

    assert_eq!(exit, Exit::Success);
    assert_eq!(parse_output(&stdout).len(), 3);
}

#[test]
fn test_header_only_yields_empty_array() {
    let (exit, stdout, _) = run_ingest(&["--input=-"], "title,published\n");

    assert_eq!(exit, Exit::Success);
    assert!(parse_output(&stdout).is_empty());
}

#[test]
fn test_missing_input_is_usage_error() {
    let (exit, stdout, stderr) = run_ingest(&["--published-only"], "");

    assert_eq!(exit, Exit::Usage);
    assert_eq!(exit.code(), 2);
    assert!(stderr.contains("--input is required"));
    assert!(stdout.contains("--input"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let (exit, _, stderr) = run_ingest(&["--input=-", "--bogus"], "");

    assert_eq!(exit, Exit::Usage);
    assert!(!stderr.is_empty());
}

#[test]
fn test_non_numeric_limit_is_usage_error() {
    let (exit, _, stderr) = run_ingest(&["--input=-", "--limit=abc"], SAMPLE);

    assert_eq!(exit, Exit::Usage);
    assert!(stderr.contains("--limit"));
}

#[test]
fn test_help_ignores_other_flags() {
    let (exit, stdout, stderr) = run_ingest(&["--bogus", "--help"], "");

    assert_eq!(exit, Exit::Success);
    assert!(stdout.contains("--published-only"));
    assert!(stdout.contains("Examples:"));
    assert!(stderr.is_empty());
}

#[test]
fn test_unopenable_input_is_data_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.csv");
    let arg = format!("--input={}", missing.display());

    let (exit, stdout, stderr) = run_ingest(&[arg.as_str()], "");

    assert_eq!(exit, Exit::Data);
    assert_eq!(exit.code(), 3);
    assert!(stderr.contains("Unable to open input"));
    assert!(stdout.is_empty());
}

#[test]
fn test_missing_required_header_is_data_error() {
    let (exit, _, stderr) = run_ingest(&["--input=-"], "title,views\nA,1\n");

    assert_eq!(exit, Exit::Data);
    assert!(stderr.contains("Invalid CSV headers"));
}

#[test]
fn test_empty_input_is_data_error() {
    let (exit, _, _) = run_ingest(&["--input=-"], "");

    assert_eq!(exit, Exit::Data);
}
