//! json-io - Seed article generation with atomic JSON persistence
//!
//! Exit codes: 0 success, 1 on any failure.

use std::io;
use std::process::ExitCode;

use artpipe_cli::logging::init_tracing;
use artpipe_cli::{seed_tool, Streams};
use artpipe_common::config;

fn main() -> ExitCode {
    let loaded = config::load_or_default();
    init_tracing(&loaded.config.logging);
    loaded.log_outcome();

    let mut stdin = io::empty();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    let mut streams = Streams {
        stdin: &mut stdin,
        stdout: &mut stdout,
        stderr: &mut stderr,
    };

    seed_tool::run(std::env::args_os(), &loaded.config, &mut streams).into()
}
