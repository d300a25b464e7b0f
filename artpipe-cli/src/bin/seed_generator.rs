//! seed-generator - CSV to normalized article JSON
//!
//! Exit codes: 0 success, 2 usage error, 3 data error.

use std::io;
use std::process::ExitCode;

use artpipe_cli::logging::init_tracing;
use artpipe_cli::{ingest, Streams};
use artpipe_common::config;

fn main() -> ExitCode {
    let loaded = config::load_or_default();
    init_tracing(&loaded.config.logging);
    loaded.log_outcome();

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    let mut streams = Streams {
        stdin: &mut stdin,
        stdout: &mut stdout,
        stderr: &mut stderr,
    };

    ingest::run(std::env::args_os(), &mut streams).into()
}
