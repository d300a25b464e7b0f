//! artpipe command-line tools
//!
//! Both binaries are thin shells over the `run` functions exported here,
//! which take the argument vector and the standard streams explicitly.

use std::io::{Read, Write};
use std::process::ExitCode;

pub mod ingest;
pub mod logging;
pub mod seed_tool;

/// Process exit status of a tool invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// 0
    Success,
    /// 1: any failure of the seed tool
    Failure,
    /// 2: missing or invalid flags
    Usage,
    /// 3: unreadable input, malformed CSV or processing failure
    Data,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Success => 0,
            Exit::Failure => 1,
            Exit::Usage => 2,
            Exit::Data => 3,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

/// Standard streams handed to a tool
pub struct Streams<'a> {
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

/// Print a one-line error followed by one `Cause:` line per chained source
pub fn report_error(stderr: &mut dyn Write, prefix: &str, err: &anyhow::Error) {
    // Nowhere left to report a failing stderr
    let _ = writeln!(stderr, "{} {}", prefix, err);
    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "Cause: {}", cause);
    }
}
