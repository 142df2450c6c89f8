use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';

/// The two-byte sequence rewritten to a single [`LF`].
pub const CRLF: &[u8; 2] = b"\r\n";

/// Error type for conversion operations.
///
/// Every I/O variant names the phase that failed and keeps the underlying
/// `std::io::Error` as its source; format with an error chain (e.g. anyhow's
/// `{:#}`) to see both.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be opened, either for counting or for converting.
    #[error("failed to open input file '{}'", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination could not be created or truncated.
    #[error("failed to create output file '{}'", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read failed during the line counting pass.
    ///
    /// `line_feeds` is the tally reached before the failure. `path` is set
    /// when the source is a named file.
    #[error("error counting lines in input file{} after {line_feeds} line feeds", in_file(.path))]
    Count {
        path: Option<PathBuf>,
        line_feeds: u64,
        #[source]
        source: io::Error,
    },

    /// A read failed during the converting pass.
    ///
    /// `lines` is the number of complete lines converted before the failure.
    #[error("error reading input file{} after {lines} converted lines", in_file(.path))]
    Read {
        path: Option<PathBuf>,
        lines: u64,
        #[source]
        source: io::Error,
    },

    /// A write (or the final flush) to the destination failed.
    #[error("error writing to output file{}", in_file(.path))]
    Write {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    /// A buffer size of zero was requested.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

impl Error {
    /// The underlying I/O error, if this is an I/O failure.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::OpenInput { source, .. }
            | Error::CreateOutput { source, .. }
            | Error::Count { source, .. }
            | Error::Read { source, .. }
            | Error::Write { source, .. } => Some(source),
            Error::InvalidConfig(_) => None,
        }
    }

    /// Name the source file on errors raised by the stream passes.
    #[must_use]
    pub fn with_input_path(mut self, input: &Path) -> Self {
        if let Error::Count { path, .. } | Error::Read { path, .. } = &mut self {
            path.get_or_insert_with(|| input.to_path_buf());
        }
        self
    }

    /// Name the destination file on write errors.
    #[must_use]
    pub fn with_output_path(mut self, output: &Path) -> Self {
        if let Error::Write { path, .. } = &mut self {
            path.get_or_insert_with(|| output.to_path_buf());
        }
        self
    }
}

fn in_file(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" '{}'", p.display()))
        .unwrap_or_default()
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
