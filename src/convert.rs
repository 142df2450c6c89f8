//! File-level conversion: count the source, then convert it into a fresh
//! destination.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use tracing::debug;

use crate::{
    io::{convert_stream, count_lines, ConversionReport, DEFAULT_COUNT_BUFFER_SIZE},
    progress::ProgressObserver,
    Error, Result,
};

/// Default capacity of the converting pass's reader and writer buffers.
pub const DEFAULT_IO_BUFFER_SIZE: usize = 8192;

/// Tunables of [`convert_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    count_buffer_size: usize,
    io_buffer_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            count_buffer_size: DEFAULT_COUNT_BUFFER_SIZE,
            io_buffer_size: DEFAULT_IO_BUFFER_SIZE,
        }
    }
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chunk size of the counting pass.
    #[must_use]
    pub fn count_buffer_size(mut self, size: usize) -> Self {
        self.count_buffer_size = size;
        self
    }

    /// Buffer capacity of the converting pass, used for both reading and
    /// writing.
    #[must_use]
    pub fn io_buffer_size(mut self, size: usize) -> Self {
        self.io_buffer_size = size;
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if a buffer size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.count_buffer_size == 0 {
            return Err(Error::InvalidConfig("count buffer size must be non-zero"));
        }
        if self.io_buffer_size == 0 {
            return Err(Error::InvalidConfig("io buffer size must be non-zero"));
        }
        Ok(())
    }
}

/// Count the line feeds in the file at `path`.
///
/// # Errors
///
/// [`Error::OpenInput`] if the file cannot be opened, [`Error::Count`] if a
/// read fails.
pub fn count_file_lines(path: &Path, options: &Options) -> Result<u64> {
    options.validate()?;
    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    count_lines(file, options.count_buffer_size).map_err(|e| e.with_input_path(path))
}

/// Convert the file at `input` into a new file at `output`, rewriting every
/// `\r\n` to `\n`.
///
/// Runs two passes over `input`: one to count lines for the progress ladder,
/// one to convert. `output` is created or truncated after counting succeeds.
/// On failure the destination is flushed, closed and left as written so far.
///
/// # Errors
///
/// Any open, create, read or write failure, tagged with its phase.
pub fn convert_file<P>(
    input: &Path,
    output: &Path,
    options: &Options,
    observer: &mut P,
) -> Result<ConversionReport>
where
    P: ProgressObserver + ?Sized,
{
    options.validate()?;
    observer.on_count_start();
    let total_lines = count_file_lines(input, options)?;
    debug!(input = %input.display(), total_lines, "counted lines");
    observer.on_count_complete(total_lines);

    let source = File::open(input).map_err(|source| Error::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let destination = File::create(output).map_err(|source| Error::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    convert_stream(
        BufReader::with_capacity(options.io_buffer_size, source),
        BufWriter::with_capacity(options.io_buffer_size, destination),
        total_lines,
        observer,
    )
    .map_err(|e| e.with_input_path(input).with_output_path(output))
}
