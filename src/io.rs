//! The two passes of a conversion over generic `std::io` streams.
//!
//! [`count_lines`] is the counting pass and [`convert_stream`] the converting
//! pass. Neither opens anything; see [`crate::convert`] for the file-level
//! operation that runs both.

use std::io::{BufRead, ErrorKind, Read, Write};

use tracing::{debug, warn};

use crate::{
    core::{count_lf, crlf::is_terminated, normalize_line},
    progress::{ProgressLadder, ProgressObserver},
    types::LF,
    Error, Result,
};

/// Default chunk size of the counting pass.
pub const DEFAULT_COUNT_BUFFER_SIZE: usize = 32 * 1024;

/// Count the line feed bytes in `reader`, reading `buf_size` bytes at a time.
///
/// Reaching the end of the stream ends the count. Interrupted reads are
/// retried; any other read error aborts with [`Error::Count`], which carries
/// the tally so far.
///
/// # Panics
///
/// Panics if `buf_size` is zero.
pub fn count_lines<R: Read>(mut reader: R, buf_size: usize) -> Result<u64> {
    assert!(buf_size > 0, "count buffer size must be non-zero");
    let mut buf = vec![0; buf_size].into_boxed_slice();
    let mut count = 0u64;

    loop {
        let bytes_read = match reader.read(&mut buf) {
            Ok(0) => return Ok(count),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(Error::Count {
                    path: None,
                    line_feeds: count,
                    source,
                })
            }
        };
        count += count_lf(&buf[..bytes_read]) as u64;
    }
}

/// Totals of one converting pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Terminated lines converted. An unterminated final segment is written
    /// but not counted.
    pub lines: u64,
    /// Bytes consumed from the source.
    pub bytes_read: u64,
    /// Bytes handed to the destination.
    pub bytes_written: u64,
    /// `\r\n` pairs rewritten to `\n`.
    pub replaced: u64,
}

/// Copy `reader` to `writer` line by line, rewriting `\r\n` to `\n`.
///
/// `total_lines` is the result of the counting pass and only sizes the
/// progress ladder. The observer sees `0%` first and `100%` last, whatever
/// happens in between.
///
/// `writer` is flushed before returning, on success and on failure. A flush
/// failure on the success path is reported as [`Error::Write`]; on the failure
/// path the original error wins.
pub fn convert_stream<R, W, P>(
    mut reader: R,
    mut writer: W,
    total_lines: u64,
    observer: &mut P,
) -> Result<ConversionReport>
where
    R: BufRead,
    W: Write,
    P: ProgressObserver + ?Sized,
{
    let mut ladder = ProgressLadder::new(total_lines);
    debug!(total_lines, increment = ladder.increment(), "converting");
    observer.on_progress(0);

    let outcome = copy_lines(&mut reader, &mut writer, &mut ladder, observer);
    let flushed = writer.flush();

    let report = match (outcome, flushed) {
        (Ok(report), Ok(())) => report,
        (Ok(_), Err(source)) => return Err(Error::Write { path: None, source }),
        (Err(e), flushed) => {
            if let Err(flush_err) = flushed {
                warn!(error = %flush_err, "flushing partial output failed");
            }
            return Err(e);
        }
    };

    observer.on_progress(100);
    debug!(
        lines = report.lines,
        bytes_read = report.bytes_read,
        bytes_written = report.bytes_written,
        replaced = report.replaced,
        "conversion complete"
    );
    Ok(report)
}

fn copy_lines<R, W, P>(
    reader: &mut R,
    writer: &mut W,
    ladder: &mut ProgressLadder,
    observer: &mut P,
) -> Result<ConversionReport>
where
    R: BufRead,
    W: Write,
    P: ProgressObserver + ?Sized,
{
    let mut report = ConversionReport::default();
    let mut line = Vec::new();
    let mut converted = Vec::new();

    loop {
        line.clear();
        converted.clear();

        // read_until retries interrupted reads itself.
        let bytes_read = reader
            .read_until(LF, &mut line)
            .map_err(|source| Error::Read {
                path: None,
                lines: report.lines,
                source,
            })?;
        if bytes_read == 0 {
            return Ok(report);
        }

        report.bytes_read += line.len() as u64;
        report.replaced += normalize_line(&line, &mut converted) as u64;
        writer
            .write_all(&converted)
            .map_err(|source| Error::Write { path: None, source })?;
        report.bytes_written += converted.len() as u64;

        if !is_terminated(&line) {
            // Final unterminated segment.
            return Ok(report);
        }

        report.lines += 1;
        if let Some(percent) = ladder.line_done() {
            observer.on_progress(percent);
        }
    }
}
