//! Progress reporting for a conversion.
//!
//! Progress is a fixed ladder of 5% rungs driven by the number of lines
//! converted, sized from the line count taken before conversion starts. It is
//! an approximation and knows nothing about byte throughput.
//!
//! Callers receive events through [`ProgressObserver`]. All methods default to
//! no-ops so an observer only implements what it cares about.

use std::{
    fmt::Display,
    io::{self, Write},
    path::Path,
};

/// Number of rungs the expected line count is divided into.
pub const LADDER_STEPS: u64 = 20;

/// Percentage added per rung.
pub const STEP_PERCENT: u8 = 5;

/// Highest percentage the ladder reports on its own. 100% is only ever
/// reported once conversion has finished.
pub const LADDER_CEILING: u8 = 95;

/// Receives events from a conversion.
pub trait ProgressObserver {
    /// The line counting pass is about to start.
    fn on_count_start(&mut self) {}

    /// The line counting pass found `total_lines` line feeds.
    fn on_count_complete(&mut self, total_lines: u64) {
        let _ = total_lines;
    }

    /// The reported progress changed to `percent`.
    ///
    /// Called with `0` before the first line, once per rung after that, and
    /// exactly once with `100` when the stream is done.
    fn on_progress(&mut self, percent: u8) {
        let _ = percent;
    }
}

impl<P: ProgressObserver + ?Sized> ProgressObserver for &mut P {
    fn on_count_start(&mut self) {
        (**self).on_count_start();
    }

    fn on_count_complete(&mut self, total_lines: u64) {
        (**self).on_count_complete(total_lines);
    }

    fn on_progress(&mut self, percent: u8) {
        (**self).on_progress(percent);
    }
}

/// An observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {}

/// Progress state of one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressLadder {
    increment: u64,
    lines: u64,
    percent: u8,
}

impl ProgressLadder {
    /// A ladder for a source with `total_lines` line feeds.
    ///
    /// The increment is one rung per twentieth of the expected lines, with a
    /// floor of one line so that small and empty sources never divide by
    /// zero.
    #[must_use]
    pub fn new(total_lines: u64) -> Self {
        Self {
            increment: (total_lines / LADDER_STEPS).max(1),
            lines: 0,
            percent: 0,
        }
    }

    /// Lines per rung.
    #[must_use]
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Lines recorded so far.
    #[must_use]
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Percentage reached so far.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Record one more converted line.
    ///
    /// Returns the new percentage when a rung was climbed.
    pub fn line_done(&mut self) -> Option<u8> {
        self.lines += 1;
        if self.lines % self.increment != 0 || self.percent >= LADDER_CEILING {
            return None;
        }
        self.percent += STEP_PERCENT;
        Some(self.percent)
    }
}

/// Renders conversion messages for a terminal.
///
/// The progress line is overwritten in place with a carriage return. Write
/// errors are ignored: console output is informational only and must not
/// abort a conversion.
#[derive(Debug)]
pub struct ConsoleProgress<W> {
    out: W,
    quiet: bool,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out, quiet: false }
    }

    /// Suppress the counting notice and the progress line. Start, success and
    /// failure messages are still printed.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn announce_start(&mut self, input: &Path) {
        let _ = writeln!(
            self.out,
            "Reformatting file {}.. This may take a while",
            input.display()
        );
        let _ = self.out.flush();
    }

    pub fn announce_success(&mut self, input: &Path, output: &Path) {
        let _ = writeln!(
            self.out,
            "\nFile {} successfully converted to UNIX EOL and saved as {}",
            input.display(),
            output.display()
        );
        let _ = self.out.flush();
    }

    pub fn announce_failure(&mut self, error: &dyn Display) {
        let _ = writeln!(self.out, "\nError: {error}");
        let _ = self.out.flush();
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)?;
        self.out.flush()
    }
}

impl<W: Write> ProgressObserver for ConsoleProgress<W> {
    fn on_count_start(&mut self) {
        if !self.quiet {
            let _ = self.emit(format_args!("Checking file size..\n"));
        }
    }

    fn on_progress(&mut self, percent: u8) {
        if !self.quiet {
            let _ = self.emit(format_args!("\rProgress: {percent}%"));
        }
    }
}
