//! CLI binary for dos2unix.
//!
//! A thin shim over the library: derives the output name, wires the console
//! observer to stdout and reports the outcome.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use dos2unix::{
    convert_file, io::DEFAULT_COUNT_BUFFER_SIZE, unix_output_path, ConsoleProgress,
    ConversionReport, Options,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: dos2unix <filename>";

/// Convert a file's CRLF line endings to LF.
#[derive(Parser, Debug)]
#[command(
    name = "dos2unix",
    version,
    about = "Convert a file's CRLF line endings to LF",
    long_about = "Convert a file's CRLF line endings to LF. The result is written next to the \
input with `.unix` inserted before the extension (notes.log -> notes.unix.log). Lone CR \
bytes are left untouched."
)]
struct Cli {
    /// File to convert.
    input: Option<PathBuf>,

    /// Do not print the progress line.
    #[arg(short, long)]
    quiet: bool,

    /// Chunk size in bytes for the line counting pass.
    #[arg(long, default_value_t = DEFAULT_COUNT_BUFFER_SIZE)]
    buffer_size: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let Some(input) = cli.input.as_deref() else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };
    let output = unix_output_path(input);

    let stdout = io::stdout();
    let mut console = ConsoleProgress::new(stdout.lock()).quiet(cli.quiet);
    console.announce_start(input);

    match run(&cli, input, &output, &mut console) {
        Ok(report) => {
            info!(
                lines = report.lines,
                replaced = report.replaced,
                bytes_written = report.bytes_written,
                "done"
            );
            console.announce_success(input, &output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            console.announce_failure(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(
    cli: &Cli,
    input: &Path,
    output: &Path,
    console: &mut ConsoleProgress<W>,
) -> Result<ConversionReport> {
    let options = Options::new().count_buffer_size(cli.buffer_size);
    options.validate().context("--buffer-size")?;
    let report = convert_file(input, output, &options, console)?;
    Ok(report)
}
