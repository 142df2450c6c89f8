#![doc = include_str!("../README.md")]

pub mod convert;
pub mod core;
pub mod io;
pub mod naming;
pub mod progress;
mod types;

pub use convert::{convert_file, count_file_lines, Options};
pub use io::{convert_stream, count_lines, ConversionReport};
pub use naming::unix_output_path;
pub use progress::{ConsoleProgress, NoopProgress, ProgressLadder, ProgressObserver};
pub use types::{Error, Result, CR, CRLF, LF};
