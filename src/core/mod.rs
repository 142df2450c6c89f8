//! Byte-level routines with no I/O: counting line feeds in a chunk and
//! rewriting CRLF pairs in a line.

pub mod count;
pub mod crlf;

pub use count::count_lf;
pub use crlf::{normalize, normalize_line, normalize_str};
