use std::string::FromUtf8Error;

use memchr::memmem;

use crate::types::{CRLF, LF};

/// Append `line` to `out` with every `\r\n` replaced by `\n`.
///
/// This is a literal substring replacement: a `\r` that is not immediately
/// followed by `\n` is copied through unchanged. `line` is normally a single
/// line including its terminator, but any byte slice is accepted and every
/// pair in it is replaced.
///
/// Returns the number of pairs replaced.
pub fn normalize_line(line: &[u8], out: &mut Vec<u8>) -> usize {
    let mut read_pos = 0;
    let mut replaced = 0;

    for i in memmem::find_iter(line, CRLF) {
        // Copy up to the CR, then resume at the LF so it is kept.
        out.extend_from_slice(&line[read_pos..i]);
        read_pos = i + 1;
        replaced += 1;
    }
    out.extend_from_slice(&line[read_pos..]);
    replaced
}

/// Convert a whole buffer at once.
#[must_use]
pub fn normalize(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    normalize_line(input, &mut output);
    output
}

/// Convert a whole string at once.
#[must_use]
pub fn normalize_str(input: &str) -> String {
    // Only ASCII CR bytes are removed, so valid UTF-8 stays valid.
    String::from_utf8(normalize(input.as_bytes())).unwrap_or_else(|FromUtf8Error { .. }| {
        unreachable!("normalize produced invalid UTF-8 (should be impossible)")
    })
}

/// Whether `line` ends with a line feed, i.e. is a terminated line.
#[must_use]
pub fn is_terminated(line: &[u8]) -> bool {
    line.last() == Some(&LF)
}
