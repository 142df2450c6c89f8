use memchr::memchr_iter;

use crate::types::LF;

/// Number of line feed bytes in `chunk`.
#[must_use]
pub fn count_lf(chunk: &[u8]) -> usize {
    memchr_iter(LF, chunk).count()
}
