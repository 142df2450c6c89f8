use std::{
    ffi::OsString,
    path::{is_separator, Path, PathBuf},
};

/// Marker inserted into the output file name.
pub const UNIX_SUFFIX: &str = ".unix";

/// Output path for a converted `input`.
///
/// `.unix` goes right before the extension, or at the end when there is none:
/// `report.txt` becomes `report.unix.txt`, `data` becomes `data.unix` and
/// `archive.tar.gz` becomes `archive.tar.unix.gz`.
///
/// The extension is everything from the last `.` of the final path element,
/// dots at the start included: `.bashrc` becomes `.unix.bashrc` and `..`
/// becomes `..unix.`. The directory part is kept.
#[must_use]
pub fn unix_output_path(input: &Path) -> PathBuf {
    let bytes = input.as_os_str().as_encoded_bytes();
    let split = extension_start(bytes).unwrap_or(bytes.len());

    let mut name = Vec::with_capacity(bytes.len() + UNIX_SUFFIX.len());
    name.extend_from_slice(&bytes[..split]);
    name.extend_from_slice(UNIX_SUFFIX.as_bytes());
    name.extend_from_slice(&bytes[split..]);

    // SAFETY: `bytes` came from an `OsStr` and was split right before an ASCII
    // `.` (or at its end); only ASCII was inserted at the split.
    PathBuf::from(unsafe { OsString::from_encoded_bytes_unchecked(name) })
}

/// Index of the last `.` after the last path separator.
fn extension_start(path: &[u8]) -> Option<usize> {
    path.iter()
        .rposition(|&b| b == b'.' || is_separator(char::from(b)))
        .filter(|&i| path[i] == b'.')
}
