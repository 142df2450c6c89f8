#![no_main]

use dos2unix::{convert_stream, core::normalize, count_lines, NoopProgress};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Control byte layout (data[0]): counting chunk size minus one.
    let buf_size = usize::from(data[0]) + 1;
    let payload = &data[1..];

    let total = count_lines(payload, buf_size).expect("reading a slice cannot fail");
    assert_eq!(total, payload.iter().filter(|b| **b == b'\n').count() as u64);

    let mut streamed = Vec::new();
    let report = convert_stream(payload, &mut streamed, total, &mut NoopProgress)
        .expect("writing to a Vec cannot fail");

    let whole = normalize(payload);
    assert_eq!(streamed, whole);
    assert_eq!(report.bytes_read, payload.len() as u64);
    assert_eq!(report.bytes_written, whole.len() as u64);
    assert_eq!(whole.len() as u64 + report.replaced, payload.len() as u64);
});
