#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfjpeg::analysis::find_spans;
use pdfjpeg::types::Markers;

fuzz_target!(|data: &[u8]| {
    let markers = Markers::jpeg();
    let mut last_end = 0;
    for span in find_spans(data, &markers) {
        assert!(span.start >= last_end);
        assert!(span.end <= data.len());
        last_end = span.end;
    }
});
