#![no_main]

use libfuzzer_sys::fuzz_target;

use jaundice::sanitizers::{InosmiSanitizer, Sanitizer};

fuzz_target!(|data: &[u8]| {
    // Raw bytes decoded lossily, the way the fetcher hands pages over
    let html = String::from_utf8_lossy(data);

    // The sanitizer should never panic regardless of input
    let _ = InosmiSanitizer::new().sanitize(&html);
});
