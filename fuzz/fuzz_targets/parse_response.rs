#![no_main]

use htparse::{parse_response, Header, Version};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut version = Version::default();
    let mut status = 0u16;
    let mut reason = None;
    let mut headers = [Header::default(); 64];
    let mut header_count = 0;

    let _ = parse_response(
        data,
        &mut version,
        &mut status,
        &mut reason,
        &mut headers,
        &mut header_count,
    );
});
