#![no_main]

use htparse::{parse_request, Header, Method, Version};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut method = Method::default();
    let mut path: &[u8] = b"";
    let mut version = Version::default();
    let mut headers = [Header::default(); 64];
    let mut header_count = 0;

    let _ = parse_request(
        data,
        &mut method,
        &mut path,
        &mut version,
        &mut headers,
        &mut header_count,
    );
});
