//! Status-line and response-head driver (§4.10).

use crate::class::ByteClass;
use crate::cursor::Cursor;
use crate::error::Error;
use crate::header::Header;
use crate::scanner;
use crate::version::{self, Version};

/// Minimum buffer length before a response parse is even attempted (§6).
const MIN_RESPONSE_LEN: usize = 13;

/// Parse a status line and header block from the front of `buffer`.
///
/// Same contract as [`crate::parse_request`], except the status line
/// yields a numeric status code and an optional reason-phrase slice
/// instead of a method and path. `*reason` is set to `None` when the
/// status line carries no reason phrase (e.g. `HTTP/1.1 204\r\n`).
pub fn parse_response<'a>(
    buffer: &'a [u8],
    version: &mut Version,
    status_code: &mut u16,
    reason: &mut Option<&'a [u8]>,
    headers: &mut [Header<'a>],
    header_count: &mut usize,
) -> crate::Result<usize> {
    *version = Version::default();
    *status_code = 0;
    *reason = None;
    *header_count = 0;

    if buffer.len() < MIN_RESPONSE_LEN {
        debug!("incomplete response: buffer shorter than {} bytes", MIN_RESPONSE_LEN);
        return Err(Error::Incomplete);
    }

    let mut cur = Cursor::new(buffer);

    *version = version::recognize_with_space(&mut cur)?;
    *status_code = parse_status_code(&mut cur)?;
    *reason = parse_reason(&mut cur)?;
    *header_count = crate::header::parse_block(&mut cur, headers)?;

    let consumed = cur.pos();
    debug!("parsed response head, {} bytes consumed", consumed);
    Ok(consumed)
}

/// Three ASCII digits, per §4.10 step 2.
fn parse_status_code(cur: &mut Cursor) -> crate::Result<u16> {
    if !cur.has(3) {
        debug!("incomplete status code: fewer than 3 bytes remain");
        return Err(Error::Incomplete);
    }

    let digits = &cur.rest()[..3];
    let mut value: u16 = 0;
    for &d in digits {
        if !d.is_ascii_digit() {
            debug!("invalid status code: non-digit byte {:#04x}", d);
            return Err(Error::Status);
        }
        value = value * 10 + u16::from(d - b'0');
    }
    cur.advance(3);
    trace!("status code bounds: {}", value);

    Ok(value)
}

/// Reason-phrase branch, per §4.10 step 3.
fn parse_reason<'a>(cur: &mut Cursor<'a>) -> crate::Result<Option<&'a [u8]>> {
    match cur.byte_at_or_eof() {
        Some(b' ') => {
            while cur.byte_at_or_eof() == Some(b' ') {
                cur.advance(1);
            }
            let start = cur.pos();
            scanner::scan(cur, ByteClass::Reason);
            let phrase = cur.slice_from(start);
            trace!("reason phrase bounds: {} bytes", phrase.len());
            crate::lineend::recognize(cur)?;
            Ok(Some(phrase))
        }
        Some(b'\n') | Some(b'\r') => {
            crate::lineend::recognize(cur)?;
            Ok(None)
        }
        None => {
            debug!("incomplete status line: no bytes after status code");
            Err(Error::Incomplete)
        }
        Some(b) => {
            debug!("invalid status line: byte {:#04x} after status code", b);
            Err(Error::Status)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse<'a>(
        buffer: &'a [u8],
        headers: &mut [Header<'a>],
    ) -> (
        crate::Result<usize>,
        Version,
        u16,
        Option<&'a [u8]>,
        usize,
    ) {
        let mut version = Version::default();
        let mut status = 0u16;
        let mut reason = None;
        let mut count = 0;
        let result = parse_response(buffer, &mut version, &mut status, &mut reason, headers, &mut count);
        (result, version, status, reason, count)
    }

    #[test]
    fn scenario_9a_status_line_with_reason() {
        let mut headers = [Header::default(); 4];
        let (result, version, status, reason, count) =
            parse(b"HTTP/1.1 200 OK\r\n\r\n", &mut headers);
        assert_eq!(result.unwrap(), 19);
        assert_eq!(version, Version::Http11);
        assert_eq!(status, 200);
        assert_eq!(reason, Some(&b"OK"[..]));
        assert_eq!(count, 0);
    }

    #[test]
    fn scenario_9b_status_line_without_reason() {
        let mut headers = [Header::default(); 4];
        let (result, version, status, reason, count) =
            parse(b"HTTP/1.1 204\r\n\r\n", &mut headers);
        assert_eq!(result.unwrap(), 16);
        assert_eq!(version, Version::Http11);
        assert_eq!(status, 204);
        assert_eq!(reason, None);
        assert_eq!(count, 0);
    }

    #[test]
    fn reason_phrase_may_be_empty_after_a_lone_space() {
        let mut headers = [Header::default(); 4];
        let (result, _, status, reason, _) =
            parse(b"HTTP/1.1 200 \r\n\r\n", &mut headers);
        assert_eq!(result.unwrap(), 17);
        assert_eq!(status, 200);
        assert_eq!(reason, Some(&b""[..]));
    }

    #[test]
    fn non_digit_status_byte_is_invalid() {
        let mut headers = [Header::default(); 4];
        let (result, ..) = parse(b"HTTP/1.1 20X OK\r\n\r\n", &mut headers);
        assert_eq!(result.unwrap_err(), Error::Status);
    }

    #[test]
    fn byte_after_status_other_than_space_or_line_end_is_invalid() {
        let mut headers = [Header::default(); 4];
        let (result, ..) = parse(b"HTTP/1.1 200XOK\r\n\r\n", &mut headers);
        assert_eq!(result.unwrap_err(), Error::Status);
    }

    #[test]
    fn missing_space_after_version_is_invalid() {
        let mut headers = [Header::default(); 4];
        let (result, ..) = parse(b"HTTP/1.1X200 OK\r\n\r\n", &mut headers);
        assert_eq!(result.unwrap_err(), Error::Version);
    }

    #[test]
    fn headers_after_status_line_are_parsed() {
        let mut headers = [Header::default(); 4];
        let (result, _, status, _, count) =
            parse(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n", &mut headers);
        assert_eq!(result.unwrap(), 38);
        assert_eq!(status, 200);
        assert_eq!(count, 1);
        assert_eq!(headers[0].key(), b"Content-Length");
        assert_eq!(headers[0].value(), b"0");
    }

    #[test]
    fn buffer_shorter_than_minimum_is_incomplete_without_inspection() {
        let mut headers = [Header::default(); 4];
        let (result, ..) = parse(b"HTTP/1.1 20", &mut headers);
        assert_eq!(result.unwrap_err(), Error::Incomplete);
    }

    #[test]
    fn p2_buffer_is_never_mutated() {
        let input = b"HTTP/1.1 200 OK\r\nHost: x\r\n\r\n".to_vec();
        let before = input.clone();
        let mut headers = [Header::default(); 4];
        let _ = parse(&input, &mut headers);
        assert_eq!(input, before);
    }
}
