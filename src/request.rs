//! Request-line and request-head driver (§4.9).

use crate::class::ByteClass;
use crate::cursor::Cursor;
use crate::error::Error;
use crate::header::Header;
use crate::method::{self, Method};
use crate::scanner;
use crate::version::{self, Version};

/// Minimum buffer length before a request parse is even attempted. Shorter
/// than this, the method, a minimal path, the version and line end cannot
/// possibly all be present, so the call is `Incomplete` without examining a
/// single byte (§6).
const MIN_REQUEST_LEN: usize = 15;

/// Parse a request line and header block from the front of `buffer`.
///
/// On success, `method`, `path`, `version`, `headers[..*header_count]` are
/// populated with slices borrowed from `buffer`, and the number of bytes
/// making up the request head (including the terminating blank line) is
/// returned. On [`Error::Incomplete`], the caller should append more bytes
/// to `buffer` and call again from the start; on any other error the
/// message is malformed and the connection should be closed. Outputs are
/// unspecified (but left at their last-written value) on either error
/// path — see the crate-level docs.
///
/// `headers` may be empty; at most `headers.len()` header slots are ever
/// written, and more headers than that present on the wire is reported as
/// [`Error::TooManyHeaders`].
pub fn parse_request<'a>(
    buffer: &'a [u8],
    method: &mut Method,
    path: &mut &'a [u8],
    version: &mut Version,
    headers: &mut [Header<'a>],
    header_count: &mut usize,
) -> crate::Result<usize> {
    *method = Method::default();
    *path = &buffer[..0];
    *version = Version::default();
    *header_count = 0;

    if buffer.len() < MIN_REQUEST_LEN {
        debug!("incomplete request: buffer shorter than {} bytes", MIN_REQUEST_LEN);
        return Err(Error::Incomplete);
    }

    let mut cur = Cursor::new(buffer);

    *method = method::recognize(&mut cur)?;
    *path = parse_path(&mut cur)?;
    *version = version::recognize_with_line_end(&mut cur)?;
    *header_count = crate::header::parse_block(&mut cur, headers)?;

    let consumed = cur.pos();
    debug!("parsed request head, {} bytes consumed", consumed);
    Ok(consumed)
}

/// Path parser (§4.5): scan the path class, then require the stopping byte
/// to be a single space.
fn parse_path<'a>(cur: &mut Cursor<'a>) -> crate::Result<&'a [u8]> {
    let start = cur.pos();
    scanner::scan(cur, ByteClass::Path);
    let path = cur.slice_from(start);
    trace!("path bounds: {} bytes", path.len());

    match cur.byte_at_or_eof() {
        Some(b' ') => {
            cur.advance(1);
            Ok(path)
        }
        None => {
            debug!("incomplete path: no space found after {} bytes", path.len());
            Err(Error::Incomplete)
        }
        Some(b) => {
            debug!("invalid path: byte {:#04x} where space was expected", b);
            Err(Error::Path)
        }
    }
}
