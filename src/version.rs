//! HTTP version recognition via packed-integer equality (§4.6).

use crate::cursor::Cursor;
use crate::error::Error;
use crate::lineend;
use crate::util::word8;

/// The HTTP protocol version. The default pre-parse value is
/// [`Version::Http10`], matching the sentinel the spec assigns before any
/// bytes have been examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Version {
    /// `HTTP/1.0`
    #[default]
    Http10,
    /// `HTTP/1.1`
    Http11,
}

const HTTP_10: u64 = word8(b"HTTP/1.0");
const HTTP_11: u64 = word8(b"HTTP/1.1");

/// Recognize the 8-byte version token followed by a line end, as used at
/// the end of a request line (§4.6). Requires `cur.has(9)` (eight version
/// bytes plus at least one line-terminator byte); fewer bytes than that is
/// `Incomplete`.
pub(crate) fn recognize_with_line_end(cur: &mut Cursor) -> crate::Result<Version> {
    if !cur.has(9) {
        debug!("incomplete version: fewer than 9 bytes remain");
        return Err(Error::Incomplete);
    }

    let word = cur.load8();
    let version = match word {
        HTTP_10 => Version::Http10,
        HTTP_11 => Version::Http11,
        _ => {
            debug!("invalid version word {:#018x}", word);
            return Err(Error::Version);
        }
    };
    cur.advance(8);

    lineend::recognize(cur)?;

    trace!("recognized version {:?}", version);
    Ok(version)
}

/// Recognize the 8-byte version token followed by exactly one space, as
/// used at the start of a status line (§4.10 step 1). On any mismatch
/// (including a short buffer) this is `Invalid`, matching the response
/// driver's precondition that `buffer.len >= 13` already guarantees enough
/// bytes are present to make that call.
pub(crate) fn recognize_with_space(cur: &mut Cursor) -> crate::Result<Version> {
    if !cur.has(9) {
        debug!("invalid version: fewer than 9 bytes remain");
        return Err(Error::Version);
    }

    let word = cur.load8();
    let version = match word {
        HTTP_10 => Version::Http10,
        HTTP_11 => Version::Http11,
        _ => {
            debug!("invalid version word {:#018x}", word);
            return Err(Error::Version);
        }
    };
    cur.advance(8);

    if cur.peek_byte() != b' ' {
        debug!("invalid version: no space after version token");
        return Err(Error::Version);
    }
    cur.advance(1);

    trace!("recognized version {:?}", version);
    Ok(version)
}
