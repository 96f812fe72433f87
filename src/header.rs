//! Header slot type and the header-block driver (§4.8).

use crate::class::ByteClass;
use crate::cursor::Cursor;
use crate::error::Error;
use crate::lineend;
use crate::scanner;

/// One `key: value` header slot, borrowed from the input buffer.
///
/// `key` is never empty. `value` may be empty (e.g. `X-Empty:\r\n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    key: &'a [u8],
    value: &'a [u8],
}

impl<'a> Header<'a> {
    /// The header name, exactly as it appeared on the wire (no case
    /// folding).
    #[inline(always)]
    pub fn key(&self) -> &'a [u8] {
        self.key
    }

    /// The header value, with no leading/trailing-space folding beyond
    /// the single run of spaces directly after the colon (§4.8 step 5).
    #[inline(always)]
    pub fn value(&self) -> &'a [u8] {
        self.value
    }
}

impl<'a> Default for Header<'a> {
    /// An empty placeholder slot, handy for pre-filling a caller's header
    /// array before a parse call writes into it.
    fn default() -> Self {
        Header { key: b"", value: b"" }
    }
}

/// Parse the header block starting at the cursor's current position,
/// writing up to `headers.len()` entries and returning how many were
/// written.
///
/// Loops at most `headers.len()` times; before each iteration, a `\n` or
/// `\r` byte signals the blank line terminating the header block. Once
/// the loop bound is reached without seeing that blank line, the next
/// byte must start one — any other byte folds "too many headers" and
/// "garbage after the last header" into the same `Invalid` outcome, per
/// §7.
pub(crate) fn parse_block<'a>(
    cur: &mut Cursor<'a>,
    headers: &mut [Header<'a>],
) -> crate::Result<usize> {
    let cap = headers.len();
    let mut count = 0;

    while count < cap {
        match cur.byte_at_or_eof() {
            None => {
                debug!("incomplete header block after {} headers", count);
                return Err(Error::Incomplete);
            }
            Some(b'\n') | Some(b'\r') => {
                lineend::recognize(cur)?;
                trace!("header block complete, {} headers", count);
                return Ok(count);
            }
            Some(_) => {}
        }

        headers[count] = parse_one(cur)?;
        count += 1;
    }

    match cur.byte_at_or_eof() {
        None => {
            debug!("incomplete header block at capacity, {} headers", count);
            Err(Error::Incomplete)
        }
        Some(b'\n') | Some(b'\r') => {
            lineend::recognize(cur)?;
            trace!("header block complete at capacity, {} headers", count);
            Ok(count)
        }
        Some(b) => {
            debug!("too many headers: byte {:#04x} after capacity {} reached", b, cap);
            Err(Error::TooManyHeaders)
        }
    }
}

/// Parse one `key: value` header line, per §4.8 steps 1-8.
fn parse_one<'a>(cur: &mut Cursor<'a>) -> crate::Result<Header<'a>> {
    let key_start = cur.pos();
    scanner::scan(cur, ByteClass::HeaderKey);
    let key = cur.slice_from(key_start);

    match cur.byte_at_or_eof() {
        Some(b':') => {
            if key.is_empty() {
                debug!("invalid header: empty name before colon");
                return Err(Error::HeaderName);
            }
            cur.advance(1);
        }
        None => {
            debug!("incomplete header name, {} bytes so far", key.len());
            return Err(Error::Incomplete);
        }
        Some(b) => {
            debug!("invalid header name: byte {:#04x} where ':' was expected", b);
            return Err(Error::HeaderName);
        }
    }

    while cur.byte_at_or_eof() == Some(b' ') {
        cur.advance(1);
    }

    let value_start = cur.pos();
    scanner::scan(cur, ByteClass::HeaderValue);
    let value = cur.slice_from(value_start);
    trace!("header bounds: key {} bytes, value {} bytes", key.len(), value.len());

    lineend::recognize(cur)?;

    Ok(Header { key, value })
}
