//! Method token dispatch via packed-integer equality (§4.4).

use crate::cursor::Cursor;
use crate::error::Error;
use crate::util::word4;

/// The HTTP request method, recognized as a closed set of literal tokens.
///
/// [`Method::Unknown`] is a pre-parse sentinel only — a successful parse
/// never reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Method {
    /// Pre-parse sentinel; never the result of a successful parse.
    #[default]
    Unknown,
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `HEAD`
    Head,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `CONNECT`
    Connect,
    /// `OPTIONS`
    Options,
    /// `TRACE`
    Trace,
    /// `PATCH`
    Patch,
}

const GET: u32 = word4(b"GET ");
const PUT: u32 = word4(b"PUT ");
const POST: u32 = word4(b"POST");
const HEAD: u32 = word4(b"HEAD");
const DELE: u32 = word4(b"DELE");
const CONN: u32 = word4(b"CONN");
const OPTI: u32 = word4(b"OPTI");
const TRAC: u32 = word4(b"TRAC");
const PATC: u32 = word4(b"PATC");

/// Recognize the method token at the front of the cursor.
///
/// Requires `cur.has(4)`; §6 pins the minimum request buffer to 15 bytes,
/// which already guarantees this, so the "ran out of buffer mid-token"
/// case described in §4.4 is unreachable in practice and is not modeled
/// here as a distinct outcome.
pub(crate) fn recognize(cur: &mut Cursor) -> crate::Result<Method> {
    debug_assert!(cur.has(4));

    let word = cur.load4();
    cur.advance(4);

    match word {
        GET => Ok(Method::Get),
        PUT => Ok(Method::Put),
        POST => expect(cur, b" ", Method::Post),
        HEAD => expect(cur, b" ", Method::Head),
        DELE => expect(cur, b"TE ", Method::Delete),
        CONN => expect(cur, b"ECT ", Method::Connect),
        OPTI => expect(cur, b"ONS ", Method::Options),
        TRAC => expect(cur, b"E ", Method::Trace),
        PATC => expect(cur, b"H ", Method::Patch),
        _ => {
            debug!("invalid method: first word {:#010x}", word);
            Err(Error::Method)
        }
    }
}

#[inline]
fn expect(cur: &mut Cursor, tail: &[u8], method: Method) -> crate::Result<Method> {
    if !cur.has(tail.len()) {
        debug!("incomplete method: {} trailing bytes missing for {:?}", tail.len(), method);
        return Err(Error::Incomplete);
    }
    if cur.rest()[..tail.len()] != *tail {
        debug!("invalid method: trailing bytes mismatch for {:?}", method);
        return Err(Error::Method);
    }
    cur.advance(tail.len());
    trace!("recognized method {:?}", method);
    Ok(method)
}
