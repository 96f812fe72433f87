//! Line-end recognizer: either bare LF or CR LF (§4.7).

use crate::cursor::Cursor;
use crate::error::Error;

/// Consume a line end at the cursor's current position: `\n` alone, or
/// `\r` followed by `\n`. A `\r` at the very end of the buffer is
/// `Incomplete` rather than `Invalid`, since a `\n` may yet arrive.
pub(crate) fn recognize(cur: &mut Cursor) -> crate::Result<()> {
    match cur.byte_at_or_eof() {
        Some(b'\n') => {
            cur.advance(1);
            Ok(())
        }
        Some(b'\r') => {
            cur.advance(1);
            match cur.byte_at_or_eof() {
                None => {
                    debug!("incomplete line end: lone CR at end of buffer");
                    Err(Error::Incomplete)
                }
                Some(b'\n') => {
                    cur.advance(1);
                    Ok(())
                }
                Some(b) => {
                    debug!("invalid line end: byte {:#04x} after CR", b);
                    Err(Error::NewLine)
                }
            }
        }
        Some(b) => {
            debug!("invalid line end: byte {:#04x}", b);
            Err(Error::NewLine)
        }
        None => {
            debug!("incomplete line end: no bytes remaining");
            Err(Error::Incomplete)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bare_lf_is_accepted() {
        let mut cur = Cursor::new(b"\nrest");
        recognize(&mut cur).unwrap();
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn crlf_is_accepted() {
        let mut cur = Cursor::new(b"\r\nrest");
        recognize(&mut cur).unwrap();
        assert_eq!(cur.pos(), 2);
    }

    #[test]
    fn lone_cr_at_end_of_buffer_is_incomplete() {
        let mut cur = Cursor::new(b"\r");
        assert_eq!(recognize(&mut cur).unwrap_err(), Error::Incomplete);
    }

    #[test]
    fn cr_followed_by_anything_else_is_invalid() {
        let mut cur = Cursor::new(b"\rX");
        assert_eq!(recognize(&mut cur).unwrap_err(), Error::NewLine);
    }

    #[test]
    fn empty_buffer_is_incomplete() {
        let mut cur = Cursor::new(b"");
        assert_eq!(recognize(&mut cur).unwrap_err(), Error::Incomplete);
    }

    #[test]
    fn other_byte_is_invalid() {
        let mut cur = Cursor::new(b"Xrest");
        assert_eq!(recognize(&mut cur).unwrap_err(), Error::NewLine);
    }
}
