use core::fmt;

/// The non-`Ok` half of a parse call's three terminal outcomes (§7 of the
/// design: success, incomplete, invalid).
///
/// [`Error::Incomplete`] means every byte inspected so far is consistent
/// with a valid message prefix, and the caller should append bytes and
/// retry. Every other variant means a byte was observed that no valid
/// message could contain at that position, or the header array was too
/// small to hold every header — the spec intentionally conflates those two
/// cases into one family of outcomes rather than a distinct result type,
/// so a caller that only cares about the three-way split can match
/// `Error::Incomplete` vs. everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// More bytes are needed before a decision can be made.
    Incomplete,

    /// Invalid byte in the method token, or an unrecognized method.
    Method,

    /// Invalid byte in the path, or the path was not followed by a space.
    Path,

    /// Invalid byte in the HTTP version, or an unsupported version.
    Version,

    /// Invalid byte where a line end (`\n` or `\r\n`) was required.
    NewLine,

    /// Invalid byte in a header name, or an empty header name.
    HeaderName,

    /// Invalid byte in a header value.
    HeaderValue,

    /// More headers were present than the caller's header array could hold.
    TooManyHeaders,

    /// Invalid byte in the status code, or a status code outside the
    /// accepted range.
    Status,

    /// Invalid byte in the reason phrase.
    Reason,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        let s = match self {
            Incomplete => "incomplete message head",
            Method => "invalid method",
            Path => "invalid path",
            Version => "invalid or unsupported http version",
            NewLine => "invalid line end",
            HeaderName => "invalid header name",
            HeaderValue => "invalid header value",
            TooManyHeaders => "more headers than the provided array can hold",
            Status => "invalid status code",
            Reason => "invalid reason phrase",
        };
        write!(f, "{}", s)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
