//! Zero-copy, zero-allocation, restartable parser for HTTP/1.x message
//! heads (request line / status line plus header block, up to and
//! including the empty line that terminates them).
//!
//! The parser consumes a caller-owned contiguous byte buffer and writes
//! borrowed slices back into that same buffer: a method code, a path, a
//! protocol version, an optional status code and reason, and a bounded
//! array of header (key, value) pairs. It never allocates and never
//! retains a reference to the buffer once a call returns.
//!
//! # In scope
//!
//! * HTTP/1.0 and HTTP/1.1 request-line and status-line parsing
//! * Header block parsing into a caller-provided fixed-capacity array
//! * Restartable/streaming parsing: a buffer that does not yet hold a
//!   complete message head yields [`Error::Incomplete`], and the caller
//!   re-invokes the same entry point once more bytes have arrived
//!
//! # Out of scope
//!
//! * Body decoding (`Content-Length`, `Transfer-Encoding: chunked`,
//!   compression)
//! * URL or header-value semantic interpretation (percent-decoding,
//!   token folding, obs-fold, multi-line values)
//! * Connection management, TLS, HTTP/2, HTTP/3
//! * CONNECT-method tunneling beyond recognizing the method token
//!
//! See [`parse_request`] and [`parse_response`] for the two entry points.

#![no_std]
#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::uninlined_format_args)]
#![deny(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
extern crate log;

mod class;
mod cursor;
mod error;
mod header;
mod lineend;
mod method;
mod request;
mod response;
mod scanner;
mod util;
mod version;

pub use error::Error;
pub use header::Header;
pub use method::Method;
pub use request::parse_request;
pub use response::parse_response;
pub use version::Version;

/// Result alias used throughout the crate.
///
/// `Ok(consumed)` and the terminal [`Error`] variants are the only
/// outcomes a caller needs to branch on: every byte inspected so far was
/// either consistent with a complete message head (`Ok`), consistent with
/// an as-yet-incomplete prefix of one ([`Error::Incomplete`]), or proof
/// that no valid message could start with these bytes (the remaining
/// [`Error`] variants).
pub type Result<T> = core::result::Result<T, Error>;
