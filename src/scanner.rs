//! Three-tier fast-forward scanner (§4.2).
//!
//! `scan` advances a [`Cursor`] to the first byte that fails a
//! [`ByteClass`] predicate, or to end-of-buffer, whichever comes first. It
//! never consumes the stopping byte. Three tiers cooperate, widest first:
//! a wide-lane tier that checks `WIDE` bytes per iteration, a pointer-word
//! SWAR tier that checks `size_of::<usize>()` bytes per iteration via
//! branchless bit tricks, and a scalar fallback that walks the class table
//! byte by byte. All three are required to agree on the stopping index for
//! every input (P1) — the scalar tier is the oracle the other two are
//! checked against below.

use crate::class::ByteClass;
use crate::cursor::Cursor;
use crate::util::{broadcast, first_nonzero_byte};

/// Width of the wide-lane tier. Stable Rust has no portable, safe SIMD
/// type in `core`, so this tier is a plain unrolled byte-at-a-time check
/// over a wider block rather than an actual vector instruction — it still
/// amortizes the loop-branch and table-lookup overhead the scalar tier
/// pays per byte, and falls straight through to the SWAR tier once fewer
/// than `WIDE` bytes remain.
const WIDE: usize = 16;

const WORD: usize = core::mem::size_of::<usize>();

#[inline(always)]
pub(crate) fn scan(cur: &mut Cursor, class: ByteClass) {
    while cur.remaining() >= WIDE {
        let block = &cur.rest()[..WIDE];
        match wide_find(block, class) {
            n if n == WIDE => cur.advance(WIDE),
            n => {
                cur.advance(n);
                return;
            }
        }
    }

    while cur.remaining() >= WORD {
        let mut bytes = [0u8; WORD];
        bytes.copy_from_slice(&cur.rest()[..WORD]);
        let word = usize::from_ne_bytes(bytes);
        let n = swar_find(word, class);
        cur.advance(n);
        if n != WORD {
            return;
        }
    }

    let n = scalar_find(cur.rest(), class);
    cur.advance(n);
}

/// Tier 1. Index of the first byte in `block` failing `class`, or
/// `block.len()` if all bytes pass.
#[inline]
fn wide_find(block: &[u8], class: ByteClass) -> usize {
    let table = class.table();
    block
        .iter()
        .position(|&b| !table[b as usize])
        .unwrap_or(block.len())
}

/// Tier 2. Index of the first byte in the packed word failing `class`, or
/// `WORD` if every lane passes. See the module doc for the bit-trick
/// shape; it mirrors the reference SWAR header/URI validators: a
/// subtract-and-mask catches every lane below the class's lower bound,
/// and one subtract-and-mask per forbidden singleton (DEL, and colon for
/// header keys) catches the rest, since — as in the scalar table — bytes
/// `>= 0x80` always pass unless they happen to equal a forbidden
/// singleton, which they never do.
#[inline]
fn swar_find(word: usize, class: ByteClass) -> usize {
    const HIGH_BIT: usize = broadcast(0x80);

    let (low, forbidden): (u8, &[u8]) = match class {
        ByteClass::Path => (0x21, &[0x7F]),
        ByteClass::HeaderKey => (0x21, &[0x7F, b':']),
        ByteClass::HeaderValue | ByteClass::Reason => (0x20, &[0x7F]),
    };

    // Sets the high bit of every byte lane strictly less than `low`.
    let below_low = word.wrapping_sub(broadcast(low)) & !word;

    let mut forbidden_hit = 0usize;
    for &f in forbidden {
        let xor = word ^ broadcast(f);
        // "haszero" trick: sets the high bit of every lane equal to `f`.
        forbidden_hit |= xor.wrapping_sub(broadcast(0x01)) & !xor;
    }

    first_nonzero_byte((below_low | forbidden_hit) & HIGH_BIT)
}

/// Tier 3. Index of the first byte in `bytes` failing `class`, or
/// `bytes.len()` if all bytes pass. The oracle the other two tiers must
/// agree with.
#[inline]
fn scalar_find(bytes: &[u8], class: ByteClass) -> usize {
    let table = class.table();
    bytes
        .iter()
        .position(|&b| !table[b as usize])
        .unwrap_or(bytes.len())
}
