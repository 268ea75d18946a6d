//! The pack loop (§4.5): greedy selection between a raw byte, the best RLE
//! candidate, and the best back-reference candidate at each input position.
//!
//! Ported from `compress.c`'s `pack()`. Candidate selection order and
//! tie-breaks match the reference exactly: a back-reference wins only when
//! strictly longer than the best RLE candidate; RLE is accepted at `size >
//! 2` (spec.md §9 notes the loop's own `>= 2` guard is never exercised below
//! 3, since `rle_search` itself only returns candidates with `size > 2`).

use super::backref::{backref_search, BackrefCandidate};
use super::rle::{rle_search, RleCandidate};
use super::tuple_index::TupleIndex;
use super::types::{header_len, Method, LONG_RUN_MAX, MAX_BLOCK_SIZE, TERMINATOR};
use super::{emit, types};

/// Tunable knobs for [`pack`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PackOptions {
    /// Skip `rle_seq`, `lz_rot`, and `lz_rev` search, trading compression
    /// ratio for speed. Never produces a smaller stream than `fast: false`
    /// (spec.md §8).
    pub fast: bool,
}

/// Errors returned by [`pack`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PackError {
    /// `unpacked` exceeds [`MAX_BLOCK_SIZE`].
    InputTooLarge,
    /// The compressed stream (or the caller's `packed` buffer) cannot hold
    /// the result; emitting the next command would exceed capacity.
    OutputExhausted,
}

impl std::fmt::Display for PackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackError::InputTooLarge => write!(f, "input exceeds the maximum block size"),
            PackError::OutputExhausted => write!(f, "compressed output would exceed capacity"),
        }
    }
}

impl std::error::Error for PackError {}

/// Compress `unpacked` into `packed`. Returns the number of bytes written
/// (including the terminator).
///
/// `packed` must have capacity [`MAX_BLOCK_SIZE`] — the worst case for
/// incompressible input is close to input size plus one raw-command header
/// per 1024-byte chunk, which always fits when the input itself does.
pub fn pack(unpacked: &[u8], packed: &mut [u8], opts: PackOptions) -> Result<usize, PackError> {
    let inputsize = unpacked.len();
    if inputsize > MAX_BLOCK_SIZE {
        return Err(PackError::InputTooLarge);
    }
    if packed.len() < MAX_BLOCK_SIZE {
        return Err(PackError::OutputExhausted);
    }

    let index = TupleIndex::build(unpacked);

    let mut inpos = 0usize;
    let mut outpos = 0usize;
    let mut pending: Vec<u8> = Vec::with_capacity(LONG_RUN_MAX);

    while inpos < inputsize {
        let rle: RleCandidate = rle_search(unpacked, inpos, opts.fast);

        let backref: BackrefCandidate = if rle.size < LONG_RUN_MAX && inpos + 4 <= inputsize {
            backref_search(unpacked, inpos, &index, opts.fast)
        } else {
            BackrefCandidate::default()
        };

        if backref.size > 3 && backref.size > rle.size {
            outpos += flush_pending(packed, outpos, &mut pending)?;
            outpos += emit_checked(packed, outpos, header_len(backref.size) + 2, |out| {
                emit::write_backref(out, backref)
            })?;
            inpos += backref.size;
        } else if rle.size > 2 {
            outpos += flush_pending(packed, outpos, &mut pending)?;
            let rle_cmd_len = header_len(if rle.method == Method::Rle16 {
                rle.size / 2
            } else {
                rle.size
            }) + if rle.method == Method::Rle16 { 2 } else { 1 };
            outpos += emit_checked(packed, outpos, rle_cmd_len, |out| emit::write_rle(out, rle))?;
            inpos += rle.size;
        } else {
            pending.push(unpacked[inpos]);
            inpos += 1;
            if outpos + pending.len() >= MAX_BLOCK_SIZE {
                return Err(PackError::OutputExhausted);
            }
            if pending.len() == LONG_RUN_MAX {
                outpos += flush_pending(packed, outpos, &mut pending)?;
            }
        }
    }

    outpos += flush_pending(packed, outpos, &mut pending)?;

    if outpos + 1 > MAX_BLOCK_SIZE {
        return Err(PackError::OutputExhausted);
    }
    packed[outpos] = TERMINATOR;
    outpos += 1;

    Ok(outpos)
}

/// Flush any buffered literal bytes as a single raw command, clearing
/// `pending`. Returns the number of bytes written (0 if `pending` is empty).
fn flush_pending(
    packed: &mut [u8],
    outpos: usize,
    pending: &mut Vec<u8>,
) -> Result<usize, PackError> {
    if pending.is_empty() {
        return Ok(0);
    }
    let total = types::header_len(pending.len()) + pending.len();
    if outpos + total > MAX_BLOCK_SIZE {
        return Err(PackError::OutputExhausted);
    }
    let n = emit::write_raw(&mut packed[outpos..], pending);
    pending.clear();
    Ok(n)
}

/// Bounds-check `expected_len` bytes of output space, then run `write` and
/// return the bytes it reports writing.
fn emit_checked(
    packed: &mut [u8],
    outpos: usize,
    expected_len: usize,
    write: impl FnOnce(&mut [u8]) -> usize,
) -> Result<usize, PackError> {
    if outpos + expected_len > MAX_BLOCK_SIZE {
        return Err(PackError::OutputExhausted);
    }
    Ok(write(&mut packed[outpos..]))
}

/// Compress `unpacked` into a freshly allocated, exactly-sized `Vec<u8>`.
/// Returns `None` on any compression failure.
pub fn pack_to_vec(unpacked: &[u8], fast: bool) -> Option<Vec<u8>> {
    let mut buf = vec![0u8; MAX_BLOCK_SIZE];
    let n = pack(unpacked, &mut buf, PackOptions { fast }).ok()?;
    buf.truncate(n);
    Some(buf)
}
