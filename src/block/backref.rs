//! Back-reference candidate search (§4.4).
//!
//! Ported from `compress.c`'s `ref_search`. For each of the three
//! back-reference flavors, looks up the first occurrence of the relevant
//! 4-byte tuple in the [`TupleIndex`], then linearly scans every later
//! occurrence (the index only remembers the first) to find the longest
//! match. Ties are broken by search order: normal, then rotated, then
//! reversed.

use super::tuple_index::TupleIndex;
use super::types::{rotate, Method, LONG_RUN_MAX};

/// A back-reference encoding candidate at some input position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BackrefCandidate {
    pub size: usize,
    /// Absolute input offset the decoder will read from: start-of-source
    /// for `BackrefForward`/`BackrefRotated`, end-of-source (the position
    /// to walk backward from) for `BackrefBackward`.
    pub offset: usize,
    pub method: Method,
}

/// Find the best back-reference candidate for `input[pos..]`, using `index`
/// to prune the search. Returns a zero-size candidate if none clears the
/// acceptance threshold (`size > 3`).
///
/// `fast` restricts the search to forward (normal) references only.
pub fn backref_search(input: &[u8], pos: usize, index: &TupleIndex, fast: bool) -> BackrefCandidate {
    let mut best = BackrefCandidate::default();
    let tail = &input[pos..];
    let (b0, b1, b2, b3) = (tail[0], tail[1], tail[2], tail[3]);

    // lz_norm: forward match against identical bytes.
    if let Some(start) = index.first_offset(b0, b1, b2, b3) {
        for q in start..pos {
            let size = match_len(input, q, input, pos, tail.len());
            if size > 3 && size > best.size {
                best = BackrefCandidate {
                    size,
                    offset: q,
                    method: Method::BackrefForward,
                };
            }
        }
    }

    if fast {
        return best;
    }

    // lz_rot: forward match where the source bytes, once rotated, equal
    // the current input bytes.
    if let Some(start) = index.first_offset(rotate(b0), rotate(b1), rotate(b2), rotate(b3)) {
        for q in start..pos {
            let size = rotated_match_len(input, q, input, pos, tail.len());
            if size > 3 && size > best.size {
                best = BackrefCandidate {
                    size,
                    offset: q,
                    method: Method::BackrefRotated,
                };
            }
        }
    }

    // lz_rev: match against bytes read backward from the end of the source
    // tuple. `start + 3` is where the decoder will walk backward from.
    if let Some(start) = index.first_offset(b3, b2, b1, b0) {
        for q in (start + 3)..pos {
            let size = reverse_match_len(input, q, input, pos, tail.len());
            if size > 3 && size > best.size {
                best = BackrefCandidate {
                    size,
                    offset: q,
                    method: Method::BackrefBackward,
                };
            }
        }
    }

    best
}

#[inline]
fn match_len(src: &[u8], q: usize, cur: &[u8], pos: usize, remaining: usize) -> usize {
    let mut size = 0usize;
    while size < remaining && size < LONG_RUN_MAX && src[q + size] == cur[pos + size] {
        size += 1;
    }
    size
}

#[inline]
fn rotated_match_len(src: &[u8], q: usize, cur: &[u8], pos: usize, remaining: usize) -> usize {
    let mut size = 0usize;
    while size < remaining && size < LONG_RUN_MAX && src[q + size] == rotate(cur[pos + size]) {
        size += 1;
    }
    size
}

#[inline]
fn reverse_match_len(src: &[u8], q: usize, cur: &[u8], pos: usize, remaining: usize) -> usize {
    let mut size = 0usize;
    while size < remaining && size < LONG_RUN_MAX && size <= q && src[q - size] == cur[pos + size] {
        size += 1;
    }
    size
}
