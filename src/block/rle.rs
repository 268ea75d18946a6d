//! RLE candidate search (§4.3).
//!
//! Ported from `compress.c`'s `rle_check`. Checks all three RLE encodings
//! at the current position and keeps the largest; ties are broken by
//! search order (8-bit, then 16-bit, then sequence) since a later check
//! only overwrites the candidate when it is strictly larger.

use super::types::{Method, LONG_RUN_MAX};

/// An RLE encoding candidate at some input position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RleCandidate {
    pub size: usize,
    /// `in[p]` for `Rle8`/`RleSeq`; `in[p] | (in[p+1] << 8)` for `Rle16`.
    pub data: u16,
    pub method: Method,
}

/// Find the best RLE candidate starting at `input[pos..]`. Returns a
/// zero-size candidate if none clears the acceptance threshold (`size > 2`).
///
/// `fast` skips the sequence-RLE search (spec.md §6 configuration).
pub fn rle_search(input: &[u8], pos: usize, fast: bool) -> RleCandidate {
    let tail = &input[pos..];
    let mut best = RleCandidate::default();

    // rle_8: largest run of a single repeated byte.
    {
        let first = tail[0];
        let size = run_len(tail, |i| tail[i] == first);
        if size > 2 && size > best.size {
            best = RleCandidate {
                size,
                data: first as u16,
                method: Method::Rle8,
            };
        }
    }

    // rle_16: largest even run of a repeated 2-byte pair.
    if tail.len() >= 2 {
        let d0 = tail[0];
        let d1 = tail[1];
        let mut size = 0usize;
        while size + 1 < tail.len() && size < LONG_RUN_MAX {
            if tail[size] != [d0, d1][size % 2] {
                break;
            }
            if tail[size + 1] != [d0, d1][(size + 1) % 2] {
                break;
            }
            size += 2;
        }
        if size > LONG_RUN_MAX {
            size = LONG_RUN_MAX;
        }
        if size > 2 && size > best.size {
            best = RleCandidate {
                size,
                data: (d0 as u16) | ((d1 as u16) << 8),
                method: Method::Rle16,
            };
        }
    }

    // rle_seq: largest run following data[p], data[p]+1, data[p]+2, ... (mod 256).
    if !fast {
        let first = tail[0];
        let size = run_len(tail, |i| tail[i] == first.wrapping_add(i as u8));
        if size > 2 && size > best.size {
            best = RleCandidate {
                size,
                data: first as u16,
                method: Method::RleSeq,
            };
        }
    }

    best
}

/// Count the longest prefix of `tail` (capped at `LONG_RUN_MAX`) for which
/// `matches(i)` holds for every `i` in `0..size`.
#[inline]
fn run_len(tail: &[u8], matches: impl Fn(usize) -> bool) -> usize {
    let mut size = 0usize;
    while size < tail.len() && size < LONG_RUN_MAX && matches(size) {
        size += 1;
    }
    size
}
