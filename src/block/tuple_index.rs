//! First-occurrence index over 4-byte tuples, used to prune the
//! back-reference search (§4.4).
//!
//! Ported from `compress.c`'s `tuple_t` / `COMBINE` / uthash usage: the
//! reference packs four bytes into one `int` key and hashes that with
//! uthash, storing only the smallest offset at which each tuple is first
//! seen. `std::collections::HashMap` plays the same role here — the
//! `entry().or_insert()` pattern is the direct translation of uthash's
//! "insert only if absent" lookup-then-add.

use std::collections::HashMap;

/// Maps a 4-byte tuple (packed big-endian, matching `COMBINE`) to the
/// smallest input offset at which it occurs.
///
/// Built once per [`super::pack::pack`] call and never mutated afterward;
/// the back-reference search does its own linear scan forward from the
/// stored offset to find the longest match among all later occurrences.
pub struct TupleIndex {
    map: HashMap<u32, usize>,
}

#[inline]
fn combine(w: u8, x: u8, y: u8, z: u8) -> u32 {
    (w as u32) << 24 | (x as u32) << 16 | (y as u32) << 8 | z as u32
}

impl TupleIndex {
    /// Index every 4-byte tuple in `input`, recording first occurrence only.
    pub fn build(input: &[u8]) -> TupleIndex {
        let mut map = HashMap::new();
        // Mirrors the reference's indexing loop bound (`i < inputsize - 4`,
        // strict): the last 4-byte window of the input is never indexed, so
        // a match starting exactly there can never be found via the index.
        // This is a quirk of the reference implementation, not a safety
        // requirement, but it is preserved here for behavioral fidelity.
        if input.len() >= 4 {
            for i in 0..(input.len() - 4) {
                let key = combine(input[i], input[i + 1], input[i + 2], input[i + 3]);
                map.entry(key).or_insert(i);
            }
        }
        TupleIndex { map }
    }

    /// Look up the first recorded offset for the tuple `(a, b, c, d)`.
    #[inline]
    pub fn first_offset(&self, a: u8, b: u8, c: u8, d: u8) -> Option<usize> {
        self.map.get(&combine(a, b, c, d)).copied()
    }
}
