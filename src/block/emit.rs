//! Command emitters: raw, RLE, and back-reference (§4.6).
//!
//! Ported from `compress.c`'s `write_raw`/`write_rle`/`write_backref`.
//! Each emitter writes the command header via [`write_header`] and then the
//! method-specific payload, returning the total number of bytes written.

use super::backref::BackrefCandidate;
use super::rle::RleCandidate;
use super::types::{write_header, Method};

/// Write a run of literal bytes as one raw command.
///
/// `data` must be non-empty and at most [`super::types::LONG_RUN_MAX`] bytes
/// (the pending-raw buffer enforces this by flushing at capacity).
pub fn write_raw(out: &mut [u8], data: &[u8]) -> usize {
    if data.is_empty() {
        return 0;
    }
    let header_len = write_header(out, Method::Raw, data.len());
    out[header_len..header_len + data.len()].copy_from_slice(data);
    header_len + data.len()
}

/// Write an RLE command.
pub fn write_rle(out: &mut [u8], rle: RleCandidate) -> usize {
    let length = if rle.method == Method::Rle16 {
        rle.size / 2
    } else {
        rle.size
    };
    let header_len = write_header(out, rle.method, length);
    out[header_len] = (rle.data & 0xFF) as u8;
    let mut n = header_len + 1;
    if rle.method == Method::Rle16 {
        out[n] = (rle.data >> 8) as u8;
        n += 1;
    }
    n
}

/// Write a back-reference command. The offset is always written big-endian
/// immediately after the header.
pub fn write_backref(out: &mut [u8], backref: BackrefCandidate) -> usize {
    let header_len = write_header(out, backref.method, backref.size);
    out[header_len] = (backref.offset >> 8) as u8;
    out[header_len + 1] = (backref.offset & 0xFF) as u8;
    header_len + 2
}
