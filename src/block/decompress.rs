//! The decompressor: a small command-dispatch loop with strict bounds
//! policing against a caller-supplied output buffer.
//!
//! Ported from `compress.c`'s `unpack()`. Unlike the reference, every write
//! goes through a bounds check before it happens rather than after, so a
//! malformed stream can never corrupt memory outside `unpacked` — it can
//! only run long enough to return `Err` before any out-of-range byte is
//! written for that command.
//!
//! The per-method copy loops are intentionally byte-at-a-time, not block
//! copies: forward back-references (methods 4/5) can legally target a
//! source range that overlaps the bytes currently being written (this is
//! how a long run gets encoded as a 3-byte command pointing one byte behind
//! the write cursor). A `copy_from_slice`/`copy_within` here would silently
//! produce wrong output for the self-extending case.

use super::types::{decode_header, rotate, HeaderDecode, Method, MAX_BLOCK_SIZE};

/// Errors returned by [`unpack`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnpackError {
    /// A command would write past `unpacked`'s capacity, or the header
    /// itself is truncated (missing length/offset bytes) or exceeds
    /// [`MAX_BLOCK_SIZE`] before a single command runs.
    OutputOverflow,
    /// A back-reference offset is out of range: at or beyond the current
    /// write position (forward methods), or would read before offset 0
    /// (backward method).
    OutOfBoundsOffset,
}

impl std::fmt::Display for UnpackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnpackError::OutputOverflow => write!(f, "decompressed output would exceed capacity"),
            UnpackError::OutOfBoundsOffset => write!(f, "back-reference offset out of bounds"),
        }
    }
}

impl std::error::Error for UnpackError {}

/// Decode `packed` into `unpacked`, stopping at the first 0xFF command
/// header. Returns the number of bytes written.
///
/// `unpacked` must have capacity [`MAX_BLOCK_SIZE`] — the format's commands
/// are defined in terms of that fixed window, and a smaller buffer could
/// never safely receive every valid stream (mirrors the C reference, which
/// always decodes into a full `DATA_SIZE`-byte buffer).
///
/// Fails without writing a partial result past the point of failure: on
/// `Err`, some prefix of `unpacked` may have been written, but the caller
/// must treat the whole buffer as invalid, per spec.md §7.
pub fn unpack(packed: &[u8], unpacked: &mut [u8]) -> Result<usize, UnpackError> {
    if unpacked.len() < MAX_BLOCK_SIZE {
        return Err(UnpackError::OutputOverflow);
    }

    let mut inpos = 0usize;
    let mut outpos = 0usize;

    loop {
        let (header, header_len) = match decode_header(packed, inpos) {
            HeaderDecode::Terminator => break,
            HeaderDecode::Truncated => return Err(UnpackError::OutputOverflow),
            HeaderDecode::Header(h, n) => (h, n),
        };
        inpos += header_len;
        let length = header.length;

        // Pre-check the output bound for this command before writing anything.
        let bytes_out = if header.method == Method::Rle16 {
            2 * length
        } else {
            length
        };
        if outpos + bytes_out > MAX_BLOCK_SIZE {
            return Err(UnpackError::OutputOverflow);
        }

        match header.method {
            Method::Raw => {
                let Some(src) = packed.get(inpos..inpos + length) else {
                    return Err(UnpackError::OutputOverflow);
                };
                unpacked[outpos..outpos + length].copy_from_slice(src);
                outpos += length;
                inpos += length;
            }
            Method::Rle8 => {
                let Some(&data) = packed.get(inpos) else {
                    return Err(UnpackError::OutputOverflow);
                };
                for _ in 0..length {
                    unpacked[outpos] = data;
                    outpos += 1;
                }
                inpos += 1;
            }
            Method::Rle16 => {
                let Some(&d0) = packed.get(inpos) else {
                    return Err(UnpackError::OutputOverflow);
                };
                let Some(&d1) = packed.get(inpos + 1) else {
                    return Err(UnpackError::OutputOverflow);
                };
                for _ in 0..length {
                    unpacked[outpos] = d0;
                    unpacked[outpos + 1] = d1;
                    outpos += 2;
                }
                inpos += 2;
            }
            Method::RleSeq => {
                let Some(&data) = packed.get(inpos) else {
                    return Err(UnpackError::OutputOverflow);
                };
                for i in 0..length {
                    unpacked[outpos] = data.wrapping_add(i as u8);
                    outpos += 1;
                }
                inpos += 1;
            }
            Method::BackrefForward | Method::BackrefRotated => {
                let Some(&hi) = packed.get(inpos) else {
                    return Err(UnpackError::OutputOverflow);
                };
                let Some(&lo) = packed.get(inpos + 1) else {
                    return Err(UnpackError::OutputOverflow);
                };
                let offset = ((hi as usize) << 8) | lo as usize;
                if offset >= outpos {
                    return Err(UnpackError::OutOfBoundsOffset);
                }
                let rotated = header.method == Method::BackrefRotated;
                for i in 0..length {
                    let b = unpacked[offset + i];
                    unpacked[outpos] = if rotated { rotate(b) } else { b };
                    outpos += 1;
                }
                inpos += 2;
            }
            Method::BackrefBackward => {
                let Some(&hi) = packed.get(inpos) else {
                    return Err(UnpackError::OutputOverflow);
                };
                let Some(&lo) = packed.get(inpos + 1) else {
                    return Err(UnpackError::OutputOverflow);
                };
                let offset = ((hi as usize) << 8) | lo as usize;
                if offset >= outpos {
                    return Err(UnpackError::OutOfBoundsOffset);
                }
                if offset + 1 < length {
                    return Err(UnpackError::OutOfBoundsOffset);
                }
                for i in 0..length {
                    unpacked[outpos] = unpacked[offset - i];
                    outpos += 1;
                }
                inpos += 2;
            }
        }
    }

    Ok(outpos)
}

/// Decode `packed` into a freshly allocated, exactly-sized `Vec<u8>`.
/// Returns `None` on any decode failure.
pub fn unpack_to_vec(packed: &[u8]) -> Option<Vec<u8>> {
    let mut buf = vec![0u8; MAX_BLOCK_SIZE];
    let n = unpack(packed, &mut buf).ok()?;
    buf.truncate(n);
    Some(buf)
}
