//! A lossless, bounded-size block codec: raw runs, three RLE flavors, and
//! three back-reference flavors over a 64 KiB window.
//!
//! The codec is bit-exact on decode and greedy on encode; see
//! [`block`] for the command grammar and the component breakdown
//! (tuple index, RLE/back-reference search, emitters, pack loop).

pub mod block;
pub mod config;

/// One-shot compression. Equivalent to the reference `pack()`.
pub use block::pack;
/// One-shot decompression. Equivalent to the reference `unpack()`.
pub use block::unpack;

pub use block::{pack_to_vec, unpack_to_vec};
pub use block::{Method, PackError, PackOptions, UnpackError};
pub use block::{rotate, MAX_BLOCK_SIZE};
