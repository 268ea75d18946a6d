//! The bounded-size block codec: command grammar, decoder, and encoder.
//!
//! Submodules mirror the dependency order from spec.md §2 (leaves first):
//! [`types`] (format constants, `Method`, `rotate`, header codec) has no
//! internal dependencies; [`tuple_index`] depends only on `types`;
//! [`rle`] and [`backref`] depend on `types` (and `backref` on
//! [`tuple_index`]); [`emit`] depends on `types`, `rle`, `backref`; [`pack`]
//! composes all of the above. [`decompress`] depends only on `types`.

pub mod backref;
pub mod decompress;
pub mod emit;
pub mod pack;
pub mod rle;
pub mod tuple_index;
pub mod types;

pub use decompress::{unpack, unpack_to_vec, UnpackError};
pub use pack::{pack, pack_to_vec, PackError, PackOptions};
pub use types::{rotate, Method, MAX_BLOCK_SIZE};
