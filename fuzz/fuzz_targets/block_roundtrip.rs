#![no_main]
use libfuzzer_sys::fuzz_target;

use packcore::block::types::MAX_BLOCK_SIZE;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > MAX_BLOCK_SIZE {
        return;
    }

    let Some(packed) = packcore::pack_to_vec(data, false) else {
        return;
    };
    let recovered = packcore::unpack_to_vec(&packed);
    assert_eq!(
        recovered.as_deref(),
        Some(data),
        "round-trip mismatch: {} bytes packed to {} bytes",
        data.len(),
        packed.len()
    );

    let Some(packed_fast) = packcore::pack_to_vec(data, true) else {
        return;
    };
    let recovered_fast = packcore::unpack_to_vec(&packed_fast);
    assert_eq!(recovered_fast.as_deref(), Some(data), "fast-mode round-trip mismatch");
});
