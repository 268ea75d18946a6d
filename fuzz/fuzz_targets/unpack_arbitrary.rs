#![no_main]
use libfuzzer_sys::fuzz_target;

// Feeds arbitrary bytes straight to the decoder. There is no well-formedness
// precondition here: the point is that unpack() must never panic or write
// out of bounds on adversarial input, only ever return Err or a valid Ok.
fuzz_target!(|data: &[u8]| {
    let _ = packcore::unpack_to_vec(data);
});
