// Integration tests for src/main.rs — the `pack`/`unpack` CLI subcommands.
//
// Cargo sets CARGO_BIN_EXE_packcore to the path of the compiled binary
// when running `cargo test`.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn packcore_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_packcore"))
}

fn setup_input(content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("TempDir::new");
    let input = dir.path().join("input.bin");
    fs::write(&input, content).expect("write input");
    (dir, input)
}

#[test]
fn pack_then_unpack_round_trip() {
    let content = b"the quick brown fox jumps over the lazy dog, over and over again. "
        .repeat(20);
    let (dir, input) = setup_input(&content);
    let packed = dir.path().join("input.packed");
    let unpacked = dir.path().join("input.unpacked");

    let status = Command::new(packcore_bin())
        .args(["pack", input.to_str().unwrap(), packed.to_str().unwrap()])
        .status()
        .expect("spawn packcore pack");
    assert!(status.success(), "pack failed: {status}");
    assert!(fs::metadata(&packed).unwrap().len() < content.len() as u64);

    let status = Command::new(packcore_bin())
        .args(["unpack", packed.to_str().unwrap(), unpacked.to_str().unwrap()])
        .status()
        .expect("spawn packcore unpack");
    assert!(status.success(), "unpack failed: {status}");

    let round_tripped = fs::read(&unpacked).unwrap();
    assert_eq!(round_tripped, content);
}

#[test]
fn fast_flag_produces_a_valid_decodable_stream() {
    let content = b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_vec();
    let (dir, input) = setup_input(&content);
    let packed = dir.path().join("input.packed");
    let unpacked = dir.path().join("input.unpacked");

    let status = Command::new(packcore_bin())
        .args([
            "pack",
            input.to_str().unwrap(),
            packed.to_str().unwrap(),
            "--fast",
        ])
        .status()
        .expect("spawn packcore pack --fast");
    assert!(status.success());

    let status = Command::new(packcore_bin())
        .args(["unpack", packed.to_str().unwrap(), unpacked.to_str().unwrap()])
        .status()
        .expect("spawn packcore unpack");
    assert!(status.success());

    assert_eq!(fs::read(&unpacked).unwrap(), content);
}

#[test]
fn pack_nonexistent_input_fails_with_nonzero_exit() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.bin");
    let output = dir.path().join("out.packed");

    let status = Command::new(packcore_bin())
        .args(["pack", missing.to_str().unwrap(), output.to_str().unwrap()])
        .status()
        .expect("spawn packcore pack");
    assert!(!status.success());
    assert!(!output.exists());
}

#[test]
fn unpack_malformed_input_fails_with_nonzero_exit() {
    let (dir, _input) = setup_input(b"unused");
    let garbage = dir.path().join("garbage.bin");
    // A buffer with no terminator at all.
    fs::write(&garbage, vec![0x01u8; 4]).unwrap();
    let output = dir.path().join("out.unpacked");

    let status = Command::new(packcore_bin())
        .args(["unpack", garbage.to_str().unwrap(), output.to_str().unwrap()])
        .status()
        .expect("spawn packcore unpack");
    assert!(!status.success());
}

#[test]
fn unpack_honors_byte_offset_into_a_larger_file() {
    let content = b"the quick brown fox jumps over the lazy dog, over and over again. "
        .repeat(20);
    let (dir, input) = setup_input(&content);
    let packed = dir.path().join("input.packed");
    let unpacked = dir.path().join("input.unpacked");

    let status = Command::new(packcore_bin())
        .args(["pack", input.to_str().unwrap(), packed.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    // Simulate a ROM image: pad some unrelated bytes before the stream.
    let prefix = vec![0xABu8; 16];
    let mut blob = prefix.clone();
    blob.extend_from_slice(&fs::read(&packed).unwrap());
    let blob_path = dir.path().join("rom.bin");
    fs::write(&blob_path, &blob).unwrap();

    let status = Command::new(packcore_bin())
        .args([
            "unpack",
            blob_path.to_str().unwrap(),
            unpacked.to_str().unwrap(),
            "--offset",
            "0x10",
        ])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&unpacked).unwrap(), content);
}

#[test]
fn empty_input_round_trips() {
    let (dir, input) = setup_input(b"");
    let packed = dir.path().join("input.packed");
    let unpacked = dir.path().join("input.unpacked");

    let status = Command::new(packcore_bin())
        .args(["pack", input.to_str().unwrap(), packed.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    let status = Command::new(packcore_bin())
        .args(["unpack", packed.to_str().unwrap(), unpacked.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    assert_eq!(fs::read(&unpacked).unwrap(), Vec::<u8>::new());
}
