//! Binary entry point for the `packcore` command-line tool.
//!
//! Two subcommands: `pack` compresses a file into a block, `unpack`
//! decompresses a block back into its original bytes. Both read the whole
//! input into memory and write the whole output at once — the codec is
//! bounded to 64 KiB blocks, so there is no streaming concern.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use packcore::{config, pack, unpack, PackOptions, MAX_BLOCK_SIZE};

#[derive(Parser)]
#[command(name = "packcore", about = "Bounded-size lossless block codec")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a file into a block.
    Pack {
        input: PathBuf,
        output: PathBuf,
        /// Skip the slower RLE/back-reference search variants.
        #[arg(long, default_value_t = config::FAST_DEFAULT)]
        fast: bool,
    },
    /// Decompress a block back into its original bytes.
    Unpack {
        input: PathBuf,
        output: PathBuf,
        /// Byte offset into `input` where the compressed stream starts.
        /// Decimal or `0x`-prefixed hex, matching the reference CLI's
        /// ROM-offset convention.
        #[arg(long, default_value = "0", value_parser = parse_offset)]
        offset: u64,
    },
}

fn parse_offset(s: &str) -> Result<u64, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .map(|hex| (hex, 16))
        .unwrap_or((s, 10));
    u64::from_str_radix(digits.0, digits.1).map_err(|e| format!("invalid offset {s:?}: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Pack {
            input,
            output,
            fast,
        } => run_pack(&input, &output, fast),
        Command::Unpack {
            input,
            output,
            offset,
        } => run_unpack(&input, &output, offset),
    }
}

fn run_pack(input: &PathBuf, output: &PathBuf, fast: bool) -> Result<()> {
    let unpacked =
        fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let mut packed = vec![0u8; MAX_BLOCK_SIZE];
    let n = pack(&unpacked, &mut packed, PackOptions { fast })
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("packing {}", input.display()))?;
    packed.truncate(n);
    fs::write(output, &packed).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

fn run_unpack(input: &PathBuf, output: &PathBuf, offset: u64) -> Result<()> {
    let file = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let offset = usize::try_from(offset).context("offset does not fit in memory")?;
    let packed = file
        .get(offset..)
        .ok_or_else(|| anyhow!("offset {offset:#x} is past the end of {}", input.display()))?;
    let mut unpacked = vec![0u8; MAX_BLOCK_SIZE];
    let n = unpack(packed, &mut unpacked)
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("unpacking {}", input.display()))?;
    unpacked.truncate(n);
    fs::write(output, &unpacked).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}
