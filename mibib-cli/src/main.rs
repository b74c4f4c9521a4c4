//! # mibibdump
//!
//! `mibibdump` lists the MIBIB flash partition table embedded in a Qualcomm
//! device image: one line per partition with its name, byte offset, size, and
//! attribute flags.
//!
//! ## Usage
//! ```sh
//! mibibdump partition_complete_p2K_b128K.mbn
//! mibibdump --offset 0x800 --block-size 131072 image.mbn
//! ```
//!
//! Each failure mode exits with its own status: 1 for I/O problems, 2-3 for
//! truncated images, 4 for a magic mismatch, 5 for an oversized partition
//! count, 6 for an unknown table version, 7 for a zero block size.

use clap::Parser;
use mibib_rs::{human_size, MibibError, MibibImage};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "mibibdump", version, about = "List the MIBIB partition table of a device image")]
struct Arguments {
    /// Path to the device image containing the partition table.
    image: PathBuf,

    /// Byte offset of the partition table within the image ("0x" hex accepted).
    #[arg(long, value_parser = parse_offset, default_value = "0x800")]
    offset: usize,

    /// Flash block size in bytes.
    #[arg(long, default_value_t = mibib_rs::DEFAULT_BLOCK_SIZE)]
    block_size: u32,
}

/// Parses a byte offset from either decimal or `0x`-prefixed hex notation.
fn parse_offset(value: &str) -> Result<usize, String> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        usize::from_str_radix(hex, 16)
    } else {
        value.parse()
    }
    .map_err(|err| err.to_string())
}

/// Maps each error kind to its own process exit status.
fn exit_status(err: &MibibError) -> u8 {
    match err {
        MibibError::Io(_) => 1,
        MibibError::TruncatedHeader => 2,
        MibibError::TruncatedTable => 3,
        MibibError::MagicMismatch { .. } => 4,
        MibibError::TooManyPartitions { .. } => 5,
        MibibError::UnsupportedVersion(_) => 6,
        MibibError::InvalidBlockSize => 7,
    }
}

fn run(args: &Arguments) -> Result<(), MibibError> {
    println!("Filename: '{}'", args.image.display());
    println!("Block Size: {}", human_size(u64::from(args.block_size)));

    let image = MibibImage::open(&args.image)?;
    let table = image.partition_table(args.offset, args.block_size)?;

    println!(
        "MIBIB partition table found: ver: {} len: {}",
        table.version, table.declared_parts
    );
    for entry in &table.entries {
        println!(
            "part[{}]: '{}', offset={}, size={}, attr=0x{:02x}",
            entry.index,
            entry.name,
            human_size(entry.byte_offset),
            human_size(entry.byte_length),
            entry.attr
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(exit_status(&err))
        }
    }
}
