//! # mibib-rs
//!
//! `mibib-rs` is a pure Rust reader for the Qualcomm SMEM-style flash partition
//! table embedded in MIBIB device images. It validates the table signature,
//! handles both the legacy (version 3 and earlier) and extended (version 4)
//! layouts, and converts the per-partition block counts into byte offsets and
//! lengths.
//!
//! ## Features
//! - Decode partition tables from any in-memory byte buffer
//! - Load whole device images from disk via [`MibibImage`]
//! - Typed errors for every way a table can be malformed
//! - Human-readable size formatting for display ([`human_size`])
//!
//! ## Usage
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! mibib-rs = "0.1"
//! ```
//!
//! ### Example: Listing partitions from an image
//! ```no_run
//! use mibib_rs::{human_size, MibibImage, DEFAULT_BLOCK_SIZE, DEFAULT_TABLE_OFFSET};
//!
//! let image = MibibImage::open("partition_complete_p2K_b128K.mbn").unwrap();
//! let table = image
//!     .partition_table(DEFAULT_TABLE_OFFSET, DEFAULT_BLOCK_SIZE)
//!     .unwrap();
//!
//! for entry in &table.entries {
//!     println!(
//!         "part[{}]: '{}', offset={}, size={}, attr=0x{:02x}",
//!         entry.index,
//!         entry.name,
//!         human_size(entry.byte_offset),
//!         human_size(entry.byte_length),
//!         entry.attr
//!     );
//! }
//! ```

mod error;
mod human_size;
mod mibib_image;
mod partition_entry;
pub mod partition_table;

pub use error::MibibError;
pub use human_size::human_size;
pub use mibib_image::MibibImage;
pub use partition_entry::PartitionEntry;
pub use partition_table::PartitionTable;

/// Byte position of the partition table within a MIBIB image, per the SMEM
/// convention. A caller-side default: the decoder itself takes the offset as a
/// parameter.
pub const DEFAULT_TABLE_OFFSET: usize = 0x800;

/// Flash block size of the reference images (128 KiB). A caller-side default:
/// the decoder itself takes the block size as a parameter.
pub const DEFAULT_BLOCK_SIZE: u32 = 128 * 1024;
