use crate::error::MibibError;
use crate::partition_table::PartitionTable;
use log::debug;
use std::fs;
use std::path::Path;

/// Represents a device image loaded fully into memory.
///
/// The image owns its bytes; the buffer is released when the value is dropped,
/// on every path. Decoding borrows the buffer read-only, so one image can be
/// decoded repeatedly (or from several threads) without copying.
///
/// # Usage
///
/// ```no_run
/// use mibib_rs::{MibibImage, DEFAULT_BLOCK_SIZE, DEFAULT_TABLE_OFFSET};
///
/// let image = MibibImage::open("partition_complete_p2K_b128K.mbn").unwrap();
/// let table = image
///     .partition_table(DEFAULT_TABLE_OFFSET, DEFAULT_BLOCK_SIZE)
///     .unwrap();
/// for entry in &table.entries {
///     println!("{}: {} bytes at {}", entry.name, entry.byte_length, entry.byte_offset);
/// }
/// ```
#[derive(Debug)]
pub struct MibibImage {
    data: Vec<u8>,
}

impl MibibImage {
    /// Reads the file at `path` in full and returns it as an image.
    ///
    /// Fails with [`MibibError::Io`] if the file cannot be opened or read to
    /// the end.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MibibError> {
        let data = fs::read(path.as_ref())?;
        debug!(
            "loaded image {} ({} bytes)",
            path.as_ref().display(),
            data.len()
        );
        Ok(MibibImage { data })
    }

    /// Returns the raw image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Decodes the partition table at `table_offset` within this image.
    ///
    /// Convenience wrapper around [`PartitionTable::decode`].
    pub fn partition_table(
        &self,
        table_offset: usize,
        block_size: u32,
    ) -> Result<PartitionTable, MibibError> {
        PartitionTable::decode(&self.data, table_offset, block_size)
    }
}
