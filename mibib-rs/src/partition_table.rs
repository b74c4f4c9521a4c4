/// Module for decoding the SMEM flash partition table embedded in a MIBIB image.
///
/// The layout follows the SMEM convention used by Qualcomm modem images: a
/// 16-byte header of four little-endian u32 fields (two magic values, a
/// version, and a declared partition count), immediately followed by a
/// version-dependent number of fixed-stride entry slots.
use crate::error::MibibError;
use crate::partition_entry::PartitionEntry;
use byteorder::{LittleEndian, ReadBytesExt};
use log::debug;
use std::io::{Cursor, Read, Seek, SeekFrom};

/// First magic value identifying an SMEM flash partition table.
pub const FLASH_PART_MAGIC1: u32 = 0x55ee73aa;
/// Second magic value identifying an SMEM flash partition table.
pub const FLASH_PART_MAGIC2: u32 = 0xe35ebddb;

/// Highest table version using the legacy 16-slot layout.
pub const FLASH_PTABLE_V3: u32 = 3;
/// Table version using the extended 48-slot layout.
pub const FLASH_PTABLE_V4: u32 = 4;
/// Slot capacity of a version-3-or-earlier table.
pub const FLASH_PTABLE_MAX_PARTS_V3: u32 = 16;
/// Slot capacity of a version-4 table; also the absolute maximum any header
/// may declare.
pub const FLASH_PTABLE_MAX_PARTS_V4: u32 = 48;

/// Size of the table header in bytes: four little-endian u32 fields.
pub const FLASH_PTABLE_HDR_LEN: usize = 16;
/// Size of the entry name field in bytes.
pub const FLASH_PTABLE_NAME_LEN: usize = 16;
/// Stride of one entry slot in bytes: 16-byte name, u32 offset, u32 length,
/// u8 attr, then 3 bytes of padding from the structure's 4-byte alignment.
/// Entry positions are computed from this stride, not found by scanning.
pub const FLASH_PENTRY_LEN: usize = 28;

/// Represents a decoded SMEM flash partition table.
///
/// Produced in a single pass by [`PartitionTable::decode`]; holds no references
/// into the buffer it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionTable {
    /// The table format version from the header.
    pub version: u32,
    /// The number of populated slots the header declares. This is independent
    /// of the version-derived slot capacity, and reserved slots within the
    /// declared range mean `entries` may hold fewer records than this.
    pub declared_parts: u32,
    /// The decoded partitions, in slot order.
    pub entries: Vec<PartitionEntry>,
}

impl PartitionTable {
    /// Decodes the partition table found at `table_offset` within `bytes`.
    ///
    /// `block_size` is the flash block size in bytes and scales the per-entry
    /// block counts into the derived byte offset and length. It must be
    /// non-zero. Decoding is a pure function of its inputs: any validation
    /// failure aborts the whole decode with a single error, never a partial
    /// result.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The full image containing the table.
    /// * `table_offset` - Byte position of the table header within the image
    ///   (conventionally [`crate::DEFAULT_TABLE_OFFSET`]).
    /// * `block_size` - Flash block size in bytes.
    pub fn decode(
        bytes: &[u8],
        table_offset: usize,
        block_size: u32,
    ) -> Result<Self, MibibError> {
        if block_size == 0 {
            return Err(MibibError::InvalidBlockSize);
        }
        let header_end = table_offset
            .checked_add(FLASH_PTABLE_HDR_LEN)
            .ok_or(MibibError::TruncatedHeader)?;
        if bytes.len() < header_end {
            return Err(MibibError::TruncatedHeader);
        }

        let mut cursor = Cursor::new(&bytes[table_offset..]);
        let magic1 = cursor.read_u32::<LittleEndian>()?;
        let magic2 = cursor.read_u32::<LittleEndian>()?;
        if magic1 != FLASH_PART_MAGIC1 || magic2 != FLASH_PART_MAGIC2 {
            return Err(MibibError::MagicMismatch { magic1, magic2 });
        }

        let version = cursor.read_u32::<LittleEndian>()?;
        let declared_parts = cursor.read_u32::<LittleEndian>()?;

        // The header can never declare more slots than the largest layout
        // holds, whatever the version field says.
        if declared_parts > FLASH_PTABLE_MAX_PARTS_V4 {
            return Err(MibibError::TooManyPartitions {
                declared: declared_parts,
                max: FLASH_PTABLE_MAX_PARTS_V4,
            });
        }

        let capacity = match version {
            0..=FLASH_PTABLE_V3 => FLASH_PTABLE_MAX_PARTS_V3,
            FLASH_PTABLE_V4 => FLASH_PTABLE_MAX_PARTS_V4,
            _ => return Err(MibibError::UnsupportedVersion(version)),
        };
        // A version-3 table claiming 17..=48 entries would iterate past its
        // own 16-slot region; reject it rather than clamp.
        if declared_parts > capacity {
            return Err(MibibError::TooManyPartitions {
                declared: declared_parts,
                max: capacity,
            });
        }

        let table_len = FLASH_PTABLE_HDR_LEN + capacity as usize * FLASH_PENTRY_LEN;
        let table_end = table_offset
            .checked_add(table_len)
            .ok_or(MibibError::TruncatedTable)?;
        if bytes.len() < table_end {
            return Err(MibibError::TruncatedTable);
        }

        debug!(
            "MIBIB partition table at {table_offset:#x}: version {version}, \
             {declared_parts} declared entries, capacity {capacity}"
        );

        let mut entries = Vec::with_capacity(declared_parts as usize);
        let mut name_buf = [0u8; FLASH_PTABLE_NAME_LEN];
        for index in 0..declared_parts as usize {
            cursor.seek(SeekFrom::Start(
                (FLASH_PTABLE_HDR_LEN + index * FLASH_PENTRY_LEN) as u64,
            ))?;
            cursor.read_exact(&mut name_buf)?;
            // A leading NUL marks a reserved slot: not a partition, but the
            // slots after it still count.
            if name_buf[0] == 0 {
                continue;
            }
            let block_offset = cursor.read_u32::<LittleEndian>()?;
            let block_count = cursor.read_u32::<LittleEndian>()?;
            let attr = cursor.read_u8()?;

            let name_len = name_buf
                .iter()
                .position(|&b| b == 0)
                .unwrap_or(FLASH_PTABLE_NAME_LEN);
            let name = String::from_utf8_lossy(&name_buf[..name_len]).into_owned();

            entries.push(PartitionEntry {
                index,
                name,
                block_offset,
                block_count,
                attr,
                byte_offset: u64::from(block_offset) * u64::from(block_size),
                byte_length: u64::from(block_count) * u64::from(block_size),
            });
        }

        Ok(PartitionTable {
            version,
            declared_parts,
            entries,
        })
    }
}
