/// Represents a single decoded partition from a MIBIB table.
///
/// All fields are copied out of the source buffer during decoding; an entry never
/// borrows from the image it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionEntry {
    /// The slot index this entry occupied in the table. Reserved (empty) slots
    /// are skipped during decoding, so indices in a result need not be contiguous.
    pub index: usize,
    /// The partition name, with trailing NUL padding stripped.
    pub name: String,
    /// The partition offset, in blocks.
    pub block_offset: u32,
    /// The partition length, in blocks.
    pub block_count: u32,
    /// Partition flags. Opaque at this layer; passed through undecoded.
    pub attr: u8,
    /// The partition offset in bytes, derived from `block_offset` and the
    /// block size supplied to the decoder.
    pub byte_offset: u64,
    /// The partition length in bytes, derived from `block_count` and the
    /// block size supplied to the decoder.
    pub byte_length: u64,
}
