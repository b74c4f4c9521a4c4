/// Represents all possible errors that can occur while reading a MIBIB partition table.
///
/// This enum is used throughout the crate to provide detailed error information for
/// operations that may fail, such as loading an image file and validating or decoding
/// the embedded partition table.
#[derive(Debug)]
pub enum MibibError {
    /// Represents an error that occurs while reading the image from disk.
    Io(std::io::Error),
    /// Represents an image too short to contain the partition table header.
    TruncatedHeader,
    /// Represents an image too short to contain the full entry region the
    /// header's version declares.
    TruncatedTable,
    /// Represents a header whose magic values do not match the SMEM flash
    /// partition table signature. Carries the values that were found.
    MagicMismatch {
        /// The value read where `magic1` was expected.
        magic1: u32,
        /// The value read where `magic2` was expected.
        magic2: u32,
    },
    /// Represents a partition table version outside the known set (3 or
    /// earlier, and 4).
    UnsupportedVersion(u32),
    /// Represents a declared partition count larger than the table can hold.
    TooManyPartitions {
        /// The partition count the header declares.
        declared: u32,
        /// The maximum the table layout allows.
        max: u32,
    },
    /// Represents a caller-supplied block size of zero, which would render
    /// every derived byte offset and length as zero.
    InvalidBlockSize,
}

/// Provides a user-friendly string representation for each error variant in `MibibError`.
impl std::fmt::Display for MibibError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MibibError::Io(err) => write!(f, "I/O error: {err}"),
            MibibError::TruncatedHeader => {
                write!(f, "Image too short for the partition table header")
            }
            MibibError::TruncatedTable => {
                write!(f, "Image too short for the declared partition table layout")
            }
            MibibError::MagicMismatch { magic1, magic2 } => write!(
                f,
                "Partition table magic verification failed (found {magic1:#010x}, {magic2:#010x})"
            ),
            MibibError::UnsupportedVersion(version) => {
                write!(f, "Unknown partition table version ({version})")
            }
            MibibError::TooManyPartitions { declared, max } => {
                write!(f, "Partition count {declared} exceeds the limit of {max}")
            }
            MibibError::InvalidBlockSize => write!(f, "Block size must be non-zero"),
        }
    }
}

/// Implements the standard error trait for `MibibError`, allowing it to be used with
/// error chaining and other error handling utilities.
impl std::error::Error for MibibError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MibibError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Allows automatic conversion from `std::io::Error` to `MibibError`.
impl From<std::io::Error> for MibibError {
    fn from(error: std::io::Error) -> Self {
        MibibError::Io(error)
    }
}
