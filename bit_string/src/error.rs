use bit_storage::StorageError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BitStringError {
    #[cfg_attr(feature = "std", error("Position {0} is out of range"))]
    OutOfRange(i64),

    #[cfg_attr(feature = "std", error("Index {index} is out of bounds for length {len}"))]
    IndexOutOfBounds { index: u32, len: u32 },

    #[cfg_attr(
        feature = "std",
        error("Range {start}..{start}+{length} exceeds available {available}")
    )]
    RangeOutOfBounds {
        start: usize,
        length: usize,
        available: usize,
    },

    #[cfg_attr(
        feature = "std",
        error("Bit count {requested} exceeds the {max}-bit width of the value")
    )]
    InvalidBitCount { requested: u32, max: u32 },

    #[cfg_attr(
        feature = "std",
        error("Invalid character {found:?} at index {index}, expected '0' or '1'")
    )]
    InvalidCharacter { found: char, index: usize },

    #[cfg_attr(
        feature = "std",
        error("{bytes} bytes do not fit in a {max_bytes}-byte integer")
    )]
    Overflow { bytes: usize, max_bytes: usize },

    #[cfg_attr(feature = "std", error("storage error: {0}"))]
    Storage(#[cfg_attr(feature = "std", from)] StorageError),

    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitStringError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitStringError::OutOfRange(p) => write!(f, "Position {} is out of range", p),
            BitStringError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} is out of bounds for length {}", index, len)
            }
            BitStringError::RangeOutOfBounds {
                start,
                length,
                available,
            } => write!(
                f,
                "Range {}..{}+{} exceeds available {}",
                start, start, length, available
            ),
            BitStringError::InvalidBitCount { requested, max } => write!(
                f,
                "Bit count {} exceeds the {}-bit width of the value",
                requested, max
            ),
            BitStringError::InvalidCharacter { found, index } => write!(
                f,
                "Invalid character {:?} at index {}, expected '0' or '1'",
                found, index
            ),
            BitStringError::Overflow { bytes, max_bytes } => write!(
                f,
                "{} bytes do not fit in a {}-byte integer",
                bytes, max_bytes
            ),
            BitStringError::Storage(e) => write!(f, "storage error: {}", e),
        }
    }
}

#[cfg(not(feature = "std"))]
impl From<StorageError> for BitStringError {
    fn from(err: StorageError) -> Self {
        BitStringError::Storage(err)
    }
}

pub type Result<T> = core::result::Result<T, BitStringError>;
