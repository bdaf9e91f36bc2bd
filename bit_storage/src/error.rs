#[cfg(feature = "std")]
use thiserror::Error;

/// Storage errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Bit position at or past the logical length
    #[cfg_attr(
        feature = "std",
        error("bit position {position} out of bounds for length {len}")
    )]
    OutOfBounds { position: u64, len: u32 },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StorageError::OutOfBounds { position, len } => {
                write!(f, "bit position {} out of bounds for length {}", position, len)
            }
        }
    }
}
