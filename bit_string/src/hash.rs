//! Hashing of bit strings.
//!
//! Equal bit strings hash equally whatever their capacity or the stale
//! contents of their last byte: only the length and the normalized bytes
//! are fed to the hasher.

use core::hash::{Hash, Hasher};

use crate::BitString;

impl Hash for BitString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buffer.hash(state);
    }
}

/// BLAKE3 digest of a byte slice.
#[cfg(feature = "digest")]
pub fn digest_bytes(bytes: &[u8]) -> blake3::Hash {
    blake3::hash(bytes)
}

#[cfg(feature = "digest")]
impl BitString {
    /// BLAKE3 digest of the normalized bytes followed by the bit length as a
    /// little-endian `u32`.
    ///
    /// ```rust
    /// use bit_string::BitString;
    ///
    /// let mut a = BitString::from_text("1011").unwrap();
    /// a.push(true);
    /// a.pop();
    /// let b = BitString::from_text("1011").unwrap();
    /// assert_eq!(a.digest(), b.digest());
    /// ```
    pub fn digest(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        let mut chunk = [0u8; 64];
        let mut filled = 0;
        for byte in self.buffer.normalized_bytes() {
            chunk[filled] = byte;
            filled += 1;
            if filled == chunk.len() {
                hasher.update(&chunk);
                filled = 0;
            }
        }
        hasher.update(&chunk[..filled]);
        hasher.update(&self.len().to_le_bytes());
        hasher.finalize()
    }
}
