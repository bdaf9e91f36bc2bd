//! Lossless conversions between bit strings, unsigned integers and bytes.
//!
//! Integers are written most significant bit first; reading back packs the
//! occupied bytes big-endian and drops the unused low bits of the last one.
//!
//! ```rust
//! use bit_string::BitString;
//!
//! let bits = BitString::from_uint(7u32, 4).unwrap();
//! assert_eq!(bits.to_text(), "0111");
//! assert_eq!(bits.to_u32().unwrap(), 7);
//!
//! let wide = BitString::from_uint(0x1FFu16, 9).unwrap();
//! assert!(wide.to_u8().is_err());
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use bytemuck::Pod;

use crate::BitString;
use crate::error::{BitStringError, Result};

mod private {
    pub trait Sealed {}
}

/// Unsigned integer types a bit string converts to and from.
pub trait UnsignedBits: Copy + private::Sealed {
    const BITS: u32;

    fn to_u128(self) -> u128;

    /// Truncating conversion from the low bits of `value`.
    fn from_u128(value: u128) -> Self;
}

macro_rules! impl_unsigned_bits {
    ($($t:ty),*) => {$(
        impl private::Sealed for $t {}

        impl UnsignedBits for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn to_u128(self) -> u128 {
                self as u128
            }

            #[inline]
            fn from_u128(value: u128) -> Self {
                value as $t
            }
        }
    )*};
}

impl_unsigned_bits!(u8, u16, u32, u64, u128, usize);

impl BitString {
    /// Bit string holding the `n_bits` low bits of `value`, MSB first.
    pub fn from_uint<T: UnsignedBits>(value: T, n_bits: u32) -> Result<Self> {
        let mut bits = BitString::with_capacity(n_bits.min(T::BITS));
        bits.append_uint(value, n_bits)?;
        Ok(bits)
    }

    /// Appends the `n_bits` low bits of `value`, most significant first.
    ///
    /// # Errors
    ///
    /// Returns [`BitStringError::InvalidBitCount`] if `n_bits` is wider than
    /// `T`. Nothing is appended in that case.
    pub fn append_uint<T: UnsignedBits>(&mut self, value: T, n_bits: u32) -> Result<()> {
        if n_bits > T::BITS {
            return Err(BitStringError::InvalidBitCount {
                requested: n_bits,
                max: T::BITS,
            });
        }
        if n_bits == 0 {
            return Ok(());
        }
        let aligned = value.to_u128() << (u128::BITS - n_bits);
        self.buffer
            .extend_from_raw(&aligned.to_be_bytes(), 0, n_bits as u64);
        Ok(())
    }

    /// Packs the bits into a `T`, first bit most significant.
    ///
    /// # Errors
    ///
    /// Returns [`BitStringError::Overflow`] if the occupied bytes do not fit
    /// in `T`.
    pub fn to_uint<T: UnsignedBits>(&self) -> Result<T> {
        let bytes = self.buffer.byte_len();
        let max_bytes = (T::BITS / 8) as usize;
        if bytes > max_bytes {
            return Err(BitStringError::Overflow { bytes, max_bytes });
        }

        let packed = self
            .buffer
            .normalized_bytes()
            .fold(0u128, |acc, byte| (acc << 8) | byte as u128);
        let extra = bytes as u32 * 8 - self.len();
        Ok(T::from_u128(packed >> extra))
    }

    pub fn to_u8(&self) -> Result<u8> {
        self.to_uint()
    }

    pub fn to_u16(&self) -> Result<u16> {
        self.to_uint()
    }

    pub fn to_u32(&self) -> Result<u32> {
        self.to_uint()
    }

    pub fn to_u64(&self) -> Result<u64> {
        self.to_uint()
    }

    pub fn to_u128(&self) -> Result<u128> {
        self.to_uint()
    }

    /// Bit string over the first `len_bits` bits of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`BitStringError::RangeOutOfBounds`] if `bytes` holds fewer
    /// than `len_bits` bits.
    pub fn from_bytes(bytes: &[u8], len_bits: u32) -> Result<Self> {
        let available = bytes.len().saturating_mul(8);
        if len_bits as usize > available {
            return Err(BitStringError::RangeOutOfBounds {
                start: 0,
                length: len_bits as usize,
                available,
            });
        }
        let mut bits = BitString::with_capacity(len_bits);
        bits.buffer.extend_from_raw(bytes, 0, len_bits as u64);
        Ok(bits)
    }

    /// Appends all `8 * bytes.len()` bits of `bytes`.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.buffer
            .extend_from_raw(bytes, 0, bytes.len() as u64 * 8);
    }

    /// The occupied bytes with unused trailing bits zeroed.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.normalized_bytes().collect()
    }

    /// Bit string over the in-memory bytes of `value`.
    pub fn from_pod<T: Pod>(value: &T) -> Self {
        let mut bits = BitString::new();
        bits.append_pod(value);
        bits
    }

    /// Appends the in-memory bytes of `value`, in memory order.
    pub fn append_pod<T: Pod>(&mut self, value: &T) {
        self.append_bytes(bytemuck::bytes_of(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint_layout_is_msb_first() {
        let bits = BitString::from_uint(0b1011u8, 4).unwrap();
        assert_eq!(bits.to_text(), "1011");
        assert_eq!(bits.buffer().bytes()[0] & 0xF0, 0b1011_0000);
    }

    #[test]
    fn uint_roundtrip_edges() {
        assert_eq!(BitString::from_uint(u64::MAX, 64).unwrap().to_u64().unwrap(), u64::MAX);
        assert_eq!(BitString::from_uint(0xABu8, 0).unwrap().len(), 0);
        assert_eq!(BitString::new().to_u8().unwrap(), 0);
        assert_eq!(
            BitString::from_uint(u128::MAX, 128).unwrap().to_u128().unwrap(),
            u128::MAX
        );
        assert_eq!(BitString::from_uint(0x1234u16, 12).unwrap().to_u16().unwrap(), 0x234);
    }

    #[test]
    fn too_many_bits_rejected() {
        let mut bits = BitString::from_text("1").unwrap();
        assert!(matches!(
            bits.append_uint(1u8, 9),
            Err(BitStringError::InvalidBitCount { requested: 9, max: 8 })
        ));
        assert_eq!(bits.len(), 1);
    }

    #[test]
    fn append_uint_misaligned() {
        let mut bits = BitString::from_text("1").unwrap();
        bits.append_uint(0b010u32, 3).unwrap();
        bits.append_uint(0xFFu8, 8).unwrap();
        assert_eq!(bits.to_text(), "101011111111");
    }

    #[test]
    fn overflow_counts_bytes() {
        let bits = BitString::from_text("000000001").unwrap();
        assert!(matches!(
            bits.to_u8(),
            Err(BitStringError::Overflow { bytes: 2, max_bytes: 1 })
        ));
        assert_eq!(bits.to_u16().unwrap(), 1);
    }

    #[test]
    fn to_uint_ignores_stale_bits() {
        let mut bits = BitString::from_text("10111111").unwrap();
        bits.pop_back(6);
        assert_eq!(bits.to_u8().unwrap(), 0b10);
    }

    #[test]
    fn bytes_roundtrip() {
        let bits = BitString::from_bytes(&[0xA5, 0xFF], 12).unwrap();
        assert_eq!(bits.to_text(), "101001011111");
        assert_eq!(bits.to_bytes(), vec![0xA5, 0xF0]);
        assert!(BitString::from_bytes(&[0x00], 9).is_err());
    }

    #[test]
    fn pod_in_memory_order() {
        let bits = BitString::from_pod(&0x0102_0304u32.to_be());
        assert_eq!(bits.len(), 32);
        assert_eq!(bits.to_u32().unwrap(), 0x0102_0304);

        let mut tagged = BitString::from_text("1").unwrap();
        tagged.append_pod(&[0xFFu8; 2]);
        assert_eq!(tagged.len(), 17);
    }
}
