//! Bit addressing arithmetic.
//!
//! A linear bit position maps to a byte index and a bit-within-byte shift.
//! Bytes are filled most significant bit first, so position `0` of a
//! buffer is `0x80` of byte `0` (shift `7`), position `7` is `0x01` of byte
//! `0` (shift `0`), and position `8` is `0x80` of byte `1`.

pub const BITS_PER_BYTE: u64 = 8;

/// Splits a linear position into `(byte_index, bit_in_byte)`.
#[inline(always)]
pub const fn decompose(position: u64) -> (u64, u8) {
    let byte_index = position / BITS_PER_BYTE;
    let bit_in_byte = (BITS_PER_BYTE - 1 - position % BITS_PER_BYTE) as u8;
    (byte_index, bit_in_byte)
}

/// Inverse of [`decompose`].
#[inline(always)]
pub const fn compose(byte_index: u64, bit_in_byte: u8) -> u64 {
    debug_assert!(bit_in_byte < 8);
    byte_index * BITS_PER_BYTE + (BITS_PER_BYTE - 1 - bit_in_byte as u64)
}

/// Number of bytes needed to hold `bits` bits.
#[inline(always)]
pub const fn bits_to_bytes(bits: u64) -> u64 {
    bits.div_ceil(BITS_PER_BYTE)
}

/// Single-bit mask for `bit_in_byte` as produced by [`decompose`].
#[inline(always)]
pub const fn mask(bit_in_byte: u8) -> u8 {
    1u8 << bit_in_byte
}

/// Mask selecting the live bits of the last occupied byte of a buffer
/// holding `len` bits. Byte-aligned lengths keep the whole byte.
#[inline(always)]
pub const fn tail_mask(len: u64) -> u8 {
    match len % BITS_PER_BYTE {
        0 => 0xFF,
        used => !(0xFFu8 >> used),
    }
}
