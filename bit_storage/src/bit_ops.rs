//! Multi-bit reads and writes over a packed byte slice, MSB-first.
//!
//! `value`'s most significant of the `bit_width` low bits lands at
//! `bit_offset`, its least significant at `bit_offset + bit_width - 1`.

use crate::addressing::decompose;

#[inline(always)]
fn low_mask(bit_width: usize) -> u64 {
    if bit_width >= 64 {
        u64::MAX
    } else {
        (1u64 << bit_width) - 1
    }
}

/// Writes the `bit_width` low bits of `value` starting at `bit_offset`.
///
/// Whole bytes covered by the range are overwritten in one store; partial
/// bytes at either end are read-modify-written.
pub fn write_bits(slice: &mut [u8], bit_offset: u64, bit_width: usize, value: u64) {
    debug_assert!(bit_width <= 64);
    let masked = value & low_mask(bit_width);
    let mut remaining = bit_width;
    let mut pos = bit_offset;

    while remaining > 0 {
        let (byte, bit) = decompose(pos);
        let byte = byte as usize;
        let room = bit as usize + 1;

        if room == 8 && remaining >= 8 {
            slice[byte] = (masked >> (remaining - 8)) as u8;
            remaining -= 8;
            pos += 8;
            continue;
        }

        let take = room.min(remaining);
        let chunk = ((masked >> (remaining - take)) & low_mask(take)) as u8;
        let shift = room - take;
        let field = (low_mask(take) as u8) << shift;
        slice[byte] = (slice[byte] & !field) | (chunk << shift);
        remaining -= take;
        pos += take as u64;
    }
}

/// Reads `bit_width` bits starting at `bit_offset` into the low bits of the
/// result.
pub fn read_bits(slice: &[u8], bit_offset: u64, bit_width: usize) -> u64 {
    debug_assert!(bit_width <= 64);
    let mut value = 0u64;
    let mut remaining = bit_width;
    let mut pos = bit_offset;

    while remaining > 0 {
        let (byte, bit) = decompose(pos);
        let room = bit as usize + 1;
        let take = room.min(remaining);
        let shift = room - take;
        let chunk = (slice[byte as usize] >> shift) as u64 & low_mask(take);
        value = (value << take) | chunk;
        remaining -= take;
        pos += take as u64;
    }

    value
}

/// Copies `count` bits from `src` at `src_offset` into `dst` at `dst_offset`.
///
/// Bits of `dst` outside the destination range are left untouched.
pub fn copy_bits(src: &[u8], src_offset: u64, dst: &mut [u8], dst_offset: u64, count: u64) {
    let mut done = 0u64;

    if src_offset % 8 == 0 && dst_offset % 8 == 0 {
        let whole = (count / 8) as usize;
        let s = (src_offset / 8) as usize;
        let d = (dst_offset / 8) as usize;
        dst[d..d + whole].copy_from_slice(&src[s..s + whole]);
        done = whole as u64 * 8;
    }

    while done < count {
        let width = (count - done).min(64) as usize;
        let chunk = read_bits(src, src_offset + done, width);
        write_bits(dst, dst_offset + done, width, chunk);
        done += width as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_bits() {
        let mut buf = [0u8; 8];
        write_bits(&mut buf, 3, 5, 0b10101);
        assert_eq!(buf[0], 0b0001_0101);
        assert_eq!(read_bits(&buf, 3, 5), 0b10101);
    }

    #[test]
    fn straddles_byte_boundary() {
        let mut buf = [0xFFu8; 3];
        write_bits(&mut buf, 6, 12, 0);
        assert_eq!(buf, [0b1111_1100, 0x00, 0b0011_1111]);
        write_bits(&mut buf, 6, 12, 0xABC);
        assert_eq!(read_bits(&buf, 6, 12), 0xABC);
        assert_eq!(buf[0] & 0b1111_1100, 0b1111_1100);
        assert_eq!(buf[2] & 0b0011_1111, 0b0011_1111);
    }

    #[test]
    fn full_width_word() {
        let mut buf = [0u8; 9];
        write_bits(&mut buf, 4, 64, 0x0123_4567_89AB_CDEF);
        assert_eq!(read_bits(&buf, 4, 64), 0x0123_4567_89AB_CDEF);
    }

    #[test]
    fn copy_aligned_and_misaligned_agree() {
        let src = [0b1011_0011, 0b0101_1100, 0b1110_0001];

        let mut aligned = [0u8; 3];
        copy_bits(&src, 0, &mut aligned, 0, 20);
        assert_eq!(aligned, [0b1011_0011, 0b0101_1100, 0b1110_0000]);

        let mut shifted = [0xFFu8; 4];
        copy_bits(&src, 0, &mut shifted, 3, 20);
        assert_eq!(read_bits(&shifted, 0, 3), 0b111);
        assert_eq!(read_bits(&shifted, 3, 20), read_bits(&src, 0, 20));
        assert_eq!(read_bits(&shifted, 23, 9), 0b1_1111_1111);
    }

    #[test]
    fn copy_from_unaligned_source() {
        let src = [0b0001_1111, 0b1000_0000];
        let mut dst = [0u8; 1];
        copy_bits(&src, 3, &mut dst, 0, 6);
        assert_eq!(dst, [0b1111_1100]);
    }

    #[test]
    fn zero_width_is_noop() {
        let mut buf = [0x5Au8; 1];
        write_bits(&mut buf, 3, 0, u64::MAX);
        assert_eq!(buf, [0x5A]);
        assert_eq!(read_bits(&buf, 3, 0), 0);
    }
}
