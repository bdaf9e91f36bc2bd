//! Growable bit buffer over [`Storage`].
//!
//! # Examples
//!
//! ```rust
//! use bit_storage::{BitBuffer, INLINE_CAPACITY};
//!
//! let mut buffer = BitBuffer::new();
//! for _ in 0..INLINE_CAPACITY * 8 {
//!     buffer.push_bit(true);
//! }
//! assert!(buffer.is_inline());
//!
//! buffer.push_bit(false);
//! assert!(!buffer.is_inline());
//!
//! buffer.truncate(4);
//! buffer.shrink_to_fit();
//! assert!(buffer.is_inline());
//! ```

use core::hash::{Hash, Hasher};
use core::{fmt, mem};

use crate::addressing::{bits_to_bytes, tail_mask};
use crate::{BitIndex, BitPosition, Storage, StorageError, bit_ops};

/// Largest byte capacity addressable with a `u32` bit length.
const MAX_CAPACITY_BYTES: usize = bits_to_bytes(u32::MAX as u64) as usize;

/// Bit sequence packed MSB-first into [`Storage`].
///
/// Bits past `len()` inside the last occupied byte ("extra bits") hold
/// whatever was last written there. They are masked out by
/// [`normalized_bytes`](Self::normalized_bytes), equality and hashing, and
/// zeroed in place by [`normalize`](Self::normalize).
#[derive(Clone)]
pub struct BitBuffer {
    len: u32,
    storage: Storage,
}

impl BitBuffer {
    /// Creates an empty inline buffer.
    pub const fn new() -> Self {
        BitBuffer {
            len: 0,
            storage: Storage::new_inline(),
        }
    }

    /// Creates an empty buffer able to hold `bits` bits without reallocating.
    pub fn with_capacity(bits: u64) -> Self {
        let mut buffer = Self::new();
        buffer.allocate(checked_bytes(bits));
        buffer
    }

    /// Logical length in bits.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity_bytes(&self) -> u32 {
        self.storage.capacity() as u32
    }

    #[inline]
    pub fn capacity_bits(&self) -> u64 {
        self.storage.capacity() as u64 * 8
    }

    /// Bytes touched by the first `len()` bits.
    #[inline]
    pub fn byte_len(&self) -> usize {
        bits_to_bytes(self.len as u64) as usize
    }

    #[inline]
    pub fn is_inline(&self) -> bool {
        self.storage.is_inline()
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Ensures room for at least `min_bytes` bytes.
    ///
    /// Stays inline while `min_bytes` fits; never shrinks.
    pub fn allocate(&mut self, min_bytes: usize) {
        if min_bytes > self.storage.capacity() {
            self.reallocate(min_bytes);
        }
    }

    /// Makes room for `additional_bits` more bits past `len()`.
    ///
    /// Capacity at least doubles whenever it grows, so `n` single-bit
    /// appends reallocate `O(log n)` times; a bulk append larger than the
    /// doubled capacity reallocates once, to exactly the size it needs.
    ///
    /// # Panics
    ///
    /// Panics if the resulting length would exceed `u32::MAX` bits.
    pub fn grow_for_append(&mut self, additional_bits: u64) {
        let required = checked_bytes(self.len as u64 + additional_bits);
        let capacity = self.storage.capacity();
        if required > capacity {
            let doubled = capacity.saturating_mul(2).min(MAX_CAPACITY_BYTES);
            self.reallocate(doubled.max(required));
        }
    }

    /// Moves the contents into storage of exactly `new_capacity_bytes`
    /// (inline if it fits), keeping the bytes that fit.
    ///
    /// Shrinking below the occupied bytes truncates the logical length.
    pub fn reallocate(&mut self, new_capacity_bytes: usize) {
        self.storage.reallocate(new_capacity_bytes);
        let max_len = self.capacity_bits().min(u32::MAX as u64) as u32;
        self.len = self.len.min(max_len);
    }

    /// Releases capacity not needed for the current length.
    ///
    /// An empty buffer returns to the empty inline state; otherwise the
    /// storage is cut to `byte_len()` bytes, moving back inline if they fit.
    pub fn shrink_to_fit(&mut self) {
        if self.len == 0 {
            self.storage = Storage::new_inline();
            return;
        }
        let needed = self.byte_len();
        if self.storage.capacity() > needed && !self.storage.is_inline() {
            self.reallocate(needed);
        }
    }

    /// Reads the bit at `position`, which must lie inside the capacity.
    #[inline]
    pub fn read_bit(&self, position: u64) -> bool {
        let at = BitPosition::from(BitIndex(position));
        self.storage.as_slice()[at.byte as usize] & at.mask() != 0
    }

    /// Writes the bit at `position` (read-modify-write of its byte).
    #[inline]
    pub fn write_bit(&mut self, position: u64, value: bool) {
        let at = BitPosition::from(BitIndex(position));
        let slot = &mut self.storage.as_mut_slice()[at.byte as usize];
        if value {
            *slot |= at.mask();
        } else {
            *slot &= !at.mask();
        }
    }

    /// Checked read of a bit below `len()`.
    pub fn get(&self, position: u64) -> Option<bool> {
        (position < self.len as u64).then(|| self.read_bit(position))
    }

    /// Checked write of a bit below `len()`.
    pub fn set(&mut self, position: u64, value: bool) -> Result<(), StorageError> {
        if position >= self.len as u64 {
            return Err(StorageError::OutOfBounds {
                position,
                len: self.len,
            });
        }
        self.write_bit(position, value);
        Ok(())
    }

    /// Appends one bit.
    pub fn push_bit(&mut self, value: bool) {
        let position = self.len as u64;
        if position == self.capacity_bits() {
            self.grow_for_append(1);
        }

        let at = BitPosition::from(BitIndex(position));
        if at.bit == 7 {
            // First bit of a fresh byte: overwrite instead of masking.
            self.storage.as_mut_slice()[at.byte as usize] = (value as u8) << 7;
        } else {
            self.write_bit(position, value);
        }
        self.len += 1;
    }

    /// Sets the logical length without touching storage.
    ///
    /// Bits exposed by growing keep whatever the storage holds.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the capacity.
    pub fn set_len(&mut self, len: u32) {
        assert!(
            len as u64 <= self.capacity_bits(),
            "length {} exceeds capacity of {} bits",
            len,
            self.capacity_bits()
        );
        self.len = len;
    }

    /// Shortens to `len` bits; no effect if already shorter.
    pub fn truncate(&mut self, len: u32) {
        self.len = self.len.min(len);
    }

    /// Drops all bits, keeping the allocation.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Moves the contents out, leaving `self` empty and inline.
    pub fn take(&mut self) -> BitBuffer {
        mem::take(self)
    }

    /// Sets bits `start..end` to `value`. The range must lie inside the
    /// capacity.
    pub fn fill(&mut self, start: u64, end: u64, value: bool) {
        let fill_byte = if value { 0xFF } else { 0x00 };
        let mut pos = start;
        while pos < end {
            if pos % 8 == 0 && end - pos >= 8 {
                let first = (pos / 8) as usize;
                let count = ((end - pos) / 8) as usize;
                self.storage.as_mut_slice()[first..first + count].fill(fill_byte);
                pos += count as u64 * 8;
            } else {
                self.write_bit(pos, value);
                pos += 1;
            }
        }
    }

    /// Appends `count` bits read from `src` starting at bit `src_offset`.
    pub fn extend_from_raw(&mut self, src: &[u8], src_offset: u64, count: u64) {
        self.grow_for_append(count);
        let dst_offset = self.len as u64;
        bit_ops::copy_bits(
            src,
            src_offset,
            self.storage.as_mut_slice(),
            dst_offset,
            count,
        );
        self.len += count as u32;
    }

    /// Occupied bytes as stored, extra bits included.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.storage.as_slice()[..self.byte_len()]
    }

    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        let len = self.byte_len();
        &mut self.storage.as_mut_slice()[..len]
    }

    /// Zeroes the extra bits of the last occupied byte. Idempotent.
    pub fn normalize(&mut self) {
        let len = self.len as u64;
        if let Some(last) = self.bytes_mut().last_mut() {
            *last &= tail_mask(len);
        }
    }

    /// Whether the extra bits are already zero.
    pub fn is_normalized(&self) -> bool {
        self.bytes()
            .last()
            .is_none_or(|last| last & !tail_mask(self.len as u64) == 0)
    }

    /// Occupied bytes with the extra bits masked to zero, without mutating.
    pub fn normalized_bytes(&self) -> impl ExactSizeIterator<Item = u8> + '_ {
        let last = self.byte_len().wrapping_sub(1);
        let tail = tail_mask(self.len as u64);
        self.bytes()
            .iter()
            .enumerate()
            .map(move |(i, &byte)| if i == last { byte & tail } else { byte })
    }
}

/// Byte count for `bits`, rejecting lengths past `u32::MAX` bits.
fn checked_bytes(bits: u64) -> usize {
    if bits > u32::MAX as u64 {
        panic!("capacity overflow");
    }
    bits_to_bytes(bits) as usize
}

impl Default for BitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for BitBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.normalized_bytes().eq(other.normalized_bytes())
    }
}

impl Eq for BitBuffer {}

impl Hash for BitBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.len);
        for byte in self.normalized_bytes() {
            state.write_u8(byte);
        }
    }
}

impl fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitBuffer")
            .field("len", &self.len)
            .field("storage", &self.storage)
            .finish()
    }
}
