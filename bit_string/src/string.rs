//! The growable bit string.
//!
//! # Examples
//!
//! ## Building and reading
//!
//! ```rust
//! use bit_string::BitString;
//!
//! let mut bits = BitString::new();
//! for _ in 0..7 {
//!     bits.push(true);
//! }
//! bits.push(false);
//!
//! assert_eq!(bits.len(), 8);
//! assert_eq!(bits.to_text(), "11111110");
//! assert_eq!(bits.to_u8().unwrap(), 0xFE);
//! ```
//!
//! ## Writing through references
//!
//! ```rust
//! use bit_string::BitString;
//!
//! let mut bits = BitString::from_text("0000").unwrap();
//! for (i, bit) in bits.iter_mut().enumerate() {
//!     bit.set(i % 2 == 1);
//! }
//! assert_eq!(bits.to_text(), "0101");
//! ```

use bit_storage::BitBuffer;
use bit_storage::addressing::bits_to_bytes;

use crate::error::{BitStringError, Result};
use crate::iter::{BitIter, BitIterMut, Iter, IterMut};
use crate::reference::{BitRef, as_cells};

/// A growable sequence of bits packed MSB-first into bytes.
///
/// Up to [`INLINE_CAPACITY`](bit_storage::INLINE_CAPACITY) bytes of bits are
/// stored inline; longer strings spill to the heap. Any call taking
/// `&mut self` may reallocate, so cursors and references never outlive one.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitString {
    pub(crate) buffer: BitBuffer,
}

impl BitString {
    /// Creates an empty bit string without allocating.
    pub const fn new() -> Self {
        BitString {
            buffer: BitBuffer::new(),
        }
    }

    /// Creates an empty bit string with room for `bits` bits.
    pub fn with_capacity(bits: u32) -> Self {
        BitString {
            buffer: BitBuffer::with_capacity(bits as u64),
        }
    }

    /// Length in bits.
    #[inline]
    pub fn len(&self) -> u32 {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Capacity in bits.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.buffer.capacity_bits()
    }

    /// Whether the bits are held in the inline small buffer.
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.buffer.is_inline()
    }

    pub fn buffer(&self) -> &BitBuffer {
        &self.buffer
    }

    /// Appends one bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_string::BitString;
    ///
    /// let mut bits = BitString::new();
    /// bits.push(true);
    /// bits.push(false);
    /// assert_eq!(bits.to_text(), "10");
    /// ```
    #[inline]
    pub fn push(&mut self, bit: bool) {
        self.buffer.push_bit(bit);
    }

    /// Removes and returns the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        let last = self.len().checked_sub(1)?;
        let bit = self.buffer.read_bit(last as u64);
        self.buffer.truncate(last);
        Some(bit)
    }

    /// Drops the last `n` bits, stopping at empty. Keeps the allocation.
    pub fn pop_back(&mut self, n: u32) {
        self.buffer.truncate(self.len().saturating_sub(n));
    }

    pub fn get(&self, index: u32) -> Option<bool> {
        self.buffer.get(index as u64)
    }

    /// Overwrites the bit at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BitStringError::IndexOutOfBounds`] if `index >= len()`.
    pub fn set(&mut self, index: u32, bit: bool) -> Result<()> {
        if index >= self.len() {
            return Err(BitStringError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        self.buffer.set(index as u64, bit)?;
        Ok(())
    }

    /// Writable reference to the bit at `index`.
    pub fn bit_mut(&mut self, index: u32) -> Option<BitRef<'_>> {
        if index >= self.len() {
            return None;
        }
        Some(BitRef::new(as_cells(self.buffer.bytes_mut()), index as u64))
    }

    /// Appends every bit of `other`.
    ///
    /// Capacity grows once for the whole append. When `len()` is a multiple
    /// of eight the bytes of `other` are copied directly.
    pub fn append(&mut self, other: &BitString) {
        self.buffer
            .extend_from_raw(other.buffer.bytes(), 0, other.len() as u64);
    }

    /// New bit string holding `self` followed by `other`.
    pub fn concat(&self, other: &BitString) -> BitString {
        let mut out = BitString::with_capacity(self.len().saturating_add(other.len()));
        out.append(self);
        out.append(other);
        out
    }

    /// Copies `length` bits starting at `start` into a new bit string.
    ///
    /// # Errors
    ///
    /// Returns [`BitStringError::RangeOutOfBounds`] if the range runs past
    /// `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_string::BitString;
    ///
    /// let bits = BitString::from_text("1010").unwrap();
    /// assert_eq!(bits.substr(1, 2).unwrap().to_text(), "01");
    /// assert!(bits.substr(3, 2).is_err());
    /// ```
    pub fn substr(&self, start: u32, length: u32) -> Result<BitString> {
        if start as u64 + length as u64 > self.len() as u64 {
            return Err(BitStringError::RangeOutOfBounds {
                start: start as usize,
                length: length as usize,
                available: self.len() as usize,
            });
        }
        let mut out = BitString::with_capacity(length);
        out.buffer
            .extend_from_raw(self.buffer.bytes(), start as u64, length as u64);
        Ok(out)
    }

    /// Grows or truncates to `len` bits; new bits are set to `fill`.
    pub fn resize(&mut self, len: u32, fill: bool) {
        let old = self.len();
        if len <= old {
            self.buffer.truncate(len);
            return;
        }
        self.buffer.grow_for_append((len - old) as u64);
        self.buffer.set_len(len);
        self.buffer.fill(old as u64, len as u64, fill);
    }

    /// Makes room for a total of `bits` bits. Never shrinks.
    pub fn reserve(&mut self, bits: u32) {
        self.buffer.allocate(bits_to_bytes(bits as u64) as usize);
    }

    /// Releases unused capacity, moving back inline when the bits fit.
    pub fn shrink_to_fit(&mut self) {
        self.buffer.shrink_to_fit();
    }

    /// Removes all bits, keeping the allocation.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Moves the contents out, leaving `self` empty and inline.
    pub fn take(&mut self) -> BitString {
        BitString {
            buffer: self.buffer.take(),
        }
    }

    /// Cursor at the first bit.
    pub fn begin(&self) -> BitIter<'_> {
        BitIter::new(self.buffer.bytes(), 0)
    }

    /// Cursor one past the last bit.
    pub fn end(&self) -> BitIter<'_> {
        BitIter::new(self.buffer.bytes(), self.len() as u64)
    }

    /// Writable `(begin, end)` cursors.
    pub fn cursors_mut(&mut self) -> (BitIterMut<'_>, BitIterMut<'_>) {
        let len = self.len() as u64;
        let cells = as_cells(self.buffer.bytes_mut());
        (BitIterMut::new(cells, 0), BitIterMut::new(cells, len))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.buffer.bytes(), self.len() as u64)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        let len = self.len() as u64;
        IterMut::new(as_cells(self.buffer.bytes_mut()), len)
    }

    /// Zeroes the unused bits of the last byte. Idempotent.
    pub fn normalize(&mut self) {
        self.buffer.normalize();
    }

    /// The occupied bytes, normalized first.
    pub fn as_raw_bytes(&mut self) -> &[u8] {
        self.buffer.normalize();
        self.buffer.bytes()
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl core::ops::Index<u32> for BitString {
    type Output = bool;

    fn index(&self, index: u32) -> &bool {
        match self.get(index) {
            Some(true) => &TRUE,
            Some(false) => &FALSE,
            None => panic!(
                "index {} out of bounds for bit string of length {}",
                index,
                self.len()
            ),
        }
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitString::new();
        bits.extend(iter);
        bits
    }
}

impl Extend<bool> for BitString {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.buffer.grow_for_append(lower as u64);
        for bit in iter {
            self.push(bit);
        }
    }
}

impl<'a> IntoIterator for &'a BitString {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut BitString {
    type Item = BitRef<'a>;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> IterMut<'a> {
        self.iter_mut()
    }
}
