//! Random-access bit cursors and the iterators built from them.
//!
//! A [`BitCursor`] is a position plus the buffer it walks. [`BitIter`]
//! dereferences to a plain `bool`; [`BitIterMut`] dereferences to a
//! [`BitRef`] that can write through.
//!
//! ```rust
//! use bit_string::BitString;
//!
//! let bits = BitString::from_text("0110").unwrap();
//! let mut it = bits.begin();
//! it.advance(2).unwrap();
//! assert!(it.get());
//! assert_eq!(bits.end() - it, 2);
//! assert!(it.retreat(3).is_err());
//! ```

use core::cell::Cell;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::Sub;

use bit_storage::addressing::{decompose, mask};

use crate::error::{BitStringError, Result};
use crate::reference::BitRef;

mod private {
    pub trait Sealed {}
}

/// Byte views a cursor can walk.
pub trait BitSource: Copy + private::Sealed {
    type Item;

    /// Base address, used to tell buffers apart.
    fn address(self) -> *const u8;

    fn load(self, position: u64) -> Self::Item;
}

impl private::Sealed for &[u8] {}
impl private::Sealed for &[Cell<u8>] {}

impl BitSource for &[u8] {
    type Item = bool;

    #[inline]
    fn address(self) -> *const u8 {
        self.as_ptr()
    }

    #[inline]
    fn load(self, position: u64) -> bool {
        let (byte, bit) = decompose(position);
        self[byte as usize] & mask(bit) != 0
    }
}

impl<'a> BitSource for &'a [Cell<u8>] {
    type Item = BitRef<'a>;

    #[inline]
    fn address(self) -> *const u8 {
        self.as_ptr().cast()
    }

    #[inline]
    fn load(self, position: u64) -> BitRef<'a> {
        BitRef::new(self, position)
    }
}

/// Random-access position inside one buffer.
///
/// Cursors compare equal only when they sit at the same position of the
/// same buffer; ordering between cursors of different buffers is undefined
/// and reported as `None`.
#[derive(Clone, Copy)]
pub struct BitCursor<S> {
    source: S,
    position: u64,
}

/// Read-only cursor, dereferences to `bool`.
pub type BitIter<'a> = BitCursor<&'a [u8]>;

/// Read/write cursor, dereferences to [`BitRef`].
pub type BitIterMut<'a> = BitCursor<&'a [Cell<u8>]>;

#[inline]
fn moved(position: u64, steps: i128) -> Result<u64> {
    let target = position as i128 + steps;
    if target < 0 {
        return Err(BitStringError::OutOfRange(
            i64::try_from(target).unwrap_or(i64::MIN),
        ));
    }
    Ok(target as u64)
}

impl<S: BitSource> BitCursor<S> {
    #[inline]
    pub(crate) fn new(source: S, position: u64) -> Self {
        BitCursor { source, position }
    }

    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The bit under the cursor. The position must be inside the buffer.
    #[inline]
    pub fn get(&self) -> S::Item {
        self.source.load(self.position)
    }

    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.position += 1;
        self
    }

    #[inline]
    pub fn decrement(&mut self) -> Result<&mut Self> {
        self.advance(-1)
    }

    /// Moves by `steps` (negative moves backwards).
    ///
    /// Fails with [`BitStringError::OutOfRange`] if the result would be
    /// negative, leaving the cursor where it was. Moving past the end is not
    /// checked.
    pub fn advance(&mut self, steps: i64) -> Result<&mut Self> {
        self.position = moved(self.position, steps as i128)?;
        Ok(self)
    }

    /// Moves by `-steps`; same failure rule as [`advance`](Self::advance).
    pub fn retreat(&mut self, steps: i64) -> Result<&mut Self> {
        self.position = moved(self.position, -(steps as i128))?;
        Ok(self)
    }

    /// Copy of the cursor moved by `steps`.
    pub fn offset(mut self, steps: i64) -> Result<Self> {
        self.advance(steps)?;
        Ok(self)
    }

    /// `self.position() - origin.position()`.
    #[inline]
    pub fn distance_from(&self, origin: &Self) -> i64 {
        self.position as i64 - origin.position as i64
    }

    #[inline]
    pub fn same_buffer(&self, other: &Self) -> bool {
        self.source.address() == other.source.address()
    }
}

impl<S: BitSource> Sub for BitCursor<S> {
    type Output = i64;

    fn sub(self, rhs: Self) -> i64 {
        self.distance_from(&rhs)
    }
}

impl<S: BitSource> PartialEq for BitCursor<S> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.same_buffer(other)
    }
}

impl<S: BitSource> Eq for BitCursor<S> {}

impl<S: BitSource> PartialOrd for BitCursor<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_buffer(other)
            .then(|| self.position.cmp(&other.position))
    }
}

impl<S: BitSource> fmt::Debug for BitCursor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitCursor")
            .field("position", &self.position)
            .field("buffer", &self.source.address())
            .finish()
    }
}

/// Double-ended iterator over the bits between two cursors.
#[derive(Clone)]
pub struct Bits<S> {
    front: BitCursor<S>,
    back: BitCursor<S>,
}

/// Iterator yielding `bool`s.
pub type Iter<'a> = Bits<&'a [u8]>;

/// Iterator yielding writable [`BitRef`]s.
pub type IterMut<'a> = Bits<&'a [Cell<u8>]>;

impl<S: BitSource> Bits<S> {
    pub(crate) fn new(source: S, len: u64) -> Self {
        Bits {
            front: BitCursor::new(source, 0),
            back: BitCursor::new(source, len),
        }
    }

    /// The cursors delimiting the bits not yet yielded.
    pub fn cursors(&self) -> (BitCursor<S>, BitCursor<S>) {
        (self.front, self.back)
    }

    #[inline]
    fn remaining(&self) -> usize {
        (self.back.position - self.front.position) as usize
    }
}

impl<S: BitSource> Iterator for Bits<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.front.position == self.back.position {
            return None;
        }
        let item = self.front.get();
        self.front.increment();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<S::Item> {
        let skip = n.min(self.remaining()) as u64;
        self.front.position += skip;
        self.next()
    }
}

impl<S: BitSource> DoubleEndedIterator for Bits<S> {
    fn next_back(&mut self) -> Option<S::Item> {
        if self.front.position == self.back.position {
            return None;
        }
        self.back.position -= 1;
        Some(self.back.get())
    }
}

impl<S: BitSource> ExactSizeIterator for Bits<S> {}

impl<S: BitSource> FusedIterator for Bits<S> {}

impl<S: BitSource> fmt::Debug for Bits<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bits")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::as_cells;

    #[test]
    fn cursor_arithmetic() {
        let bytes = [0b1001_0000u8, 0xFF];
        let begin = BitIter::new(&bytes[..], 0);
        let mut it = begin;

        assert!(it.get());
        it.increment();
        assert!(!it.get());
        it.advance(2).unwrap();
        assert!(it.get());
        assert_eq!(it.position(), 3);
        assert_eq!(it - begin, 3);
        assert_eq!(begin - it, -3);

        it.retreat(3).unwrap();
        assert_eq!(it, begin);

        let far = begin.offset(12).unwrap();
        assert!(far.get());
        assert!(begin < far);
        assert!(far >= begin);
    }

    #[test]
    fn negative_position_is_range_error() {
        let bytes = [0u8];
        let mut it = BitIter::new(&bytes[..], 1);
        it.decrement().unwrap();
        assert!(matches!(it.decrement(), Err(BitStringError::OutOfRange(-1))));
        assert_eq!(it.position(), 0);
        assert!(matches!(
            BitIter::new(&bytes[..], 0).retreat(i64::MAX),
            Err(BitStringError::OutOfRange(_))
        ));
    }

    #[test]
    fn cursors_over_different_buffers_differ() {
        let a = [0u8];
        let b = [0u8];
        let x = BitIter::new(&a[..], 0);
        let y = BitIter::new(&b[..], 0);
        assert_ne!(x, y);
        assert_eq!(x.partial_cmp(&y), None);
    }

    #[test]
    fn mutable_cursor_writes_through() {
        let mut bytes = [0u8];
        let cells = as_cells(&mut bytes);
        let mut it = BitIterMut::new(cells, 0);
        it.get().set(true);
        it.advance(7).unwrap();
        it.get().set(true);
        assert_eq!(cells[0].get(), 0b1000_0001);
    }

    #[test]
    fn iterates_both_ends() {
        let bytes = [0b1100_1010u8];
        let mut bits = Iter::new(&bytes[..], 6);
        assert_eq!(bits.len(), 6);
        assert_eq!(bits.next(), Some(true));
        assert_eq!(bits.next_back(), Some(false));
        assert_eq!(bits.next_back(), Some(true));
        assert_eq!(bits.len(), 3);

        let rest: Vec<bool> = bits.collect();
        assert_eq!(rest, vec![true, false, false]);
    }

    #[test]
    fn nth_skips() {
        let bytes = [0b0000_0001u8];
        let mut bits = Iter::new(&bytes[..], 8);
        assert_eq!(bits.nth(7), Some(true));
        assert_eq!(bits.next(), None);
        assert_eq!(Iter::new(&bytes[..], 8).nth(20), None);
    }
}
