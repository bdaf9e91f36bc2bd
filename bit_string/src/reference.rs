//! Proxy reference to a single bit.
//!
//! A [`BitRef`] names one bit inside a byte buffer and reads or writes it
//! without exposing the surrounding byte. Handles are built over
//! `&[Cell<u8>]`, so any number of them may point into the same buffer at
//! once (as [`swap`] and [`IterMut`](crate::IterMut) need) while the buffer
//! itself stays mutably borrowed.
//!
//! ```rust
//! use bit_string::{BitString, reference};
//!
//! let mut bits = BitString::from_text("10").unwrap();
//! {
//!     let mut it = bits.iter_mut();
//!     let first = it.next().unwrap();
//!     let second = it.next().unwrap();
//!     reference::swap(&first, &second);
//! }
//! assert_eq!(bits.to_text(), "01");
//! ```

use core::cell::Cell;
use core::cmp::Ordering;
use core::fmt;

use bit_storage::addressing::{decompose, mask};

/// Read/write handle to one bit.
///
/// Comparisons look at the bit values the handles currently observe, never
/// at which bit they name.
pub struct BitRef<'a> {
    cell: &'a Cell<u8>,
    bit: u8,
}

impl<'a> BitRef<'a> {
    /// Handle to bit `position` of `cells`.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies past the end of `cells`.
    #[inline]
    pub fn new(cells: &'a [Cell<u8>], position: u64) -> Self {
        let (byte, bit) = decompose(position);
        BitRef {
            cell: &cells[byte as usize],
            bit,
        }
    }

    #[inline]
    pub fn get(&self) -> bool {
        (self.cell.get() >> self.bit) & 1 != 0
    }

    /// Writes `value`, leaving the other bits of the byte untouched.
    #[inline]
    pub fn set(&self, value: bool) {
        let byte = self.cell.get();
        if value {
            self.cell.set(byte | mask(self.bit));
        } else {
            self.cell.set(byte & !mask(self.bit));
        }
    }

    /// Copies the value observed by `other` into the bit named by `self`.
    ///
    /// `self` keeps naming the same bit afterwards.
    #[inline]
    pub fn assign(&self, other: &BitRef<'_>) {
        self.set(other.get());
    }

    /// Writes `value` and returns the previous one.
    #[inline]
    pub fn replace(&self, value: bool) -> bool {
        let old = self.get();
        self.set(value);
        old
    }

    #[inline]
    pub fn toggle(&self) {
        self.cell.set(self.cell.get() ^ mask(self.bit));
    }
}

/// Exchanges the values of two referenced bits. Either may name the same bit.
pub fn swap(x: &BitRef<'_>, y: &BitRef<'_>) {
    let tmp = x.get();
    x.assign(y);
    y.set(tmp);
}

/// Exchanges the value of a referenced bit with a plain `bool`.
pub fn swap_with(x: &BitRef<'_>, y: &mut bool) {
    *y = x.replace(*y);
}

/// Views a byte slice as cells so proxies into it can coexist.
#[inline]
pub(crate) fn as_cells(bytes: &mut [u8]) -> &[Cell<u8>] {
    Cell::from_mut(bytes).as_slice_of_cells()
}

impl From<BitRef<'_>> for bool {
    fn from(r: BitRef<'_>) -> bool {
        r.get()
    }
}

impl PartialEq for BitRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for BitRef<'_> {}

impl PartialEq<bool> for BitRef<'_> {
    fn eq(&self, other: &bool) -> bool {
        self.get() == *other
    }
}

impl PartialOrd for BitRef<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitRef<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl fmt::Debug for BitRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitRef")
            .field("bit", &self.bit)
            .field("value", &self.get())
            .finish()
    }
}

impl fmt::Display for BitRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.get() { "1" } else { "0" })
    }
}
