use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Bytes held inline before spilling to the heap.
pub const INLINE_CAPACITY: usize = 8;

/// The low-level byte backend of a [`BitBuffer`](crate::BitBuffer).
///
/// - `Inline` while the requested capacity fits in [`INLINE_CAPACITY`] bytes
/// - `Heap` otherwise; the vector's length *is* the capacity and every byte
///   is initialized
#[derive(Clone)]
pub enum Storage {
    /// Small-buffer storage colocated with the owner
    Inline([u8; INLINE_CAPACITY]),

    /// Exclusively owned heap allocation
    Heap(Vec<u8>),
}

impl Storage {
    /// Create empty inline storage
    pub const fn new_inline() -> Self {
        Storage::Inline([0; INLINE_CAPACITY])
    }

    /// Create storage able to hold at least `bytes` bytes
    pub fn with_capacity(bytes: usize) -> Self {
        if bytes <= INLINE_CAPACITY {
            Storage::new_inline()
        } else {
            Storage::Heap(vec![0; bytes])
        }
    }

    /// Capacity in bytes
    #[inline]
    pub fn capacity(&self) -> usize {
        match self {
            Storage::Inline(_) => INLINE_CAPACITY,
            Storage::Heap(vec) => vec.len(),
        }
    }

    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self, Storage::Inline(_))
    }

    /// All `capacity()` bytes
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Inline(array) => array,
            Storage::Heap(vec) => vec,
        }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Storage::Inline(array) => array,
            Storage::Heap(vec) => vec,
        }
    }

    /// Moves the contents into storage of `new_capacity` bytes.
    ///
    /// The first `min(old, new)` bytes are carried over. Inline storage is
    /// picked whenever `new_capacity` fits; the old heap block, if any, is
    /// released when `self` is overwritten.
    pub fn reallocate(&mut self, new_capacity: usize) {
        let mut next = Storage::with_capacity(new_capacity);
        let keep = self.capacity().min(next.capacity());
        next.as_mut_slice()[..keep].copy_from_slice(&self.as_slice()[..keep]);
        *self = next;
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new_inline()
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.is_inline() { "inline" } else { "heap" };
        f.debug_struct("Storage")
            .field("mode", &mode)
            .field("capacity", &self.capacity())
            .finish()
    }
}
