//! # bit_storage
//!
//! Packed byte storage for bit sequences, with a small-buffer optimization.
//!
//! Bits are laid out most-significant first: the first bit of a buffer is the
//! high bit of its first byte.
//!
//! ```rust
//! use bit_storage::BitBuffer;
//!
//! let mut buffer = BitBuffer::new();
//! buffer.push_bit(true);
//! buffer.push_bit(false);
//! buffer.push_bit(true);
//!
//! assert_eq!(buffer.len(), 3);
//! assert!(buffer.is_inline());
//! assert_eq!(buffer.normalized_bytes().collect::<Vec<_>>(), vec![0b1010_0000]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub use std::vec::Vec;

#[cfg(not(feature = "std"))]
pub use alloc::vec::Vec;

pub mod addressing;
pub mod bit_ops;
pub mod buffer;
pub mod error;
pub mod index;
#[doc(hidden)]
pub mod storage;

pub use buffer::BitBuffer;
pub use error::StorageError;
pub use index::{BitIndex, BitPosition};
pub use storage::{INLINE_CAPACITY, Storage};
