//! # bit_string
//!
//! A growable, bit-addressable string of bits with a small-buffer
//! optimization, built on [`bit_storage`].
//!
//! ```rust
//! use bit_string::BitString;
//!
//! let mut bits = BitString::new();
//! bits.append_uint(0b101u8, 3).unwrap();
//! bits.append_text("0011").unwrap();
//!
//! assert_eq!(bits.len(), 7);
//! assert_eq!(bits.to_text(), "1010011");
//! assert_eq!(bits.to_u8().unwrap(), 0b1010011);
//! assert!(bits.is_inline());
//! ```
//!
//! ## Spilling to the heap
//!
//! ```rust
//! use bit_string::BitString;
//!
//! // 64 bits fit inline, the 65th moves the bits to the heap.
//! let mut bits: BitString = (0..64).map(|i| i % 2 == 0).collect();
//! assert!(bits.is_inline());
//! bits.push(true);
//! assert!(!bits.is_inline());
//! assert!(bits.capacity() >= 65);
//! ```
//!
//! ## Cursors
//!
//! ```rust
//! use bit_string::BitString;
//!
//! let bits = BitString::from_text("0010").unwrap();
//! let mut it = bits.begin();
//! while it != bits.end() && !it.get() {
//!     it.increment();
//! }
//! assert_eq!(it - bits.begin(), 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod convert;
pub mod error;
pub mod hash;
pub mod iter;
pub mod reference;
pub mod string;
pub mod text;

pub use convert::UnsignedBits;
pub use error::BitStringError;
#[cfg(feature = "digest")]
pub use hash::digest_bytes;
pub use iter::{BitCursor, BitIter, BitIterMut, BitSource, Bits, Iter, IterMut};
pub use reference::BitRef;
pub use string::BitString;

pub use bit_storage::INLINE_CAPACITY;
