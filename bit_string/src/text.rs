//! Textual form of a bit string: one `'0'` or `'1'` per bit, first bit first.
//!
//! ```rust
//! use bit_string::BitString;
//!
//! let bits: BitString = "0110".parse().unwrap();
//! assert_eq!(bits.to_string(), "0110");
//! assert_eq!(format!("{:?}", bits), "BitString(\"0110\")");
//! assert!("01x".parse::<BitString>().is_err());
//! ```

use core::fmt::{self, Write as _};
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::BitString;
use crate::error::{BitStringError, Result};

impl BitString {
    /// Appends the bits spelled by `length` characters of `text`, starting at
    /// character `start`.
    ///
    /// # Errors
    ///
    /// - [`BitStringError::RangeOutOfBounds`] if the range runs past the end
    ///   of `text`; nothing is appended.
    /// - [`BitStringError::InvalidCharacter`] on the first character that is
    ///   neither `'0'` nor `'1'`. Bits before it stay appended.
    pub fn append_text_range(&mut self, text: &str, start: usize, length: usize) -> Result<()> {
        let available = text.chars().count();
        let in_range = start
            .checked_add(length)
            .is_some_and(|end| end <= available);
        if !in_range {
            return Err(BitStringError::RangeOutOfBounds {
                start,
                length,
                available,
            });
        }

        self.buffer.grow_for_append(length as u64);
        for (offset, c) in text.chars().skip(start).take(length).enumerate() {
            match c {
                '0' => self.push(false),
                '1' => self.push(true),
                found => {
                    return Err(BitStringError::InvalidCharacter {
                        found,
                        index: start + offset,
                    });
                }
            }
        }
        Ok(())
    }

    /// Appends the bits spelled by all of `text`.
    pub fn append_text(&mut self, text: &str) -> Result<()> {
        self.append_text_range(text, 0, text.chars().count())
    }

    /// Parses a whole string of `'0'`/`'1'` characters.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut bits = BitString::new();
        bits.append_text(text)?;
        Ok(bits)
    }

    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.len() as usize);
        text.extend(self.iter().map(bit_char));
        text
    }

    /// Writes the textual form to `writer`.
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{}", self)?;
        Ok(())
    }

    /// Reads the next whitespace-delimited token and parses it.
    ///
    /// Returns `Ok(None)` once only whitespace remains. The delimiter after
    /// the token is left unread.
    ///
    /// ```rust
    /// use bit_string::BitString;
    ///
    /// let mut input = "  101\n0 ".as_bytes();
    /// let first = BitString::read_token(&mut input).unwrap().unwrap();
    /// let second = BitString::read_token(&mut input).unwrap().unwrap();
    /// assert_eq!(first.to_text(), "101");
    /// assert_eq!(second.to_text(), "0");
    /// assert!(BitString::read_token(&mut input).unwrap().is_none());
    /// ```
    #[cfg(feature = "std")]
    pub fn read_token<R: std::io::BufRead>(mut reader: R) -> Result<Option<Self>> {
        let mut token = Vec::new();
        loop {
            let available = reader.fill_buf()?;
            if available.is_empty() {
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &byte in available {
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                used += 1;
            }
            reader.consume(used);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }
        BitString::from_text(&String::from_utf8_lossy(&token)).map(Some)
    }
}

#[inline]
fn bit_char(bit: bool) -> char {
    if bit { '1' } else { '0' }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_char(bit_char(bit))?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitString")
            .field(&format_args!("\"{}\"", self))
            .finish()
    }
}

impl FromStr for BitString {
    type Err = BitStringError;

    fn from_str(s: &str) -> Result<Self> {
        BitString::from_text(s)
    }
}

impl TryFrom<&str> for BitString {
    type Error = BitStringError;

    fn try_from(s: &str) -> Result<Self> {
        BitString::from_text(s)
    }
}
