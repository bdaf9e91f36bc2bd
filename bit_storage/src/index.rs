use crate::addressing;

/// Linear bit offset into a buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitIndex(pub u64);

impl BitIndex {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A [`BitIndex`] split into its byte and bit-within-byte parts.
///
/// `bit` is the shift amount of the bit inside its byte: `7` for the first
/// (most significant) bit, `0` for the last.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitPosition {
    pub byte: u64,
    pub bit: u8,
}

impl BitPosition {
    #[inline]
    pub fn mask(self) -> u8 {
        addressing::mask(self.bit)
    }
}

impl From<BitIndex> for BitPosition {
    #[inline]
    fn from(index: BitIndex) -> Self {
        let (byte, bit) = addressing::decompose(index.0);
        BitPosition { byte, bit }
    }
}

impl From<BitPosition> for BitIndex {
    #[inline]
    fn from(position: BitPosition) -> Self {
        BitIndex(addressing::compose(position.byte, position.bit))
    }
}

impl From<u64> for BitIndex {
    #[inline]
    fn from(value: u64) -> Self {
        BitIndex(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_position_roundtrip() {
        let pos = BitPosition::from(BitIndex(19));
        assert_eq!(pos, BitPosition { byte: 2, bit: 4 });
        assert_eq!(pos.mask(), 0b0001_0000);
        assert_eq!(BitIndex::from(pos), BitIndex(19));
    }
}
