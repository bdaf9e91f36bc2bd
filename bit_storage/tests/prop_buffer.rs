//! Property-based tests for BitBuffer

use bit_storage::{BitBuffer, INLINE_CAPACITY};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(bool),
    Truncate(u32),
    Reserve(u16),
    Shrink,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => any::<bool>().prop_map(Op::Push),
        1 => (0u32..300).prop_map(Op::Truncate),
        1 => any::<u16>().prop_map(Op::Reserve),
        1 => Just(Op::Shrink),
    ]
}

proptest! {
    // -------------------------------------------------------------
    // 1. Capacity always covers the length and the bits match a model.
    // -------------------------------------------------------------
    #[test]
    fn prop_matches_vec_model(ref ops in prop::collection::vec(op_strategy(), 0..400)) {
        let mut buffer = BitBuffer::new();
        let mut model: Vec<bool> = Vec::new();

        for op in ops {
            match *op {
                Op::Push(bit) => {
                    buffer.push_bit(bit);
                    model.push(bit);
                }
                Op::Truncate(len) => {
                    buffer.truncate(len);
                    model.truncate(len as usize);
                }
                Op::Reserve(bytes) => buffer.allocate(bytes as usize),
                Op::Shrink => buffer.shrink_to_fit(),
            }

            prop_assert!(buffer.capacity_bits() >= buffer.len() as u64);
            prop_assert_eq!(buffer.len() as usize, model.len());
            prop_assert_eq!(
                buffer.is_inline(),
                buffer.capacity_bytes() as usize <= INLINE_CAPACITY
            );
        }

        for (i, &bit) in model.iter().enumerate() {
            prop_assert_eq!(buffer.get(i as u64), Some(bit));
        }
    }

    // -------------------------------------------------------------
    // 2. Normalizing twice equals normalizing once, and matches the
    //    non-mutating view.
    // -------------------------------------------------------------
    #[test]
    fn prop_normalize_idempotent(
        ref bits in prop::collection::vec(any::<bool>(), 0..200),
        cut in 0u32..200
    ) {
        let mut buffer = BitBuffer::new();
        for &bit in bits {
            buffer.push_bit(bit);
        }
        buffer.truncate(cut);

        let view: Vec<u8> = buffer.normalized_bytes().collect();
        buffer.normalize();
        let once = buffer.bytes().to_vec();
        buffer.normalize();
        prop_assert_eq!(buffer.bytes(), &once[..]);
        prop_assert_eq!(view, once);
        prop_assert!(buffer.is_normalized());
    }

    // -------------------------------------------------------------
    // 3. Appending raw bits from any offset matches pushing them.
    // -------------------------------------------------------------
    #[test]
    fn prop_extend_from_raw_matches_push(
        ref prefix in prop::collection::vec(any::<bool>(), 0..40),
        ref src in prop::collection::vec(any::<u8>(), 1..24),
        offset in 0u64..16,
        count in 0u64..120
    ) {
        let available = src.len() as u64 * 8;
        let offset = offset.min(available);
        let count = count.min(available - offset);

        let mut fast = BitBuffer::new();
        let mut slow = BitBuffer::new();
        for &bit in prefix {
            fast.push_bit(bit);
            slow.push_bit(bit);
        }

        fast.extend_from_raw(src, offset, count);
        for pos in offset..offset + count {
            let bit = src[(pos / 8) as usize] & (0x80 >> (pos % 8)) != 0;
            slow.push_bit(bit);
        }

        prop_assert_eq!(fast, slow);
    }
}

#[test]
fn small_buffer_boundary() {
    let mut buffer = BitBuffer::new();
    for _ in 0..INLINE_CAPACITY * 8 {
        buffer.push_bit(true);
    }
    assert!(buffer.is_inline());

    buffer.push_bit(true);
    assert!(!buffer.is_inline());

    buffer.truncate((INLINE_CAPACITY * 8) as u32);
    buffer.shrink_to_fit();
    assert!(buffer.is_inline());
    assert_eq!(buffer.len() as usize, INLINE_CAPACITY * 8);
}
