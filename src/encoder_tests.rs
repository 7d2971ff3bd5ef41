// encoder_tests.rs
//
// Unit tests for bit-range compilation

use crate::ast::{BitSpec, FixedPart};
use crate::encoder::*;
use proptest::prelude::*;

fn range(hi: u32, lo: u32, value: u64) -> FixedPart {
    FixedPart { bits: BitSpec::Range { hi, lo }, value }
}

#[test]
fn test_compile_opcode_range() {
    let bits = compile(&range(6, 2, 0b00011));
    assert_eq!(bits, FixedBits { value: 0b0001100, mask: 0b1111100 });
}

#[test]
fn test_compile_low_bits() {
    assert_eq!(compile(&range(1, 0, 3)), FixedBits { value: 0b11, mask: 0b11 });
}

#[test]
fn test_compile_single_bit() {
    let bits = compile(&FixedPart { bits: BitSpec::Bit(12), value: 1 });
    assert_eq!(bits, FixedBits { value: 1 << 12, mask: 1 << 12 });

    let bits = compile(&FixedPart { bits: BitSpec::Bit(12), value: 0 });
    assert_eq!(bits, FixedBits { value: 0, mask: 1 << 12 });
}

#[test]
fn test_compile_full_word() {
    let bits = compile(&range(31, 0, 0x0010_0073));
    assert_eq!(bits, FixedBits { value: 0x0010_0073, mask: 0xffff_ffff });
}

#[test]
fn test_compile_top_bits() {
    let bits = compile(&range(31, 25, 0x20));
    assert_eq!(bits, FixedBits { value: 0x4000_0000, mask: 0xfe00_0000 });
}

#[test]
fn test_oversized_value_is_clipped_to_range() {
    let bits = compile(&range(0, 0, 0b0010011));
    assert_eq!(bits, FixedBits { value: 1, mask: 1 });

    let bits = compile(&range(14, 12, 0xff));
    assert_eq!(bits, FixedBits { value: 0x7000, mask: 0x7000 });
}

#[test]
fn test_merge_accumulates_and_is_idempotent() {
    let mut acc = FixedBits::default();
    acc.merge(compile(&range(1, 0, 3)));
    acc.merge(compile(&range(6, 2, 0x04)));
    acc.merge(compile(&range(1, 0, 3)));
    assert_eq!(acc, FixedBits { value: 0x13, mask: 0x7f });
}

proptest! {
    #[test]
    fn prop_value_stays_inside_mask(lo in 0u32..32, width in 1u32..=32, value in any::<u64>()) {
        let hi = (lo + width - 1).min(31);
        let bits = compile(&range(hi, lo, value));
        prop_assert_eq!(bits.value & !bits.mask, 0);
        prop_assert_eq!(bits.mask.count_ones(), hi - lo + 1);
        prop_assert_eq!(bits.mask.trailing_zeros(), lo);
    }

    #[test]
    fn prop_fitting_value_is_preserved(lo in 0u32..32, raw in any::<u32>()) {
        let width = 32 - lo;
        let value = if width == 32 { raw as u64 } else { (raw as u64) & ((1u64 << width) - 1) };
        let bits = compile(&range(31, lo, value));
        prop_assert_eq!((bits.value >> lo) as u64, value);
    }
}
