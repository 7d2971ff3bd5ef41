// parser_tests.rs
//
// Unit tests for definition line and fixed part parsing

use crate::ast::*;
use crate::error::ErrorKind;
use crate::parser::*;

fn field(base: &str, half: Half) -> Part {
    Part::Field(FieldToken { base: base.to_string(), half })
}

#[test]
fn test_parse_definition_preserves_part_order() {
    let def = parse("addi rd rs1 imm12 14..12=0 6..2=0x04 1..0=3").unwrap();
    assert_eq!(def.name, "addi");
    assert_eq!(
        def.parts,
        vec![
            field("rd", Half::None),
            field("rs1", Half::None),
            field("imm12", Half::None),
            Part::Fixed(FixedPart { bits: BitSpec::Range { hi: 14, lo: 12 }, value: 0 }),
            Part::Fixed(FixedPart { bits: BitSpec::Range { hi: 6, lo: 2 }, value: 4 }),
            Part::Fixed(FixedPart { bits: BitSpec::Range { hi: 1, lo: 0 }, value: 3 }),
        ]
    );
}

#[test]
fn test_parse_definition_without_parts() {
    let def = parse("nop").unwrap();
    assert_eq!(def.name, "nop");
    assert!(def.parts.is_empty());
}

#[test]
fn test_parse_split_field_halves() {
    let def = parse("beq bimm12hi bimm12lo rs1 rs2").unwrap();
    assert_eq!(def.parts[0], field("bimm12", Half::High));
    assert_eq!(def.parts[1], field("bimm12", Half::Low));
}

#[test]
fn test_digit_first_is_fixed_part() {
    assert!(matches!(parse_part("12=1"), Ok(Part::Fixed(_))));
    assert!(matches!(parse_part("c_rs2_n0"), Ok(Part::Field(_))));
    assert!(matches!(parse_part("rs1"), Ok(Part::Field(_))));
}

#[test]
fn test_parse_single_bit() {
    let part = parse_fixed_part("12=1").unwrap();
    assert_eq!(part, FixedPart { bits: BitSpec::Bit(12), value: 1 });
}

#[test]
fn test_parse_range_with_hex_value() {
    let part = parse_fixed_part("31..25=0x20").unwrap();
    assert_eq!(part, FixedPart { bits: BitSpec::Range { hi: 31, lo: 25 }, value: 0x20 });
}

#[test]
fn test_parse_equal_bounds_range() {
    let part = parse_fixed_part("0..0=1").unwrap();
    assert_eq!(part.bits, BitSpec::Range { hi: 0, lo: 0 });
    assert_eq!(part.bits.width(), 1);
}

#[test]
fn test_missing_equals_is_malformed() {
    assert!(matches!(parse_fixed_part("6..2"), Err(ErrorKind::MalformedBitspec { .. })));
}

#[test]
fn test_reversed_range_is_malformed() {
    let err = parse_fixed_part("2..6=1").unwrap_err();
    match err {
        ErrorKind::MalformedBitspec { part, reason } => {
            assert_eq!(part, "2..6=1");
            assert!(reason.contains("reversed"), "reason was {}", reason);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_bad_literal_is_malformed() {
    assert!(matches!(parse_fixed_part("6..2=0xZZ"), Err(ErrorKind::MalformedBitspec { .. })));
    assert!(matches!(parse_fixed_part("6..2="), Err(ErrorKind::MalformedBitspec { .. })));
}

#[test]
fn test_bad_bit_index_is_malformed() {
    assert!(matches!(parse_fixed_part("6..=1"), Err(ErrorKind::MalformedBitspec { .. })));
    assert!(matches!(parse_fixed_part("6x=1"), Err(ErrorKind::MalformedBitspec { .. })));
    assert!(matches!(parse_fixed_part("1...0=1"), Err(ErrorKind::MalformedBitspec { .. })));
}

#[test]
fn test_bit_index_past_31_is_malformed() {
    assert!(parse_fixed_part("31..0=0").is_ok());
    assert!(matches!(parse_fixed_part("32=1"), Err(ErrorKind::MalformedBitspec { .. })));
    assert!(matches!(parse_fixed_part("40..33=1"), Err(ErrorKind::MalformedBitspec { .. })));
}

#[test]
fn test_malformed_part_fails_whole_line() {
    assert!(matches!(parse("add rd rs1 rs2 6..2=0bxyz"), Err(ErrorKind::MalformedBitspec { .. })));
}
