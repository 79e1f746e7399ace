#![allow(clippy::unwrap_used)]
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use super::*;

#[test_case(Category::Movement, "movement"; "movement")]
#[test_case(Category::Arithmetic, "arithmatic"; "arithmatic document spelling")]
#[test_case(Category::Logical, "logical"; "logical")]
#[test_case(Category::Stack, "stack"; "stack")]
#[test_case(Category::Branch, "branch"; "branch")]
#[test_case(Category::Flag, "flag"; "flag")]
fn category_document_name(category: Category, expected: &str) {
    assert_eq!(serde_json::to_value(category).unwrap(), json!(expected));
}

#[test_case(StatusFlag::Carry, "carry"; "carry")]
#[test_case(StatusFlag::Zero, "zero"; "zero")]
#[test_case(StatusFlag::InterruptDisable, "interrupt_disable"; "interrupt disable")]
#[test_case(StatusFlag::DecimalMode, "decimal_mode"; "decimal mode")]
#[test_case(StatusFlag::Overflow, "overflow"; "overflow")]
#[test_case(StatusFlag::Negative, "negative"; "negative")]
fn flag_document_name(flag: StatusFlag, expected: &str) {
    assert_eq!(serde_json::to_value(flag).unwrap(), json!(expected));
}

#[test]
fn flag_bits_match_status_register_layout() {
    assert_eq!(StatusFlag::Carry.bit(), 0);
    assert_eq!(StatusFlag::Zero.bit(), 1);
    assert_eq!(StatusFlag::InterruptDisable.bit(), 2);
    assert_eq!(StatusFlag::DecimalMode.bit(), 3);
    assert_eq!(StatusFlag::Overflow.bit(), 6);
    assert_eq!(StatusFlag::Negative.bit(), 7);
}

#[test_case(AddressingMode::Implied, "IMPLIED"; "implied")]
#[test_case(AddressingMode::Immediate, "IMMEDIATE"; "immediate")]
#[test_case(AddressingMode::ZeroPage, "ZERO_PAGE"; "zero page")]
#[test_case(AddressingMode::ZeroPageX, "ZERO_PAGE_X"; "zero page x")]
#[test_case(AddressingMode::ZeroPageY, "ZERO_PAGE_Y"; "zero page y")]
#[test_case(AddressingMode::Relative, "RELATIVE"; "relative")]
#[test_case(AddressingMode::Absolute, "ABSOLUTE"; "absolute")]
#[test_case(AddressingMode::AbsoluteX, "ABSOLUTE_X"; "absolute x")]
#[test_case(AddressingMode::AbsoluteY, "ABSOLUTE_Y"; "absolute y")]
#[test_case(AddressingMode::Indirect, "INDIRECT"; "indirect")]
#[test_case(AddressingMode::IndirectX, "INDIRECT_X"; "indirect x")]
#[test_case(AddressingMode::IndirectY, "INDIRECT_Y"; "indirect y")]
fn addressing_mode_document_name(mode: AddressingMode, expected: &str) {
    assert_eq!(serde_json::to_value(mode).unwrap(), json!(expected));
}

#[test_case(AddressingMode::Implied, 1, true; "implied length 1")]
#[test_case(AddressingMode::Implied, 2, true; "implied length 2 for branch displacement")]
#[test_case(AddressingMode::Implied, 3, false; "implied length 3")]
#[test_case(AddressingMode::Immediate, 2, true; "immediate length 2")]
#[test_case(AddressingMode::Immediate, 1, false; "immediate length 1")]
#[test_case(AddressingMode::ZeroPageY, 2, true; "zero page y length 2")]
#[test_case(AddressingMode::Relative, 2, true; "relative length 2")]
#[test_case(AddressingMode::Absolute, 3, true; "absolute length 3")]
#[test_case(AddressingMode::AbsoluteY, 2, false; "absolute y length 2")]
#[test_case(AddressingMode::Indirect, 3, true; "indirect length 3")]
#[test_case(AddressingMode::IndirectX, 2, true; "indirect x length 2")]
#[test_case(AddressingMode::IndirectY, 3, false; "indirect y length 3")]
fn length_consistency(mode: AddressingMode, length: u8, expected: bool) {
    assert_eq!(mode.fits_length(length), expected);
}

#[test]
fn encoding_defaults_to_no_page_cross() {
    let enc = Encoding::new(0x69, 2, 2, AddressingMode::Immediate);
    assert_eq!(enc.page_cross_incr, 0);
    assert_eq!(enc.with_page_cross().page_cross_incr, 1);
}

#[test]
fn builder_preserves_declared_order() {
    let op = Instruction::builder("ADC", "ADd with Carry", Category::Arithmetic)
        .flags([
            StatusFlag::Negative,
            StatusFlag::Overflow,
            StatusFlag::Zero,
            StatusFlag::Carry,
        ])
        .encoding(Encoding::new(0x69, 2, 2, AddressingMode::Immediate))
        .encoding(Encoding::new(0x65, 3, 2, AddressingMode::ZeroPage))
        .build();

    assert_eq!(op.name, "ADC");
    assert_eq!(op.long_name, "ADd with Carry");
    assert_eq!(op.category, Category::Arithmetic);
    assert_eq!(
        op.flags,
        vec![
            StatusFlag::Negative,
            StatusFlag::Overflow,
            StatusFlag::Zero,
            StatusFlag::Carry,
        ]
    );
    assert_eq!(op.operands[0].opcode, 0x69);
    assert_eq!(op.operands[1].opcode, 0x65);
}

#[test]
fn instruction_serializes_with_document_key_order() {
    let op = Instruction::builder("NOP", "No OPeration", Category::Movement)
        .encoding(Encoding::new(0xEA, 2, 1, AddressingMode::Implied))
        .build();
    let doc = serde_json::to_string(&op).unwrap();

    let order = ["\"name\"", "\"long_name\"", "\"type\"", "\"flags\"", "\"operands\""];
    let positions: Vec<usize> = order.iter().map(|key| doc.find(key).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "keys out of order in {doc}");

    let operand_order = [
        "\"opcode\"",
        "\"cycles\"",
        "\"page_cross_incr\"",
        "\"length\"",
        "\"addr_mode\"",
    ];
    let positions: Vec<usize> = operand_order.iter().map(|key| doc.find(key).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "operand keys out of order in {doc}");
}

#[test]
fn instruction_round_trips_through_json() {
    let op = Instruction::builder("BRK", "BReaK", Category::Branch)
        .flags([StatusFlag::InterruptDisable])
        .encoding(Encoding::new(0x00, 7, 1, AddressingMode::Implied))
        .build();
    let doc = serde_json::to_string(&op).unwrap();
    let parsed: Instruction = serde_json::from_str(&doc).unwrap();
    assert_eq!(parsed, op);
}
