//! The documented MOS 6502 instruction table.
//!
//! Hand-authored data: 56 mnemonics, 151 opcodes. Authoring order is the
//! order of the published catalog document and must not be reshuffled.
//!
//! Quirks of the published format are intentional and kept as-is: relative
//! branches are tagged `IMPLIED` with a page-cross increment, and the
//! register inc/dec and stack-pointer transfers are categorized as movement.

use super::Catalog;
use crate::isa::{Encoding, Instruction, StatusFlag};

use crate::isa::AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Immediate, Implied, Indirect, IndirectX, IndirectY, ZeroPage,
    ZeroPageX, ZeroPageY,
};
use crate::isa::Category::{Arithmetic, Branch, Flag, Logical, Movement, Stack};
use crate::isa::StatusFlag::{Carry, DecimalMode, InterruptDisable, Negative, Overflow, Zero};

/// Conditional branch: one-byte signed displacement, 2 cycles, one more when
/// taken across a page boundary.
fn branch(name: &str, long_name: &str, opcode: u8) -> Instruction {
    Instruction::builder(name, long_name, Branch)
        .encoding(Encoding::new(opcode, 2, 2, Implied).with_page_cross())
        .build()
}

/// Flag set/clear: single implied encoding touching exactly one status bit.
fn flag_op(name: &str, long_name: &str, flag: StatusFlag, opcode: u8) -> Instruction {
    Instruction::builder(name, long_name, Flag)
        .flags([flag])
        .encoding(Encoding::new(opcode, 2, 1, Implied))
        .build()
}

/// Register transfer or register inc/dec: single implied encoding updating
/// negative and zero.
fn transfer(name: &str, long_name: &str, opcode: u8) -> Instruction {
    Instruction::builder(name, long_name, Movement)
        .flags([Negative, Zero])
        .encoding(Encoding::new(opcode, 2, 1, Implied))
        .build()
}

#[allow(clippy::too_many_lines)]
pub(super) fn build() -> Catalog {
    let mut ops: Vec<Instruction> = Vec::with_capacity(56);

    // --- Accumulator arithmetic and shifts ---
    ops.push(
        Instruction::builder("ADC", "ADd with Carry", Arithmetic)
            .flags([Negative, Overflow, Zero, Carry])
            .encoding(Encoding::new(0x69, 2, 2, Immediate))
            .encoding(Encoding::new(0x65, 3, 2, ZeroPage))
            .encoding(Encoding::new(0x75, 4, 2, ZeroPageX))
            .encoding(Encoding::new(0x6D, 4, 3, Absolute))
            .encoding(Encoding::new(0x7D, 4, 3, AbsoluteX).with_page_cross())
            .encoding(Encoding::new(0x79, 4, 3, AbsoluteY).with_page_cross())
            .encoding(Encoding::new(0x61, 6, 2, IndirectX))
            .encoding(Encoding::new(0x71, 5, 2, IndirectY).with_page_cross())
            .build(),
    );
    ops.push(
        Instruction::builder("AND", "bitwise AND with accumulator", Arithmetic)
            .flags([Negative, Zero])
            .encoding(Encoding::new(0x29, 2, 2, Immediate))
            .encoding(Encoding::new(0x25, 3, 2, ZeroPage))
            .encoding(Encoding::new(0x35, 4, 2, ZeroPageX))
            .encoding(Encoding::new(0x2D, 4, 3, Absolute))
            .encoding(Encoding::new(0x3D, 4, 3, AbsoluteX).with_page_cross())
            .encoding(Encoding::new(0x39, 4, 3, AbsoluteY).with_page_cross())
            .encoding(Encoding::new(0x21, 6, 2, IndirectX))
            .encoding(Encoding::new(0x31, 5, 2, IndirectY).with_page_cross())
            .build(),
    );
    ops.push(
        Instruction::builder("ASL", "Arithmatic Shift Left", Arithmetic)
            .flags([Negative, Zero, Carry])
            .encoding(Encoding::new(0x0A, 2, 1, Implied))
            .encoding(Encoding::new(0x06, 5, 2, ZeroPage))
            .encoding(Encoding::new(0x16, 6, 2, ZeroPageX))
            .encoding(Encoding::new(0x0E, 6, 3, Absolute))
            .encoding(Encoding::new(0x1E, 7, 3, AbsoluteX))
            .build(),
    );
    ops.push(
        Instruction::builder("BIT", "test BITs", Logical)
            .flags([Negative, Overflow, Zero])
            .encoding(Encoding::new(0x24, 3, 2, ZeroPage))
            .encoding(Encoding::new(0x2C, 4, 3, Absolute))
            .build(),
    );

    // --- Conditional branches ---
    ops.push(branch("BPL", "Branch on PLus", 0x10));
    ops.push(branch("BMI", "Branch on MInus", 0x30));
    ops.push(branch("BVC", "Branch on oVerflow Clear", 0x50));
    ops.push(branch("BVS", "Branch on oVerflow Set", 0x70));
    ops.push(branch("BCC", "Branch on Carry Clear", 0x90));
    ops.push(branch("BCS", "Branch on Carry Set", 0xB0));
    ops.push(branch("BNE", "Branch on Not Equal", 0xD0));
    ops.push(branch("BEQ", "Branch on EQual", 0xF0));

    ops.push(
        Instruction::builder("BRK", "BReaK", Branch)
            .flags([InterruptDisable])
            .encoding(Encoding::new(0x00, 7, 1, Implied))
            .build(),
    );

    // --- Compares ---
    ops.push(
        Instruction::builder("CMP", "CoMPare accumulator", Logical)
            .flags([Negative, Zero, Carry])
            .encoding(Encoding::new(0xC9, 2, 2, Immediate))
            .encoding(Encoding::new(0xC5, 3, 2, ZeroPage))
            .encoding(Encoding::new(0xD5, 4, 2, ZeroPageX))
            .encoding(Encoding::new(0xCD, 4, 3, Absolute))
            .encoding(Encoding::new(0xDD, 4, 3, AbsoluteX).with_page_cross())
            .encoding(Encoding::new(0xD9, 4, 3, AbsoluteY).with_page_cross())
            .encoding(Encoding::new(0xC1, 6, 2, IndirectX))
            .encoding(Encoding::new(0xD1, 5, 2, IndirectY).with_page_cross())
            .build(),
    );
    ops.push(
        Instruction::builder("CPX", "ComPare X register", Logical)
            .flags([Negative, Zero, Carry])
            .encoding(Encoding::new(0xE0, 2, 2, Immediate))
            .encoding(Encoding::new(0xE4, 3, 2, ZeroPage))
            .encoding(Encoding::new(0xEC, 4, 3, Absolute))
            .build(),
    );
    ops.push(
        Instruction::builder("CPY", "ComPare Y register", Logical)
            .flags([Negative, Zero, Carry])
            .encoding(Encoding::new(0xC0, 2, 2, Immediate))
            .encoding(Encoding::new(0xC4, 3, 2, ZeroPage))
            .encoding(Encoding::new(0xCC, 4, 3, Absolute))
            .build(),
    );

    ops.push(
        Instruction::builder("DEC", "DECrement memory", Arithmetic)
            .flags([Negative, Zero])
            .encoding(Encoding::new(0xC6, 5, 2, ZeroPage))
            .encoding(Encoding::new(0xD6, 6, 2, ZeroPageX))
            .encoding(Encoding::new(0xCE, 6, 3, Absolute))
            .encoding(Encoding::new(0xDE, 7, 3, AbsoluteX))
            .build(),
    );
    ops.push(
        Instruction::builder("EOR", "bitwise Exclusive OR", Arithmetic)
            .flags([Negative, Zero])
            .encoding(Encoding::new(0x49, 2, 2, Immediate))
            .encoding(Encoding::new(0x45, 3, 2, ZeroPage))
            .encoding(Encoding::new(0x55, 4, 2, ZeroPageX))
            .encoding(Encoding::new(0x4D, 4, 3, Absolute))
            .encoding(Encoding::new(0x5D, 4, 3, AbsoluteX).with_page_cross())
            .encoding(Encoding::new(0x59, 4, 3, AbsoluteY).with_page_cross())
            .encoding(Encoding::new(0x41, 6, 2, IndirectX))
            .encoding(Encoding::new(0x51, 5, 2, IndirectY).with_page_cross())
            .build(),
    );

    // --- Flag set/clear ---
    ops.push(flag_op("CLC", "CLear Carry", Carry, 0x18));
    ops.push(flag_op("SEC", "SEt Carry", Carry, 0x38));
    ops.push(flag_op("CLI", "CLear Interrupt", InterruptDisable, 0x58));
    ops.push(flag_op("SEI", "SEt Interrupt", InterruptDisable, 0x78));
    ops.push(flag_op("CLV", "CLear oVerflow", Overflow, 0xB8));
    ops.push(flag_op("CLD", "CLear Decimal", DecimalMode, 0xD8));
    ops.push(flag_op("SED", "SEt Decimal", DecimalMode, 0xF8));

    ops.push(
        Instruction::builder("INC", "INCrement memory", Arithmetic)
            .flags([Negative, Zero])
            .encoding(Encoding::new(0xE6, 5, 2, ZeroPage))
            .encoding(Encoding::new(0xF6, 6, 2, ZeroPageX))
            .encoding(Encoding::new(0xEE, 6, 3, Absolute))
            .encoding(Encoding::new(0xFE, 7, 3, AbsoluteX))
            .build(),
    );

    // --- Jumps ---
    ops.push(
        Instruction::builder("JMP", "JuMP", Branch)
            .encoding(Encoding::new(0x4C, 3, 3, Absolute))
            .encoding(Encoding::new(0x6C, 5, 3, Indirect))
            .build(),
    );
    ops.push(
        Instruction::builder("JSR", "Jump to SubRoutine", Branch)
            .encoding(Encoding::new(0x20, 6, 3, Absolute))
            .build(),
    );

    // --- Loads ---
    ops.push(
        Instruction::builder("LDA", "LoaD Accumulator", Movement)
            .flags([Negative, Zero])
            .encoding(Encoding::new(0xA9, 2, 2, Immediate))
            .encoding(Encoding::new(0xA5, 3, 2, ZeroPage))
            .encoding(Encoding::new(0xB5, 4, 2, ZeroPageX))
            .encoding(Encoding::new(0xAD, 4, 3, Absolute))
            .encoding(Encoding::new(0xBD, 4, 3, AbsoluteX).with_page_cross())
            .encoding(Encoding::new(0xB9, 4, 3, AbsoluteY).with_page_cross())
            .encoding(Encoding::new(0xA1, 6, 2, IndirectX))
            .encoding(Encoding::new(0xB1, 5, 2, IndirectY).with_page_cross())
            .build(),
    );
    ops.push(
        Instruction::builder("LDX", "LoaD X register", Movement)
            .flags([Negative, Zero])
            .encoding(Encoding::new(0xA2, 2, 2, Immediate))
            .encoding(Encoding::new(0xA6, 3, 2, ZeroPage))
            .encoding(Encoding::new(0xB6, 4, 2, ZeroPageY))
            .encoding(Encoding::new(0xAE, 4, 3, Absolute))
            .encoding(Encoding::new(0xBE, 4, 3, AbsoluteY).with_page_cross())
            .build(),
    );
    ops.push(
        Instruction::builder("LDY", "LoaD Y register", Movement)
            .flags([Negative, Zero])
            .encoding(Encoding::new(0xA0, 2, 2, Immediate))
            .encoding(Encoding::new(0xA4, 3, 2, ZeroPage))
            .encoding(Encoding::new(0xB4, 4, 2, ZeroPageX))
            .encoding(Encoding::new(0xAC, 4, 3, Absolute))
            .encoding(Encoding::new(0xBC, 4, 3, AbsoluteX).with_page_cross())
            .build(),
    );

    ops.push(
        Instruction::builder("LSR", "Logical Shift Right", Arithmetic)
            .flags([Negative, Zero, Carry])
            .encoding(Encoding::new(0x4A, 2, 1, Implied))
            .encoding(Encoding::new(0x46, 5, 2, ZeroPage))
            .encoding(Encoding::new(0x56, 6, 2, ZeroPageX))
            .encoding(Encoding::new(0x4E, 6, 3, Absolute))
            .encoding(Encoding::new(0x5E, 7, 3, AbsoluteX))
            .build(),
    );

    ops.push(
        Instruction::builder("NOP", "No OPeration", Movement)
            .encoding(Encoding::new(0xEA, 2, 1, Implied))
            .build(),
    );

    ops.push(
        Instruction::builder("ORA", "bitwise OR with Accumulator", Arithmetic)
            .flags([Negative, Zero])
            .encoding(Encoding::new(0x09, 2, 2, Immediate))
            .encoding(Encoding::new(0x05, 3, 2, ZeroPage))
            .encoding(Encoding::new(0x15, 4, 2, ZeroPageX))
            .encoding(Encoding::new(0x0D, 4, 3, Absolute))
            .encoding(Encoding::new(0x1D, 4, 3, AbsoluteX).with_page_cross())
            .encoding(Encoding::new(0x19, 4, 3, AbsoluteY).with_page_cross())
            .encoding(Encoding::new(0x01, 6, 2, IndirectX))
            .encoding(Encoding::new(0x11, 5, 2, IndirectY).with_page_cross())
            .build(),
    );

    // --- Register transfers and register inc/dec ---
    ops.push(transfer("TAX", "Transfer Accumulator to X", 0xAA));
    ops.push(transfer("TXA", "Transfer X to Accumulator", 0x8A));
    ops.push(transfer("DEX", "DEcrement X", 0xCA));
    ops.push(transfer("INX", "INcrement X", 0xE8));
    ops.push(transfer("TAY", "Transfer Accumulator to Y", 0xA8));
    ops.push(transfer("TYA", "Transfer Y to Accumulator", 0x98));
    ops.push(transfer("DEY", "DEcrement Y", 0x88));
    ops.push(transfer("INY", "INcrement Y", 0xC8));

    // --- Rotates ---
    ops.push(
        Instruction::builder("ROL", "ROtate Left", Arithmetic)
            .flags([Negative, Zero, Carry])
            .encoding(Encoding::new(0x2A, 2, 1, Implied))
            .encoding(Encoding::new(0x26, 5, 2, ZeroPage))
            .encoding(Encoding::new(0x36, 6, 2, ZeroPageX))
            .encoding(Encoding::new(0x2E, 6, 3, Absolute))
            .encoding(Encoding::new(0x3E, 7, 3, AbsoluteX))
            .build(),
    );
    ops.push(
        Instruction::builder("ROR", "ROtate Right", Arithmetic)
            .flags([Negative, Zero, Carry])
            .encoding(Encoding::new(0x6A, 2, 1, Implied))
            .encoding(Encoding::new(0x66, 5, 2, ZeroPage))
            .encoding(Encoding::new(0x76, 6, 2, ZeroPageX))
            .encoding(Encoding::new(0x6E, 6, 3, Absolute))
            .encoding(Encoding::new(0x7E, 7, 3, AbsoluteX))
            .build(),
    );

    // --- Returns ---
    ops.push(
        Instruction::builder("RTI", "ReTurn from Interrupt", Branch)
            .flags([InterruptDisable])
            .encoding(Encoding::new(0x40, 6, 1, Implied))
            .build(),
    );
    ops.push(
        Instruction::builder("RTS", "ReTurn from Subroutine", Branch)
            .encoding(Encoding::new(0x60, 6, 1, Implied))
            .build(),
    );

    ops.push(
        Instruction::builder("SBC", "SuBtract with Carry", Arithmetic)
            .flags([Negative, Overflow, Zero, Carry])
            .encoding(Encoding::new(0xE9, 2, 2, Immediate))
            .encoding(Encoding::new(0xE5, 3, 2, ZeroPage))
            .encoding(Encoding::new(0xF5, 4, 2, ZeroPageX))
            .encoding(Encoding::new(0xED, 4, 3, Absolute))
            .encoding(Encoding::new(0xFD, 4, 3, AbsoluteX).with_page_cross())
            .encoding(Encoding::new(0xF9, 4, 3, AbsoluteY).with_page_cross())
            .encoding(Encoding::new(0xE1, 6, 2, IndirectX))
            .encoding(Encoding::new(0xF1, 5, 2, IndirectY).with_page_cross())
            .build(),
    );

    // --- Stores, stack and stack-pointer transfers ---
    // Stores never touch flags and never pay the page-cross cycle.
    ops.push(
        Instruction::builder("STA", "STore Accumulator", Movement)
            .encoding(Encoding::new(0x85, 3, 2, ZeroPage))
            .encoding(Encoding::new(0x95, 4, 2, ZeroPageX))
            .encoding(Encoding::new(0x8D, 4, 3, Absolute))
            .encoding(Encoding::new(0x9D, 5, 3, AbsoluteX))
            .encoding(Encoding::new(0x99, 5, 3, AbsoluteY))
            .encoding(Encoding::new(0x81, 6, 2, IndirectX))
            .encoding(Encoding::new(0x91, 6, 2, IndirectY))
            .build(),
    );
    ops.push(
        Instruction::builder("TXS", "Transfer X to Stack ptr", Movement)
            .encoding(Encoding::new(0x9A, 2, 1, Implied))
            .build(),
    );
    ops.push(
        Instruction::builder("TSX", "Transfer Stack ptr to X", Movement)
            .flags([Negative, Zero])
            .encoding(Encoding::new(0xBA, 2, 1, Implied))
            .build(),
    );
    ops.push(
        Instruction::builder("PHA", "PusH Accumulator", Stack)
            .encoding(Encoding::new(0x48, 3, 1, Implied))
            .build(),
    );
    ops.push(
        Instruction::builder("PLA", "PuLl Accumulator", Stack)
            .flags([Negative, Zero])
            .encoding(Encoding::new(0x68, 4, 1, Implied))
            .build(),
    );
    ops.push(
        Instruction::builder("PHP", "PusH Processor status", Stack)
            .encoding(Encoding::new(0x08, 3, 1, Implied))
            .build(),
    );
    ops.push(
        Instruction::builder("PLP", "PuLl Processor status", Stack)
            .flags([
                Negative,
                Zero,
                InterruptDisable,
                DecimalMode,
                Overflow,
                Carry,
            ])
            .encoding(Encoding::new(0x28, 4, 1, Implied))
            .build(),
    );
    ops.push(
        Instruction::builder("STX", "STore X register", Movement)
            .encoding(Encoding::new(0x86, 3, 2, ZeroPage))
            .encoding(Encoding::new(0x96, 4, 2, ZeroPageY))
            .encoding(Encoding::new(0x8E, 4, 3, Absolute))
            .build(),
    );
    ops.push(
        Instruction::builder("STY", "STore Y register", Movement)
            .encoding(Encoding::new(0x84, 3, 2, ZeroPage))
            .encoding(Encoding::new(0x94, 4, 2, ZeroPageX))
            .encoding(Encoding::new(0x8C, 4, 3, Absolute))
            .build(),
    );

    let opcodes: usize = ops.iter().map(|op| op.operands.len()).sum();
    tracing::debug!(instructions = ops.len(), opcodes, "assembled 6502 table");

    Catalog::from_instructions(ops)
}
