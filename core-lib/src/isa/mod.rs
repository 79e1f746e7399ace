//! Record definitions for the instruction-set description.
//!
//! These types are both the in-memory model and the wire schema of the
//! catalog document: the serde renames below pin the exact field and name
//! spelling downstream consumers parse.

use serde::{Deserialize, Serialize};

/// Semantic class of a mnemonic.
///
/// Purely classificatory; consumers build dispatch tables from opcodes, not
/// from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Loads, stores and register transfers
    Movement,
    /// Add/subtract, bitwise ops, shifts, increments
    // The document format spells this "arithmatic"; consumers parse that name.
    #[serde(rename = "arithmatic")]
    Arithmetic,
    /// Compares and bit tests
    Logical,
    /// Push/pull through the hardware stack
    Stack,
    /// Jumps, branches, subroutine and interrupt returns
    Branch,
    /// Set/clear status flag bits
    Flag,
}

/// Processor status bits an instruction may modify.
///
/// Discriminants are the bit positions in the status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFlag {
    Carry = 0,
    Zero = 1,
    InterruptDisable = 2,
    DecimalMode = 3,
    Overflow = 6,
    Negative = 7,
}

impl StatusFlag {
    /// Bit position of the flag in the processor status register.
    #[must_use]
    pub const fn bit(self) -> u8 {
        self as u8
    }
}

/// Operand addressing schemes.
///
/// `Relative` is part of the closed enumeration but unused by the shipped
/// table: branch displacements are tagged [`AddressingMode::Implied`] with a
/// page-cross increment, matching the published document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressingMode {
    Implied,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
}

impl AddressingMode {
    /// Whether `length` (total instruction bytes, opcode included) is
    /// consistent with this mode. Implied admits 1 or 2 because branch
    /// displacements ride on the implied tag.
    #[must_use]
    pub const fn fits_length(self, length: u8) -> bool {
        match self {
            Self::Implied => matches!(length, 1 | 2),
            Self::Immediate
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::ZeroPageY
            | Self::Relative
            | Self::IndirectX
            | Self::IndirectY => length == 2,
            Self::Absolute | Self::AbsoluteX | Self::AbsoluteY | Self::Indirect => length == 3,
        }
    }
}

/// One concrete opcode: byte value, timing and addressing mode.
///
/// Field order is the document's key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoding {
    /// The opcode byte, unique across the whole catalog.
    pub opcode: u8,
    /// Cycle count without a page crossing.
    pub cycles: u8,
    /// Extra cycles when the access crosses a page boundary (0 or 1).
    pub page_cross_incr: u8,
    /// Total instruction length in bytes (1-3).
    pub length: u8,
    pub addr_mode: AddressingMode,
}

impl Encoding {
    #[must_use]
    pub const fn new(opcode: u8, cycles: u8, length: u8, addr_mode: AddressingMode) -> Self {
        Self {
            opcode,
            cycles,
            page_cross_incr: 0,
            length,
            addr_mode,
        }
    }

    /// Marks the encoding as costing one extra cycle when an indexed access
    /// or taken branch crosses a 256-byte page boundary.
    #[must_use]
    pub const fn with_page_cross(mut self) -> Self {
        self.page_cross_incr = 1;
        self
    }
}

/// One mnemonic with its metadata and every opcode variant it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Short uppercase mnemonic, e.g. `"LDA"`.
    pub name: String,
    /// Human-readable expansion of the mnemonic.
    pub long_name: String,
    #[serde(rename = "type")]
    pub category: Category,
    /// Flags the instruction may change, in declared order.
    pub flags: Vec<StatusFlag>,
    /// Opcode variants in authoring order, at least one in a complete catalog.
    pub operands: Vec<Encoding>,
}

impl Instruction {
    /// Starts two-phase construction: encodings are appended on the builder
    /// and the value is treated as read-only once built.
    #[must_use]
    pub fn builder(name: &str, long_name: &str, category: Category) -> InstructionBuilder {
        InstructionBuilder {
            inner: Self {
                name: name.to_owned(),
                long_name: long_name.to_owned(),
                category,
                flags: Vec::new(),
                operands: Vec::new(),
            },
        }
    }
}

/// Mutable assembly phase of an [`Instruction`].
#[derive(Debug)]
pub struct InstructionBuilder {
    inner: Instruction,
}

impl InstructionBuilder {
    /// Declares the status flags the instruction may change, in document
    /// order.
    #[must_use]
    pub fn flags<I>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = StatusFlag>,
    {
        self.inner.flags.extend(flags);
        self
    }

    /// Appends one opcode variant.
    #[must_use]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.inner.operands.push(encoding);
        self
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> Instruction {
        debug_assert!(
            !self.inner.operands.is_empty(),
            "{} built without encodings",
            self.inner.name
        );
        self.inner
    }
}

#[cfg(test)]
mod tests;
