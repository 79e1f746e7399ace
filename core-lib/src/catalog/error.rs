use thiserror::Error;

use crate::isa::AddressingMode;

/// Authoring defects a catalog can carry.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("instruction with an empty name or long name")]
    UnnamedInstruction,
    #[error("duplicate mnemonic: {0}")]
    DuplicateMnemonic(String),
    #[error("{0} has no encodings")]
    NoEncodings(String),
    #[error("opcode {opcode:#04X} claimed by both {first} and {second}")]
    DuplicateOpcode {
        opcode: u8,
        first: String,
        second: String,
    },
    #[error("{name} opcode {opcode:#04X}: length {length} does not fit {addr_mode:?}")]
    LengthMismatch {
        name: String,
        opcode: u8,
        addr_mode: AddressingMode,
        length: u8,
    },
}
