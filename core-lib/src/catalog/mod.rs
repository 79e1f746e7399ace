//! The assembled instruction catalog.

mod error;
mod mos6502;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

pub use error::CatalogError;

use crate::isa::Instruction;

/// Ordered collection of every documented instruction.
///
/// Serializes as a bare array; element order is authoring order and is stable
/// across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    instructions: Vec<Instruction>,
}

impl Catalog {
    /// The documented MOS 6502 instruction set.
    #[must_use]
    pub fn mos6502() -> Self {
        mos6502::build()
    }

    pub(crate) fn from_instructions(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Looks an instruction up by mnemonic.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Instruction> {
        self.instructions.iter().find(|op| op.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Checks the invariants the table is authored under: named instructions,
    /// at least one encoding each, unique mnemonics, catalog-wide unique
    /// opcodes, and lengths that fit their addressing mode.
    ///
    /// The data is fixed at build time, so a failure here is an authoring
    /// defect, not a runtime condition.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names: HashSet<&str> = HashSet::new();
        let mut owners: HashMap<u8, &str> = HashMap::new();

        for op in &self.instructions {
            if op.name.is_empty() || op.long_name.is_empty() {
                return Err(CatalogError::UnnamedInstruction);
            }
            if !names.insert(op.name.as_str()) {
                return Err(CatalogError::DuplicateMnemonic(op.name.clone()));
            }
            if op.operands.is_empty() {
                return Err(CatalogError::NoEncodings(op.name.clone()));
            }
            for enc in &op.operands {
                if let Some(first) = owners.insert(enc.opcode, op.name.as_str()) {
                    return Err(CatalogError::DuplicateOpcode {
                        opcode: enc.opcode,
                        first: first.to_owned(),
                        second: op.name.clone(),
                    });
                }
                if !enc.addr_mode.fits_length(enc.length) {
                    return Err(CatalogError::LengthMismatch {
                        name: op.name.clone(),
                        opcode: enc.opcode,
                        addr_mode: enc.addr_mode,
                        length: enc.length,
                    });
                }
            }
        }
        Ok(())
    }
}
