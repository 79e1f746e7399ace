pub mod catalog;
pub mod export;
pub mod isa;

// Re-export common types
pub use catalog::{Catalog, CatalogError};
pub use export::ExportError;
pub use isa::{AddressingMode, Category, Encoding, Instruction, InstructionBuilder, StatusFlag};
