//! Rendering the catalog to its JSON document.
//!
//! The transformation is pure; file output is a thin wrapper so the fixed
//! destination stays a caller concern.

mod error;

use std::fs;
use std::path::Path;

pub use error::ExportError;

use crate::catalog::Catalog;

/// Renders the catalog as the pretty-printed JSON document.
///
/// Deterministic: key order follows the record definitions, element order is
/// catalog order, and nothing run-dependent is embedded.
pub fn to_json(catalog: &Catalog) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Parses a document produced by [`to_json`] back into a catalog.
pub fn from_json(document: &str) -> Result<Catalog, ExportError> {
    Ok(serde_json::from_str(document)?)
}

/// Writes the document to `dest`, creating the parent directory if absent and
/// replacing any previous content.
///
/// The document is rendered fully in memory first; `dest` is either written
/// whole or left untouched.
pub fn write_json(catalog: &Catalog, dest: &Path) -> Result<(), ExportError> {
    let document = to_json(catalog)?;
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(dest, document).map_err(|source| ExportError::Io {
        path: dest.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %dest.display(), "catalog document written");
    Ok(())
}
