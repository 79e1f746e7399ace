use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while rendering or persisting the document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot encode catalog: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
