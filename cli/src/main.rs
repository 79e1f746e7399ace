//! Generates the 6502 opcode catalog document.
//!
//! Takes no arguments and reads no environment; writes `out/6502.json`
//! under the working directory and exits non-zero on any failure.
use std::path::Path;

use anyhow::Context;
use core_lib::{export, Catalog};

/// Fixed destination, relative to the working directory.
const OUTPUT_PATH: &str = "out/6502.json";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let catalog = Catalog::mos6502();
    catalog
        .validate()
        .context("instruction table carries an authoring defect")?;
    export::write_json(&catalog, Path::new(OUTPUT_PATH))
        .with_context(|| format!("failed to write {OUTPUT_PATH}"))?;

    tracing::info!(
        instructions = catalog.len(),
        path = OUTPUT_PATH,
        "catalog written"
    );
    Ok(())
}
