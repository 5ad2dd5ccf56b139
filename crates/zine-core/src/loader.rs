//! TOML catalog loading.
//!
//! A catalog file is a list of `[[block]]` tables:
//!
//! ```toml
//! [[block]]
//! code = "e2ps"
//! title = "Eighth-size, double-sided, portrait, side spine"
//! steps = ["Fold the sheet in half lengthwise.", "Cut along the centre fold."]
//! ```
//!
//! Every `code` must be a valid specification code. Codes that are absent
//! from the file are allowed; selecting them displays nothing.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use zine_model::SpecCode;

use crate::catalog::{InstructionBlock, InstructionCatalog};
use crate::error::{CatalogError, Result};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "block")]
    blocks: Vec<InstructionBlock>,
}

/// Load an instruction catalog from a TOML file.
pub fn load_catalog(path: &Path) -> Result<InstructionCatalog> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let catalog = parse_with_path(&contents, path)?;
    debug!(
        path = %path.display(),
        blocks = catalog.len(),
        missing = catalog.missing_codes().len(),
        "loaded instruction catalog"
    );
    Ok(catalog)
}

/// Parse an instruction catalog from TOML text.
pub fn parse_catalog(contents: &str) -> Result<InstructionCatalog> {
    parse_with_path(contents, Path::new("<inline>"))
}

fn parse_with_path(contents: &str, path: &Path) -> Result<InstructionCatalog> {
    let file: CatalogFile = toml::from_str(contents).map_err(|e| CatalogError::Toml {
        path: path.to_path_buf(),
        source: e,
    })?;
    build_catalog(file.blocks)
}

fn build_catalog(blocks: Vec<InstructionBlock>) -> Result<InstructionCatalog> {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut catalog = InstructionCatalog::new();
    for block in blocks {
        SpecCode::parse(&block.code).map_err(|source| CatalogError::InvalidCode {
            code: block.code.clone(),
            source,
        })?;
        if !seen.insert(block.code.clone()) {
            return Err(CatalogError::DuplicateCode { code: block.code });
        }
        catalog.insert(block);
    }
    Ok(catalog)
}
