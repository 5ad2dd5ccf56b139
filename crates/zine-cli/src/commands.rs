//! Command implementations. Each returns data; printing lives in the binary.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use zine_core::{FoldingPage, InstructionCatalog, load_catalog};
use zine_model::{Applied, SelectionState, SpecCode};

use crate::types::{CheckResult, CodeRow, DecodeResult, ShowResult};

/// Load the catalog at `path`, or the built-in placeholder catalog.
pub fn catalog_or_placeholder(path: Option<&Path>) -> Result<InstructionCatalog> {
    match path {
        Some(path) => {
            load_catalog(path).with_context(|| format!("load catalog {}", path.display()))
        }
        None => Ok(InstructionCatalog::placeholder()),
    }
}

pub fn run_encode(selection: &SelectionState) -> SpecCode {
    let code = selection.encode();
    debug!(%code, "encoded selection");
    code
}

/// Decode `input` on top of the default selection, or on top of the
/// selection described by `from`.
pub fn run_decode(input: &str, from: Option<&str>) -> DecodeResult {
    let prior = from.map(SelectionState::from_code).unwrap_or_default();
    let mut selection = prior;
    let applied = selection.apply_code(input);
    DecodeResult {
        input: input.to_string(),
        prior,
        selection,
        applied,
        code: selection.encode(),
    }
}

/// Start a page the way a browser load would and report what it displays.
pub fn run_show(query: Option<&str>, catalog_path: Option<&Path>) -> Result<ShowResult> {
    let catalog = catalog_or_placeholder(catalog_path)?;
    let page = FoldingPage::initialize(catalog, query);
    let code = page.current_code();
    info!(%code, "page initialized");
    Ok(ShowResult {
        share_query: page.share_query(),
        selection: *page.selection(),
        block: page.catalog().active_block().cloned(),
        code,
    })
}

pub fn run_codes(catalog_path: Option<&Path>) -> Result<Vec<CodeRow>> {
    let catalog = catalog_or_placeholder(catalog_path)?;
    Ok(SpecCode::all()
        .into_iter()
        .map(|code| CodeRow {
            selection: code.selection(),
            title: catalog.get(code.as_str()).map(|block| block.title.clone()),
            code,
        })
        .collect())
}

pub fn run_check(catalog_path: &Path) -> Result<CheckResult> {
    let catalog = catalog_or_placeholder(Some(catalog_path))?;
    Ok(CheckResult {
        reachable: SpecCode::all().len(),
        blocks: catalog.len(),
        missing: catalog.missing_codes(),
    })
}

/// Shareable query (optionally a full link) for the code `input` decodes to.
///
/// Any query or fragment already on `base_url` is replaced.
pub fn run_share(input: &str, base_url: Option<&str>) -> String {
    let code = SelectionState::from_code(input).encode();
    let query = code.share_query();
    match base_url {
        Some(base) => {
            let page = base.split(['?', '#']).next().unwrap_or(base);
            format!("{page}{query}")
        }
        None => query,
    }
}

/// Whether a decode result wrote every group the decoded size uses.
pub fn decode_was_complete(result: &DecodeResult) -> bool {
    matches!(result.applied, Applied::All | Applied::SizeAndOrientation)
}
