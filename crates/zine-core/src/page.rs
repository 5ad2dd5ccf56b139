//! Folding instructions page controller.
//!
//! [`FoldingPage`] owns the selection state and the instruction catalog.
//! Every state change ends with a refresh: the selection is re-encoded and
//! the matching block is selected. The code that was fed in is only used to
//! change the selection, never to pick the block directly.
//!
//! # Usage
//!
//! ```
//! use zine_core::{FoldingPage, InstructionCatalog};
//!
//! let page = FoldingPage::initialize(InstructionCatalog::placeholder(), Some("?e1lt"));
//! assert_eq!(page.current_code().as_str(), "e1lt");
//! assert_eq!(page.catalog().active_block().map(|b| b.code.as_str()), Some("e1lt"));
//! ```

use tracing::{debug, info_span};
use zine_model::{
    Applied, Duplex, Orientation, QUERY_DELIMITER, SelectionState, SpecCode, Spine, ZineSize,
};

use crate::catalog::ContentCatalog;
use crate::selector::select;

/// Selection state bound to a content catalog.
#[derive(Debug, Clone)]
pub struct FoldingPage<C> {
    selection: SelectionState,
    catalog: C,
}

impl<C: ContentCatalog> FoldingPage<C> {
    /// Wrap a catalog without touching its visibility.
    pub fn new(selection: SelectionState, catalog: C) -> Self {
        Self { selection, catalog }
    }

    /// Start a page from the default selection.
    ///
    /// A present, non-empty `source` (typically a query string) has one
    /// leading `?` removed and is decoded; otherwise the default selection
    /// is displayed as is.
    pub fn initialize(catalog: C, source: Option<&str>) -> Self {
        Self::initialize_with(SelectionState::default(), catalog, source)
    }

    /// Start a page from an explicit initial selection.
    pub fn initialize_with(selection: SelectionState, catalog: C, source: Option<&str>) -> Self {
        let span = info_span!("initialize", source = source.unwrap_or_default());
        let _guard = span.enter();

        let mut page = Self::new(selection, catalog);
        match source.filter(|source| !source.is_empty()) {
            Some(source) => {
                let code = source.strip_prefix(QUERY_DELIMITER).unwrap_or(source);
                page.load(code);
            }
            None => {
                page.refresh();
            }
        }
        page
    }

    /// Re-encode the selection and display the matching block.
    pub fn refresh(&mut self) -> SpecCode {
        let code = self.selection.encode();
        select(&mut self.catalog, code.as_str());
        code
    }

    /// Decode `input` into the selection, then refresh.
    pub fn load(&mut self, input: &str) -> SpecCode {
        let applied = self.selection.apply_code(input);
        if applied != Applied::All && applied != Applied::SizeAndOrientation {
            debug!(input, ?applied, "partial specification code");
        }
        self.refresh()
    }

    pub fn set_size(&mut self, size: ZineSize) -> SpecCode {
        self.selection.size = size;
        self.refresh()
    }

    pub fn set_duplex(&mut self, duplex: Duplex) -> SpecCode {
        self.selection.duplex = duplex;
        self.refresh()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> SpecCode {
        self.selection.orientation = orientation;
        self.refresh()
    }

    pub fn set_spine(&mut self, spine: Spine) -> SpecCode {
        self.selection.spine = spine;
        self.refresh()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Code for the current selection.
    pub fn current_code(&self) -> SpecCode {
        self.selection.encode()
    }

    /// Query string that reloads the page in its current configuration.
    pub fn share_query(&self) -> String {
        self.current_code().share_query()
    }
}
