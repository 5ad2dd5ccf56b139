//! Folding instructions page logic.
//!
//! Binds a [`zine_model::SelectionState`] to a catalog of pre-authored
//! instruction blocks and keeps exactly the block for the current
//! specification code visible.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod page;
pub mod selector;

pub use catalog::{ContentCatalog, InstructionBlock, InstructionCatalog};
pub use error::{CatalogError, Result};
pub use loader::{load_catalog, parse_catalog};
pub use page::FoldingPage;
pub use selector::select;
