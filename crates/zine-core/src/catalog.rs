//! Content catalog: the host-owned set of instruction blocks.
//!
//! Blocks are keyed by specification code. The page only toggles which
//! block is active; it never adds or removes entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use zine_model::SpecCode;

/// Visibility control over a set of content blocks keyed by identifier.
pub trait ContentCatalog {
    /// Deactivate every block.
    fn deactivate_all(&mut self);

    /// Activate the block with identifier `id`. Returns false if no such
    /// block exists.
    fn activate(&mut self, id: &str) -> bool;

    /// Identifiers of the currently active blocks.
    fn active_ids(&self) -> Vec<String>;
}

/// One pre-authored set of folding instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionBlock {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(skip)]
    pub active: bool,
}

impl InstructionBlock {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            steps: Vec::new(),
            active: false,
        }
    }

    #[must_use]
    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }
}

/// In-memory catalog of instruction blocks.
#[derive(Debug, Clone, Default)]
pub struct InstructionCatalog {
    blocks: BTreeMap<String, InstructionBlock>,
}

impl InstructionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog with one descriptive block for every reachable code.
    pub fn placeholder() -> Self {
        let mut catalog = Self::new();
        for code in SpecCode::all() {
            let title = code.selection().describe();
            catalog.insert(InstructionBlock::new(code.as_str(), title));
        }
        catalog
    }

    /// Insert or replace a block. Returns the replaced block, if any.
    pub fn insert(&mut self, block: InstructionBlock) -> Option<InstructionBlock> {
        self.blocks.insert(block.code.clone(), block)
    }

    pub fn get(&self, code: &str) -> Option<&InstructionBlock> {
        self.blocks.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.blocks.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The single active block, if any.
    pub fn active_block(&self) -> Option<&InstructionBlock> {
        self.blocks.values().find(|block| block.active)
    }

    /// Reachable codes that have no block. A non-empty result means some
    /// selections display nothing.
    pub fn missing_codes(&self) -> Vec<SpecCode> {
        SpecCode::all()
            .into_iter()
            .filter(|code| !self.contains(code.as_str()))
            .collect()
    }
}

impl ContentCatalog for InstructionCatalog {
    fn deactivate_all(&mut self) {
        for block in self.blocks.values_mut() {
            block.active = false;
        }
    }

    fn activate(&mut self, id: &str) -> bool {
        match self.blocks.get_mut(id) {
            Some(block) => {
                block.active = true;
                true
            }
            None => false,
        }
    }

    fn active_ids(&self) -> Vec<String> {
        self.blocks
            .values()
            .filter(|block| block.active)
            .map(|block| block.code.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_covers_every_code() {
        let catalog = InstructionCatalog::placeholder();
        assert_eq!(catalog.len(), 18);
        assert!(catalog.missing_codes().is_empty());
        assert_eq!(
            catalog.get("hp").map(|block| block.title.as_str()),
            Some("Half-size, portrait")
        );
    }

    #[test]
    fn activate_unknown_id_is_false() {
        let mut catalog = InstructionCatalog::placeholder();
        assert!(!catalog.activate("zz"));
        assert!(catalog.active_ids().is_empty());
    }

    #[test]
    fn missing_codes_reports_gaps() {
        let mut catalog = InstructionCatalog::new();
        catalog.insert(InstructionBlock::new("hp", "Half portrait"));
        let missing = catalog.missing_codes();
        assert_eq!(missing.len(), 17);
        assert!(missing.iter().all(|code| code.as_str() != "hp"));
    }

    #[test]
    fn host_authored_block_keeps_steps_when_selected() {
        let mut catalog = InstructionCatalog::new();
        catalog.insert(
            InstructionBlock::new("hp", "Half portrait")
                .with_steps(["Fold the sheet in half.", "Staple along the fold."]),
        );
        assert!(catalog.activate("hp"));
        let block = catalog.active_block().expect("active block");
        assert_eq!(block.steps, vec!["Fold the sheet in half.", "Staple along the fold."]);
    }

    #[test]
    fn insert_replaces_existing_block() {
        let mut catalog = InstructionCatalog::new();
        assert!(catalog.insert(InstructionBlock::new("hl", "first")).is_none());
        let replaced = catalog.insert(InstructionBlock::new("hl", "second"));
        assert_eq!(replaced.map(|block| block.title), Some("first".to_string()));
        assert_eq!(catalog.len(), 1);
    }
}
