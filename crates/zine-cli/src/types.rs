use zine_core::InstructionBlock;
use zine_model::{Applied, SelectionState, SpecCode};

#[derive(Debug)]
pub struct DecodeResult {
    pub input: String,
    pub prior: SelectionState,
    pub selection: SelectionState,
    pub applied: Applied,
    pub code: SpecCode,
}

#[derive(Debug)]
pub struct ShowResult {
    pub code: SpecCode,
    pub selection: SelectionState,
    pub block: Option<InstructionBlock>,
    pub share_query: String,
}

#[derive(Debug)]
pub struct CodeRow {
    pub code: SpecCode,
    pub selection: SelectionState,
    pub title: Option<String>,
}

#[derive(Debug)]
pub struct CheckResult {
    pub reachable: usize,
    pub blocks: usize,
    pub missing: Vec<SpecCode>,
}

impl CheckResult {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
