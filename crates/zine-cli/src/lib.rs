//! CLI library components for the zine folding guide.

pub mod commands;
pub mod logging;
pub mod types;
