//! Zine folding selection model.
//!
//! A zine configuration is four mutually exclusive choice groups (size,
//! duplex, orientation, spine). This crate maps a configuration to a short
//! specification code and back.

pub mod code;
pub mod enums;
pub mod error;
pub mod selection;

pub use code::{QUERY_DELIMITER, SpecCode};
pub use enums::{Duplex, Orientation, Spine, ZineSize};
pub use error::{CodeError, Result};
pub use selection::{Applied, SelectionState};
