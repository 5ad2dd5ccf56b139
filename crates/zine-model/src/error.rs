use thiserror::Error;

/// Errors from strict specification code parsing.
///
/// Lenient decoding never produces these; they only surface where a caller
/// explicitly validates a code (catalog keys, command-line checks).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("specification code is empty")]
    Empty,
    #[error("specification code has length {len}; expected 2 for half size or 4 otherwise")]
    Length { len: usize },
    #[error("invalid {group} character '{found}' at position {position}")]
    InvalidChar {
        position: usize,
        found: char,
        group: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CodeError>;
