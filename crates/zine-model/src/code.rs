//! Specification codes: the compact, shareable form of a selection.
//!
//! Grammar:
//!
//! - half size: `h` + orientation (`p`/`l`), e.g. `hp`, `hl`
//! - eighth/quarter: size (`e`/`q`) + duplex (`1`/`2`) + orientation
//!   (`p`/`l`) + spine (`s`/`t`), e.g. `e2ps`, `q1lt`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::{Duplex, Orientation, Spine, ZineSize};
use crate::error::{CodeError, Result};
use crate::selection::SelectionState;

/// Delimiter that prefixes a code in a shareable query string.
pub const QUERY_DELIMITER: char = '?';

/// A specification code that conforms to the grammar.
///
/// Obtained from [`SelectionState::encode`] or strict parsing; the decoder
/// in [`SelectionState::apply_code`] accepts arbitrary strings instead.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpecCode(String);

impl SpecCode {
    pub(crate) fn from_encoded(code: String) -> Self {
        Self(code)
    }

    /// Strictly parse a code, rejecting anything outside the grammar.
    pub fn parse(input: &str) -> Result<Self> {
        let chars: Vec<char> = input.chars().collect();
        let Some(&first) = chars.first() else {
            return Err(CodeError::Empty);
        };
        let size = ZineSize::try_from_code_char(first).ok_or(CodeError::InvalidChar {
            position: 0,
            found: first,
            group: "size",
        })?;
        if chars.len() != size.code_len() {
            return Err(CodeError::Length { len: chars.len() });
        }

        let groups: &[Group] = if size.uses_sheet_options() {
            &[Group::Duplex, Group::Orientation, Group::Spine]
        } else {
            &[Group::Orientation]
        };
        for (offset, (&group, &found)) in groups.iter().zip(&chars[1..]).enumerate() {
            if !group.accepts(found) {
                return Err(CodeError::InvalidChar {
                    position: offset + 1,
                    found,
                    group: group.name(),
                });
            }
        }
        Ok(Self(chars.into_iter().collect()))
    }

    /// Every reachable code: the two half-size codes, then eighth, then
    /// quarter, each in duplex/orientation/spine order.
    pub fn all() -> Vec<SpecCode> {
        let mut codes = Vec::with_capacity(18);
        for orientation in Orientation::ALL {
            codes.push(
                SelectionState {
                    size: ZineSize::Half,
                    orientation,
                    ..SelectionState::default()
                }
                .encode(),
            );
        }
        for size in [ZineSize::Eighth, ZineSize::Quarter] {
            for duplex in Duplex::ALL {
                for orientation in Orientation::ALL {
                    for spine in Spine::ALL {
                        codes.push(SelectionState::new(size, duplex, orientation, spine).encode());
                    }
                }
            }
        }
        codes
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The selection this code denotes, with non-applicable groups at
    /// their defaults.
    pub fn selection(&self) -> SelectionState {
        SelectionState::from_code(&self.0)
    }

    /// Query string for a shareable link, e.g. `?e2ps`.
    pub fn share_query(&self) -> String {
        format!("{QUERY_DELIMITER}{}", self.0)
    }
}

/// Choice groups that follow the size character.
#[derive(Clone, Copy)]
enum Group {
    Duplex,
    Orientation,
    Spine,
}

impl Group {
    fn name(self) -> &'static str {
        match self {
            Group::Duplex => "duplex",
            Group::Orientation => "orientation",
            Group::Spine => "spine",
        }
    }

    fn accepts(self, c: char) -> bool {
        match self {
            Group::Duplex => Duplex::try_from_code_char(c).is_some(),
            Group::Orientation => Orientation::try_from_code_char(c).is_some(),
            Group::Spine => Spine::try_from_code_char(c).is_some(),
        }
    }
}

impl fmt::Display for SpecCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SpecCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SpecCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<SpecCode> for String {
    fn from(code: SpecCode) -> Self {
        code.0
    }
}

impl AsRef<str> for SpecCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SelectionState> for SpecCode {
    fn from(state: SelectionState) -> Self {
        state.encode()
    }
}
