//! Choice groups that make up a zine selection.
//!
//! Each group is a closed set of mutually exclusive options. Every option
//! owns exactly one character of the specification code.
//!
//! # Code characters
//!
//! | Group       | Options                              |
//! |-------------|--------------------------------------|
//! | Size        | `e` eighth, `q` quarter, `h` half    |
//! | Duplex      | `1` single, `2` double               |
//! | Orientation | `p` portrait, `l` landscape          |
//! | Spine       | `s` side, `t` top                    |
//!
//! Lenient decoding (`from_code_char`) is total: unknown characters land on
//! a fixed fallback option. Strict decoding (`try_from_code_char`) returns
//! `None` instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// ZINE SIZE
// =============================================================================

/// Physical page-folding format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZineSize {
    /// Eighth-sheet mini zine (`e`).
    Eighth,
    /// Quarter-sheet zine (`q`). Fallback for unknown size characters.
    #[default]
    Quarter,
    /// Half-sheet zine (`h`). Has no duplex or spine options.
    Half,
}

impl ZineSize {
    /// All sizes in code order.
    pub const ALL: [ZineSize; 3] = [ZineSize::Half, ZineSize::Eighth, ZineSize::Quarter];

    /// Returns the code character for this size.
    pub fn code_char(&self) -> char {
        match self {
            ZineSize::Eighth => 'e',
            ZineSize::Quarter => 'q',
            ZineSize::Half => 'h',
        }
    }

    /// Decode a size character. Anything other than `e` or `h` is quarter.
    pub fn from_code_char(c: char) -> Self {
        match c {
            'e' => ZineSize::Eighth,
            'h' => ZineSize::Half,
            _ => ZineSize::Quarter,
        }
    }

    /// Decode a size character, rejecting anything outside the grammar.
    pub fn try_from_code_char(c: char) -> Option<Self> {
        match c {
            'e' => Some(ZineSize::Eighth),
            'q' => Some(ZineSize::Quarter),
            'h' => Some(ZineSize::Half),
            _ => None,
        }
    }

    /// Returns true when duplex and spine choices apply to this size.
    pub fn uses_sheet_options(&self) -> bool {
        !matches!(self, ZineSize::Half)
    }

    /// Length of a specification code for this size.
    pub fn code_len(&self) -> usize {
        if self.uses_sheet_options() { 4 } else { 2 }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZineSize::Eighth => "eighth",
            ZineSize::Quarter => "quarter",
            ZineSize::Half => "half",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ZineSize::Eighth => "Eighth-size (mini)",
            ZineSize::Quarter => "Quarter-size",
            ZineSize::Half => "Half-size",
        }
    }
}

impl fmt::Display for ZineSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ZineSize {
    type Err = String;

    /// Parse a size name or its code character (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "eighth" | "mini" | "e" => Ok(ZineSize::Eighth),
            "quarter" | "q" => Ok(ZineSize::Quarter),
            "half" | "h" => Ok(ZineSize::Half),
            _ => Err(format!("Unknown zine size: {s}")),
        }
    }
}

// =============================================================================
// DUPLEX
// =============================================================================

/// Single- or double-sided printing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duplex {
    /// Single-sided (`1`).
    #[default]
    Single,
    /// Double-sided (`2`).
    Double,
}

impl Duplex {
    pub const ALL: [Duplex; 2] = [Duplex::Single, Duplex::Double];

    pub fn code_char(&self) -> char {
        match self {
            Duplex::Single => '1',
            Duplex::Double => '2',
        }
    }

    /// Decode a duplex character. Only `1` means single-sided; anything
    /// else is double-sided.
    pub fn from_code_char(c: char) -> Self {
        match c {
            '1' => Duplex::Single,
            _ => Duplex::Double,
        }
    }

    pub fn try_from_code_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Duplex::Single),
            '2' => Some(Duplex::Double),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Duplex::Single => "single",
            Duplex::Double => "double",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Duplex::Single => "Single-sided",
            Duplex::Double => "Double-sided",
        }
    }
}

impl fmt::Display for Duplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Duplex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "single" | "1" => Ok(Duplex::Single),
            "double" | "2" => Ok(Duplex::Double),
            _ => Err(format!("Unknown duplex mode: {s}")),
        }
    }
}

// =============================================================================
// ORIENTATION
// =============================================================================

/// Page orientation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Portrait (`p`).
    #[default]
    Portrait,
    /// Landscape (`l`). Fallback for unknown orientation characters.
    Landscape,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Portrait, Orientation::Landscape];

    pub fn code_char(&self) -> char {
        match self {
            Orientation::Portrait => 'p',
            Orientation::Landscape => 'l',
        }
    }

    pub fn from_code_char(c: char) -> Self {
        match c {
            'p' => Orientation::Portrait,
            _ => Orientation::Landscape,
        }
    }

    pub fn try_from_code_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(Orientation::Portrait),
            'l' => Some(Orientation::Landscape),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "portrait" | "p" => Ok(Orientation::Portrait),
            "landscape" | "l" => Ok(Orientation::Landscape),
            _ => Err(format!("Unknown orientation: {s}")),
        }
    }
}

// =============================================================================
// SPINE
// =============================================================================

/// Binding edge position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spine {
    /// Spine on the side (`s`).
    Side,
    /// Spine on the top (`t`). Fallback for unknown spine characters.
    #[default]
    Top,
}

impl Spine {
    pub const ALL: [Spine; 2] = [Spine::Side, Spine::Top];

    pub fn code_char(&self) -> char {
        match self {
            Spine::Side => 's',
            Spine::Top => 't',
        }
    }

    pub fn from_code_char(c: char) -> Self {
        match c {
            's' => Spine::Side,
            _ => Spine::Top,
        }
    }

    pub fn try_from_code_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Spine::Side),
            't' => Some(Spine::Top),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Spine::Side => "side",
            Spine::Top => "top",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Spine::Side => "Side spine",
            Spine::Top => "Top spine",
        }
    }
}

impl fmt::Display for Spine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Spine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "side" | "s" => Ok(Spine::Side),
            "top" | "t" => Ok(Spine::Top),
            _ => Err(format!("Unknown spine position: {s}")),
        }
    }
}
