//! Selection state and the encode/decode contract.
//!
//! [`SelectionState::encode`] turns the current choices into a
//! [`SpecCode`]; [`SelectionState::apply_code`] parses an external string
//! back into the choices. Both are total: neither can fail.

use serde::{Deserialize, Serialize};

use crate::code::SpecCode;
use crate::enums::{Duplex, Orientation, Spine, ZineSize};

/// The four choice groups of a zine configuration.
///
/// Every group always holds exactly one option. Duplex and spine are kept
/// even while the size is half so that switching back restores them.
///
/// The default is the host page's initial selection:
/// quarter, single-sided, portrait, top spine (`q1pt`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionState {
    pub size: ZineSize,
    pub duplex: Duplex,
    pub orientation: Orientation,
    pub spine: Spine,
}

/// Which groups a call to [`SelectionState::apply_code`] wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Input shorter than two characters; nothing changed.
    Nothing,
    /// Non-half size with a truncated tail; only the size changed.
    SizeOnly,
    /// Half size; size and orientation changed.
    SizeAndOrientation,
    /// Non-half size with all four groups present.
    All,
}

impl SelectionState {
    pub fn new(size: ZineSize, duplex: Duplex, orientation: Orientation, spine: Spine) -> Self {
        Self {
            size,
            duplex,
            orientation,
            spine,
        }
    }

    /// Build a state by decoding `input` on top of the default selection.
    pub fn from_code(input: &str) -> Self {
        let mut state = Self::default();
        state.apply_code(input);
        state
    }

    /// Encode the applicable fields into a specification code.
    ///
    /// Half size yields `size + orientation`; every other size yields
    /// `size + duplex + orientation + spine`.
    pub fn encode(&self) -> SpecCode {
        let mut code = String::with_capacity(4);
        code.push(self.size.code_char());
        if self.size.uses_sheet_options() {
            code.push(self.duplex.code_char());
            code.push(self.orientation.code_char());
            code.push(self.spine.code_char());
        } else {
            code.push(self.orientation.code_char());
        }
        SpecCode::from_encoded(code)
    }

    /// Decode `input` into this state.
    ///
    /// Inputs shorter than two characters are ignored. For half size only
    /// the orientation is read and duplex/spine keep their prior values.
    /// For other sizes the remaining groups are read only when at least
    /// four characters are present; otherwise they keep their prior values.
    /// Unrecognized characters map to each group's fallback option.
    pub fn apply_code(&mut self, input: &str) -> Applied {
        let chars: Vec<char> = input.chars().collect();
        if chars.len() < 2 {
            return Applied::Nothing;
        }

        self.size = ZineSize::from_code_char(chars[0]);
        if !self.size.uses_sheet_options() {
            self.orientation = Orientation::from_code_char(chars[1]);
            return Applied::SizeAndOrientation;
        }
        if chars.len() < 4 {
            return Applied::SizeOnly;
        }

        self.duplex = Duplex::from_code_char(chars[1]);
        self.orientation = Orientation::from_code_char(chars[2]);
        self.spine = Spine::from_code_char(chars[3]);
        Applied::All
    }

    /// Compare only the fields that the current size makes meaningful.
    pub fn applicable_eq(&self, other: &Self) -> bool {
        if self.size != other.size || self.orientation != other.orientation {
            return false;
        }
        if !self.size.uses_sheet_options() {
            return true;
        }
        self.duplex == other.duplex && self.spine == other.spine
    }

    /// Human-readable summary of the applicable fields.
    pub fn describe(&self) -> String {
        if self.size.uses_sheet_options() {
            format!(
                "{}, {}, {}, {}",
                self.size.label(),
                self.duplex.label().to_lowercase(),
                self.orientation.label().to_lowercase(),
                self.spine.label().to_lowercase()
            )
        } else {
            format!(
                "{}, {}",
                self.size.label(),
                self.orientation.label().to_lowercase()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_encodes_q1pt() {
        assert_eq!(SelectionState::default().encode().as_str(), "q1pt");
    }

    #[test]
    fn half_size_ignores_duplex_and_spine() {
        let state = SelectionState::new(
            ZineSize::Half,
            Duplex::Double,
            Orientation::Landscape,
            Spine::Side,
        );
        assert_eq!(state.encode().as_str(), "hl");
    }

    #[test]
    fn short_input_is_ignored() {
        let prior = SelectionState::new(
            ZineSize::Eighth,
            Duplex::Double,
            Orientation::Landscape,
            Spine::Side,
        );
        for input in ["", "h", "e"] {
            let mut state = prior;
            assert_eq!(state.apply_code(input), Applied::Nothing);
            assert_eq!(state, prior);
        }
    }

    #[test]
    fn half_decoding_keeps_duplex_and_spine() {
        let mut state = SelectionState::new(
            ZineSize::Eighth,
            Duplex::Double,
            Orientation::Portrait,
            Spine::Side,
        );
        assert_eq!(state.apply_code("hl"), Applied::SizeAndOrientation);
        assert_eq!(state.size, ZineSize::Half);
        assert_eq!(state.orientation, Orientation::Landscape);
        assert_eq!(state.duplex, Duplex::Double);
        assert_eq!(state.spine, Spine::Side);
    }

    #[test]
    fn half_decoding_ignores_trailing_characters() {
        let mut state = SelectionState::default();
        assert_eq!(state.apply_code("hp2s"), Applied::SizeAndOrientation);
        assert_eq!(state.encode().as_str(), "hp");
        assert_eq!(state.duplex, Duplex::Single);
        assert_eq!(state.spine, Spine::Top);
    }

    #[test]
    fn truncated_code_sets_only_size() {
        let mut state = SelectionState::new(
            ZineSize::Eighth,
            Duplex::Double,
            Orientation::Portrait,
            Spine::Side,
        );
        assert_eq!(state.apply_code("q1l"), Applied::SizeOnly);
        assert_eq!(state.size, ZineSize::Quarter);
        assert_eq!(state.encode().as_str(), "q2ps");
    }

    #[test]
    fn unknown_characters_use_fallbacks() {
        let state = SelectionState::from_code("zzzz");
        assert_eq!(
            state,
            SelectionState::new(
                ZineSize::Quarter,
                Duplex::Double,
                Orientation::Landscape,
                Spine::Top
            )
        );
        assert_eq!(state.encode().as_str(), "q2lt");
    }

    #[test]
    fn applicable_eq_skips_sheet_options_for_half() {
        let a = SelectionState::new(ZineSize::Half, Duplex::Single, Orientation::Portrait, Spine::Top);
        let b = SelectionState::new(ZineSize::Half, Duplex::Double, Orientation::Portrait, Spine::Side);
        assert!(a.applicable_eq(&b));

        let c = SelectionState { size: ZineSize::Eighth, ..a };
        let d = SelectionState { size: ZineSize::Eighth, ..b };
        assert!(!c.applicable_eq(&d));
    }

    #[test]
    fn describe_lists_applicable_fields() {
        assert_eq!(
            SelectionState::from_code("e2ps").describe(),
            "Eighth-size (mini), double-sided, portrait, side spine"
        );
        assert_eq!(SelectionState::from_code("hl").describe(), "Half-size, landscape");
    }

    #[test]
    fn selection_serializes_lowercase() {
        let json = serde_json::to_string(&SelectionState::from_code("e1lt")).expect("serialize");
        assert_eq!(
            json,
            r#"{"size":"eighth","duplex":"single","orientation":"landscape","spine":"top"}"#
        );
    }
}
