//! Encode/decode properties for the selection model.

use proptest::prelude::*;

use zine_model::{Duplex, Orientation, SelectionState, SpecCode, Spine, ZineSize};

fn any_selection() -> impl Strategy<Value = SelectionState> {
    (
        prop::sample::select(ZineSize::ALL.to_vec()),
        prop::sample::select(Duplex::ALL.to_vec()),
        prop::sample::select(Orientation::ALL.to_vec()),
        prop::sample::select(Spine::ALL.to_vec()),
    )
        .prop_map(|(size, duplex, orientation, spine)| {
            SelectionState::new(size, duplex, orientation, spine)
        })
}

proptest! {
    #[test]
    fn decode_of_encode_restores_applicable_fields(state in any_selection()) {
        let code = state.encode();
        let decoded = SelectionState::from_code(code.as_str());
        prop_assert!(decoded.applicable_eq(&state));
    }

    #[test]
    fn encode_always_matches_grammar(state in any_selection()) {
        let code = state.encode();
        prop_assert!(SpecCode::parse(code.as_str()).is_ok());
        let expected = if state.size == ZineSize::Half { 2 } else { 4 };
        prop_assert_eq!(code.as_str().len(), expected);
    }

    #[test]
    fn decoding_arbitrary_input_still_encodes_validly(
        prior in any_selection(),
        input in ".{0,8}",
    ) {
        let mut state = prior;
        state.apply_code(&input);
        prop_assert!(SpecCode::parse(state.encode().as_str()).is_ok());
    }

    #[test]
    fn half_decode_never_touches_sheet_options(
        prior in any_selection(),
        orientation in "[a-z]",
        tail in "[a-z0-9]{0,4}",
    ) {
        let mut state = prior;
        state.apply_code(&format!("h{orientation}{tail}"));
        prop_assert_eq!(state.size, ZineSize::Half);
        prop_assert_eq!(state.duplex, prior.duplex);
        prop_assert_eq!(state.spine, prior.spine);
    }
}

#[test]
fn every_reachable_code_decodes_to_itself() {
    for code in SpecCode::all() {
        assert_eq!(code.selection().encode(), code);
    }
}

#[test]
fn eighth_double_portrait_side_encodes_e2ps() {
    let state = SelectionState::new(
        ZineSize::Eighth,
        Duplex::Double,
        Orientation::Portrait,
        Spine::Side,
    );
    assert_eq!(state.encode().as_str(), "e2ps");
}

#[test]
fn decoding_leaves_prior_state_on_empty_input() {
    let prior = SelectionState::from_code("e2ls");
    let mut state = prior;
    state.apply_code("");
    assert_eq!(state, prior);
    assert_eq!(state.encode().as_str(), "e2ls");
}

#[test]
fn multibyte_input_is_counted_by_character() {
    let mut state = SelectionState::default();
    state.apply_code("hé");
    assert_eq!(state.size, ZineSize::Half);
    assert_eq!(state.orientation, Orientation::Landscape);

    let mut state = SelectionState::from_code("e2ps");
    state.apply_code("é");
    assert_eq!(state.encode().as_str(), "e2ps");
}
