//! Integration tests for the command implementations.

use std::fs;

use zine_cli::commands::{
    catalog_or_placeholder, decode_was_complete, run_check, run_codes, run_decode, run_encode,
    run_share, run_show,
};
use zine_model::{Applied, Duplex, Orientation, SelectionState, Spine, ZineSize};

const PARTIAL_CATALOG: &str = r#"
[[block]]
code = "hp"
title = "Half-size portrait"
steps = ["Fold the sheet in half widthwise.", "Staple along the fold."]

[[block]]
code = "e1lt"
title = "Mini zine, landscape, top spine"
steps = ["Fold into eighths.", "Cut the centre slit.", "Push and fold."]
"#;

fn write_catalog(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.toml");
    fs::write(&path, contents).expect("write catalog");
    path
}

#[test]
fn encode_default_options() {
    assert_eq!(run_encode(&SelectionState::default()).as_str(), "q1pt");
}

#[test]
fn encode_half_drops_sheet_options() {
    let selection = SelectionState::new(
        ZineSize::Half,
        Duplex::Double,
        Orientation::Portrait,
        Spine::Side,
    );
    assert_eq!(run_encode(&selection).as_str(), "hp");
}

#[test]
fn decode_from_default() {
    let result = run_decode("e2ps", None);
    assert_eq!(result.prior, SelectionState::default());
    assert_eq!(result.applied, Applied::All);
    assert_eq!(result.code.as_str(), "e2ps");
    assert!(decode_was_complete(&result));
}

#[test]
fn decode_truncated_from_prior() {
    let result = run_decode("q1l", Some("e2ps"));
    assert_eq!(result.applied, Applied::SizeOnly);
    assert_eq!(result.code.as_str(), "q2ps");
    assert!(!decode_was_complete(&result));
}

#[test]
fn decode_garbage_never_fails() {
    for input in ["", "?", "zz", "🙂🙂🙂🙂", "h", "-1"] {
        let result = run_decode(input, None);
        assert!(matches!(result.code.as_str().len(), 2 | 4));
    }
}

#[test]
fn show_with_placeholder_catalog() {
    let result = run_show(Some("?e1lt"), None).expect("show");
    assert_eq!(result.code.as_str(), "e1lt");
    assert_eq!(result.share_query, "?e1lt");
    let block = result.block.expect("active block");
    assert_eq!(block.code, "e1lt");
    assert!(block.active);
}

#[test]
fn show_without_query_uses_default() {
    let result = run_show(None, None).expect("show");
    assert_eq!(result.code.as_str(), "q1pt");
}

#[test]
fn show_reports_missing_block() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_catalog(&dir, PARTIAL_CATALOG);
    let result = run_show(Some("?q2ls"), Some(path.as_path())).expect("show");
    assert_eq!(result.code.as_str(), "q2ls");
    assert!(result.block.is_none());

    let result = run_show(Some("hp"), Some(path.as_path())).expect("show");
    let block = result.block.expect("active block");
    assert_eq!(block.steps.len(), 2);
}

#[test]
fn codes_lists_all_reachable_codes() {
    let rows = run_codes(None).expect("codes");
    let codes: Vec<&str> = rows.iter().map(|row| row.code.as_str()).collect();
    insta::assert_snapshot!(
        codes.join(" "),
        @"hp hl e1ps e1pt e1ls e1lt e2ps e2pt e2ls e2lt q1ps q1pt q1ls q1lt q2ps q2pt q2ls q2lt"
    );
    assert!(rows.iter().all(|row| row.title.is_some()));
}

#[test]
fn check_reports_gaps() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_catalog(&dir, PARTIAL_CATALOG);
    let result = run_check(&path).expect("check");
    assert_eq!(result.reachable, 18);
    assert_eq!(result.blocks, 2);
    assert_eq!(result.missing.len(), 16);
    assert!(!result.is_complete());
}

#[test]
fn invalid_catalog_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_catalog(&dir, "[[block]]\ncode = \"xx\"\ntitle = \"bad\"\n");
    let err = catalog_or_placeholder(Some(path.as_path())).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("load catalog"));
    assert!(message.contains("invalid block code 'xx'"));
}

#[test]
fn share_normalizes_code() {
    assert_eq!(run_share("e2ps", None), "?e2ps");
    assert_eq!(run_share("q1l", None), "?q1pt");
    assert_eq!(
        run_share("hl", Some("https://example.org/fold.html?old")),
        "https://example.org/fold.html?hl"
    );
}

#[test]
fn share_drops_fragment_from_base_url() {
    assert_eq!(
        run_share("hl", Some("https://example.org/fold.html#top")),
        "https://example.org/fold.html?hl"
    );
    assert_eq!(
        run_share("e2ps", Some("https://example.org/fold.html?q1pt#steps")),
        "https://example.org/fold.html?e2ps"
    );
}
