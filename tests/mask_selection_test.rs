//! Candidate selection: multi-mask sequences and dynamic selectors.
//!
//! A sequence is sorted shortest first at construction; per value, the
//! first candidate that consumes as much input as the longest one wins.

use textmask::MaskOptions;

mod common;
use common::*;

/// Tests that candidate order in the configuration does not matter.
#[test]
fn test_sequence_order_independent() {
    let m = masker(MaskOptions::sequence(["#-#-#", "#-#"]));

    assert_eq!(m.resolve_mask("12"), Some("#-#".to_string()));
    assert_eq!(m.resolve_mask("123"), Some("#-#-#".to_string()));
}

/// Tests that equally good matches select the shorter candidate.
#[test]
fn test_tie_selects_shorter_candidate() {
    let m = masker(MaskOptions::sequence(["#-#", "#-#-#"]));

    assert_views(&m, "12", "1-2", "12", true);
    assert_views(&m, "1", "1", "1", false);
}

/// Tests that a candidate consuming more input wins over a shorter one.
#[test]
fn test_consuming_candidate_wins() {
    let m = masker(MaskOptions::sequence(["#-#", "#-#-#"]));

    assert_views(&m, "123", "1-2-3", "123", true);
    // Extra input beyond the longest candidate is dropped as usual.
    assert_views(&m, "1234", "1-2-3", "123", true);
}

/// Tests that completion is judged against the selected candidate.
#[test]
fn test_completion_follows_selected_candidate() {
    let m = masker(MaskOptions::sequence(["##", "####"]));

    assert_views(&m, "12", "12", "12", true);
    assert_views(&m, "123", "123", "123", false);
    assert_views(&m, "1234", "1234", "1234", true);
}

/// Tests a local/long phone pair growing with the typed value.
#[test]
fn test_phone_length_selection() {
    let m = masker(MaskOptions::sequence([
        "(##) ####-####",
        "(##) #####-####",
    ]));

    assert_views(
        &m,
        "1123456789",
        "(11) 2345-6789",
        "1123456789",
        true,
    );
    assert_views(
        &m,
        "11234567890",
        "(11) 23456-7890",
        "11234567890",
        true,
    );
}

/// Tests a selector choosing card layouts from the leading digit.
#[test]
fn test_dynamic_selection_per_value() {
    let m = masker(MaskOptions::dynamic(|value| {
        if value.starts_with('3') {
            "#### ###### #####".to_string()
        } else {
            "#### #### #### ####".to_string()
        }
    }));

    assert_views(
        &m,
        "378282246310005",
        "3782 822463 10005",
        "378282246310005",
        true,
    );
    assert_views(
        &m,
        "4111111111111111",
        "4111 1111 1111 1111",
        "4111111111111111",
        true,
    );
}

/// Tests that an empty sequence degrades to pass-through.
#[test]
fn test_empty_sequence_passes_through() {
    let m = masker(MaskOptions::sequence(Vec::<String>::new()));

    assert_views(&m, "abc", "abc", "abc", false);
    assert_eq!(m.resolve_mask("abc"), None);
}

/// Tests that a single-entry sequence behaves like a plain pattern.
#[test]
fn test_single_entry_sequence_collapses() {
    let plain = masker(MaskOptions::pattern("!##"));
    let sequence = masker(MaskOptions::sequence(["!##"]));

    // Both count the escape marker toward the required length.
    assert_views(&plain, "5", "#5", "5", false);
    assert_views(&sequence, "5", "#5", "5", false);
}
