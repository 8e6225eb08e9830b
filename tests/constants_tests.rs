// Host-side tests for the web frontend's DOM hooks and copy.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn element_ids_are_unique_and_non_empty() {
    let ids = [
        PREVIEW_SURFACE_ID,
        PREVIEW_AREA_ID,
        PREVIEW_STAGE_ID,
        UPLOAD_PROMPT_ID,
        PREVIEW_CONTROLS_ID,
        RESET_BUTTON_ID,
        RESET_LABEL_ID,
        DIMENSION_WIDTH_ID,
        DIMENSION_HEIGHT_ID,
        DIMENSION_READOUT_ID,
        DIMENSION_TEXT_ID,
        DRAG_HINT_ID,
        SIZE_TIERS_ID,
        SUBMIT_BUTTON_ID,
        UPLOAD_ERROR_ID,
        PROCESSING_ID,
    ];
    let mut seen = HashSet::new();
    for id in ids {
        assert!(!id.is_empty());
        assert!(!id.contains(' '), "id {id:?} contains whitespace");
        assert!(seen.insert(id), "duplicate id {id:?}");
    }
}

#[test]
fn reset_label_reflects_mode() {
    assert_ne!(RESET_LABEL_AUTO, RESET_LABEL_MANUAL);
}

#[test]
fn stage_only_animates_when_not_dragging() {
    assert_eq!(STAGE_TRANSITION_DRAGGING, "none");
    assert!(STAGE_TRANSITION_IDLE.starts_with("transform"));
}

#[test]
fn upload_selector_targets_file_inputs() {
    assert!(UPLOAD_INPUT_SELECTOR.starts_with("input."));
    assert_eq!(PNG_MIME, "image/png");
}
