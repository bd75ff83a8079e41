// Host-side tests for pure keyboard mapping functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod keys {
    include!("../src/keys.rs");
}

use keys::*;
use mood_core::{Vibe, INTENSITY_KEY_STEP};

#[test]
fn digits_map_to_vibes_in_order() {
    assert_eq!(vibe_for_digit("1"), Some(Vibe::Calm));
    assert_eq!(vibe_for_digit("2"), Some(Vibe::Chaotic));
    assert_eq!(vibe_for_digit("3"), Some(Vibe::Dreamy));
    assert_eq!(vibe_for_digit("4"), Some(Vibe::Cyber));
    assert_eq!(vibe_for_digit("5"), Some(Vibe::Cozy));
}

#[test]
fn out_of_range_digits_map_to_nothing() {
    assert_eq!(vibe_for_digit("0"), None);
    assert_eq!(vibe_for_digit("6"), None);
    assert_eq!(vibe_for_digit("9"), None);
    assert_eq!(vibe_for_digit(""), None);
    assert_eq!(vibe_for_digit("11"), None);
    assert_eq!(vibe_for_digit("a"), None);
}

#[test]
fn shortcut_keys_map_to_actions_case_insensitively() {
    assert_eq!(action_for_key("r"), Some(KeyAction::Randomize));
    assert_eq!(action_for_key("R"), Some(KeyAction::Randomize));
    assert_eq!(action_for_key("s"), Some(KeyAction::Screenshot));
    assert_eq!(action_for_key("S"), Some(KeyAction::Screenshot));
    assert_eq!(action_for_key("m"), Some(KeyAction::CycleMusic));
    assert_eq!(action_for_key("q"), Some(KeyAction::OpenQuiz));
    assert_eq!(action_for_key("ArrowUp"), Some(KeyAction::IntensityUp));
    assert_eq!(action_for_key("ArrowDown"), Some(KeyAction::IntensityDown));
    assert_eq!(action_for_key("Escape"), Some(KeyAction::CloseQuiz));
}

#[test]
fn unmapped_keys_do_nothing() {
    for key in ["x", "Enter", "Tab", "ArrowLeft", "ArrowRight", " ", "F1"] {
        assert_eq!(action_for_key(key), None, "{key:?} should be unmapped");
    }
}

#[test]
fn intensity_stepping_moves_by_one_step() {
    assert_eq!(stepped_intensity(0.5, true), 0.5 + INTENSITY_KEY_STEP);
    assert_eq!(stepped_intensity(0.5, false), 0.5 - INTENSITY_KEY_STEP);
    // The store clamps; the mapping itself may leave the interval.
    assert!(stepped_intensity(1.0, true) > 1.0);
    assert!(stepped_intensity(0.0, false) < 0.0);
}
