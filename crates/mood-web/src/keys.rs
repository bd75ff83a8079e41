// Pure keyboard-mapping helpers. No web-sys here so host-side tests can
// include this file directly (the crate itself is wasm-only).

use mood_core::{Vibe, INTENSITY_KEY_STEP};

/// Digits 1-5 select a vibe in declaration order.
#[inline]
pub fn vibe_for_digit(key: &str) -> Option<Vibe> {
    match key {
        "1" => Some(Vibe::Calm),
        "2" => Some(Vibe::Chaotic),
        "3" => Some(Vibe::Dreamy),
        "4" => Some(Vibe::Cyber),
        "5" => Some(Vibe::Cozy),
        _ => None,
    }
}

/// Non-vibe shortcut keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Randomize,
    Screenshot,
    CycleMusic,
    IntensityUp,
    IntensityDown,
    OpenQuiz,
    CloseQuiz,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "r" | "R" => Some(KeyAction::Randomize),
        "s" | "S" => Some(KeyAction::Screenshot),
        "m" | "M" => Some(KeyAction::CycleMusic),
        "q" | "Q" => Some(KeyAction::OpenQuiz),
        "ArrowUp" => Some(KeyAction::IntensityUp),
        "ArrowDown" => Some(KeyAction::IntensityDown),
        "Escape" => Some(KeyAction::CloseQuiz),
        _ => None,
    }
}

/// One arrow-key nudge; the store clamps on apply.
#[inline]
pub fn stepped_intensity(current: f32, up: bool) -> f32 {
    if up {
        current + INTENSITY_KEY_STEP
    } else {
        current - INTENSITY_KEY_STEP
    }
}
