// Shared mood tuning constants used by both the core and the web frontend.

// Built-in palette channels (applied when nothing else is selected or when a
// query-string field fails validation)
pub const DEFAULT_PRIMARY: &str = "#7DD3C0";
pub const DEFAULT_ACCENT: &str = "#FF6B6B";
pub const DEFAULT_BG: &str = "#1a1a1a";

// Intensity defaults
pub const DEFAULT_INTENSITY: f32 = 0.5; // fresh store / invalid query field
pub const QUIZ_RESULT_INTENSITY: f32 = 0.7; // applied after quiz resolution

// Quiz energy fallback bands (slider range is 0..=100)
pub const QUIZ_ENERGY_HIGH: f32 = 70.0; // above this -> Chaotic
pub const QUIZ_ENERGY_LOW: f32 = 30.0; // below this -> Calm

// Keyboard interaction
pub const INTENSITY_KEY_STEP: f32 = 0.05; // arrow key nudge per press
