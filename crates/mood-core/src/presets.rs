//! Curated mood presets: one immutable bundle of visual/audio defaults per vibe.

use crate::mood::{Music, Vibe};

/// Static configuration attached to a vibe. Defined once at process start,
/// never mutated at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoodPreset {
    pub vibe: Vibe,
    pub primary: &'static str,
    pub accent: &'static str,
    pub bg: &'static str,
    pub music: Music,
    /// Multiplier applied to the ambient light by the rendering layer.
    pub light_intensity: f32,
    pub light_tint: &'static str,
}

static CALM: MoodPreset = MoodPreset {
    vibe: Vibe::Calm,
    primary: "#A8D5BA",
    accent: "#5B8E9D",
    bg: "#F5F8F7",
    music: Music::Nature,
    light_intensity: 0.6,
    light_tint: "#E8F4F0",
};

static CHAOTIC: MoodPreset = MoodPreset {
    vibe: Vibe::Chaotic,
    primary: "#FF6B9D",
    accent: "#FF1744",
    bg: "#1A0B0F",
    music: Music::Synthwave,
    light_intensity: 1.2,
    light_tint: "#FFF0F0",
};

static DREAMY: MoodPreset = MoodPreset {
    vibe: Vibe::Dreamy,
    primary: "#C8A2C8",
    accent: "#9370DB",
    bg: "#2D1B3D",
    music: Music::Lofi,
    light_intensity: 0.8,
    light_tint: "#F4E8FF",
};

static CYBER: MoodPreset = MoodPreset {
    vibe: Vibe::Cyber,
    primary: "#00FFFF",
    accent: "#00E5FF",
    bg: "#001122",
    music: Music::Synthwave,
    light_intensity: 1.1,
    light_tint: "#E0FFFF",
};

static COZY: MoodPreset = MoodPreset {
    vibe: Vibe::Cozy,
    primary: "#FFB347",
    accent: "#FF8C42",
    bg: "#2C1810",
    music: Music::Lofi,
    light_intensity: 0.7,
    light_tint: "#FFF5E6",
};

/// Total over the closed vibe set; pure and deterministic.
pub fn pick_preset(vibe: Vibe) -> &'static MoodPreset {
    match vibe {
        Vibe::Calm => &CALM,
        Vibe::Chaotic => &CHAOTIC,
        Vibe::Dreamy => &DREAMY,
        Vibe::Cyber => &CYBER,
        Vibe::Cozy => &COZY,
    }
}
