//! Mood state types shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. The web frontend consumes
//! them to drive room colors, lighting, and ambience.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_ACCENT, DEFAULT_BG, DEFAULT_INTENSITY, DEFAULT_PRIMARY};

/// The primary mood category. Exactly one vibe is current at any time; each
/// vibe carries a static preset (see [`crate::presets::pick_preset`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Vibe {
    #[default]
    Calm,
    Chaotic,
    Dreamy,
    Cyber,
    Cozy,
}

impl Vibe {
    /// All vibes in resolution priority order.
    pub const ALL: [Vibe; 5] = [
        Vibe::Calm,
        Vibe::Chaotic,
        Vibe::Dreamy,
        Vibe::Cyber,
        Vibe::Cozy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Vibe::Calm => "Calm",
            Vibe::Chaotic => "Chaotic",
            Vibe::Dreamy => "Dreamy",
            Vibe::Cyber => "Cyber",
            Vibe::Cozy => "Cozy",
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vibe token: {0:?}")]
pub struct ParseVibeError(pub String);

impl FromStr for Vibe {
    type Err = ParseVibeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Calm" => Ok(Vibe::Calm),
            "Chaotic" => Ok(Vibe::Chaotic),
            "Dreamy" => Ok(Vibe::Dreamy),
            "Cyber" => Ok(Vibe::Cyber),
            "Cozy" => Ok(Vibe::Cozy),
            other => Err(ParseVibeError(other.to_owned())),
        }
    }
}

/// Ambient music category attached to a vibe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Music {
    #[default]
    Lofi,
    Synthwave,
    Chiptune,
    Nature,
}

impl Music {
    pub const ALL: [Music; 4] = [
        Music::Lofi,
        Music::Synthwave,
        Music::Chiptune,
        Music::Nature,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Music::Lofi => "lofi",
            Music::Synthwave => "synthwave",
            Music::Chiptune => "chiptune",
            Music::Nature => "nature",
        }
    }

    /// Next category in `ALL` order, wrapping. Used by the `m` shortcut.
    pub fn next(self) -> Music {
        let i = Music::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Music::ALL[(i + 1) % Music::ALL.len()]
    }
}

impl fmt::Display for Music {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown music token: {0:?}")]
pub struct ParseMusicError(pub String);

impl FromStr for Music {
    type Err = ParseMusicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lofi" => Ok(Music::Lofi),
            "synthwave" => Ok(Music::Synthwave),
            "chiptune" => Ok(Music::Chiptune),
            "nature" => Ok(Music::Nature),
            other => Err(ParseMusicError(other.to_owned())),
        }
    }
}

/// Three-color visual theme of the room, hex-encoded (`#RRGGBB` or `#RGB`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub accent: String,
    pub bg: String,
}

impl Palette {
    pub fn new(primary: &str, accent: &str, bg: &str) -> Self {
        Self {
            primary: primary.to_owned(),
            accent: accent.to_owned(),
            bg: bg.to_owned(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new(DEFAULT_PRIMARY, DEFAULT_ACCENT, DEFAULT_BG)
    }
}

/// Accepts `#RGB` and `#RRGGBB`. Used by the query decoder to validate
/// palette fields before accepting them.
pub fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// The full mutable mood aggregate owned by [`crate::store::MoodStore`].
///
/// `is_quiz_active` is UI-transient: it is never serialized to the query
/// string and toggling it does not count as a mood change.
#[derive(Clone, Debug, PartialEq)]
pub struct MoodState {
    pub vibe: Vibe,
    pub palette: Palette,
    pub music: Music,
    pub intensity: f32,
    pub is_quiz_active: bool,
}

impl Default for MoodState {
    fn default() -> Self {
        Self {
            vibe: Vibe::default(),
            palette: Palette::default(),
            music: Music::default(),
            intensity: DEFAULT_INTENSITY,
            is_quiz_active: false,
        }
    }
}
