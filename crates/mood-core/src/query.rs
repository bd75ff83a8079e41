//! Query-string codec for shareable mood configurations.
//!
//! Encoding always emits all six keys (`vibe`, `music`, `intensity`,
//! `primary`, `accent`, `bg`). Decoding is table-driven with one validator
//! per field; a missing or invalid field falls back to its default in
//! isolation, never the whole state at once. No URL crate is used anywhere in
//! this workspace, so the tiny percent codec lives here.

use crate::constants::DEFAULT_INTENSITY;
use crate::mood::{is_hex_color, MoodState, Music, Palette, Vibe};

/// Decoded shareable fields, each already validated or defaulted.
/// `intensity` is the raw parsed value; the store clamps it on apply so that
/// extreme-but-directional input keeps its direction.
#[derive(Clone, Debug, PartialEq)]
pub struct MoodQuery {
    pub vibe: Vibe,
    pub music: Music,
    pub intensity: f32,
    pub palette: Palette,
}

impl Default for MoodQuery {
    fn default() -> Self {
        Self {
            vibe: Vibe::default(),
            music: Music::default(),
            intensity: DEFAULT_INTENSITY,
            palette: Palette::default(),
        }
    }
}

pub fn encode(state: &MoodState) -> String {
    let pairs = [
        ("vibe", state.vibe.as_str().to_owned()),
        ("music", state.music.as_str().to_owned()),
        ("intensity", format_intensity(state.intensity)),
        ("primary", state.palette.primary.clone()),
        ("accent", state.palette.accent.clone()),
        ("bg", state.palette.bg.clone()),
    ];
    let mut out = String::new();
    for (key, value) in &pairs {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(key);
        out.push('=');
        percent_encode_into(&mut out, value);
    }
    out
}

pub fn decode(query_string: &str) -> MoodQuery {
    let mut decoded = MoodQuery::default();
    // Last occurrence of a duplicate key wins, matching URLSearchParams-style
    // sequential assignment.
    for (key, value) in pairs(query_string) {
        match key.as_str() {
            "vibe" => {
                if let Ok(vibe) = value.parse() {
                    decoded.vibe = vibe;
                }
            }
            "music" => {
                if let Ok(music) = value.parse() {
                    decoded.music = music;
                }
            }
            "intensity" => {
                if let Some(intensity) = parse_intensity(&value) {
                    decoded.intensity = intensity;
                }
            }
            "primary" => {
                if is_hex_color(&value) {
                    decoded.palette.primary = value;
                }
            }
            "accent" => {
                if is_hex_color(&value) {
                    decoded.palette.accent = value;
                }
            }
            "bg" => {
                if is_hex_color(&value) {
                    decoded.palette.bg = value;
                }
            }
            _ => {}
        }
    }
    decoded
}

/// Unparseable or non-finite values are invalid (the caller keeps the
/// default); finite out-of-range values are accepted and clamped on apply.
fn parse_intensity(raw: &str) -> Option<f32> {
    raw.parse::<f32>().ok().filter(|x| x.is_finite())
}

fn format_intensity(intensity: f32) -> String {
    // Shortest-round-trip float formatting keeps encode/decode stable.
    format!("{intensity}")
}

fn pairs(query_string: &str) -> impl Iterator<Item = (String, String)> + '_ {
    query_string
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            (percent_decode(key), percent_decode(value))
        })
}

// ---------------- Percent codec ----------------

/// RFC 3986 unreserved characters pass through; everything else is `%XX`.
fn percent_encode_into(out: &mut String, value: &str) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0xF) as usize] as char);
            }
        }
    }
}

/// Decodes `%XX` escapes and `+` as space. Malformed escapes are kept
/// verbatim rather than rejected; field validators catch the garbage.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push(((hi << 4) | lo) as u8);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
