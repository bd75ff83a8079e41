// Host-side tests for the static preset table.

use mood_core::{is_hex_color, pick_preset, Music, Vibe};

#[test]
fn pick_preset_is_total_and_self_consistent() {
    for vibe in Vibe::ALL {
        let preset = pick_preset(vibe);
        assert_eq!(preset.vibe, vibe, "preset must belong to its vibe");
    }
}

#[test]
fn pick_preset_is_pure() {
    for vibe in Vibe::ALL {
        assert_eq!(pick_preset(vibe), pick_preset(vibe));
        // Same static data every call.
        assert!(std::ptr::eq(pick_preset(vibe), pick_preset(vibe)));
    }
}

#[test]
fn preset_colors_are_valid_hex() {
    for vibe in Vibe::ALL {
        let preset = pick_preset(vibe);
        for color in [preset.primary, preset.accent, preset.bg, preset.light_tint] {
            assert!(is_hex_color(color), "{vibe}: bad color {color}");
        }
    }
}

#[test]
fn preset_light_intensities_are_within_tuning_range() {
    for vibe in Vibe::ALL {
        let preset = pick_preset(vibe);
        assert!(
            preset.light_intensity > 0.0 && preset.light_intensity <= 1.5,
            "{vibe}: light_intensity {}",
            preset.light_intensity
        );
    }
}

#[test]
fn curated_values_match_the_design() {
    assert_eq!(pick_preset(Vibe::Calm).music, Music::Nature);
    assert_eq!(pick_preset(Vibe::Calm).primary, "#A8D5BA");
    assert_eq!(pick_preset(Vibe::Chaotic).music, Music::Synthwave);
    assert_eq!(pick_preset(Vibe::Chaotic).light_intensity, 1.2);
    assert_eq!(pick_preset(Vibe::Cyber).bg, "#001122");
    assert_eq!(pick_preset(Vibe::Cozy).music, Music::Lofi);
    assert_eq!(pick_preset(Vibe::Dreamy).accent, "#9370DB");
}

#[test]
fn preset_palettes_are_distinct_per_vibe() {
    for a in Vibe::ALL {
        for b in Vibe::ALL {
            if a != b {
                assert_ne!(
                    pick_preset(a).primary,
                    pick_preset(b).primary,
                    "{a} and {b} share a primary color"
                );
            }
        }
    }
}
