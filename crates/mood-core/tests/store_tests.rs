// Host-side tests for the mood store: mutators, clamping, and the observer
// interface.

use std::cell::RefCell;
use std::rc::Rc;

use mood_core::{MoodStore, Music, Palette, Vibe, DEFAULT_INTENSITY};

#[test]
fn store_starts_with_defaults() {
    let store = MoodStore::new();
    let state = store.state();
    assert_eq!(state.vibe, Vibe::Calm);
    assert_eq!(state.music, Music::Lofi);
    assert_eq!(state.intensity, DEFAULT_INTENSITY);
    assert_eq!(state.palette, Palette::default());
    assert!(!state.is_quiz_active);
}

#[test]
fn set_intensity_clamps_to_unit_interval() {
    let mut store = MoodStore::new();
    for (input, expected) in [
        (0.0, 0.0),
        (1.0, 1.0),
        (0.25, 0.25),
        (-0.5, 0.0),
        (7.3, 1.0),
        (f32::NEG_INFINITY, 0.0),
        (f32::INFINITY, 1.0),
    ] {
        store.set_intensity(input);
        assert_eq!(
            store.state().intensity,
            expected,
            "set_intensity({input}) should store {expected}"
        );
    }

    // NaN must still land inside the interval.
    store.set_intensity(f32::NAN);
    let stored = store.state().intensity;
    assert!((0.0..=1.0).contains(&stored), "NaN produced {stored}");
}

#[test]
fn set_intensity_matches_clamp_law_over_a_sweep() {
    let mut store = MoodStore::new();
    for i in -50..=50 {
        let x = i as f32 * 0.1;
        store.set_intensity(x);
        assert_eq!(store.state().intensity, x.max(0.0).min(1.0));
    }
}

#[test]
fn mood_mutators_notify_but_quiz_toggles_do_not() {
    let mut store = MoodStore::new();
    let count = Rc::new(RefCell::new(0usize));
    let count_sub = count.clone();
    store.subscribe(move |_| *count_sub.borrow_mut() += 1);

    store.set_vibe(Vibe::Cyber);
    store.set_intensity(0.9);
    store.set_palette(Palette::new("#112233", "#445566", "#778899"));
    assert_eq!(*count.borrow(), 3);

    store.open_quiz();
    store.close_quiz();
    store.from_query("vibe=Cozy");
    assert_eq!(*count.borrow(), 3, "quiz toggles and from_query are silent");
    assert_eq!(store.state().vibe, Vibe::Cozy);
}

#[test]
fn listeners_fire_in_registration_order_with_updated_state() {
    let mut store = MoodStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen_a = seen.clone();
    store.subscribe(move |state| seen_a.borrow_mut().push(("a", state.vibe)));
    let seen_b = seen.clone();
    store.subscribe(move |state| seen_b.borrow_mut().push(("b", state.vibe)));

    store.set_vibe(Vibe::Dreamy);
    assert_eq!(
        seen.borrow().as_slice(),
        &[("a", Vibe::Dreamy), ("b", Vibe::Dreamy)]
    );
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut store = MoodStore::new();
    let count = Rc::new(RefCell::new(0usize));
    let count_sub = count.clone();
    let id = store.subscribe(move |_| *count_sub.borrow_mut() += 1);

    store.set_vibe(Vibe::Cozy);
    assert_eq!(*count.borrow(), 1);

    store.unsubscribe(id);
    store.set_vibe(Vibe::Calm);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn apply_preset_sets_vibe_and_preset_palette_with_one_notification() {
    let mut store = MoodStore::new();
    let count = Rc::new(RefCell::new(0usize));
    let count_sub = count.clone();
    store.subscribe(move |_| *count_sub.borrow_mut() += 1);

    store.apply_preset(Vibe::Cyber);
    assert_eq!(*count.borrow(), 1);
    assert_eq!(store.state().vibe, Vibe::Cyber);
    let preset = mood_core::pick_preset(Vibe::Cyber);
    assert_eq!(store.state().palette.primary, preset.primary);
    assert_eq!(store.state().palette.bg, preset.bg);
}

#[test]
fn randomize_yields_a_valid_preset_state() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut store = MoodStore::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        store.randomize(&mut rng);
        let state = store.state();
        assert!(Vibe::ALL.contains(&state.vibe));
        assert!((0.0..=1.0).contains(&state.intensity));
        let preset = mood_core::pick_preset(state.vibe);
        assert_eq!(state.palette.primary, preset.primary);
    }
}

#[test]
fn set_vibe_then_to_query_keeps_prior_intensity() {
    // Concrete scenario: Calm/0.5/default -> setVibe(Cyber) -> serialized
    // output carries the vibe and the untouched intensity.
    let mut store = MoodStore::new();
    store.set_vibe(Vibe::Cyber);
    let qs = store.to_query();
    assert!(qs.contains("vibe=Cyber"), "got {qs}");
    assert!(qs.contains("intensity=0.5"), "got {qs}");
}

#[test]
fn query_round_trip_restores_mutator_reachable_state() {
    let mut store = MoodStore::new();
    store.set_vibe(Vibe::Dreamy);
    store.set_intensity(0.85);
    store.set_palette(Palette::new("#C8A2C8", "#9370DB", "#2D1B3D"));
    store.set_music(Music::Chiptune);
    let snapshot = store.state().clone();

    let mut restored = MoodStore::new();
    restored.from_query(&store.to_query());
    assert_eq!(restored.state().vibe, snapshot.vibe);
    assert_eq!(restored.state().music, snapshot.music);
    assert_eq!(restored.state().intensity, snapshot.intensity);
    assert_eq!(restored.state().palette, snapshot.palette);
}

#[test]
fn from_query_clamps_out_of_range_intensity() {
    let mut store = MoodStore::new();
    store.from_query("intensity=42");
    assert_eq!(store.state().intensity, 1.0);
    store.from_query("intensity=-3");
    assert_eq!(store.state().intensity, 0.0);
}
