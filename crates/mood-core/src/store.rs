//! Single source of truth for mood state.
//!
//! The store is explicitly constructed and passed by reference from the
//! application's composition root; there is no process-wide global. External
//! code reads via [`MoodStore::state`] or a subscription and mutates only
//! through the methods here. All mutators run to completion synchronously, so
//! a listener always observes the fully updated state.

use rand::prelude::*;
use smallvec::SmallVec;

use crate::mood::{MoodState, Music, Palette, Vibe};
use crate::presets::pick_preset;
use crate::query;

/// Handle returned by [`MoodStore::subscribe`]; pass it back to
/// [`MoodStore::unsubscribe`] to deregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&MoodState)>;

#[derive(Default)]
pub struct MoodStore {
    state: MoodState,
    listeners: SmallVec<[(ListenerId, Listener); 2]>,
    next_listener_id: u64,
}

impl MoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MoodState {
        &self.state
    }

    /// Register a mood-change listener. Listeners fire synchronously, in
    /// registration order, after `set_vibe`/`set_intensity`/`set_palette`
    /// (and their composites) but not after quiz toggles or `from_query`.
    pub fn subscribe(&mut self, listener: impl FnMut(&MoodState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    pub fn set_vibe(&mut self, vibe: Vibe) {
        self.state.vibe = vibe;
        log::info!("[mood] vibe -> {vibe}");
        self.notify();
    }

    /// Stored intensity is always within [0, 1]: +inf clamps to 1, -inf to 0,
    /// NaN lands on 0.
    pub fn set_intensity(&mut self, intensity: f32) {
        self.state.intensity = intensity.max(0.0).min(1.0);
        self.notify();
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.state.palette = palette;
        self.notify();
    }

    pub fn set_music(&mut self, music: Music) {
        self.state.music = music;
        self.notify();
    }

    /// Vibe plus its preset palette in one update with a single notification
    /// at the end (the toolbar's vibe-change path). Music is left alone so a
    /// manual music choice survives vibe switching.
    pub fn apply_preset(&mut self, vibe: Vibe) {
        let preset = pick_preset(vibe);
        self.state.vibe = vibe;
        self.state.palette = Palette::new(preset.primary, preset.accent, preset.bg);
        log::info!("[mood] preset -> {vibe}");
        self.notify();
    }

    /// Random vibe preset and random intensity (toolbar "Randomize").
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let vibe = *Vibe::ALL.choose(rng).unwrap_or(&Vibe::Calm);
        let preset = pick_preset(vibe);
        self.state.vibe = vibe;
        self.state.palette = Palette::new(preset.primary, preset.accent, preset.bg);
        self.state.intensity = rng.gen::<f32>();
        log::info!("[mood] randomize -> {vibe}");
        self.notify();
    }

    // Quiz visibility is UI-transient state: no notification.
    pub fn open_quiz(&mut self) {
        self.state.is_quiz_active = true;
    }

    pub fn close_quiz(&mut self) {
        self.state.is_quiz_active = false;
    }

    /// Replace vibe/music/intensity/palette from a query string in one atomic
    /// update. Missing or invalid fields fall back per-field to the defaults;
    /// out-of-range intensity is clamped, not defaulted. Does not notify.
    pub fn from_query(&mut self, query_string: &str) {
        let decoded = query::decode(query_string);
        self.state.vibe = decoded.vibe;
        self.state.music = decoded.music;
        self.state.intensity = decoded.intensity.max(0.0).min(1.0);
        self.state.palette = decoded.palette;
    }

    /// Serialize vibe, music, intensity, and all three palette channels.
    /// Inverse of [`MoodStore::from_query`] for mutator-reachable states.
    pub fn to_query(&self) -> String {
        query::encode(&self.state)
    }
}
