#![cfg(target_arch = "wasm32")]
//! WASM glue for the mood-room configurator.
//!
//! Owns the composition root: constructs the [`MoodStore`], seeds it from the
//! URL, and wires the toolbar, quiz, and keyboard shortcuts to it. The 3D
//! room rendering reads the CSS custom properties and the `mood:changed`
//! broadcast; it is not part of this crate.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use mood_core::{query, Answer, MoodState, MoodStore, Vibe};

mod announce;
mod dom;
mod events;
mod keys;
mod quiz;
mod url;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mood-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let store = Rc::new(RefCell::new(MoodStore::new()));
    let session: quiz::SharedQuiz = Rc::new(RefCell::new(None));

    // Deep link: reconstruct shared state before anything renders.
    let initial_query = url::current_query(&window);
    if !initial_query.is_empty() {
        store.borrow_mut().from_query(&initial_query);
        log::info!("[url] restored state from query");
    }

    // Every mood change: push to CSS, mirror the URL, and broadcast for
    // external listeners (analytics, capture layer).
    {
        let document_sub = document.clone();
        let window_sub = window.clone();
        store.borrow_mut().subscribe(move |state| {
            apply_state_to_dom(&document_sub, state);
            url::replace_query(&window_sub, &query::encode(state));
            dom::dispatch_window_event("mood:changed");
        });
    }
    apply_state_to_dom(&document, store.borrow().state());

    wire_toolbar(&window, &document, &store, &session);
    wire_quiz_panel(&document, &store, &session);
    events::wire_global_keydown(store.clone(), session.clone(), document.clone());

    Ok(())
}

/// Reflect the store into the page: CSS custom properties for the room
/// styling/render layer, plus the toolbar's own controls.
fn apply_state_to_dom(document: &web::Document, state: &MoodState) {
    dom::set_css_variable(document, "--mood-primary", &state.palette.primary);
    dom::set_css_variable(document, "--mood-accent", &state.palette.accent);
    dom::set_css_variable(document, "--mood-bg", &state.palette.bg);
    dom::set_css_variable(document, "--mood-intensity", &format!("{}", state.intensity));
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-vibe", state.vibe.as_str());
    }
    dom::set_text_content(document, "current-vibe", state.vibe.as_str());
    set_input_value(document, "intensity-slider", &format!("{}", state.intensity));
    set_input_value(document, "color-primary", &state.palette.primary);
    set_input_value(document, "color-accent", &state.palette.accent);
    set_input_value(document, "color-bg", &state.palette.bg);
    set_select_value(document, "vibe-select", state.vibe.as_str());
}

fn set_input_value(document: &web::Document, element_id: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value(value);
        }
    }
}

fn set_select_value(document: &web::Document, element_id: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
            select.set_value(value);
        }
    }
}

fn wire_toolbar(
    window: &web::Window,
    document: &web::Document,
    store: &Rc<RefCell<MoodStore>>,
    session: &quiz::SharedQuiz,
) {
    // Vibe select: unknown tokens silently fall back to the default vibe.
    {
        let store_select = store.clone();
        dom::add_select_listener(document, "vibe-select", move |value| {
            let vibe: Vibe = value.parse().unwrap_or_default();
            store_select.borrow_mut().apply_preset(vibe);
        });
    }

    {
        let store_slider = store.clone();
        dom::add_input_listener(document, "intensity-slider", move |value| {
            if let Ok(intensity) = value.parse::<f32>() {
                store_slider.borrow_mut().set_intensity(intensity);
            }
        });
    }

    for (element_id, channel) in [
        ("color-primary", PaletteChannel::Primary),
        ("color-accent", PaletteChannel::Accent),
        ("color-bg", PaletteChannel::Bg),
    ] {
        let store_color = store.clone();
        dom::add_input_listener(document, element_id, move |value| {
            let mut palette = store_color.borrow().state().palette.clone();
            match channel {
                PaletteChannel::Primary => palette.primary = value,
                PaletteChannel::Accent => palette.accent = value,
                PaletteChannel::Bg => palette.bg = value,
            }
            store_color.borrow_mut().set_palette(palette);
        });
    }

    {
        let store_random = store.clone();
        dom::add_click_listener(document, "randomize-button", move || {
            store_random.borrow_mut().randomize(&mut rand::thread_rng());
        });
    }

    {
        let store_share = store.clone();
        let window_share = window.clone();
        let document_share = document.clone();
        dom::add_click_listener(document, "share-button", move || {
            let link = url::share_url(&window_share, &store_share.borrow().to_query());
            let _ = window_share.navigator().clipboard().write_text(&link);
            announce::announce(&document_share, "Link copied to clipboard!");
            log::info!("[share] {link}");
        });
    }

    {
        let document_motion = document.clone();
        dom::add_click_listener(document, "reduced-motion-toggle", move || {
            if let Some(root) = document_motion.document_element() {
                let _ = root.class_list().toggle("reduced-motion");
            }
            dom::dispatch_window_event("reduced-motion-changed");
        });
    }

    {
        let store_quiz = store.clone();
        let session_quiz = session.clone();
        let document_quiz = document.clone();
        dom::add_click_listener(document, "quiz-button", move || {
            quiz::open(&document_quiz, &store_quiz, &session_quiz);
        });
    }
}

#[derive(Clone, Copy)]
enum PaletteChannel {
    Primary,
    Accent,
    Bg,
}

fn wire_quiz_panel(
    document: &web::Document,
    store: &Rc<RefCell<MoodStore>>,
    session: &quiz::SharedQuiz,
) {
    {
        let store_close = store.clone();
        let session_close = session.clone();
        let document_close = document.clone();
        dom::add_click_listener(document, "quiz-close", move || {
            quiz::cancel(&document_close, &store_close, &session_close);
        });
    }

    // Scale questions answer through one shared slider (0..=100).
    {
        let store_scale = store.clone();
        let session_scale = session.clone();
        let document_scale = document.clone();
        dom::add_change_listener(document, "quiz-slider", move |value| {
            if let Ok(scale) = value.parse::<f32>() {
                quiz::submit_answer(
                    &document_scale,
                    &store_scale,
                    &session_scale,
                    Answer::Scale(scale),
                );
            }
        });
    }

    for token in ["calm", "chaotic", "dreamy", "cyber", "cozy"] {
        let store_choice = store.clone();
        let session_choice = session.clone();
        let document_choice = document.clone();
        dom::add_click_listener(document, &format!("quiz-choice-{token}"), move || {
            if let Some(answer) = quiz::choice_answer(&session_choice, token) {
                quiz::submit_answer(&document_choice, &store_choice, &session_choice, answer);
            }
        });
    }
}
