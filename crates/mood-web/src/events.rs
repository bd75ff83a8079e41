use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use mood_core::MoodStore;

use crate::keys::{action_for_key, stepped_intensity, vibe_for_digit, KeyAction};
use crate::{announce, dom, quiz};

/// True when the key event targets a text-entry control; shortcuts must not
/// fire while the user is typing in a color field or slider.
fn targets_form_control(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    store: &Rc<RefCell<MoodStore>>,
    session: &quiz::SharedQuiz,
    document: &web::Document,
) {
    if targets_form_control(ev) {
        return;
    }
    let key = ev.key();
    if let Some(vibe) = vibe_for_digit(&key) {
        store.borrow_mut().apply_preset(vibe);
        // Keyboard users get no visual affordance from the select, so speak it.
        announce::announce(document, &announce::mood_summary(store.borrow().state()));
        return;
    }
    match action_for_key(&key) {
        Some(KeyAction::Randomize) => {
            store.borrow_mut().randomize(&mut rand::thread_rng());
        }
        Some(KeyAction::Screenshot) => {
            // Pixel readback is handled by the capture layer; just ask for it.
            dom::dispatch_window_event("mood:screenshot");
        }
        Some(KeyAction::CycleMusic) => {
            let next = store.borrow().state().music.next();
            store.borrow_mut().set_music(next);
        }
        Some(KeyAction::IntensityUp) => {
            let current = store.borrow().state().intensity;
            store.borrow_mut().set_intensity(stepped_intensity(current, true));
            ev.prevent_default();
        }
        Some(KeyAction::IntensityDown) => {
            let current = store.borrow().state().intensity;
            store.borrow_mut().set_intensity(stepped_intensity(current, false));
            ev.prevent_default();
        }
        Some(KeyAction::OpenQuiz) => {
            if !store.borrow().state().is_quiz_active {
                quiz::open(document, store, session);
            }
        }
        Some(KeyAction::CloseQuiz) => {
            if store.borrow().state().is_quiz_active {
                quiz::cancel(document, store, session);
            }
        }
        None => {}
    }
}

pub fn wire_global_keydown(
    store: Rc<RefCell<MoodStore>>,
    session: quiz::SharedQuiz,
    document: web::Document,
) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &store, &session, &document);
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
