use web_sys as web;

// Screen-reader announcements go through a single polite live region that the
// page provides; writing its text content is enough to trigger an
// announcement.

const LIVE_REGION_ID: &str = "aria-live-region";

pub fn announce(document: &web::Document, message: &str) {
    match document.get_element_by_id(LIVE_REGION_ID) {
        Some(el) => el.set_text_content(Some(message)),
        None => log::warn!("[a11y] missing #{LIVE_REGION_ID}; dropped: {message}"),
    }
}

/// Human-readable summary for the current mood, announced on change.
pub fn mood_summary(state: &mood_core::MoodState) -> String {
    format!(
        "Mood set to {} at intensity {:.0}%",
        state.vibe,
        state.intensity * 100.0
    )
}
