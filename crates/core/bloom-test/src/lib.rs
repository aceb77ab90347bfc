//! Shared helpers for the integration tests under `tests/`.

use bloom_core::config::Config;
use bloom_core::i18n::{Language, Localizer};
use bloom_tui::AppState;

/// A fresh app with default config, English locale, and no chat backend.
pub fn app() -> AppState {
    AppState::new(Config::default(), Localizer::new(Language::En), None)
}

/// Feeds a string through the key handler one character at a time.
pub fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, crossterm::event::KeyCode::Char(c));
    }
}

pub fn press(state: &mut AppState, code: crossterm::event::KeyCode) {
    bloom_tui::update::handle_key(state, crossterm::event::KeyEvent::from(code));
}
