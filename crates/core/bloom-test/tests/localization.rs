//! Language behavior across the whole app surface.

use bloom_core::i18n::{Key, Language, Localizer};
use bloom_test::{app, press};
use bloom_tui::Route;
use crossterm::event::KeyCode;

#[test]
fn toggling_language_relabels_every_page_title() {
    let mut state = app();

    let english: Vec<&str> = Route::NAV.iter().map(|r| r.title(&state.l10n)).collect();
    press(&mut state, KeyCode::Char('l'));
    assert_eq!(state.l10n.language(), Language::Hi);

    for (route, en_title) in Route::NAV.iter().zip(english) {
        let hi_title = route.title(&state.l10n);
        assert_ne!(hi_title, en_title, "untranslated title for {:?}", route);
    }

    press(&mut state, KeyCode::Char('l'));
    assert_eq!(state.l10n.language(), Language::En);
}

#[test]
fn language_is_session_only_state() {
    let mut state = app();
    press(&mut state, KeyCode::Char('l'));
    drop(state);

    // A new session starts from its own localizer, unaffected by the last
    let state = app();
    assert_eq!(state.l10n.language(), Language::En);
}

#[test]
fn hindi_table_covers_the_full_key_set() {
    let l10n = Localizer::new(Language::Hi);
    for &key in Key::ALL {
        let text = l10n.text(key);
        assert!(!text.is_empty(), "empty Hindi translation for {:?}", key);
    }
}

#[test]
fn dynamic_lookup_survives_unknown_keys_in_any_language() {
    for &lang in Language::ALL {
        let l10n = Localizer::new(lang);
        assert_eq!(l10n.lookup("definitelyNotAKey"), "definitelyNotAKey");
        assert_eq!(l10n.lookup(Key::Send.name()), l10n.text(Key::Send));
    }
}

#[test]
fn mood_labels_and_environment_names_follow_the_toggle() {
    use bloom_core::models::{Environment, MoodLevel};

    let mut state = app();
    let happy_en = MoodLevel::Happy.label(state.l10n.language());
    let family_en = state.l10n.text(Environment::Family.key());

    press(&mut state, KeyCode::Char('l'));
    assert_ne!(MoodLevel::Happy.label(state.l10n.language()), happy_en);
    assert_ne!(state.l10n.text(Environment::Family.key()), family_en);
}
