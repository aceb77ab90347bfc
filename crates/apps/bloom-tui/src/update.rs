//! Keyboard handling: global shortcuts, per-page keys, and text inputs.

use crate::app::{ActiveInput, AppState, JournalForm, ReminderForm};
use crate::routes::Route;
use bloom_core::models::{self, Environment, Frequency, MoodLevel, ReminderKind};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;

pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if state.input != ActiveInput::None {
        handle_input_key(state, key);
        return;
    }

    // Global shortcuts
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            return;
        }
        KeyCode::Char('l') => {
            state.l10n.toggle();
            return;
        }
        KeyCode::Char('t') => {
            state.next_theme();
            return;
        }
        KeyCode::Char(c @ '1'..='7') => {
            let index = c as usize - '1' as usize;
            state.navigate(Route::NAV[index]);
            return;
        }
        KeyCode::Char('8') => {
            state.navigate(Route::Login);
            return;
        }
        KeyCode::Char('9') => {
            state.navigate(Route::Signup);
            return;
        }
        _ => {}
    }

    match state.route {
        Route::Home => handle_home_key(state, key),
        Route::Environments => handle_environments_key(state, key),
        Route::MoodCheck => handle_mood_key(state, key),
        Route::Reminders => handle_reminders_key(state, key),
        Route::Journal => handle_journal_key(state, key),
        Route::Confessions => handle_confessions_key(state, key),
        Route::Analytics | Route::Login | Route::Signup | Route::NotFound => {}
    }
}

fn handle_home_key(state: &mut AppState, key: KeyEvent) {
    let len = state.rotator.len();
    match key.code {
        // Manual quote browsing resets the rotation countdown
        KeyCode::Right => {
            state.rotator.advance();
            state.quote_tick = 0;
        }
        KeyCode::Left => {
            state.rotator.select((state.rotator.index() + len - 1) % len);
            state.quote_tick = 0;
        }
        _ => {}
    }
}

fn handle_environments_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => {
            let len = Environment::ALL.len();
            state.env_index = (state.env_index + len - 1) % len;
            state.store.select_environment(Environment::ALL[state.env_index]);
        }
        KeyCode::Down => {
            state.env_index = (state.env_index + 1) % Environment::ALL.len();
            state.store.select_environment(Environment::ALL[state.env_index]);
        }
        KeyCode::Char('i') | KeyCode::Enter => state.input = ActiveInput::Chat,
        _ => {}
    }
}

fn handle_mood_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left => {
            let value = state.mood_selected.map(|m| m.value()).unwrap_or(4);
            state.mood_selected = MoodLevel::from_value(value.saturating_sub(1).max(1));
        }
        KeyCode::Right => {
            let value = state.mood_selected.map(|m| m.value()).unwrap_or(2);
            state.mood_selected = MoodLevel::from_value((value + 1).min(5));
        }
        KeyCode::Enter => {
            if let Some(mood) = state.mood_selected {
                if state.store.submit_mood(mood, models::today()) {
                    state.set_notification(format!(
                        "{} {}",
                        mood.emoji(),
                        mood.label(state.l10n.language())
                    ));
                } else {
                    state.set_notification("Already checked in today".to_string());
                }
            }
        }
        _ => {}
    }
}

fn handle_reminders_key(state: &mut AppState, key: KeyEvent) {
    let len = state.store.reminders.items.len();
    match key.code {
        KeyCode::Up => move_selection(&mut state.reminders_state, len, -1),
        KeyCode::Down => move_selection(&mut state.reminders_state, len, 1),
        KeyCode::Char(' ') => {
            if let Some(id) = selected_reminder_id(state) {
                state.store.toggle_reminder(id);
            }
        }
        KeyCode::Char('c') => {
            if let Some(id) = selected_reminder_id(state) {
                state.store.complete_reminder(id);
            }
        }
        KeyCode::Char('n') => {
            state.reminder_form = ReminderForm::default();
            state.input = ActiveInput::ReminderForm;
        }
        _ => {}
    }
}

fn handle_journal_key(state: &mut AppState, key: KeyEvent) {
    let len = state.store.search_journal(&state.journal_search).len();
    match key.code {
        KeyCode::Up => move_selection(&mut state.journal_state, len, -1),
        KeyCode::Down => move_selection(&mut state.journal_state, len, 1),
        KeyCode::Char('/') => state.input = ActiveInput::JournalSearch,
        KeyCode::Char('n') => {
            state.journal_form = JournalForm::default();
            state.input = ActiveInput::JournalForm;
        }
        _ => {}
    }
}

fn handle_confessions_key(state: &mut AppState, key: KeyEvent) {
    let len = state.store.confessions.items.len();
    match key.code {
        KeyCode::Up => move_selection(&mut state.confessions_state, len, -1),
        KeyCode::Down => move_selection(&mut state.confessions_state, len, 1),
        KeyCode::Char('s') => {
            if let Some(index) = state.confessions_state.selected() {
                if let Some(confession) = state.store.confessions.items.get(index) {
                    let id = confession.id;
                    state.store.support_confession(id);
                }
            }
        }
        KeyCode::Char('n') => {
            state.confession_input.clear();
            state.input = ActiveInput::ConfessionForm;
        }
        _ => {}
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        state.input = ActiveInput::None;
        return;
    }
    match state.input {
        ActiveInput::Chat => match key.code {
            KeyCode::Enter => submit_chat(state),
            KeyCode::Backspace => {
                state.chat_input.pop();
            }
            KeyCode::Char(c) => state.chat_input.push(c),
            _ => {}
        },
        ActiveInput::JournalSearch => match key.code {
            KeyCode::Enter => state.input = ActiveInput::None,
            KeyCode::Backspace => {
                state.journal_search.pop();
            }
            KeyCode::Char(c) => state.journal_search.push(c),
            _ => {}
        },
        ActiveInput::JournalForm => handle_journal_form_key(state, key),
        ActiveInput::ReminderForm => handle_reminder_form_key(state, key),
        ActiveInput::ConfessionForm => match key.code {
            KeyCode::Enter => {
                if state
                    .store
                    .add_confession(&state.confession_input, "just now".to_string())
                {
                    state.confession_input.clear();
                    state.input = ActiveInput::None;
                    state.confessions_state.select(Some(0));
                }
            }
            KeyCode::Backspace => {
                state.confession_input.pop();
            }
            KeyCode::Char(c) => state.confession_input.push(c),
            _ => {}
        },
        ActiveInput::None => {}
    }
}

fn handle_journal_form_key(state: &mut AppState, key: KeyEvent) {
    let form = &mut state.journal_form;
    match key.code {
        KeyCode::Tab => form.field = (form.field + 1) % 3,
        KeyCode::BackTab => form.field = (form.field + 2) % 3,
        KeyCode::Enter => {
            if state.store.add_journal_entry(
                &state.journal_form.title,
                &state.journal_form.content,
                &state.journal_form.tags,
                models::today(),
            ) {
                state.journal_form = JournalForm::default();
                state.input = ActiveInput::None;
                state.journal_state.select(Some(0));
            }
        }
        KeyCode::Backspace => {
            journal_form_field(form).pop();
        }
        KeyCode::Char(c) => journal_form_field(form).push(c),
        _ => {}
    }
}

fn journal_form_field(form: &mut JournalForm) -> &mut String {
    match form.field {
        0 => &mut form.title,
        1 => &mut form.content,
        _ => &mut form.tags,
    }
}

fn handle_reminder_form_key(state: &mut AppState, key: KeyEvent) {
    let form = &mut state.reminder_form;
    match key.code {
        KeyCode::Tab => form.field = (form.field + 1) % 4,
        KeyCode::BackTab => form.field = (form.field + 3) % 4,
        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            match form.field {
                0 => form.kind_index = cycle(form.kind_index, ReminderKind::ALL.len(), forward),
                3 => {
                    form.frequency_index =
                        cycle(form.frequency_index, Frequency::ALL.len(), forward)
                }
                _ => {}
            }
        }
        KeyCode::Enter => {
            let kind = ReminderKind::ALL[state.reminder_form.kind_index];
            let frequency = Frequency::ALL[state.reminder_form.frequency_index];
            if state.store.add_reminder(
                kind,
                &state.reminder_form.title,
                &state.reminder_form.time,
                frequency,
            ) {
                state.reminder_form = ReminderForm::default();
                state.input = ActiveInput::None;
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = reminder_form_field(form) {
                field.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(field) = reminder_form_field(form) {
                field.push(c);
            }
        }
        _ => {}
    }
}

fn reminder_form_field(form: &mut ReminderForm) -> Option<&mut String> {
    match form.field {
        1 => Some(&mut form.title),
        2 => Some(&mut form.time),
        _ => None,
    }
}

fn submit_chat(state: &mut AppState) {
    let text = state.chat_input.trim().to_string();
    if !state
        .store
        .send_chat_message(&text, models::now_time(), state.reply_delay_ticks)
    {
        return;
    }
    state.chat_input.clear();

    // With a backend configured the reply comes from the relay instead of
    // the local simulation.
    if let Some(relay) = &state.relay {
        state.store.chat.pending = None;
        let kind = state.store.chat.selected.chat_kind();
        let reply = relay.send_chat(&text, kind);
        let content = match reply.response_text() {
            Some(text) => text.to_string(),
            None => format!(
                "The companion is unavailable right now (status {}).",
                reply.status
            ),
        };
        state.store.push_companion_message(content, models::now_time());
    }
}

fn selected_reminder_id(state: &AppState) -> Option<u64> {
    let index = state.reminders_state.selected()?;
    state.store.reminders.items.get(index).map(|r| r.id)
}

fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

fn move_selection(list_state: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        list_state.select(None);
        return;
    }
    let next = match list_state.selected() {
        Some(current) => (current as isize + delta).rem_euclid(len as isize) as usize,
        None if delta >= 0 => 0,
        None => len - 1,
    };
    list_state.select(Some(next));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::config::Config;
    use bloom_core::i18n::{Language, Localizer};
    use bloom_core::models::Sender;

    fn state() -> AppState {
        AppState::new(Config::default(), Localizer::new(Language::En), None)
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::from(code));
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn digit_keys_navigate_and_q_quits() {
        let mut state = state();
        press(&mut state, KeyCode::Char('3'));
        assert_eq!(state.route, Route::MoodCheck);
        press(&mut state, KeyCode::Char('8'));
        assert_eq!(state.route, Route::Login);
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn language_toggle_is_global() {
        let mut state = state();
        press(&mut state, KeyCode::Char('l'));
        assert_eq!(state.l10n.language(), Language::Hi);
    }

    #[test]
    fn typing_in_chat_does_not_trigger_shortcuts() {
        let mut state = state();
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.route, Route::Environments);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.input, ActiveInput::Chat);

        // 'q' and '1' are just text while the chat input is active
        type_text(&mut state, "q1 rough day");
        assert_eq!(state.route, Route::Environments);
        assert!(!state.should_quit);
        assert_eq!(state.chat_input, "q1 rough day");

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.store.chat.messages.len(), 1);
        assert!(state.chat_input.is_empty());
        assert!(state.store.chat.pending.is_some());
    }

    #[test]
    fn environment_selection_follows_arrow_keys() {
        let mut state = state();
        state.navigate(Route::Environments);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.store.chat.selected, Environment::Work);
        press(&mut state, KeyCode::Up);
        assert_eq!(state.store.chat.selected, Environment::Family);
        press(&mut state, KeyCode::Up);
        assert_eq!(state.store.chat.selected, Environment::Friends);
    }

    #[test]
    fn mood_is_picked_with_arrows_and_submitted_once() {
        let mut state = state();
        state.navigate(Route::MoodCheck);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.mood_selected, Some(MoodLevel::Happy));

        let entries = state.store.mood.entries.len();
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.store.mood.entries.len(), entries + 1);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.store.mood.entries.len(), entries + 1);
    }

    #[test]
    fn journal_form_tabs_between_fields_and_saves() {
        let mut state = state();
        state.navigate(Route::Journal);
        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.input, ActiveInput::JournalForm);

        type_text(&mut state, "Gratitude");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "three things went well");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "gratitude");

        let before = state.store.journal.entries.len();
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.store.journal.entries.len(), before + 1);
        assert_eq!(state.input, ActiveInput::None);
        assert_eq!(state.store.journal.entries[0].title, "Gratitude");
    }

    #[test]
    fn journal_form_with_empty_content_stays_open() {
        let mut state = state();
        state.navigate(Route::Journal);
        press(&mut state, KeyCode::Char('n'));
        type_text(&mut state, "Title only");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.input, ActiveInput::JournalForm);
    }

    #[test]
    fn reminder_form_cycles_kind_and_frequency() {
        let mut state = state();
        state.navigate(Route::Reminders);
        press(&mut state, KeyCode::Char('n'));
        press(&mut state, KeyCode::Right);
        assert_eq!(state.reminder_form.kind_index, 1);
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.reminder_form.kind_index, ReminderKind::ALL.len() - 1);

        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "Wind down");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "22:00");
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.reminder_form.frequency_index, 1);

        let before = state.store.reminders.items.len();
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.store.reminders.items.len(), before + 1);
        let added = state.store.reminders.items.last().unwrap();
        assert_eq!(added.frequency, Frequency::EveryTwoHours);
    }

    #[test]
    fn reminder_toggle_and_complete_act_on_selection() {
        let mut state = state();
        state.navigate(Route::Reminders);
        press(&mut state, KeyCode::Down);
        let id = selected_reminder_id(&state).unwrap();
        let enabled = state
            .store
            .reminders
            .items
            .iter()
            .find(|r| r.id == id)
            .unwrap()
            .enabled;

        press(&mut state, KeyCode::Char(' '));
        let reminder = state.store.reminders.items.iter().find(|r| r.id == id).unwrap();
        assert_eq!(reminder.enabled, !enabled);

        press(&mut state, KeyCode::Char('c'));
        let reminder = state.store.reminders.items.iter().find(|r| r.id == id).unwrap();
        assert!(reminder.completed_today);
    }

    #[test]
    fn confession_posting_and_support() {
        let mut state = state();
        state.navigate(Route::Confessions);
        press(&mut state, KeyCode::Char('n'));
        type_text(&mut state, "I need a break");
        let before = state.store.confessions.items.len();
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.store.confessions.items.len(), before + 1);

        // New confession is selected; support it twice
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.store.confessions.items[0].support_count, 2);
    }

    #[test]
    fn escape_closes_inputs_without_saving() {
        let mut state = state();
        state.navigate(Route::Confessions);
        press(&mut state, KeyCode::Char('n'));
        type_text(&mut state, "never mind");
        let before = state.store.confessions.items.len();
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.input, ActiveInput::None);
        assert_eq!(state.store.confessions.items.len(), before);
    }

    #[test]
    fn simulated_reply_lands_after_submit_and_ticks() {
        let mut state = state();
        state.navigate(Route::Environments);
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, "rough day at work");
        press(&mut state, KeyCode::Enter);

        for _ in 0..=state.reply_delay_ticks {
            state.on_tick();
        }
        let last = state.store.chat.messages.last().unwrap();
        assert_eq!(last.sender, Sender::Companion);
    }
}
