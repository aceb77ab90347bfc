//! End-to-end session walkthrough: a user visits every page and touches
//! every feature, all through the key handler.

use bloom_test::{app, press, type_text};
use bloom_tui::Route;
use crossterm::event::KeyCode;

#[test]
fn full_wellness_session() {
    let mut state = app();

    // Land on home, flip through a couple of quotes
    assert_eq!(state.route, Route::Home);
    let quote = state.rotator.index();
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Left);
    assert_ne!(state.rotator.index(), quote);

    // Daily mood check-in
    press(&mut state, KeyCode::Char('3'));
    assert_eq!(state.route, Route::MoodCheck);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Right);
    let moods = state.store.mood.entries.len();
    let streak = state.store.mood.streak;
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.store.mood.entries.len(), moods + 1);
    assert_eq!(state.store.mood.streak, streak + 1);

    // Write a journal entry
    press(&mut state, KeyCode::Char('5'));
    press(&mut state, KeyCode::Char('n'));
    type_text(&mut state, "Deep breath");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "took five minutes to just breathe");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "calm, self-care");
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.store.journal.entries[0].title, "Deep breath");
    assert_eq!(state.store.journal.entries[0].word_count, 6);

    // Tick off a reminder
    press(&mut state, KeyCode::Char('4'));
    press(&mut state, KeyCode::Down);
    let (done_before, _) = state.store.reminder_progress();
    press(&mut state, KeyCode::Char('c'));
    let (done_after, _) = state.store.reminder_progress();
    assert_eq!(done_after, done_before + 1);

    // Share a confession and support it
    press(&mut state, KeyCode::Char('7'));
    press(&mut state, KeyCode::Char('n'));
    type_text(&mut state, "today was heavier than it looked");
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char('s'));
    assert_eq!(state.store.confessions.items[0].support_count, 1);

    // Chat with the companion in the work space
    press(&mut state, KeyCode::Char('2'));
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);
    type_text(&mut state, "my manager piled on again");
    press(&mut state, KeyCode::Enter);
    for _ in 0..=state.reply_delay_ticks {
        state.on_tick();
    }
    let reply = state.store.chat.messages.last().unwrap();
    assert!(reply.content.contains("work"));

    press(&mut state, KeyCode::Esc);
    press(&mut state, KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn journal_search_narrows_the_entry_list() {
    let mut state = app();
    state.navigate(Route::Journal);

    press(&mut state, KeyCode::Char('/'));
    type_text(&mut state, "midterm");
    press(&mut state, KeyCode::Enter);

    let hits = state.store.search_journal(&state.journal_search);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Midterm Stress");
}

#[test]
fn unknown_start_route_shows_not_found() {
    let mut state = app();
    state.navigate(Route::from_path("/secret-garden"));
    assert_eq!(state.route, Route::NotFound);

    // Navigation still works from the catch-all page
    press(&mut state, KeyCode::Char('1'));
    assert_eq!(state.route, Route::Home);
}

#[test]
fn second_mood_checkin_is_ignored_for_the_day() {
    let mut state = app();
    state.navigate(Route::MoodCheck);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Enter);
    let entries = state.store.mood.entries.len();

    press(&mut state, KeyCode::Left);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.store.mood.entries.len(), entries);
}
