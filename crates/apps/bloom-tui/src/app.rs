use crate::routes::Route;
use crate::theme::{Theme, THEMES};
use bloom_core::config::Config;
use bloom_core::i18n::Localizer;
use bloom_core::models::{self, MoodLevel};
use bloom_core::quotes::QuoteRotator;
use bloom_core::relay::RelayClient;
use bloom_core::store::SessionStore;
use ratatui::widgets::ListState;

/// Which widget is capturing raw keystrokes, if any. While an input is
/// active, global shortcuts are suspended so typing never changes pages.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ActiveInput {
    None,
    Chat,
    JournalSearch,
    JournalForm,
    ReminderForm,
    ConfessionForm,
}

#[derive(Clone, Debug, Default)]
pub struct JournalForm {
    pub title: String,
    pub content: String,
    pub tags: String,
    /// 0 = title, 1 = content, 2 = tags
    pub field: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ReminderForm {
    pub kind_index: usize,
    pub title: String,
    pub time: String,
    pub frequency_index: usize,
    /// 0 = kind, 1 = title, 2 = time, 3 = frequency
    pub field: usize,
}

pub struct AppState {
    pub route: Route,
    pub l10n: Localizer,
    pub store: SessionStore,
    pub theme: Theme,
    pub theme_index: usize,
    pub config: Config,

    // Landing-page quote rotation
    pub rotator: QuoteRotator,
    pub quote_tick: u32,
    pub ticks_per_quote: u32,

    // Chat
    pub reply_delay_ticks: u32,
    pub relay: Option<RelayClient>,
    pub chat_input: String,
    pub env_index: usize,

    // Forms and search
    pub input: ActiveInput,
    pub journal_search: String,
    pub journal_form: JournalForm,
    pub reminder_form: ReminderForm,
    pub confession_input: String,
    pub mood_selected: Option<MoodLevel>,

    // List selections
    pub journal_state: ListState,
    pub reminders_state: ListState,
    pub confessions_state: ListState,

    // Feedback
    pub notification: Option<(String, std::time::Instant)>,

    pub should_quit: bool,
}

impl AppState {
    /// Tick cadence of the event loop. Quote rotation and simulated chat
    /// latency are both expressed in these ticks.
    pub const TICK_MS: u64 = 100;

    pub fn new(config: Config, l10n: Localizer, relay: Option<RelayClient>) -> Self {
        let theme_index = config.theme_index.min(THEMES.len() - 1);
        let ticks_per_quote = (config.quote_interval_secs * 1000 / Self::TICK_MS).max(1) as u32;
        let reply_delay_ticks = (config.reply_delay_ms / Self::TICK_MS) as u32;
        Self {
            route: Route::Home,
            l10n,
            store: SessionStore::new(),
            theme: THEMES[theme_index].clone(),
            theme_index,
            config,
            rotator: QuoteRotator::new(),
            quote_tick: 0,
            ticks_per_quote,
            reply_delay_ticks,
            relay,
            chat_input: String::new(),
            env_index: 0,
            input: ActiveInput::None,
            journal_search: String::new(),
            journal_form: JournalForm::default(),
            reminder_form: ReminderForm::default(),
            confession_input: String::new(),
            mood_selected: None,
            journal_state: ListState::default(),
            reminders_state: ListState::default(),
            confessions_state: ListState::default(),
            notification: None,
            should_quit: false,
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        self.input = ActiveInput::None;
    }

    pub fn next_theme(&mut self) {
        self.theme_index = (self.theme_index + 1) % THEMES.len();
        self.theme = THEMES[self.theme_index].clone();
        self.config.theme_index = self.theme_index;
    }

    pub fn set_notification(&mut self, msg: String) {
        self.notification = Some((msg, std::time::Instant::now()));
    }

    pub fn clear_expired_notifications(&mut self) {
        if let Some((_, time)) = self.notification {
            if time.elapsed() > std::time::Duration::from_secs(3) {
                self.notification = None;
            }
        }
    }

    /// Advances everything driven by wall-clock time: quote rotation,
    /// the simulated companion reply, notification expiry.
    pub fn on_tick(&mut self) {
        self.clear_expired_notifications();

        self.quote_tick += 1;
        if self.quote_tick >= self.ticks_per_quote {
            self.quote_tick = 0;
            self.rotator.advance();
        }

        if self.store.chat.pending.is_some() {
            self.store.tick_chat(models::now_time());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::i18n::Language;
    use bloom_core::models::Sender;

    fn state() -> AppState {
        AppState::new(Config::default(), Localizer::new(Language::En), None)
    }

    #[test]
    fn quote_advances_once_per_interval() {
        let mut state = state();
        let start = state.rotator.index();
        for _ in 0..state.ticks_per_quote {
            state.on_tick();
        }
        assert_ne!(state.rotator.index(), start);
    }

    #[test]
    fn simulated_reply_arrives_after_the_configured_delay() {
        let mut state = state();
        state
            .store
            .send_chat_message("hello", "09:00:00".to_string(), state.reply_delay_ticks);
        for _ in 0..=state.reply_delay_ticks {
            state.on_tick();
        }
        let last = state.store.chat.messages.last().unwrap();
        assert_eq!(last.sender, Sender::Companion);
    }

    #[test]
    fn out_of_range_theme_index_is_clamped() {
        let config = Config {
            theme_index: 99,
            ..Config::default()
        };
        let state = AppState::new(config, Localizer::default(), None);
        assert_eq!(state.theme_index, THEMES.len() - 1);
    }

    #[test]
    fn navigation_closes_any_active_input() {
        let mut state = state();
        state.input = ActiveInput::Chat;
        state.navigate(Route::Journal);
        assert_eq!(state.route, Route::Journal);
        assert_eq!(state.input, ActiveInput::None);
    }
}
