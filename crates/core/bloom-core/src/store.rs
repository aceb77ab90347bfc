//! In-memory session state behind every page.
//!
//! Single-threaded by design: every mutation happens synchronously inside a
//! UI event handler, so readers always observe the latest write. Nothing here
//! survives the process.

use crate::models::{
    ChatMessage, Confession, Environment, Frequency, JournalEntry, MoodEntry, MoodLevel, Reminder,
    ReminderKind, Sender,
};
use crate::seed;

#[derive(Debug, Default)]
pub struct MoodState {
    pub entries: Vec<MoodEntry>,
    pub streak: u32,
    pub today_submitted: bool,
}

#[derive(Debug, Default)]
pub struct JournalState {
    pub entries: Vec<JournalEntry>,
}

#[derive(Debug, Default)]
pub struct ReminderState {
    pub items: Vec<Reminder>,
}

#[derive(Debug, Default)]
pub struct ConfessionState {
    pub items: Vec<Confession>,
}

/// A companion reply scheduled to appear after a short simulated delay.
#[derive(Debug)]
pub struct PendingReply {
    pub environment: Environment,
    pub ticks_left: u32,
}

#[derive(Debug, Default)]
pub struct ChatState {
    pub selected: Environment,
    pub messages: Vec<ChatMessage>,
    pub pending: Option<PendingReply>,
}

pub struct SessionStore {
    next_id: u64,
    pub mood: MoodState,
    pub journal: JournalState,
    pub reminders: ReminderState,
    pub confessions: ConfessionState,
    pub chat: ChatState,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// A store seeded with the fixed sample data.
    pub fn new() -> Self {
        Self {
            next_id: 100,
            mood: MoodState {
                entries: seed::mood_entries(),
                streak: seed::INITIAL_MOOD_STREAK,
                today_submitted: false,
            },
            journal: JournalState {
                entries: seed::journal_entries(),
            },
            reminders: ReminderState {
                items: seed::reminders(),
            },
            confessions: ConfessionState {
                items: seed::confessions(),
            },
            chat: ChatState::default(),
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // --- Mood ---

    /// Records today's mood. Returns `false` once the daily check-in is done.
    pub fn submit_mood(&mut self, mood: MoodLevel, date: String) -> bool {
        if self.mood.today_submitted {
            return false;
        }
        self.mood.entries.push(MoodEntry { date, mood });
        self.mood.today_submitted = true;
        if mood.is_positive() {
            self.mood.streak += 1;
        }
        true
    }

    pub fn average_mood(&self) -> f32 {
        if self.mood.entries.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.mood.entries.iter().map(|e| e.mood.value() as u32).sum();
        sum as f32 / self.mood.entries.len() as f32
    }

    /// The most recent `n` check-ins, newest first.
    pub fn recent_moods(&self, n: usize) -> Vec<&MoodEntry> {
        self.mood.entries.iter().rev().take(n).collect()
    }

    // --- Journal ---

    /// Prepends a new entry. Blank title or content is silently rejected.
    pub fn add_journal_entry(
        &mut self,
        title: &str,
        content: &str,
        tags: &str,
        date: String,
    ) -> bool {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return false;
        }
        let entry = JournalEntry {
            id: self.next_id(),
            title: title.to_string(),
            content: content.to_string(),
            date,
            word_count: content.split_whitespace().count(),
            tags: tags
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        };
        self.journal.entries.insert(0, entry);
        true
    }

    /// Case-insensitive filter over title, content, and tags.
    pub fn search_journal(&self, query: &str) -> Vec<&JournalEntry> {
        let query = query.to_lowercase();
        self.journal
            .entries
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&query)
                    || e.content.to_lowercase().contains(&query)
                    || e.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// (total entries, average word count) for the stats cards.
    pub fn journal_word_stats(&self) -> (usize, usize) {
        let total = self.journal.entries.len();
        if total == 0 {
            return (0, 0);
        }
        let words: usize = self.journal.entries.iter().map(|e| e.word_count).sum();
        (total, (words as f64 / total as f64).round() as usize)
    }

    // --- Reminders ---

    /// Appends a new reminder. Blank title or time is silently rejected.
    pub fn add_reminder(
        &mut self,
        kind: ReminderKind,
        title: &str,
        time: &str,
        frequency: Frequency,
    ) -> bool {
        let title = title.trim();
        let time = time.trim();
        if title.is_empty() || time.is_empty() {
            return false;
        }
        let id = self.next_id();
        self.reminders.items.push(Reminder {
            id,
            kind,
            title: title.to_string(),
            time: time.to_string(),
            frequency,
            enabled: true,
            completed_today: false,
        });
        true
    }

    pub fn toggle_reminder(&mut self, id: u64) -> bool {
        match self.reminders.items.iter_mut().find(|r| r.id == id) {
            Some(reminder) => {
                reminder.enabled = !reminder.enabled;
                true
            }
            None => false,
        }
    }

    pub fn complete_reminder(&mut self, id: u64) -> bool {
        match self.reminders.items.iter_mut().find(|r| r.id == id) {
            Some(reminder) => {
                reminder.completed_today = !reminder.completed_today;
                true
            }
            None => false,
        }
    }

    /// (completed today, active) over enabled reminders.
    pub fn reminder_progress(&self) -> (usize, usize) {
        let active = self.reminders.items.iter().filter(|r| r.enabled).count();
        let done = self
            .reminders
            .items
            .iter()
            .filter(|r| r.enabled && r.completed_today)
            .count();
        (done, active)
    }

    // --- Confessions ---

    /// Prepends a new confession. Blank content is silently rejected.
    pub fn add_confession(&mut self, content: &str, timestamp: String) -> bool {
        let content = content.trim();
        if content.is_empty() {
            return false;
        }
        let id = self.next_id();
        self.confessions.items.insert(
            0,
            Confession {
                id,
                content: content.to_string(),
                timestamp,
                responses: Vec::new(),
                support_count: 0,
                tags: Vec::new(),
            },
        );
        true
    }

    pub fn support_confession(&mut self, id: u64) -> bool {
        match self.confessions.items.iter_mut().find(|c| c.id == id) {
            Some(confession) => {
                confession.support_count += 1;
                true
            }
            None => false,
        }
    }

    // --- Chat ---

    pub fn select_environment(&mut self, environment: Environment) {
        self.chat.selected = environment;
    }

    /// Pushes a user message and schedules the simulated companion reply
    /// `delay_ticks` event ticks later. Blank input is silently rejected.
    pub fn send_chat_message(&mut self, content: &str, timestamp: String, delay_ticks: u32) -> bool {
        let content = content.trim();
        if content.is_empty() {
            return false;
        }
        let id = self.next_id();
        self.chat.messages.push(ChatMessage {
            id,
            content: content.to_string(),
            sender: Sender::User,
            timestamp,
        });
        self.chat.pending = Some(PendingReply {
            environment: self.chat.selected,
            ticks_left: delay_ticks,
        });
        true
    }

    /// Advances the simulated-latency countdown. Returns `true` on the tick
    /// that delivers the companion reply.
    pub fn tick_chat(&mut self, timestamp: String) -> bool {
        let Some(pending) = self.chat.pending.as_mut() else {
            return false;
        };
        if pending.ticks_left > 0 {
            pending.ticks_left -= 1;
            return false;
        }
        let environment = pending.environment;
        self.chat.pending = None;
        let reply = companion_reply(environment);
        self.push_companion_message(reply, timestamp);
        true
    }

    /// Used by the relay path, where the reply text comes from the backend.
    pub fn push_companion_message(&mut self, content: String, timestamp: String) {
        let id = self.next_id();
        self.chat.messages.push(ChatMessage {
            id,
            content,
            sender: Sender::Companion,
            timestamp,
        });
    }
}

/// The canned supportive reply used when no backend is configured.
pub fn companion_reply(environment: Environment) -> String {
    format!(
        "I understand you're sharing something about your {} environment. I'm here to \
         listen and support you. How can I help you process these feelings?",
        environment.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> String {
        "2024-06-01".to_string()
    }

    #[test]
    fn mood_submission_appends_and_extends_streak() {
        let mut store = SessionStore::new();
        let before = store.mood.entries.len();
        let streak = store.mood.streak;

        assert!(store.submit_mood(MoodLevel::Happy, date()));
        assert_eq!(store.mood.entries.len(), before + 1);
        assert_eq!(store.mood.streak, streak + 1);

        // Second check-in of the day is a no-op
        assert!(!store.submit_mood(MoodLevel::Sad, date()));
        assert_eq!(store.mood.entries.len(), before + 1);
    }

    #[test]
    fn negative_mood_does_not_extend_streak() {
        let mut store = SessionStore::new();
        let streak = store.mood.streak;
        assert!(store.submit_mood(MoodLevel::Sad, date()));
        assert_eq!(store.mood.streak, streak);
    }

    #[test]
    fn empty_journal_entry_is_rejected() {
        let mut store = SessionStore::new();
        let before = store.journal.entries.len();
        assert!(!store.add_journal_entry("", "some content", "", date()));
        assert!(!store.add_journal_entry("a title", "   ", "", date()));
        assert_eq!(store.journal.entries.len(), before);
    }

    #[test]
    fn journal_entry_is_prepended_with_word_count() {
        let mut store = SessionStore::new();
        let before = store.journal.entries.len();
        assert!(store.add_journal_entry(
            "Gratitude",
            "three things went well today",
            "gratitude, reflection",
            date()
        ));
        assert_eq!(store.journal.entries.len(), before + 1);
        let entry = &store.journal.entries[0];
        assert_eq!(entry.title, "Gratitude");
        assert_eq!(entry.word_count, 5);
        assert_eq!(entry.tags, vec!["gratitude", "reflection"]);
    }

    #[test]
    fn journal_search_matches_tags_case_insensitively() {
        let store = SessionStore::new();
        let hits = store.search_journal("MIDTERM");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|e| {
            e.title.to_lowercase().contains("midterm")
                || e.content.to_lowercase().contains("midterm")
                || e.tags.iter().any(|t| t.contains("midterm"))
        }));
    }

    #[test]
    fn empty_reminder_is_rejected() {
        let mut store = SessionStore::new();
        let before = store.reminders.items.len();
        assert!(!store.add_reminder(ReminderKind::Sleep, "", "22:00", Frequency::Daily));
        assert!(!store.add_reminder(ReminderKind::Sleep, "Wind down", " ", Frequency::Daily));
        assert_eq!(store.reminders.items.len(), before);
    }

    #[test]
    fn reminder_toggle_and_progress() {
        let mut store = SessionStore::new();
        assert!(store.add_reminder(
            ReminderKind::StudyBreak,
            "Stretch",
            "15:00",
            Frequency::Daily
        ));
        let id = store.reminders.items.last().unwrap().id;

        let (_, active_before) = store.reminder_progress();
        assert!(store.toggle_reminder(id));
        let (_, active_after) = store.reminder_progress();
        assert_eq!(active_after, active_before - 1);

        assert!(store.toggle_reminder(id));
        assert!(store.complete_reminder(id));
        let (done, _) = store.reminder_progress();
        assert!(done >= 1);

        assert!(!store.toggle_reminder(999_999));
    }

    #[test]
    fn empty_confession_is_rejected() {
        let mut store = SessionStore::new();
        let before = store.confessions.items.len();
        assert!(!store.add_confession("   ", "just now".to_string()));
        assert_eq!(store.confessions.items.len(), before);
    }

    #[test]
    fn confession_is_prepended_and_supportable() {
        let mut store = SessionStore::new();
        let before = store.confessions.items.len();
        assert!(store.add_confession("I need a break", "just now".to_string()));
        assert_eq!(store.confessions.items.len(), before + 1);

        let id = store.confessions.items[0].id;
        assert!(store.support_confession(id));
        assert_eq!(store.confessions.items[0].support_count, 1);
    }

    #[test]
    fn chat_rejects_empty_and_delivers_after_delay() {
        let mut store = SessionStore::new();
        assert!(!store.send_chat_message("  ", "10:00:00".to_string(), 3));
        assert!(store.chat.messages.is_empty());

        store.select_environment(Environment::Work);
        assert!(store.send_chat_message("rough day", "10:00:01".to_string(), 3));
        assert_eq!(store.chat.messages.len(), 1);

        // Three countdown ticks, then the delivery tick
        for _ in 0..3 {
            assert!(!store.tick_chat("10:00:02".to_string()));
        }
        assert!(store.tick_chat("10:00:02".to_string()));
        assert_eq!(store.chat.messages.len(), 2);

        let reply = store.chat.messages.last().unwrap();
        assert_eq!(reply.sender, Sender::Companion);
        assert!(reply.content.contains("work"));

        // No pending reply left
        assert!(!store.tick_chat("10:00:03".to_string()));
    }
}
