use crate::i18n::{Key, Language};

/// Today's date as the entry-facing `YYYY-MM-DD` string.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Wall-clock time for chat message stamps.
pub fn now_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum MoodLevel {
    VerySad,
    Sad,
    Neutral,
    Happy,
    VeryHappy,
}

impl MoodLevel {
    pub const ALL: &'static [MoodLevel] = &[
        MoodLevel::VerySad,
        MoodLevel::Sad,
        MoodLevel::Neutral,
        MoodLevel::Happy,
        MoodLevel::VeryHappy,
    ];

    pub fn value(&self) -> u8 {
        match self {
            MoodLevel::VerySad => 1,
            MoodLevel::Sad => 2,
            MoodLevel::Neutral => 3,
            MoodLevel::Happy => 4,
            MoodLevel::VeryHappy => 5,
        }
    }

    pub fn from_value(value: u8) -> Option<MoodLevel> {
        MoodLevel::ALL.iter().find(|m| m.value() == value).copied()
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodLevel::VerySad => "😔",
            MoodLevel::Sad => "😕",
            MoodLevel::Neutral => "😐",
            MoodLevel::Happy => "😊",
            MoodLevel::VeryHappy => "😄",
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (MoodLevel::VerySad, Language::En) => "Very Sad",
            (MoodLevel::VerySad, Language::Hi) => "बहुत दुखी",
            (MoodLevel::Sad, Language::En) => "Sad",
            (MoodLevel::Sad, Language::Hi) => "उदास",
            (MoodLevel::Neutral, Language::En) => "Neutral",
            (MoodLevel::Neutral, Language::Hi) => "सामान्य",
            (MoodLevel::Happy, Language::En) => "Happy",
            (MoodLevel::Happy, Language::Hi) => "खुश",
            (MoodLevel::VeryHappy, Language::En) => "Very Happy",
            (MoodLevel::VeryHappy, Language::Hi) => "बहुत खुश",
        }
    }

    /// Positive moods extend the streak.
    pub fn is_positive(&self) -> bool {
        self.value() >= 4
    }
}

#[derive(Clone, Debug)]
pub struct MoodEntry {
    pub date: String,
    pub mood: MoodLevel,
}

#[derive(Clone, Debug)]
pub struct JournalEntry {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub date: String,
    pub word_count: usize,
    pub tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReminderKind {
    Meditation,
    Exercise,
    Hydration,
    Sleep,
    StudyBreak,
}

impl ReminderKind {
    pub const ALL: &'static [ReminderKind] = &[
        ReminderKind::Meditation,
        ReminderKind::Exercise,
        ReminderKind::Hydration,
        ReminderKind::Sleep,
        ReminderKind::StudyBreak,
    ];

    pub fn key(&self) -> Key {
        match self {
            ReminderKind::Meditation => Key::Meditation,
            ReminderKind::Exercise => Key::Exercise,
            ReminderKind::Hydration => Key::Hydration,
            ReminderKind::Sleep => Key::Sleep,
            ReminderKind::StudyBreak => Key::StudyBreak,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ReminderKind::Meditation => "󰚀",
            ReminderKind::Exercise => "󰺱",
            ReminderKind::Hydration => "󰖌",
            ReminderKind::Sleep => "󰤄",
            ReminderKind::StudyBreak => "󰂺",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Frequency {
    #[default]
    Daily,
    EveryTwoHours,
    Weekly,
}

impl Frequency {
    pub const ALL: &'static [Frequency] = &[
        Frequency::Daily,
        Frequency::EveryTwoHours,
        Frequency::Weekly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::EveryTwoHours => "every-2-hours",
            Frequency::Weekly => "weekly",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Reminder {
    pub id: u64,
    pub kind: ReminderKind,
    pub title: String,
    pub time: String,
    pub frequency: Frequency,
    pub enabled: bool,
    pub completed_today: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    Community,
    Companion,
}

#[derive(Clone, Debug)]
pub struct ConfessionResponse {
    pub kind: ResponseKind,
    pub content: String,
    pub author: Option<String>,
    pub support_count: u32,
}

#[derive(Clone, Debug)]
pub struct Confession {
    pub id: u64,
    pub content: String,
    pub timestamp: String,
    pub responses: Vec<ConfessionResponse>,
    pub support_count: u32,
    pub tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Companion,
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: u64,
    pub content: String,
    pub sender: Sender,
    pub timestamp: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Family,
    Work,
    Personal,
    Friends,
}

impl Environment {
    pub const ALL: &'static [Environment] = &[
        Environment::Family,
        Environment::Work,
        Environment::Personal,
        Environment::Friends,
    ];

    pub fn key(&self) -> Key {
        match self {
            Environment::Family => Key::Family,
            Environment::Work => Key::Work,
            Environment::Personal => Key::Personal,
            Environment::Friends => Key::Friends,
        }
    }

    /// English name used inside the canned companion reply.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Family => "family",
            Environment::Work => "work",
            Environment::Personal => "personal",
            Environment::Friends => "friends",
        }
    }

    /// Conversation-type tag forwarded to the backend for this space.
    pub fn chat_kind(&self) -> crate::relay::ChatKind {
        match self {
            Environment::Work => crate::relay::ChatKind::Advisor,
            Environment::Personal => crate::relay::ChatKind::StudyBuddy,
            Environment::Family | Environment::Friends => crate::relay::ChatKind::General,
        }
    }
}

// Analytics dashboard datasets (presentational mock data).

#[derive(Clone, Debug)]
pub struct MoodTrendPoint {
    pub day: &'static str,
    pub mood: u64,
    pub stress: u64,
    pub sleep: u64,
}

#[derive(Clone, Debug)]
pub struct ReminderStat {
    pub category: &'static str,
    pub completed: u64,
    pub total: u64,
    pub rate: &'static str,
}

#[derive(Clone, Debug)]
pub struct StreakStat {
    pub activity: &'static str,
    pub current: u32,
    pub longest: u32,
    pub target: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
}

#[derive(Clone, Debug)]
pub struct PatternInsight {
    pub title: &'static str,
    pub description: &'static str,
    pub confidence: &'static str,
    pub trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_values_round_trip() {
        for &mood in MoodLevel::ALL {
            assert_eq!(MoodLevel::from_value(mood.value()), Some(mood));
        }
        assert_eq!(MoodLevel::from_value(0), None);
        assert_eq!(MoodLevel::from_value(6), None);
    }

    #[test]
    fn only_high_moods_are_positive() {
        assert!(!MoodLevel::Neutral.is_positive());
        assert!(MoodLevel::Happy.is_positive());
        assert!(MoodLevel::VeryHappy.is_positive());
    }

    #[test]
    fn mood_labels_exist_in_both_languages() {
        for &mood in MoodLevel::ALL {
            assert!(!mood.label(Language::En).is_empty());
            assert!(!mood.label(Language::Hi).is_empty());
        }
    }
}
