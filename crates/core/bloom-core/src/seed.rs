//! Fixed sample data the session store is seeded with on startup.
//!
//! There is no backend: these records exist only to populate the views and
//! are discarded when the process exits.

use crate::models::{
    Confession, ConfessionResponse, Frequency, JournalEntry, MoodEntry, MoodLevel, MoodTrendPoint,
    PatternInsight, Reminder, ReminderKind, ReminderStat, ResponseKind, StreakStat, Trend,
};

pub fn mood_entries() -> Vec<MoodEntry> {
    [
        ("2024-01-01", MoodLevel::Happy),
        ("2024-01-02", MoodLevel::VeryHappy),
        ("2024-01-03", MoodLevel::Neutral),
        ("2024-01-04", MoodLevel::Happy),
        ("2024-01-05", MoodLevel::VeryHappy),
    ]
    .into_iter()
    .map(|(date, mood)| MoodEntry {
        date: date.to_string(),
        mood,
    })
    .collect()
}

pub const INITIAL_MOOD_STREAK: u32 = 7;

pub fn journal_entries() -> Vec<JournalEntry> {
    vec![
        JournalEntry {
            id: 1,
            title: "First Day of College".to_string(),
            content: "Today marks the beginning of a new chapter in my life. Walking through \
                      the campus gates felt surreal..."
                .to_string(),
            date: "2024-01-02".to_string(),
            word_count: 156,
            tags: vec![
                "college".to_string(),
                "new-beginnings".to_string(),
                "excitement".to_string(),
            ],
        },
        JournalEntry {
            id: 2,
            title: "Midterm Stress".to_string(),
            content: "The pressure is real. Three midterms next week and I feel like I'm \
                      drowning in textbooks and lectures..."
                .to_string(),
            date: "2024-01-02".to_string(),
            word_count: 134,
            tags: vec![
                "stress".to_string(),
                "midterms".to_string(),
                "study".to_string(),
            ],
        },
        JournalEntry {
            id: 3,
            title: "Weekend Reflections".to_string(),
            content: "Finally, a moment to breathe. This weekend has been exactly what I \
                      needed - no deadlines, no..."
                .to_string(),
            date: "2024-02-12".to_string(),
            word_count: 142,
            tags: vec![
                "reflection".to_string(),
                "family".to_string(),
                "self-care".to_string(),
            ],
        },
        JournalEntry {
            id: 4,
            title: "Draft - Thoughts on Friendship".to_string(),
            content: "Making friends in college is different than I expected. It's not like \
                      high school where you're..."
                .to_string(),
            date: "2024-03-12".to_string(),
            word_count: 78,
            tags: vec![
                "friendship".to_string(),
                "college-life".to_string(),
                "relationships".to_string(),
            ],
        },
    ]
}

pub fn reminders() -> Vec<Reminder> {
    vec![
        Reminder {
            id: 1,
            kind: ReminderKind::Meditation,
            title: "Morning Meditation".to_string(),
            time: "08:00".to_string(),
            frequency: Frequency::Daily,
            enabled: true,
            completed_today: false,
        },
        Reminder {
            id: 2,
            kind: ReminderKind::Hydration,
            title: "Drink Water".to_string(),
            time: "10:00".to_string(),
            frequency: Frequency::EveryTwoHours,
            enabled: true,
            completed_today: true,
        },
        Reminder {
            id: 3,
            kind: ReminderKind::Exercise,
            title: "Evening Workout".to_string(),
            time: "18:00".to_string(),
            frequency: Frequency::Daily,
            enabled: false,
            completed_today: false,
        },
    ]
}

pub fn confessions() -> Vec<Confession> {
    vec![
        Confession {
            id: 1,
            content: "I've been struggling with imposter syndrome in my computer science \
                      program. Every time I'm in class or..."
                .to_string(),
            timestamp: "2 hours ago".to_string(),
            responses: vec![ConfessionResponse {
                kind: ResponseKind::Community,
                content: "What you're experiencing is incredibly common among high-achieving \
                          students, especially in competitive fields like computer science..."
                    .to_string(),
                author: Some("Community Support".to_string()),
                support_count: 15,
            }],
            support_count: 25,
            tags: vec![
                "academic".to_string(),
                "stress".to_string(),
                "support".to_string(),
            ],
        },
        Confession {
            id: 2,
            content: "I've been having panic attacks during exams, and it's affecting my \
                      performance. I know the material, but..."
                .to_string(),
            timestamp: "6 hours ago".to_string(),
            responses: vec![ConfessionResponse {
                kind: ResponseKind::Community,
                content: "Test anxiety is a real and treatable condition that affects many \
                          capable students. The fact that you know the material but struggle \
                          during exams is actually very common..."
                    .to_string(),
                author: Some("Community Support".to_string()),
                support_count: 19,
            }],
            support_count: 34,
            tags: vec![
                "anxiety".to_string(),
                "exams".to_string(),
                "mental-health".to_string(),
            ],
        },
        Confession {
            id: 3,
            content: "I'm struggling with my identity and sense of belonging in my new \
                      college environment. Everything feels..."
                .to_string(),
            timestamp: "12 hours ago".to_string(),
            responses: vec![ConfessionResponse {
                kind: ResponseKind::Companion,
                content: "Your feelings are completely valid and more common than you might \
                          think. Starting college is a major life transition..."
                    .to_string(),
                author: None,
                support_count: 15,
            }],
            support_count: 28,
            tags: vec![
                "identity".to_string(),
                "belonging".to_string(),
                "college".to_string(),
            ],
        },
        Confession {
            id: 4,
            content: "Today I realized that I've been so focused on grades and achievements \
                      that I've forgotten what actually makes..."
                .to_string(),
            timestamp: "1 day ago".to_string(),
            responses: vec![ConfessionResponse {
                kind: ResponseKind::Community,
                content: "This realization, while difficult, is actually a gift. Many people \
                          go through their entire lives without questioning whether they're \
                          living authentically..."
                    .to_string(),
                author: Some("Community Support".to_string()),
                support_count: 34,
            }],
            support_count: 42,
            tags: vec![
                "self-discovery".to_string(),
                "authenticity".to_string(),
                "growth".to_string(),
            ],
        },
    ]
}

// Analytics dashboard mock datasets.

pub const MOOD_TREND: &[MoodTrendPoint] = &[
    MoodTrendPoint { day: "Mon", mood: 4, stress: 3, sleep: 5 },
    MoodTrendPoint { day: "Tue", mood: 3, stress: 4, sleep: 4 },
    MoodTrendPoint { day: "Wed", mood: 5, stress: 2, sleep: 5 },
    MoodTrendPoint { day: "Thu", mood: 4, stress: 3, sleep: 4 },
    MoodTrendPoint { day: "Fri", mood: 5, stress: 2, sleep: 3 },
    MoodTrendPoint { day: "Sat", mood: 4, stress: 1, sleep: 5 },
    MoodTrendPoint { day: "Sun", mood: 3, stress: 2, sleep: 4 },
];

pub const REMINDER_STATS: &[ReminderStat] = &[
    ReminderStat { category: "Mood Tracking", completed: 52, total: 814, rate: "86% avg" },
    ReminderStat { category: "Meditation", completed: 38, total: 614, rate: "72% avg" },
    ReminderStat { category: "Exercise", completed: 25, total: 414, rate: "65% avg" },
    ReminderStat { category: "Journaling", completed: 22, total: 347, rate: "58% avg" },
];

pub const STREAKS: &[StreakStat] = &[
    StreakStat { activity: "Mood Tracking", current: 12, longest: 30, target: 30 },
    StreakStat { activity: "Meditation", current: 7, longest: 15, target: 21 },
    StreakStat { activity: "Exercise", current: 5, longest: 12, target: 14 },
    StreakStat { activity: "Journaling", current: 3, longest: 8, target: 10 },
];

pub const PATTERN_INSIGHTS: &[PatternInsight] = &[
    PatternInsight {
        title: "Sleep & Mood Connection",
        description: "Your mood improves by 23% on days you get 7+ hours of sleep",
        confidence: "87%",
        trend: Trend::Positive,
    },
    PatternInsight {
        title: "Exercise Boosts Energy",
        description: "Energy levels are 34% higher on days with exercise",
        confidence: "92%",
        trend: Trend::Positive,
    },
    PatternInsight {
        title: "Social Interaction Boost",
        description: "Mood increases by 19% on days with social activities",
        confidence: "76%",
        trend: Trend::Positive,
    },
    PatternInsight {
        title: "Weekend Mood Pattern",
        description: "Mood consistently dips on Sunday evenings by 15%",
        confidence: "84%",
        trend: Trend::Negative,
    },
];
