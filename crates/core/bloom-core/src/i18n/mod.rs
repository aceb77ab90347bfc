//! Display-language selection and string lookup.
//!
//! Every user-facing string in the app resolves through a [`Localizer`].
//! The store is an owned value handed to whoever renders text, never a
//! process-wide global, so tests can construct isolated instances.

pub mod en;
pub mod hi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub const ALL: &'static [Language] = &[Language::En, Language::Hi];

    /// Derives the startup language from `LANG`, defaulting to English.
    pub fn from_env() -> Self {
        match std::env::var("LANG").unwrap_or_default().as_str() {
            s if s.starts_with("hi") => Language::Hi,
            _ => Language::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

/// Every translation key in the app. Adding a variant forces both language
/// tables to cover it, so a missing translation cannot compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    // Navigation
    Home,
    Environments,
    MoodCheck,
    Reminders,
    Journal,
    Analytics,
    Confessions,
    Login,
    SignUp,

    // Home page
    MentalWellnessReimagined,
    WelcomeTo,
    MentalWellnessNewBeginning,
    ExperienceHolistic,
    StartYourJourney,
    WatchDemo,
    YourMentalWellness,
    Ecosystem,
    OurVision,
    VisionQuote,
    ReadyToBloom,
    JoinThousands,
    GetStartedFree,
    SignIn,
    FutureOfWellness,
    FutureDesc,

    // Core features
    MindSpaces,
    MindSpacesDesc,
    MoodGardens,
    MoodGardensDesc,
    SacredVault,
    SacredVaultDesc,
    WellnessCircle,
    WellnessCircleDesc,

    // Environments
    SelectEnvironment,
    CreateNew,
    Family,
    Work,
    Personal,
    Friends,
    TypeMessage,
    Send,

    // Mood check
    HowAreYouFeeling,
    SelectMood,
    MoodStreak,
    Days,
    TrackMood,

    // Reminders
    YourReminders,
    AddReminder,
    Meditation,
    Exercise,
    Hydration,
    Sleep,
    StudyBreak,
}

impl Key {
    pub const ALL: &'static [Key] = &[
        Key::Home,
        Key::Environments,
        Key::MoodCheck,
        Key::Reminders,
        Key::Journal,
        Key::Analytics,
        Key::Confessions,
        Key::Login,
        Key::SignUp,
        Key::MentalWellnessReimagined,
        Key::WelcomeTo,
        Key::MentalWellnessNewBeginning,
        Key::ExperienceHolistic,
        Key::StartYourJourney,
        Key::WatchDemo,
        Key::YourMentalWellness,
        Key::Ecosystem,
        Key::OurVision,
        Key::VisionQuote,
        Key::ReadyToBloom,
        Key::JoinThousands,
        Key::GetStartedFree,
        Key::SignIn,
        Key::FutureOfWellness,
        Key::FutureDesc,
        Key::MindSpaces,
        Key::MindSpacesDesc,
        Key::MoodGardens,
        Key::MoodGardensDesc,
        Key::SacredVault,
        Key::SacredVaultDesc,
        Key::WellnessCircle,
        Key::WellnessCircleDesc,
        Key::SelectEnvironment,
        Key::CreateNew,
        Key::Family,
        Key::Work,
        Key::Personal,
        Key::Friends,
        Key::TypeMessage,
        Key::Send,
        Key::HowAreYouFeeling,
        Key::SelectMood,
        Key::MoodStreak,
        Key::Days,
        Key::TrackMood,
        Key::YourReminders,
        Key::AddReminder,
        Key::Meditation,
        Key::Exercise,
        Key::Hydration,
        Key::Sleep,
        Key::StudyBreak,
    ];

    /// The original camelCase key string, kept for dynamic lookups.
    pub fn name(&self) -> &'static str {
        match self {
            Key::Home => "home",
            Key::Environments => "environments",
            Key::MoodCheck => "moodCheck",
            Key::Reminders => "reminders",
            Key::Journal => "journal",
            Key::Analytics => "analytics",
            Key::Confessions => "confessions",
            Key::Login => "login",
            Key::SignUp => "signUp",
            Key::MentalWellnessReimagined => "mentalWellnessReimagined",
            Key::WelcomeTo => "welcomeTo",
            Key::MentalWellnessNewBeginning => "mentalWellnessNewBeginning",
            Key::ExperienceHolistic => "experienceHolistic",
            Key::StartYourJourney => "startYourJourney",
            Key::WatchDemo => "watchDemo",
            Key::YourMentalWellness => "yourMentalWellness",
            Key::Ecosystem => "ecosystem",
            Key::OurVision => "ourVision",
            Key::VisionQuote => "visionQuote",
            Key::ReadyToBloom => "readyToBloom",
            Key::JoinThousands => "joinThousands",
            Key::GetStartedFree => "getStartedFree",
            Key::SignIn => "signIn",
            Key::FutureOfWellness => "futureOfWellness",
            Key::FutureDesc => "futureDesc",
            Key::MindSpaces => "mindSpaces",
            Key::MindSpacesDesc => "mindSpacesDesc",
            Key::MoodGardens => "moodGardens",
            Key::MoodGardensDesc => "moodGardensDesc",
            Key::SacredVault => "sacredVault",
            Key::SacredVaultDesc => "sacredVaultDesc",
            Key::WellnessCircle => "wellnessCircle",
            Key::WellnessCircleDesc => "wellnessCircleDesc",
            Key::SelectEnvironment => "selectEnvironment",
            Key::CreateNew => "createNew",
            Key::Family => "family",
            Key::Work => "work",
            Key::Personal => "personal",
            Key::Friends => "friends",
            Key::TypeMessage => "typeMessage",
            Key::Send => "send",
            Key::HowAreYouFeeling => "howAreYouFeeling",
            Key::SelectMood => "selectMood",
            Key::MoodStreak => "moodStreak",
            Key::Days => "days",
            Key::TrackMood => "trackMood",
            Key::YourReminders => "yourReminders",
            Key::AddReminder => "addReminder",
            Key::Meditation => "meditation",
            Key::Exercise => "exercise",
            Key::Hydration => "hydration",
            Key::Sleep => "sleep",
            Key::StudyBreak => "studyBreak",
        }
    }

    pub fn from_name(name: &str) -> Option<Key> {
        Key::ALL.iter().find(|k| k.name() == name).copied()
    }
}

/// Holds the active language and resolves keys to display strings.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle(&mut self) {
        self.language = match self.language {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        };
    }

    /// Typed lookup. Cannot miss: both tables cover every `Key`.
    pub fn text(&self, key: Key) -> &'static str {
        match self.language {
            Language::En => en::text(key),
            Language::Hi => hi::text(key),
        }
    }

    /// Dynamic lookup for key strings arriving from data. Unknown keys fall
    /// back to the raw key string, but the miss is logged so untranslated
    /// strings do not slip by unnoticed.
    pub fn lookup(&self, name: &str) -> String {
        match Key::from_name(name) {
            Some(key) => self.text(key).to_string(),
            None => {
                log::warn!("missing translation key: {}", name);
                name.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_language_round_trips() {
        let mut l10n = Localizer::default();
        for &lang in Language::ALL {
            l10n.set_language(lang);
            assert_eq!(l10n.language(), lang);
        }
    }

    #[test]
    fn toggle_flips_between_languages() {
        let mut l10n = Localizer::new(Language::En);
        l10n.toggle();
        assert_eq!(l10n.language(), Language::Hi);
        l10n.toggle();
        assert_eq!(l10n.language(), Language::En);
    }

    #[test]
    fn every_key_resolves_in_every_language() {
        let mut l10n = Localizer::default();
        for &lang in Language::ALL {
            l10n.set_language(lang);
            for &key in Key::ALL {
                assert!(
                    !l10n.text(key).is_empty(),
                    "empty translation for {:?} in {:?}",
                    key,
                    lang
                );
            }
        }
    }

    #[test]
    fn unknown_key_falls_back_to_raw_name() {
        let mut l10n = Localizer::default();
        for &lang in Language::ALL {
            l10n.set_language(lang);
            assert_eq!(l10n.lookup("noSuchKey"), "noSuchKey");
        }
    }

    #[test]
    fn known_name_resolves_through_dynamic_path() {
        let l10n = Localizer::new(Language::En);
        assert_eq!(l10n.lookup("home"), "Home");
        let l10n = Localizer::new(Language::Hi);
        assert_eq!(l10n.lookup("home"), "होम");
    }

    #[test]
    fn key_names_round_trip() {
        for &key in Key::ALL {
            assert_eq!(Key::from_name(key.name()), Some(key));
        }
    }
}
