use bloom_core::i18n::{Key, Localizer};

/// One page per route, mirroring the web client's path table.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Route {
    Home,
    Login,
    Signup,
    Environments,
    MoodCheck,
    Reminders,
    Journal,
    Confessions,
    Analytics,
    NotFound,
}

impl Route {
    /// Routes shown as navigation tabs, in display order.
    pub const NAV: &'static [Route] = &[
        Route::Home,
        Route::Environments,
        Route::MoodCheck,
        Route::Reminders,
        Route::Journal,
        Route::Analytics,
        Route::Confessions,
    ];

    /// Maps a path to its page; anything unmatched is the catch-all.
    pub fn from_path(path: &str) -> Route {
        match path {
            "/" => Route::Home,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/environments" => Route::Environments,
            "/mood-check" => Route::MoodCheck,
            "/reminders" => Route::Reminders,
            "/journal" => Route::Journal,
            "/confessions" => Route::Confessions,
            "/analytics" => Route::Analytics,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Environments => "/environments",
            Route::MoodCheck => "/mood-check",
            Route::Reminders => "/reminders",
            Route::Journal => "/journal",
            Route::Confessions => "/confessions",
            Route::Analytics => "/analytics",
            Route::NotFound => "/404",
        }
    }

    pub fn key(&self) -> Option<Key> {
        match self {
            Route::Home => Some(Key::Home),
            Route::Login => Some(Key::Login),
            Route::Signup => Some(Key::SignUp),
            Route::Environments => Some(Key::Environments),
            Route::MoodCheck => Some(Key::MoodCheck),
            Route::Reminders => Some(Key::Reminders),
            Route::Journal => Some(Key::Journal),
            Route::Confessions => Some(Key::Confessions),
            Route::Analytics => Some(Key::Analytics),
            Route::NotFound => None,
        }
    }

    pub fn title(&self, l10n: &Localizer) -> &'static str {
        match self.key() {
            Some(key) => l10n.text(key),
            None => "404",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::i18n::Language;

    #[test]
    fn known_paths_map_to_their_pages() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/mood-check"), Route::MoodCheck);
        assert_eq!(Route::from_path("/confessions"), Route::Confessions);
        for &route in Route::NAV {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn unmatched_paths_fall_through_to_not_found() {
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
        assert_eq!(Route::from_path(""), Route::NotFound);
        assert_eq!(Route::from_path("/journal/42"), Route::NotFound);
    }

    #[test]
    fn titles_follow_the_active_language() {
        let mut l10n = Localizer::new(Language::En);
        assert_eq!(Route::Journal.title(&l10n), "Journal");
        l10n.set_language(Language::Hi);
        assert_eq!(Route::Journal.title(&l10n), "डायरी");
        assert_eq!(Route::NotFound.title(&l10n), "404");
    }
}
