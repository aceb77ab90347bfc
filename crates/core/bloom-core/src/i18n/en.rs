use super::Key;

pub(super) fn text(key: Key) -> &'static str {
    match key {
        // Navigation
        Key::Home => "Home",
        Key::Environments => "Environments",
        Key::MoodCheck => "Mood Check",
        Key::Reminders => "Reminders",
        Key::Journal => "Journal",
        Key::Analytics => "Analytics",
        Key::Confessions => "Confessions",
        Key::Login => "Login",
        Key::SignUp => "Sign Up",

        // Home page
        Key::MentalWellnessReimagined => "Mental Wellness Reimagined",
        Key::WelcomeTo => "Welcome to",
        Key::MentalWellnessNewBeginning => "A new beginning of mental wellness",
        Key::ExperienceHolistic => {
            "Experience holistic mental wellness through AI-powered conversations, \
             mood tracking, and personalized environments designed for your unique journey."
        }
        Key::StartYourJourney => "Start Your Journey",
        Key::WatchDemo => "Watch Demo",
        Key::YourMentalWellness => "Your Mental Wellness",
        Key::Ecosystem => "Ecosystem",
        Key::OurVision => "Our Vision",
        Key::VisionQuote => {
            "To create a world where mental wellness is accessible, understood, and \
             celebrated. Where every individual has the tools and support to flourish \
             in their unique journey towards emotional balance and psychological growth."
        }
        Key::ReadyToBloom => "Ready to BLOOM?",
        Key::JoinThousands => {
            "Join thousands who have already started their journey towards better \
             mental health and emotional wellness with BLOOM's AI-powered platform."
        }
        Key::GetStartedFree => "Get Started Free",
        Key::SignIn => "Sign In",
        Key::FutureOfWellness => "Future of Wellness",
        Key::FutureDesc => "Discover what's coming next in mental health technology",

        // Core features
        Key::MindSpaces => "Mind Spaces",
        Key::MindSpacesDesc => {
            "Create personalized environments for different aspects of your life - \
             family, work, personal growth."
        }
        Key::MoodGardens => "Mood Gardens",
        Key::MoodGardensDesc => {
            "Track your emotional journey with beautiful visualizations and gentle check-ins."
        }
        Key::SacredVault => "Sacred Vault",
        Key::SacredVaultDesc => {
            "Your private, encrypted space for deepest thoughts and anonymous confessions."
        }
        Key::WellnessCircle => "Wellness Circle",
        Key::WellnessCircleDesc => {
            "Connect with AI companions and real support networks tailored to your needs."
        }

        // Environments
        Key::SelectEnvironment => "Select Environment",
        Key::CreateNew => "Create New",
        Key::Family => "Family",
        Key::Work => "Work",
        Key::Personal => "Personal",
        Key::Friends => "Friends",
        Key::TypeMessage => "Type your message...",
        Key::Send => "Send",

        // Mood check
        Key::HowAreYouFeeling => "How are you feeling today?",
        Key::SelectMood => "Select your current mood",
        Key::MoodStreak => "Mood Streak",
        Key::Days => "days",
        Key::TrackMood => "Track Mood",

        // Reminders
        Key::YourReminders => "Your Reminders",
        Key::AddReminder => "Add Reminder",
        Key::Meditation => "Meditation",
        Key::Exercise => "Exercise",
        Key::Hydration => "Hydration",
        Key::Sleep => "Sleep",
        Key::StudyBreak => "Study Break",
    }
}
