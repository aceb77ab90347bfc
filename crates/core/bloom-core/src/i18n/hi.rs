use super::Key;

pub(super) fn text(key: Key) -> &'static str {
    match key {
        // Navigation
        Key::Home => "होम",
        Key::Environments => "वातावरण",
        Key::MoodCheck => "मूड चेक",
        Key::Reminders => "रिमाइंडर",
        Key::Journal => "डायरी",
        Key::Analytics => "विश्लेषण",
        Key::Confessions => "गुप्त बातें",
        Key::Login => "लॉगिन",
        Key::SignUp => "साइन अप",

        // Home page
        Key::MentalWellnessReimagined => "मानसिक कल्याण की नई शुरुआत",
        Key::WelcomeTo => "आपका स्वागत है",
        Key::MentalWellnessNewBeginning => "मानसिक कल्याण की नई शुरुआत",
        Key::ExperienceHolistic => {
            "AI-संचालित बातचीत, मूड ट्रैकिंग और व्यक्तिगत वातावरण के माध्यम से समग्र मानसिक कल्याण का अनुभव करें।"
        }
        Key::StartYourJourney => "अपनी यात्रा शुरू करें",
        Key::WatchDemo => "डेमो देखें",
        Key::YourMentalWellness => "आपका मानसिक कल्याण",
        Key::Ecosystem => "इकोसिस्टम",
        Key::OurVision => "हमारा दृष्टिकोण",
        Key::VisionQuote => {
            "एक ऐसी दुनिया बनाना जहाँ मानसिक कल्याण सुलभ, समझा जाने योग्य और मनाने योग्य हो। जहाँ हर व्यक्ति के पास भावनात्मक संतुलन की दिशा में फलने-फूलने के लिए उपकरण हों।"
        }
        Key::ReadyToBloom => "BLOOM के लिए तैयार हैं?",
        Key::JoinThousands => {
            "हजारों लोगों के साथ जुड़ें जो पहले से ही BLOOM के AI-संचालित प्लेटफॉर्म के साथ बेहतर मानसिक स्वास्थ्य की यात्रा शुरू कर चुके हैं।"
        }
        Key::GetStartedFree => "निःशुल्क शुरू करें",
        Key::SignIn => "साइन इन",
        Key::FutureOfWellness => "कल्याण का भविष्य",
        Key::FutureDesc => "मानसिक स्वास्थ्य प्रौद्योगिकी में आगे क्या आ रहा है, जानिए",

        // Core features
        Key::MindSpaces => "मन के स्थान",
        Key::MindSpacesDesc => {
            "जीवन के विभिन्न पहलुओं के लिए व्यक्तिगत वातावरण बनाएं - परिवार, काम, व्यक्तिगत विकास।"
        }
        Key::MoodGardens => "मूड गार्डन",
        Key::MoodGardensDesc => {
            "सुंदर दृश्यों और कोमल जांच के साथ अपनी भावनात्मक यात्रा को ट्रैक करें।"
        }
        Key::SacredVault => "पवित्र तिजोरी",
        Key::SacredVaultDesc => {
            "सबसे गहरे विचारों और गुमनाम स्वीकारोक्ति के लिए आपका निजी, एन्क्रिप्टेड स्थान।"
        }
        Key::WellnessCircle => "कल्याण मंडल",
        Key::WellnessCircleDesc => {
            "आपकी जरूरतों के अनुकूल AI साथी और वास्तविक सहायता नेटवर्क से जुड़ें।"
        }

        // Environments
        Key::SelectEnvironment => "वातावरण चुनें",
        Key::CreateNew => "नया बनाएं",
        Key::Family => "परिवार",
        Key::Work => "काम",
        Key::Personal => "व्यक्तिगत",
        Key::Friends => "मित्र",
        Key::TypeMessage => "अपना संदेश टाइप करें...",
        Key::Send => "भेजें",

        // Mood check
        Key::HowAreYouFeeling => "आज आप कैसा महसूस कर रहे हैं?",
        Key::SelectMood => "अपना वर्तमान मूड चुनें",
        Key::MoodStreak => "मूड स्ट्रीक",
        Key::Days => "दिन",
        Key::TrackMood => "मूड ट्रैक करें",

        // Reminders
        Key::YourReminders => "आपके रिमाइंडर",
        Key::AddReminder => "रिमाइंडर जोड़ें",
        Key::Meditation => "ध्यान",
        Key::Exercise => "व्यायाम",
        Key::Hydration => "जलयोजन",
        Key::Sleep => "नींद",
        Key::StudyBreak => "अध्ययन विराम",
    }
}
