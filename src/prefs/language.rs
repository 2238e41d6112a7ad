//! Interface language preference and the static copy table behind `t(key)`.

use serde::{Deserialize, Serialize};

/// Interface language identifier persisted across visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageId {
    #[default]
    En,
    Hi,
}

impl LanguageId {
    pub fn slug(self) -> &'static str {
        match self {
            LanguageId::En => "en",
            LanguageId::Hi => "hi",
        }
    }

    pub fn from_slug(slug: &str) -> Option<LanguageId> {
        match slug {
            "en" => Some(LanguageId::En),
            "hi" => Some(LanguageId::Hi),
            _ => None,
        }
    }

    pub fn toggle(self) -> LanguageId {
        match self {
            LanguageId::En => LanguageId::Hi,
            LanguageId::Hi => LanguageId::En,
        }
    }

    /// Looks up interface copy for a dotted key (e.g. `roles.devops`) in this
    /// language. Unknown keys fall back to the key itself so missing copy
    /// never blanks out the UI.
    pub fn translate<'a>(self, key: &'a str) -> &'a str {
        let table = match self {
            LanguageId::En => EN,
            LanguageId::Hi => HI,
        };
        table
            .iter()
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, copy)| *copy)
            .unwrap_or(key)
    }
}

const EN: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("contact", "Contact"),
    ("roles.devops", "AI DevOps + Cloud Engineer"),
    ("roles.genai", "Generative AIops Engineer"),
    ("roles.fullstack", "Fullstack Engineer"),
    ("contactMe", "Contact Me"),
    ("viewResume", "View Resume"),
    ("aboutTitle", "About Me"),
    (
        "aboutDescription",
        "Passionate AI DevOps Engineer with expertise in Cloud technologies, Generative AI, and Full-stack development.",
    ),
    ("education", "BCA Final Year - Jagannath University"),
    ("internship", "Intern @LinuxWorld"),
    ("traits", "Enthusiastic, Passionate, Smartworker"),
    ("devopsTab", "DevOps"),
    ("genaiTab", "GenAIops"),
    ("fullstackTab", "Fullstack"),
    ("cloudTab", "Cloud"),
    ("seeAllProjects", "See All Projects"),
    ("githubLink", "GitHub"),
    ("liveDemo", "Live Demo"),
    ("getInTouch", "Get In Touch"),
    ("sendMessage", "Send Message"),
    ("aiAssistant", "AI Assistant"),
    ("askMaan", "Ask Maan anything about Manjeet!"),
];

const HI: &[(&str, &str)] = &[
    ("home", "होम"),
    ("about", "के बारे में"),
    ("skills", "कौशल"),
    ("projects", "प्रोजेक्ट्स"),
    ("experience", "अनुभव"),
    ("contact", "संपर्क"),
    ("roles.devops", "AI DevOps + क्लाउड इंजीनियर"),
    ("roles.genai", "जेनेरेटिव AIops इंजीनियर"),
    ("roles.fullstack", "फुलस्टैक इंजीनियर"),
    ("contactMe", "संपर्क करें"),
    ("viewResume", "रिज्यूमे देखें"),
    ("aboutTitle", "मेरे बारे में"),
    (
        "aboutDescription",
        "क्लाउड टेक्नोलॉजी, जेनेरेटिव AI, और फुल-स्टैक डेवलपमेंट में विशेषज्ञता रखने वाला उत्साही AI DevOps इंजीनियर।",
    ),
    ("education", "BCA अंतिम वर्ष - जगन्नाथ विश्वविद्यालय"),
    ("internship", "इंटर्न @LinuxWorld"),
    ("traits", "उत्साही, जुनूनी, स्मार्टवर्कर"),
    ("devopsTab", "DevOps"),
    ("genaiTab", "GenAIops"),
    ("fullstackTab", "Fullstack"),
    ("cloudTab", "Cloud"),
    ("seeAllProjects", "सभी प्रोजेक्ट्स देखें"),
    ("githubLink", "GitHub"),
    ("liveDemo", "लाइव डेमो"),
    ("getInTouch", "संपर्क में रहें"),
    ("sendMessage", "संदेश भेजें"),
    ("aiAssistant", "AI सहायक"),
    ("askMaan", "मंजीत के बारे में मान से कुछ भी पूछें!"),
];
