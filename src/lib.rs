pub mod assistant;
pub mod contact;
pub mod prefs;

// Re-export commonly used types for convenience.
pub use assistant::{select_reply, AssistantSession, ChatMessage, ReplyTopic};
pub use contact::{validate, ContactForm, ContactSubmission, FormErrors, FormField};
pub use prefs::{LanguageId, PreferenceStore, Preferences, ThemeId};
