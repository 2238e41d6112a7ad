//! Keyword routing from a visitor utterance to a canned reply.

use super::replies::ReplyTopic;

/// Ordered trigger table. The first group containing any matching keyword
/// wins, so earlier entries shadow later ones for mixed-topic messages.
const TRIGGER_GROUPS: &[(&[&str], ReplyTopic)] = &[
    (&["resume", "cv"], ReplyTopic::Resume),
    (&["blog", "article", "writing"], ReplyTopic::Writing),
    (&["theme", "switch", "color"], ReplyTopic::Themes),
    (&["game", "play", "entertainment"], ReplyTopic::Game),
    (&["skills", "technology"], ReplyTopic::Skills),
    (&["project", "work"], ReplyTopic::Projects),
    (&["experience", "internship"], ReplyTopic::Experience),
    (&["education", "study"], ReplyTopic::Education),
    (&["contact", "reach"], ReplyTopic::Contact),
    (&["achievement", "award"], ReplyTopic::Achievements),
    (&["whatsapp", "telegram", "social"], ReplyTopic::Social),
];

/// Resolves the reply topic for a raw utterance. Matching is case-insensitive
/// substring containment; unmatched input falls through to the generic topic.
pub fn classify(message: &str) -> ReplyTopic {
    let lower = message.to_ascii_lowercase();
    TRIGGER_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|needle| lower.contains(needle)))
        .map(|&(_, topic)| topic)
        .unwrap_or(ReplyTopic::General)
}

/// Maps an utterance straight to its canned reply text.
pub fn select_reply(message: &str) -> &'static str {
    classify(message).reply_text()
}
