//! Deterministic replies used when the generative path is unavailable.
//!
//! Every external-service failure is absorbed here, so the conversation
//! always progresses: welcome on the first turn, a canned follow-up when
//! the last message carries a recognizable signal, a generic apology
//! otherwise.

use lexicon::{find_era, find_genre, find_popularity, normalize, phrases};

use crate::conversation::Conversation;

/// Reply deterministically based on the conversation so far. `conversation`
/// already includes the just-appended user turn.
pub fn fallback_reply(conversation: &Conversation) -> String {
    // First user turn: greet and explain what the bot can do.
    if conversation.len() <= 1 {
        return phrases::WELCOME.to_string();
    }

    let Some(last_user) = conversation.last_user() else {
        return phrases::FALLBACK.to_string();
    };
    let normalized = normalize(&last_user.content);

    if let Some(genre) = find_genre(&normalized) {
        return phrases::genre_followup(genre).to_string();
    }
    if find_era(&normalized).is_some() {
        return phrases::POPULARITY_QUESTION.to_string();
    }
    if find_popularity(&normalized).is_some() {
        return phrases::RECOMMENDATION_PROMPT.to_string();
    }

    phrases::FALLBACK.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_turn_gets_welcome() {
        let mut conversation = Conversation::new();
        conversation.push_user("hola");
        assert_eq!(fallback_reply(&conversation), phrases::WELCOME);
    }

    #[test]
    fn test_genre_mention_gets_genre_followup() {
        let mut conversation = Conversation::new();
        conversation.push_user("hola");
        conversation.push_assistant(phrases::WELCOME);
        conversation.push_user("me gusta el terror");
        assert_eq!(
            fallback_reply(&conversation),
            phrases::genre_followup(lexicon::Genre::Horror)
        );
    }

    #[test]
    fn test_era_answer_gets_popularity_question() {
        let mut conversation = Conversation::new();
        conversation.push_user("hola");
        conversation.push_assistant(phrases::ERA_QUESTION);
        conversation.push_user("recientes");
        assert_eq!(fallback_reply(&conversation), phrases::POPULARITY_QUESTION);
    }

    #[test]
    fn test_popularity_answer_gets_recommendation_offer() {
        let mut conversation = Conversation::new();
        conversation.push_user("hola");
        conversation.push_assistant(phrases::POPULARITY_QUESTION);
        conversation.push_user("joyas ocultas");
        assert_eq!(fallback_reply(&conversation), phrases::RECOMMENDATION_PROMPT);
    }

    #[test]
    fn test_unrecognized_gets_generic_fallback() {
        let mut conversation = Conversation::new();
        conversation.push_user("hola");
        conversation.push_assistant(phrases::WELCOME);
        conversation.push_user("asdf qwerty");
        assert_eq!(fallback_reply(&conversation), phrases::FALLBACK);
    }
}
