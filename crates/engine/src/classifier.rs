//! Turn router: decides which response strategy handles the latest message.
//!
//! The classifier is stateless. "Readiness to recommend" is re-derived each
//! turn by scanning the most recent assistant message for fixed phrases
//! instead of keeping an explicit dialogue-state flag.

use lexicon::{
    find_decade, find_era, find_person, find_popularity, normalize, phrases,
    AFFIRMATIVE_KEYWORDS, NEGATIVE_KEYWORDS, READINESS_PHRASES, RECOMMENDATION_KEYWORDS,
};

use crate::conversation::Conversation;
use crate::extractor::{self, YEAR_PATTERN};
use crate::preferences::PreferenceRecord;

/// The seven mutually exclusive response strategies, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// Affirmative reply to a recommendation offer: extract from history,
    /// query the catalog, show results.
    AffirmRecommend,
    /// Negative reply to a recommendation offer: invite further criteria.
    Decline,
    /// The message names a person, decade or year: reflect the detected
    /// criteria back and ask for a yes/no.
    ConfirmCriteria(PreferenceRecord),
    /// The message itself asks for recommendations.
    ExplicitRecommend,
    /// Era answer; transition to the popularity question. The detected era
    /// is deliberately not persisted anywhere.
    EraFollowup,
    /// Popularity answer; transition to the recommendation offer. Same
    /// transition-only behavior as [`Strategy::EraFollowup`].
    PopularityFollowup,
    /// Nothing matched; hand the turn to the generative fallback path.
    Generative,
}

/// Route a turn. `conversation` must already contain the just-appended user
/// message; `normalized_message` is that message in canonical form.
pub fn classify(normalized_message: &str, conversation: &Conversation) -> Strategy {
    let ready = readiness_context(conversation);

    if ready && is_affirmative(normalized_message) {
        return Strategy::AffirmRecommend;
    }
    if ready && is_negative(normalized_message) {
        return Strategy::Decline;
    }
    if has_specific_criteria(normalized_message) {
        return Strategy::ConfirmCriteria(extractor::from_utterance(normalized_message));
    }
    if RECOMMENDATION_KEYWORDS
        .iter()
        .any(|kw| normalized_message.contains(kw))
    {
        return Strategy::ExplicitRecommend;
    }
    if find_era(normalized_message).is_some() {
        return Strategy::EraFollowup;
    }
    if find_popularity(normalized_message).is_some() {
        return Strategy::PopularityFollowup;
    }
    Strategy::Generative
}

/// Affirmative keyword matched against the whole message or any single
/// whitespace-separated token. Multi-word keywords can only match whole.
pub fn is_affirmative(normalized_message: &str) -> bool {
    matches_keyword_set(normalized_message, AFFIRMATIVE_KEYWORDS)
}

/// Negative counterpart of [`is_affirmative`], same matching rule.
pub fn is_negative(normalized_message: &str) -> bool {
    matches_keyword_set(normalized_message, NEGATIVE_KEYWORDS)
}

fn matches_keyword_set(normalized_message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| {
        *kw == normalized_message || normalized_message.split_whitespace().any(|token| token == *kw)
    })
}

/// True when the previous assistant turn offered recommendations. Needs at
/// least two turns so a bare "si" opener never triggers it.
fn readiness_context(conversation: &Conversation) -> bool {
    if conversation.len() < 2 {
        return false;
    }
    let Some(last_assistant) = conversation.last_assistant() else {
        return false;
    };
    let normalized = normalize(&last_assistant.content);
    READINESS_PHRASES
        .iter()
        .any(|phrase| normalized.contains(phrase))
}

/// Person, decade token or explicit 4-digit year in the message.
pub fn has_specific_criteria(normalized_message: &str) -> bool {
    find_person(normalized_message).is_some()
        || find_decade(normalized_message).is_some()
        || YEAR_PATTERN.is_match(normalized_message)
}

/// Render the detected criteria as a confirmation sentence: items joined
/// with ", ", the last one attached with " y ", closing with a yes/no
/// question. An empty record yields the "not understood" reply.
pub fn confirmation_message(record: &PreferenceRecord) -> String {
    let mut criteria: Vec<String> = Vec::new();

    if let Some(genre) = record.genre {
        criteria.push(format!("películas de {}", genre.display_es()));
    }
    if let Some(director) = &record.director {
        criteria.push(format!("dirigidas por {director}"));
    }
    if let Some(actor) = &record.actor {
        criteria.push(format!("protagonizadas por {actor}"));
    }
    if let Some((from, to)) = record.year_range() {
        if from == to {
            criteria.push(format!("del año {from}"));
        } else {
            criteria.push(format!("entre {from} y {to}"));
        }
    }

    if criteria.is_empty() {
        return phrases::NO_PREFERENCES.to_string();
    }

    let mut message = String::from("Entiendo que te interesan ");
    if criteria.len() == 1 {
        message.push_str(&criteria[0]);
    } else {
        message.push_str(&criteria[..criteria.len() - 1].join(", "));
        message.push_str(" y ");
        message.push_str(&criteria[criteria.len() - 1]);
    }
    message.push_str(". ¿Quieres ver algunas recomendaciones basadas en estos criterios?");
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon::Genre;

    /// Conversation ending in an assistant offer plus the given user reply.
    fn after_offer(user_reply: &str) -> Conversation {
        let mut conversation = Conversation::new();
        conversation.push_user("quiero algo de accion");
        conversation.push_assistant(phrases::RECOMMENDATION_PROMPT);
        conversation.push_user(user_reply);
        conversation
    }

    fn single_turn(message: &str) -> Conversation {
        let mut conversation = Conversation::new();
        conversation.push_user(message);
        conversation
    }

    // ========================================================================
    // Affirm / decline in readiness context
    // ========================================================================

    #[test]
    fn test_affirmative_after_offer_recommends() {
        let conversation = after_offer("sí");
        assert_eq!(classify(&normalize("sí"), &conversation), Strategy::AffirmRecommend);
    }

    #[test]
    fn test_affirmative_token_inside_longer_reply() {
        let conversation = after_offer("vale dale");
        assert_eq!(classify("vale dale", &conversation), Strategy::AffirmRecommend);
    }

    #[test]
    fn test_negative_after_offer_declines() {
        let conversation = after_offer("no gracias");
        assert_eq!(classify("no gracias", &conversation), Strategy::Decline);
    }

    #[test]
    fn test_affirmative_without_readiness_falls_through() {
        // No prior assistant offer: "si" alone means nothing actionable.
        assert_eq!(classify("si", &single_turn("si")), Strategy::Generative);
    }

    #[test]
    fn test_readiness_requires_assistant_phrase() {
        let mut conversation = Conversation::new();
        conversation.push_user("hola");
        conversation.push_assistant("¿Qué género te gusta?");
        conversation.push_user("si");
        assert_eq!(classify("si", &conversation), Strategy::Generative);
    }

    // ========================================================================
    // Specific criteria confirmation
    // ========================================================================

    #[test]
    fn test_person_triggers_confirmation() {
        let message = normalize("me encanta Tarantino");
        match classify(&message, &single_turn("me encanta Tarantino")) {
            Strategy::ConfirmCriteria(record) => {
                assert_eq!(record.director.as_deref(), Some("Quentin Tarantino"));
                assert_eq!(record.genre, Some(Genre::Crime));
            }
            other => panic!("expected ConfirmCriteria, got {other:?}"),
        }
    }

    #[test]
    fn test_year_triggers_confirmation() {
        match classify("una de 1999", &single_turn("una de 1999")) {
            Strategy::ConfirmCriteria(record) => {
                assert_eq!(record.year_range(), Some((1999, 1999)));
            }
            other => panic!("expected ConfirmCriteria, got {other:?}"),
        }
    }

    #[test]
    fn test_decade_triggers_confirmation() {
        assert!(matches!(
            classify("de los 90s", &single_turn("de los 90s")),
            Strategy::ConfirmCriteria(_)
        ));
    }

    // ========================================================================
    // Explicit requests and follow-up transitions
    // ========================================================================

    #[test]
    fn test_recommendation_keyword_triggers_explicit_path() {
        let message = normalize("recomiéndame una de terror");
        assert_eq!(
            classify(&message, &single_turn("recomiéndame una de terror")),
            Strategy::ExplicitRecommend
        );
    }

    #[test]
    fn test_era_answer_transitions_to_popularity_question() {
        assert_eq!(
            classify("me gustan las clasicas", &single_turn("me gustan las clasicas")),
            Strategy::EraFollowup
        );
    }

    #[test]
    fn test_popularity_answer_transitions_to_offer() {
        assert_eq!(
            classify("las mas famosas", &single_turn("las mas famosas")),
            Strategy::PopularityFollowup
        );
    }

    #[test]
    fn test_unmatched_message_is_generative() {
        assert_eq!(classify("hola", &single_turn("hola")), Strategy::Generative);
    }

    // ========================================================================
    // Confirmation rendering
    // ========================================================================

    #[test]
    fn test_confirmation_single_criterion() {
        let record = PreferenceRecord {
            genre: Some(Genre::Horror),
            ..Default::default()
        };
        assert_eq!(
            confirmation_message(&record),
            "Entiendo que te interesan películas de terror. \
             ¿Quieres ver algunas recomendaciones basadas en estos criterios?"
        );
    }

    #[test]
    fn test_confirmation_joins_last_criterion_with_y() {
        let record = PreferenceRecord {
            genre: Some(Genre::Crime),
            director: Some("Quentin Tarantino".to_string()),
            year_from: Some(1990),
            year_to: Some(1999),
            ..Default::default()
        };
        let message = confirmation_message(&record);
        assert!(message.contains("películas de crimen, dirigidas por Quentin Tarantino y entre 1990 y 1999"));
    }

    #[test]
    fn test_confirmation_single_year() {
        let record = PreferenceRecord {
            actor: Some("Penélope Cruz".to_string()),
            year_from: Some(2001),
            year_to: Some(2001),
            ..Default::default()
        };
        let message = confirmation_message(&record);
        assert!(message.contains("protagonizadas por Penélope Cruz y del año 2001"));
    }

    #[test]
    fn test_confirmation_empty_record_apologizes() {
        assert_eq!(confirmation_message(&PreferenceRecord::default()), phrases::NO_PREFERENCES);
    }
}
