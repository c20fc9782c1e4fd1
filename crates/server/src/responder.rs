//! # Chat Responder
//!
//! Coordinates one chat turn end to end:
//! 1. Normalize the inbound message
//! 2. Classify it against the conversation
//! 3. Dispatch: recommend, confirm, canned transition, or generative
//!
//! The responder is stateless across turns; the caller owns the
//! conversation and passes it back in whole every time.

use tracing::{info, warn};

use engine::{classifier, extractor, fallback, generative, Conversation, Strategy};
use hf_client::HfClient;
use lexicon::{find_genre, normalize, phrases};
use tmdb_client::TmdbClient;

use crate::recommender::{format_recommendations, Recommender};

/// Short messages carry too little signal to be worth a generation call.
const MIN_GENERATIVE_WORDS: usize = 4;

/// Handles a chat turn using the classifier, the catalog recommender and
/// the generative fallback.
#[derive(Debug, Clone)]
pub struct ChatResponder {
    recommender: Recommender,
    hf: HfClient,
}

impl ChatResponder {
    pub fn new(tmdb: TmdbClient, hf: HfClient) -> Self {
        ChatResponder {
            recommender: Recommender::new(tmdb),
            hf,
        }
    }

    /// Produce the assistant reply for `message`. `conversation` must
    /// already include the just-appended user turn.
    pub async fn respond(&self, message: &str, conversation: &Conversation) -> String {
        let normalized = normalize(message);
        let strategy = classifier::classify(&normalized, conversation);
        info!(?strategy, "classified turn");

        match strategy {
            Strategy::AffirmRecommend | Strategy::ExplicitRecommend => {
                let record = extractor::from_history(conversation);
                let movies = self.recommender.recommend(&record).await;
                format_recommendations(&movies)
            }
            Strategy::Decline => phrases::DECLINE_REPLY.to_string(),
            Strategy::ConfirmCriteria(record) => classifier::confirmation_message(&record),
            Strategy::EraFollowup => phrases::POPULARITY_QUESTION.to_string(),
            Strategy::PopularityFollowup => phrases::RECOMMENDATION_PROMPT.to_string(),
            Strategy::Generative => self.generative_reply(&normalized, conversation).await,
        }
    }

    /// The generative path with its deterministic short-circuits: a genre
    /// mention gets its canned follow-up and trivially short messages skip
    /// the network call entirely.
    async fn generative_reply(&self, normalized: &str, conversation: &Conversation) -> String {
        if let Some(genre) = find_genre(normalized) {
            return phrases::genre_followup(genre).to_string();
        }
        if normalized.split_whitespace().count() < MIN_GENERATIVE_WORDS {
            return fallback::fallback_reply(conversation);
        }
        if !self.hf.has_credentials() {
            return fallback::fallback_reply(conversation);
        }

        let prompt = generative::build_prompt(conversation);
        match self.hf.generate(&prompt).await {
            Ok(raw) => {
                let reply = generative::sanitize(&raw);
                if reply.is_empty() || generative::looks_truncated(&reply) {
                    fallback::fallback_reply(conversation)
                } else {
                    reply
                }
            }
            Err(error) => {
                warn!("generation failed: {error}");
                fallback::fallback_reply(conversation)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Responder with no credentials: every external path short-circuits,
    /// so the whole conversation flow is deterministic and offline.
    fn offline_responder() -> ChatResponder {
        ChatResponder::new(TmdbClient::new(None), HfClient::new(None))
    }

    async fn turn(responder: &ChatResponder, conversation: &mut Conversation, message: &str) -> String {
        conversation.push_user(message);
        let reply = responder.respond(message, conversation).await;
        conversation.push_assistant(reply.clone());
        reply
    }

    #[tokio::test]
    async fn test_first_turn_greets() {
        let responder = offline_responder();
        let mut conversation = Conversation::new();
        let reply = turn(&responder, &mut conversation, "hola").await;
        assert_eq!(reply, phrases::WELCOME);
    }

    #[tokio::test]
    async fn test_genre_mention_gets_followup_question() {
        let responder = offline_responder();
        let mut conversation = Conversation::new();
        turn(&responder, &mut conversation, "hola").await;
        let reply = turn(&responder, &mut conversation, "me gusta el terror").await;
        assert_eq!(reply, phrases::genre_followup(lexicon::Genre::Horror));
    }

    #[tokio::test]
    async fn test_person_mention_is_confirmed() {
        let responder = offline_responder();
        let mut conversation = Conversation::new();
        let reply = turn(&responder, &mut conversation, "me encanta tarantino").await;
        assert!(reply.contains("dirigidas por Quentin Tarantino"));
        assert!(reply.contains("¿Quieres ver algunas recomendaciones"));
    }

    #[tokio::test]
    async fn test_explicit_request_without_catalog_reports_no_matches() {
        let responder = offline_responder();
        let mut conversation = Conversation::new();
        let reply = turn(&responder, &mut conversation, "quiero ver peliculas de terror").await;
        assert_eq!(reply, phrases::NO_RESULTS);
    }

    #[tokio::test]
    async fn test_full_guided_flow_reaches_recommendations() {
        let responder = offline_responder();
        let mut conversation = Conversation::new();

        // Era answer transitions to the popularity question.
        turn(&responder, &mut conversation, "hola").await;
        let reply = turn(&responder, &mut conversation, "algo mas bien clasicas").await;
        assert_eq!(reply, phrases::POPULARITY_QUESTION);

        // Popularity answer transitions to the recommendation offer.
        let reply = turn(&responder, &mut conversation, "joyas ocultas").await;
        assert_eq!(reply, phrases::RECOMMENDATION_PROMPT);

        // Affirmative reply triggers the recommendation path; with no
        // catalog credentials it degrades to the no-matches message.
        let reply = turn(&responder, &mut conversation, "sí").await;
        assert_eq!(reply, phrases::NO_RESULTS);
    }

    #[tokio::test]
    async fn test_decline_after_offer() {
        let responder = offline_responder();
        let mut conversation = Conversation::new();
        conversation.push_user("las populares");
        conversation.push_assistant(phrases::RECOMMENDATION_PROMPT);
        let reply = turn(&responder, &mut conversation, "no gracias").await;
        assert_eq!(reply, phrases::DECLINE_REPLY);
    }

    #[tokio::test]
    async fn test_long_unrecognized_message_falls_back() {
        let responder = offline_responder();
        let mut conversation = Conversation::new();
        turn(&responder, &mut conversation, "hola").await;
        let reply = turn(
            &responder,
            &mut conversation,
            "cuentame algo interesante sobre cualquier cosa del mundo",
        )
        .await;
        assert_eq!(reply, phrases::FALLBACK);
    }
}
