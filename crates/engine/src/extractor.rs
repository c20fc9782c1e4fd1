//! Criteria extraction: normalized text in, [`PreferenceRecord`] out.
//!
//! Two entry points share one detection pipeline:
//!
//! 1. Person scan: first table hit sets director or actor plus the
//!    associated genre, then stops.
//! 2. Decade scan: first token hit sets both year bounds.
//! 3. Explicit-year scan: runs unconditionally after the decade scan and
//!    overwrites its bounds when a 4-digit year is present.
//! 4. Genre scan: only when the person scan set no genre.
//!
//! [`from_history`] additionally applies the genre fallback and the
//! era/popularity keyword scans; [`from_utterance`] does not, so a caller
//! can distinguish "nothing detected" from a defaulted record.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use lexicon::{find_decade, find_era, find_genre, find_person, normalize, Genre, PersonRole};

use crate::conversation::Conversation;
use crate::preferences::PreferenceRecord;

/// 4-digit years starting with 19 or 20, on word boundaries so decade
/// tokens like "2000s" are not mistaken for years.
pub(crate) static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").expect("year pattern is valid"));

/// Extract preferences from a single normalized utterance. Genre is left
/// unset when nothing matches; no era/popularity detection.
pub fn from_utterance(normalized_text: &str) -> PreferenceRecord {
    detect(normalized_text, false)
}

/// Extract preferences from every user turn in the conversation. The turn
/// texts are joined, normalized and run through the same pipeline; genre
/// falls back to [`Genre::Action`] and era/popularity keywords are applied.
pub fn from_history(conversation: &Conversation) -> PreferenceRecord {
    let joined = conversation.joined_user_text();
    let normalized = normalize(&joined);
    let mut record = detect(&normalized, true);

    if record.genre.is_none() {
        record.genre = Some(Genre::Action);
    }
    if let Some(era) = find_era(&normalized) {
        record.era = era;
    }
    if let Some(popularity) = lexicon::find_popularity(&normalized) {
        record.popularity = popularity;
    }

    debug!(?record, "extracted preferences from history");
    record
}

fn detect(normalized_text: &str, whole_history: bool) -> PreferenceRecord {
    let mut record = PreferenceRecord::default();

    if let Some(person) = find_person(normalized_text) {
        match person.role {
            PersonRole::Director => record.director = Some(person.name.to_string()),
            PersonRole::Actor => record.actor = Some(person.name.to_string()),
        }
        record.genre = Some(person.genre);
    }

    if let Some(decade) = find_decade(normalized_text) {
        record.year_from = Some(decade.start_year);
        record.year_to = Some(decade.end_year);
    }

    detect_years(&mut record, normalized_text, whole_history);

    if record.genre.is_none() {
        record.genre = find_genre(normalized_text);
    }

    record
}

/// Explicit 4-digit years override any decade bounds already present. The
/// history-wide pass spans min..max over every year mentioned; the
/// single-utterance pass takes the first match only.
fn detect_years(record: &mut PreferenceRecord, normalized_text: &str, whole_history: bool) {
    if whole_history {
        let mut years: Vec<u16> = YEAR_PATTERN
            .find_iter(normalized_text)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();
        if years.is_empty() {
            return;
        }
        years.sort_unstable();
        record.year_from = years.first().copied();
        record.year_to = years.last().copied();
    } else if let Some(m) = YEAR_PATTERN.find(normalized_text) {
        let year: Option<u16> = m.as_str().parse().ok();
        record.year_from = year;
        record.year_to = year;
    }
}
