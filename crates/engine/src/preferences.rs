//! The structured preference record inferred from conversation.

use lexicon::{Era, Genre, Popularity};

/// Structured movie filters extracted from free text.
///
/// A record is built fresh on every extraction call and never persisted;
/// the conversation itself is the only durable state. Every field has an
/// explicit default, so downstream code never deals with a partially
/// initialized record: absence of a signal is `None`/`Any`, and the
/// whole-history extractor additionally falls back to [`Genre::Action`] so
/// the catalog query always has a genre to narrow on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceRecord {
    pub genre: Option<Genre>,
    /// Director display name. Mutually exclusive with `actor` within one
    /// extraction pass; the first person match wins and sets exactly one.
    pub director: Option<String>,
    pub actor: Option<String>,
    pub year_from: Option<u16>,
    pub year_to: Option<u16>,
    pub era: Era,
    pub popularity: Popularity,
}

impl PreferenceRecord {
    /// True when at least one concrete filter was detected. Era and
    /// popularity are deliberately excluded: they only refine a query and
    /// never count as "understood criteria" on their own.
    pub fn has_criteria(&self) -> bool {
        self.genre.is_some()
            || self.director.is_some()
            || self.actor.is_some()
            || self.year_range().is_some()
    }

    /// Both year bounds, when present.
    pub fn year_range(&self) -> Option<(u16, u16)> {
        match (self.year_from, self.year_to) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }

    /// The person name to resolve against the catalog, director first.
    pub fn person_name(&self) -> Option<&str> {
        self.director.as_deref().or(self.actor.as_deref())
    }
}
