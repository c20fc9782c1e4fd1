//! # Recommendation Query Builder
//!
//! Maps a [`PreferenceRecord`] onto catalog queries and renders the result:
//! 1. Resolve director/actor to a catalog person id (first hit wins)
//! 2. Build discover parameters (genre id, date bounds, popularity sorting)
//! 3. Execute with progressive relaxation: drop the genre filter on an
//!    empty page, then the person filter
//! 4. Keep the first 3 results of the first nonzero attempt
//!
//! External failures never escape this module: transport errors count as an
//! empty attempt, and a missing API key short-circuits to no results.

use tracing::{debug, info, warn};

use engine::PreferenceRecord;
use lexicon::{phrases, Era, Popularity};
use tmdb_client::{DiscoverQuery, MovieSummary, SortOrder, TmdbClient};

/// At most this many movies are shown per reply.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Hidden-gems tier: well rated but not widely voted.
const HIDDEN_GEMS_MIN_VOTES: u32 = 50;
const HIDDEN_GEMS_MAX_VOTES: u32 = 1000;
const HIDDEN_GEMS_MIN_RATING: f32 = 7.0;

/// Open-ended era bounds used when no explicit years were extracted.
const RECENT_FROM: &str = "2015-01-01";
const CLASSIC_UNTIL: &str = "2000-12-31";

/// Translate extracted preferences into discover parameters. Explicit year
/// bounds take precedence over the era; the era only matters when the
/// conversation never named a year or decade.
pub fn build_discover_query(record: &PreferenceRecord, person_id: Option<u64>) -> DiscoverQuery {
    let mut query = DiscoverQuery::default();

    if let Some(genre) = record.genre {
        query.with_genre = Some(genre.tmdb_id());
    }

    if let Some((from, to)) = record.year_range() {
        query.release_date_from = Some(format!("{from}-01-01"));
        query.release_date_to = Some(format!("{to}-12-31"));
    } else {
        match record.era {
            Era::Recent => query.release_date_from = Some(RECENT_FROM.to_string()),
            Era::Classic => query.release_date_to = Some(CLASSIC_UNTIL.to_string()),
            Era::Any => {}
        }
    }

    if record.popularity == Popularity::HiddenGems {
        query.sort_by = SortOrder::VoteAverageDesc;
        query.vote_count_min = Some(HIDDEN_GEMS_MIN_VOTES);
        query.vote_count_max = Some(HIDDEN_GEMS_MAX_VOTES);
        query.vote_average_min = Some(HIDDEN_GEMS_MIN_RATING);
    }

    query.with_person = person_id;
    query
}

/// Executes preference queries against the catalog.
#[derive(Debug, Clone)]
pub struct Recommender {
    tmdb: TmdbClient,
}

impl Recommender {
    pub fn new(tmdb: TmdbClient) -> Self {
        Recommender { tmdb }
    }

    /// Fetch up to [`MAX_RECOMMENDATIONS`] movies for the preferences.
    /// Always returns a list; every failure mode degrades to empty.
    pub async fn recommend(&self, record: &PreferenceRecord) -> Vec<MovieSummary> {
        if !self.tmdb.has_credentials() {
            debug!("no TMDb API key configured, skipping catalog query");
            return Vec::new();
        }

        let person_id = self.resolve_person(record).await;
        let mut query = build_discover_query(record, person_id);
        info!(?query, "querying catalog");

        let mut results = self.discover_attempt(&query).await;

        // Relaxation: genre first, then person.
        if results.is_empty() && query.with_genre.is_some() {
            debug!("no results, retrying without genre filter");
            query.with_genre = None;
            results = self.discover_attempt(&query).await;
        }
        if results.is_empty() && query.with_person.is_some() {
            debug!("no results, retrying without person filter");
            query.with_person = None;
            results = self.discover_attempt(&query).await;
        }

        results.truncate(MAX_RECOMMENDATIONS);
        results
    }

    /// One discover attempt; transport/HTTP failures count as zero results.
    async fn discover_attempt(&self, query: &DiscoverQuery) -> Vec<MovieSummary> {
        match self.tmdb.discover(query).await {
            Ok(results) => results,
            Err(error) => {
                warn!("catalog query failed: {error}");
                Vec::new()
            }
        }
    }

    /// Resolve the record's director or actor to a person id. No match and
    /// lookup failure both mean "no person filter".
    async fn resolve_person(&self, record: &PreferenceRecord) -> Option<u64> {
        let name = record.person_name()?;
        match self.tmdb.search_person(name).await {
            Ok(Some(person)) => {
                debug!("resolved {name} to person id {}", person.id);
                Some(person.id)
            }
            Ok(None) => {
                debug!("no catalog person found for {name}");
                None
            }
            Err(error) => {
                warn!("person search failed for {name}: {error}");
                None
            }
        }
    }
}

/// Render a result list as the chat reply: numbered bold titles with year,
/// overview and detail link, or the no-matches message.
pub fn format_recommendations(movies: &[MovieSummary]) -> String {
    if movies.is_empty() {
        return phrases::NO_RESULTS.to_string();
    }

    let mut reply = String::from(phrases::RECOMMENDATIONS_HEADER);
    for (position, movie) in movies.iter().enumerate() {
        let title = if movie.title.is_empty() {
            phrases::UNKNOWN_TITLE
        } else {
            &movie.title
        };
        let year = movie.release_year().unwrap_or(phrases::UNKNOWN_YEAR);
        let overview = movie
            .overview
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(phrases::NO_OVERVIEW);

        reply.push_str(&format!("**{}. {} ({})**\n{}\n", position + 1, title, year, overview));
        reply.push_str(&format!("[Más información]({})\n\n", movie.detail_url()));
    }
    reply.push_str(phrases::RECOMMENDATIONS_FOOTER);
    reply
}
