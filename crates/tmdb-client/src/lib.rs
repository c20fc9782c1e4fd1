//! TMDb catalog client.
//!
//! This crate wraps the two TMDb endpoints the recommender needs:
//! - `/discover/movie` with typed query parameters ([`DiscoverQuery`])
//! - `/search/person` for resolving a director/actor name to a person id
//!
//! The client holds an optional API key: credential absence is a normal
//! state ([`TmdbError::MissingApiKey`]) that callers turn into an empty
//! result set rather than a surfaced failure. All requests carry explicit
//! connect and overall timeouts so a slow catalog can only ever delay one
//! chat turn, never hang it.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Production TMDb API root.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Responses are requested in Spanish to match the chat language.
pub const DEFAULT_LANGUAGE: &str = "es-ES";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the TMDb endpoints.
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("TMDb API key is not configured")]
    MissingApiKey,

    #[error("request to TMDb failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("TMDb returned HTTP {status}")]
    Status { status: StatusCode },
}

/// Sort order for the discover endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PopularityDesc,
    VoteAverageDesc,
}

impl SortOrder {
    fn as_param(self) -> &'static str {
        match self {
            SortOrder::PopularityDesc => "popularity.desc",
            SortOrder::VoteAverageDesc => "vote_average.desc",
        }
    }
}

/// Typed parameters for `/discover/movie`. Unset options are simply left
/// out of the request.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverQuery {
    pub sort_by: SortOrder,
    pub with_genre: Option<u32>,
    /// Inclusive release-date bounds, `YYYY-MM-DD`.
    pub release_date_from: Option<String>,
    pub release_date_to: Option<String>,
    pub vote_count_min: Option<u32>,
    pub vote_count_max: Option<u32>,
    pub vote_average_min: Option<f32>,
    pub with_person: Option<u64>,
    pub page: u32,
}

impl Default for DiscoverQuery {
    fn default() -> Self {
        DiscoverQuery {
            sort_by: SortOrder::PopularityDesc,
            with_genre: None,
            release_date_from: None,
            release_date_to: None,
            vote_count_min: None,
            vote_count_max: None,
            vote_average_min: None,
            with_person: None,
            page: 1,
        }
    }
}

impl DiscoverQuery {
    /// Serialize into query pairs; adult content is always excluded.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("sort_by", self.sort_by.as_param().to_string()),
            ("include_adult", "false".to_string()),
            ("page", self.page.to_string()),
        ];
        if let Some(genre_id) = self.with_genre {
            pairs.push(("with_genres", genre_id.to_string()));
        }
        if let Some(date) = &self.release_date_from {
            pairs.push(("primary_release_date.gte", date.clone()));
        }
        if let Some(date) = &self.release_date_to {
            pairs.push(("primary_release_date.lte", date.clone()));
        }
        if let Some(count) = self.vote_count_min {
            pairs.push(("vote_count.gte", count.to_string()));
        }
        if let Some(count) = self.vote_count_max {
            pairs.push(("vote_count.lte", count.to_string()));
        }
        if let Some(average) = self.vote_average_min {
            pairs.push(("vote_average.gte", average.to_string()));
        }
        if let Some(person_id) = self.with_person {
            pairs.push(("with_people", person_id.to_string()));
        }
        pairs
    }
}

/// One catalog entry from a discover response.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl MovieSummary {
    /// Leading 4 digits of the release date, when present.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .filter(|date| date.len() >= 4 && date.is_char_boundary(4))
            .map(|date| &date[..4])
    }

    /// Public detail page for this movie.
    pub fn detail_url(&self) -> String {
        format!("https://www.themoviedb.org/movie/{}", self.id)
    }
}

#[derive(Debug, Deserialize)]
struct DiscoverResponse {
    #[serde(default)]
    results: Vec<MovieSummary>,
}

/// A person-search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonMatch {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct PersonSearchResponse {
    #[serde(default)]
    results: Vec<PersonMatch>,
}

/// Client for the TMDb catalog and person-search endpoints.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    language: String,
}

impl TmdbClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Client against a non-default API root (used by tests).
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        TmdbClient {
            http,
            base_url: base_url.into(),
            api_key,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Whether an API key is configured; callers short-circuit to an empty
    /// result set when it is not.
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, TmdbError> {
        self.api_key.as_deref().ok_or(TmdbError::MissingApiKey)
    }

    /// Run a discover query and return the raw result page.
    pub async fn discover(&self, query: &DiscoverQuery) -> Result<Vec<MovieSummary>, TmdbError> {
        let api_key = self.api_key()?;
        let url = format!("{}/discover/movie", self.base_url);

        let mut pairs = vec![
            ("api_key", api_key.to_string()),
            ("language", self.language.clone()),
        ];
        pairs.extend(query.query_pairs());

        let response = self.http.get(&url).query(&pairs).send().await?;
        if !response.status().is_success() {
            return Err(TmdbError::Status {
                status: response.status(),
            });
        }
        let body: DiscoverResponse = response.json().await?;
        debug!("TMDb discover returned {} results", body.results.len());
        Ok(body.results)
    }

    /// Resolve a free-text name to the first matching person, if any.
    pub async fn search_person(&self, name: &str) -> Result<Option<PersonMatch>, TmdbError> {
        let api_key = self.api_key()?;
        let url = format!("{}/search/person", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", api_key),
                ("language", self.language.as_str()),
                ("query", name),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(TmdbError::Status {
                status: response.status(),
            });
        }
        let body: PersonSearchResponse = response.json().await?;
        Ok(body.results.into_iter().next())
    }
}
