//! # Lexicon Crate
//!
//! Static vocabulary for the CineChat preference engine.
//!
//! ## Main Components
//!
//! - **normalize**: lowercase + accent-stripping canonical text form
//! - **genres**: genre codes with English/Spanish alias table and TMDb ids
//! - **people**: well-known directors and actors with associated genres
//! - **decades**: decade tokens ("80s") mapped to year bounds
//! - **keywords**: era/popularity/affirmative/negative/trigger keyword sets
//! - **phrases**: canned Spanish reply strings
//!
//! All tables are process-wide, immutable `static` data constructed at
//! compile time. Lookup order matters: detection is substring-based with
//! first-match-wins semantics, so every table is an explicitly ordered slice
//! rather than an unordered map.
//!
//! ## Example Usage
//!
//! ```
//! use lexicon::{normalize, find_genre, Genre};
//!
//! let text = normalize("Me encantan las películas de Acción");
//! assert_eq!(find_genre(&text), Some(Genre::Action));
//! ```

// Public modules
pub mod decades;
pub mod genres;
pub mod keywords;
pub mod normalize;
pub mod people;
pub mod phrases;

// Re-export commonly used items for convenience
pub use decades::{find_decade, Decade, DECADES};
pub use genres::{find_genre, Genre, GENRE_ALIASES};
pub use keywords::{
    find_era, find_popularity, Era, Popularity, AFFIRMATIVE_KEYWORDS, ERA_KEYWORDS,
    NEGATIVE_KEYWORDS, POPULARITY_KEYWORDS, READINESS_PHRASES, RECOMMENDATION_KEYWORDS,
};
pub use normalize::normalize;
pub use people::{find_person, Person, PersonRole, PEOPLE};
