//! Genre codes and the name → code alias table.
//!
//! Aliases cover English plus Spanish with and without diacritics, all
//! mapping to the same canonical code. Matching is substring-based on
//! normalized text and first-match-wins, so the table is an ordered slice.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Canonical movie genres, aligned with the TMDb genre list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Music,
    Mystery,
    Romance,
    SciFi,
    TvMovie,
    Thriller,
    War,
    Western,
}

impl Genre {
    /// TMDb catalog genre id used by the discover endpoint.
    pub fn tmdb_id(self) -> u32 {
        match self {
            Genre::Action => 28,
            Genre::Adventure => 12,
            Genre::Animation => 16,
            Genre::Comedy => 35,
            Genre::Crime => 80,
            Genre::Documentary => 99,
            Genre::Drama => 18,
            Genre::Family => 10751,
            Genre::Fantasy => 14,
            Genre::History => 36,
            Genre::Horror => 27,
            Genre::Music => 10402,
            Genre::Mystery => 9648,
            Genre::Romance => 10749,
            Genre::SciFi => 878,
            Genre::TvMovie => 10770,
            Genre::Thriller => 53,
            Genre::War => 10752,
            Genre::Western => 37,
        }
    }

    /// Spanish display name used when reflecting detected criteria back to
    /// the user ("películas de acción").
    pub fn display_es(self) -> &'static str {
        match self {
            Genre::Action => "acción",
            Genre::Adventure => "aventura",
            Genre::Animation => "animación",
            Genre::Comedy => "comedia",
            Genre::Crime => "crimen",
            Genre::Documentary => "documental",
            Genre::Drama => "drama",
            Genre::Family => "familiar",
            Genre::Fantasy => "fantasía",
            Genre::History => "historia",
            Genre::Horror => "terror",
            Genre::Music => "música",
            Genre::Mystery => "misterio",
            Genre::Romance => "romance",
            Genre::SciFi => "ciencia ficción",
            Genre::TvMovie => "película de tv",
            Genre::Thriller => "suspenso",
            Genre::War => "guerra",
            Genre::Western => "oeste",
        }
    }
}

/// Ordered name → code table: English names first, then Spanish with
/// diacritics, then the unaccented Spanish spellings. Aliases are normalized
/// at lookup time, so the accented entries behave exactly like their plain
/// counterparts.
pub static GENRE_ALIASES: &[(&str, Genre)] = &[
    // English
    ("action", Genre::Action),
    ("adventure", Genre::Adventure),
    ("animation", Genre::Animation),
    ("comedy", Genre::Comedy),
    ("crime", Genre::Crime),
    ("documentary", Genre::Documentary),
    ("drama", Genre::Drama),
    ("family", Genre::Family),
    ("fantasy", Genre::Fantasy),
    ("history", Genre::History),
    ("horror", Genre::Horror),
    ("music", Genre::Music),
    ("mystery", Genre::Mystery),
    ("romance", Genre::Romance),
    ("science fiction", Genre::SciFi),
    ("sci-fi", Genre::SciFi),
    ("tv movie", Genre::TvMovie),
    ("thriller", Genre::Thriller),
    ("war", Genre::War),
    ("western", Genre::Western),
    // Spanish with diacritics
    ("acción", Genre::Action),
    ("aventura", Genre::Adventure),
    ("animación", Genre::Animation),
    ("comedia", Genre::Comedy),
    ("crimen", Genre::Crime),
    ("documental", Genre::Documentary),
    ("familiar", Genre::Family),
    ("fantasía", Genre::Fantasy),
    ("historia", Genre::History),
    ("terror", Genre::Horror),
    ("música", Genre::Music),
    ("misterio", Genre::Mystery),
    ("ciencia ficción", Genre::SciFi),
    ("película de tv", Genre::TvMovie),
    ("suspenso", Genre::Thriller),
    ("guerra", Genre::War),
    ("oeste", Genre::Western),
    // Spanish without diacritics
    ("accion", Genre::Action),
    ("animacion", Genre::Animation),
    ("fantasia", Genre::Fantasy),
    ("musica", Genre::Music),
    ("pelicula de tv", Genre::TvMovie),
];

/// Find the first genre whose alias occurs as a substring of the normalized
/// text. Returns `None` when no alias matches.
pub fn find_genre(normalized_text: &str) -> Option<Genre> {
    GENRE_ALIASES
        .iter()
        .find(|(alias, _)| normalized_text.contains(normalize(alias).as_str()))
        .map(|(_, genre)| *genre)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_names_match() {
        assert_eq!(find_genre("i love horror movies"), Some(Genre::Horror));
        assert_eq!(find_genre("some sci-fi please"), Some(Genre::SciFi));
    }

    #[test]
    fn test_spanish_names_match_after_normalization() {
        assert_eq!(find_genre(&normalize("películas de Acción")), Some(Genre::Action));
        assert_eq!(find_genre("me gusta el terror"), Some(Genre::Horror));
        assert_eq!(find_genre("algo de ciencia ficcion"), Some(Genre::SciFi));
        assert_eq!(find_genre("una comedia romantica"), Some(Genre::Comedy));
    }

    #[test]
    fn test_accented_and_plain_aliases_agree() {
        assert_eq!(find_genre("fantasia epica"), Some(Genre::Fantasy));
        assert_eq!(find_genre(&normalize("fantasía épica")), Some(Genre::Fantasy));
    }

    #[test]
    fn test_no_match_yields_none() {
        assert_eq!(find_genre("no se que quiero"), None);
        assert_eq!(find_genre(""), None);
    }

    #[test]
    fn test_every_genre_is_reachable() {
        for (alias, genre) in GENRE_ALIASES {
            assert_eq!(find_genre(&normalize(alias)), Some(*genre), "alias {alias:?}");
        }
    }
}
