//! Keyword sets driving era/popularity detection and turn routing.
//!
//! All keywords are stored pre-normalized (lowercase, no diacritics); the
//! caller is expected to match them against normalized text.

use serde::{Deserialize, Serialize};

/// Rough release-era preference inferred from conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    #[default]
    Any,
    Recent,
    Classic,
}

/// Popularity tier preference. `HiddenGems` biases toward well-rated movies
/// with few votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Popularity {
    #[default]
    Any,
    Popular,
    HiddenGems,
}

/// Era keyword sets, scanned in order with first-set-wins semantics.
pub static ERA_KEYWORDS: &[(Era, &[&str])] = &[
    (
        Era::Recent,
        &[
            "reciente", "nueva", "ultimo", "moderna", "actual", "nuevas", "ultimos", "modernas",
            "actuales",
        ],
    ),
    (
        Era::Classic,
        &[
            "clasica", "vieja", "antigua", "retro", "vintage", "clasicas", "viejas", "antiguas",
        ],
    ),
];

/// Popularity keyword sets, symmetric to [`ERA_KEYWORDS`].
pub static POPULARITY_KEYWORDS: &[(Popularity, &[&str])] = &[
    (
        Popularity::Popular,
        &[
            "popular", "famosa", "conocida", "taquillera", "populares", "famosas", "conocidas",
            "taquilleras",
        ],
    ),
    (
        Popularity::HiddenGems,
        &[
            "oculta", "desconocida", "indie", "independiente", "joya", "ocultas", "desconocidas",
            "indies", "independientes", "joyas",
        ],
    ),
];

/// Affirmative replies. Matched as the whole message or as a single
/// whitespace-separated token, never as a bare substring.
pub static AFFIRMATIVE_KEYWORDS: &[&str] = &[
    "si", "claro", "por supuesto", "dale", "ok", "okay", "vale", "bueno", "genial", "perfecto",
];

/// Negative replies, same matching rule as [`AFFIRMATIVE_KEYWORDS`].
pub static NEGATIVE_KEYWORDS: &[&str] = &[
    "no", "nope", "negativo", "paso", "mejor no", "ahora no", "en otro momento",
];

/// Substring triggers for an explicit recommendation request.
pub static RECOMMENDATION_KEYWORDS: &[&str] = &[
    "recomienda",
    "recomendame",
    "recomiendame",
    "recomendaciones",
    "muestra",
    "busca",
    "dame",
    "quiero",
    "ver",
    "peliculas",
    "film",
];

/// Phrases in the previous assistant turn that signal the system just
/// offered to show recommendations.
pub static READINESS_PHRASES: &[&str] = &[
    "quieres ver mis recomendaciones",
    "te muestro algunas opciones",
    "te recomiendo",
    "puedo recomendarte",
    "te gustaria ver",
];

/// First era whose keyword set has a hit in the normalized text.
pub fn find_era(normalized_text: &str) -> Option<Era> {
    ERA_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| normalized_text.contains(kw)))
        .map(|(era, _)| *era)
}

/// First popularity tier whose keyword set has a hit in the normalized text.
pub fn find_popularity(normalized_text: &str) -> Option<Popularity> {
    POPULARITY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| normalized_text.contains(kw)))
        .map(|(popularity, _)| *popularity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn test_era_detection() {
        assert_eq!(find_era("algo reciente por favor"), Some(Era::Recent));
        assert_eq!(find_era(&normalize("una película clásica")), Some(Era::Classic));
        assert_eq!(find_era("da igual"), None);
    }

    #[test]
    fn test_popularity_detection() {
        assert_eq!(find_popularity("las mas populares"), Some(Popularity::Popular));
        assert_eq!(find_popularity("prefiero joyas ocultas"), Some(Popularity::HiddenGems));
        assert_eq!(find_popularity("cualquiera"), None);
    }

    #[test]
    fn test_plural_forms_hit_singular_keywords() {
        // "recientes" contains "reciente"; substring matching covers plurals.
        assert_eq!(find_era("recientes"), Some(Era::Recent));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Era::default(), Era::Any);
        assert_eq!(Popularity::default(), Popularity::Any);
    }
}
