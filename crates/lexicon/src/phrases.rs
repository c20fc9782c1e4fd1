//! Canned Spanish reply strings.
//!
//! Centralizing every user-facing string here keeps the dialogue wording in
//! one place; the engine and server only ever reference these constants.

use crate::genres::Genre;

/// Greeting used for the very first user turn.
pub static WELCOME: &str = "¡Hola! ¿Qué tipo de película te gustaría ver hoy? Puedes mencionar géneros, directores, actores o años.";

/// Transition asked after an era answer.
pub static POPULARITY_QUESTION: &str =
    "¿Te interesan más las películas populares o prefieres descubrir joyas ocultas?";

/// Transition asked after a popularity answer; contains a readiness phrase so
/// an affirmative next turn triggers recommendations.
pub static RECOMMENDATION_PROMPT: &str = "Basado en tus preferencias, creo que puedo recomendarte algunas películas interesantes. ¿Quieres ver mis recomendaciones?";

/// Era follow-up question.
pub static ERA_QUESTION: &str = "¿Prefieres películas recientes o clásicas?";

/// Shown when a confirmation was triggered but nothing could be extracted.
pub static NO_PREFERENCES: &str = "Parece que no he entendido bien tus preferencias. ¿Podrías decirme qué género de películas te gusta? (Acción, Comedia, Terror, etc.)";

/// Generic reply when nothing in the message was understood.
pub static FALLBACK: &str = "Lo siento, no entendí eso. ¿Podrías reformular tu pregunta o decirme qué tipo de películas te gustan?";

/// Reply to a declined recommendation offer.
pub static DECLINE_REPLY: &str = "Entiendo. ¿Hay algún otro tipo de película que te interese? Puedes mencionar géneros, directores, actores o años específicos.";

/// Shown when the catalog query came back empty even after relaxation.
pub static NO_RESULTS: &str = "No encontré películas que coincidan con tus preferencias. ¿Te gustaría intentar con otros géneros?";

/// Header and footer wrapped around a formatted recommendation list.
pub static RECOMMENDATIONS_HEADER: &str = "Aquí tienes algunas recomendaciones:\n\n";
pub static RECOMMENDATIONS_FOOTER: &str =
    "¿Te gustaría ver más recomendaciones o prefieres buscar otro tipo de películas?";

/// Placeholders for missing catalog fields.
pub static UNKNOWN_TITLE: &str = "Sin título";
pub static UNKNOWN_YEAR: &str = "Año desconocido";
pub static NO_OVERVIEW: &str = "Sin descripción disponible.";

static GENRE_FOLLOWUP_DEFAULT: &str =
    "¡Buena elección! ¿Hay algún actor o director que te guste especialmente?";

/// Canned follow-up question for a freshly mentioned genre. A handful of
/// genres get a specific question; the rest share the default.
pub fn genre_followup(genre: Genre) -> &'static str {
    match genre {
        Genre::Action => {
            "¡Genial! ¿Prefieres películas de acción con superhéroes, espías o artes marciales?"
        }
        Genre::Comedy => "¡Buena elección! ¿Te gustan más las comedias románticas, las comedias de situación o el humor negro?",
        Genre::Horror => "¡Interesante! ¿Prefieres el terror psicológico, el gore o las películas de fantasmas?",
        Genre::SciFi => "¡Excelente! ¿Te interesan más las películas de ciencia ficción sobre el espacio, viajes en el tiempo o distopías?",
        Genre::Drama => "¡Buena elección! ¿Prefieres dramas históricos, familiares o románticos?",
        _ => GENRE_FOLLOWUP_DEFAULT,
    }
}
