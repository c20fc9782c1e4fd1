//! Prompt building and output sanitation for the generative fallback.
//!
//! The generative service is an untrusted collaborator: whatever concrete
//! backend is plugged in, its output passes through [`sanitize`] and the
//! [`looks_truncated`] guard before it may reach the user.

/// Fixed system instruction prepended to every generation prompt.
pub const SYSTEM_PROMPT: &str = "\
Eres un asistente de recomendación de películas amigable y conversacional.
Tu objetivo es ayudar al usuario a encontrar películas que le gusten haciendo preguntas sobre sus preferencias.

Puedes preguntar sobre géneros, directores, actores, años o décadas específicas.
Mantén un tono amigable y conversacional. Usa español en todo momento.
Mantén tus respuestas breves y concisas, no más de 2-3 oraciones.

Cuando tengas suficiente información, pregunta al usuario si quiere ver recomendaciones.
No le pidas que escriba \"recomiéndame películas\", simplemente pregúntale si quiere ver tus recomendaciones.";

/// How many trailing turns are included in the prompt.
pub const PROMPT_CONTEXT_TURNS: usize = 3;

use crate::conversation::{Conversation, Role};

/// Compose the generation prompt: system instruction, the last
/// [`PROMPT_CONTEXT_TURNS`] turns tagged by role, and a trailing assistant
/// cue for the model to complete.
pub fn build_prompt(conversation: &Conversation) -> String {
    let mut prompt = String::from(SYSTEM_PROMPT);
    prompt.push_str("\n\n");
    for turn in conversation.last_n(PROMPT_CONTEXT_TURNS) {
        let tag = match turn.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        prompt.push('<');
        prompt.push_str(tag);
        prompt.push_str(">: ");
        prompt.push_str(&turn.content);
        prompt.push('\n');
    }
    prompt.push_str("<assistant>:");
    prompt
}

/// Clean raw generated text: trim, strip a leading assistant role tag and
/// repair a missing terminal mark. When the text ends mid-sentence, cut at
/// the last `.`/`!`/`?` if it sits in the second half, otherwise append a
/// period.
pub fn sanitize(raw: &str) -> String {
    let mut text = raw.trim().to_string();
    if let Some(rest) = text.strip_prefix("<assistant>:") {
        text = rest.trim().to_string();
    }
    if text.is_empty() || ends_terminal(&text) {
        return text;
    }
    match text.rfind(['.', '!', '?']) {
        Some(idx) if idx > text.len() / 2 => text.truncate(idx + 1),
        _ => text.push('.'),
    }
    text
}

/// A reply that is long enough to be meaningful but still lacks terminal
/// punctuation is treated as truncated and discarded by the caller.
pub fn looks_truncated(reply: &str) -> bool {
    reply.len() > 10 && !ends_terminal(reply)
}

fn ends_terminal(text: &str) -> bool {
    text.ends_with(['.', '!', '?'])
}
