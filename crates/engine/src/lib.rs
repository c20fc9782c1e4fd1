//! # Engine Crate
//!
//! The deterministic dialogue engine behind CineChat: turns free-text,
//! Spanish/English chat into a structured [`PreferenceRecord`] and decides,
//! turn by turn, how the system should respond.
//!
//! ## Main Components
//!
//! - **conversation**: chat turns and the client-held, append-only history
//! - **preferences**: the structured preference record
//! - **extractor**: keyword/pattern detection over one utterance or the
//!   whole history
//! - **classifier**: maps the latest turn to one of seven response
//!   strategies
//! - **generative**: prompt building and sanitation for the external
//!   text-generation fallback
//! - **fallback**: deterministic replies used whenever the generative path
//!   is unavailable or produces unusable output
//!
//! ## Architecture
//!
//! The engine is stateless: every entry point is a pure function of the
//! current message and the conversation supplied by the caller. The only
//! shared data is the read-only [`lexicon`] vocabulary.
//!
//! ## Example Usage
//!
//! ```
//! use engine::{classifier, Conversation, Strategy};
//! use lexicon::normalize;
//!
//! let mut conversation = Conversation::new();
//! conversation.push_user("quiero ver peliculas de terror");
//!
//! let normalized = normalize("quiero ver peliculas de terror");
//! let strategy = classifier::classify(&normalized, &conversation);
//! assert_eq!(strategy, Strategy::ExplicitRecommend);
//! ```

// Public modules
pub mod classifier;
pub mod conversation;
pub mod extractor;
pub mod fallback;
pub mod generative;
pub mod preferences;

// Re-export commonly used types
pub use classifier::Strategy;
pub use conversation::{Conversation, Role, Turn};
pub use preferences::PreferenceRecord;
