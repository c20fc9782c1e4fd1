//! Server crate for CineChat.
//!
//! Contains the chat responder that wires the dialogue classifier to the
//! catalog recommender and the generative fallback, plus the axum routes
//! exposing it as `POST /api/chat`.

pub mod recommender;
pub mod responder;
pub mod routes;

pub use recommender::Recommender;
pub use responder::ChatResponder;
pub use routes::router;
