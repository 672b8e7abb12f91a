//! Command-line medical assistant backed by a hosted chat model.
//!
//! The library exposes the pieces the `doctor-ai` binary wires together:
//! the chat data model, an OpenAI-compatible HTTP provider and the
//! interactive [`session::Session`].

pub mod backends;
pub mod chat;
pub mod error;
pub mod prompt;
pub mod session;

pub use error::ChatError;
pub use prompt::DOCTOR_SYSTEM_PROMPT;
pub use session::{Session, SessionState, Transcript, TurnOutcome};
