//! Gemini REST client library.
//!
//! Provides typed `generateContent` messages, an HTTP API wrapper, env
//! configuration, and the [`ImageGenerator`] trait the API server uses to
//! request image edits.

pub mod api;
pub mod config;
pub mod generator;
pub mod messages;

pub use generator::{EditRequest, GeminiGenerator, ImageGenerator};
