//! Domain types for the fitness-progress preview service.
//!
//! Pure logic only: the period set, the prompt catalog, image payload
//! encoding, and the rule that picks the generated image out of a model
//! response. No I/O happens in this crate.

pub mod error;
pub mod media;
pub mod period;
pub mod prompts;
pub mod transform;
