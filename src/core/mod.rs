//! Previewbind Core Engine
//!
//! Core engine module. Handles rule persistence, preview resolution, and
//! the per-tick session bookkeeping that pushes results into the host
//! preview binding.

pub mod fs;
pub mod host;
pub mod preview;
pub mod rules;

// Re-export common types
mod types;
pub use types::*;

mod error;
pub use error::*;
