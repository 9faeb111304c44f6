//! Unified error type for rtfkit.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
