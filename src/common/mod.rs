//! Common types and utilities shared by the RTF writer and template engine.

pub mod encoding;
pub mod error;
pub mod unit;

pub use error::{Error, Result};
pub use unit::{Length, LengthUnit, to_twips};
