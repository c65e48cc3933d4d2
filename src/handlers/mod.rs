//! HTTP handlers for the animal resource.

pub mod animals;
pub use animals::*;
