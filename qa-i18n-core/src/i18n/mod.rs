//! Top-level module for i18n test string generation.
//!
//! This module provides:
//! - Static character class tables (`CharacterClass`)
//! - Deterministic tiling of a class into fixed-length strings
//! - A seeded sampler used by every random builder
//! - The public string builders and the iteration driver (`generator`)
//! - Configuration of the iteration driver (`input`)

/// Immutable character class tables and name lookup.
pub mod charset;

/// Deterministic construction of fixed-length strings from a class.
///
/// Repeats a short class or slices a long one so that every produced
/// string has exactly the requested number of characters.
pub mod tiling;

/// Seeded pseudo-random sampler.
///
/// Wraps a `StdRng` together with the seed it was built from so the seed
/// can be logged and replayed. Not exposed publicly.
mod sampler;

/// Public string builders and the `test_i18n_strings` driver.
pub mod generator;

/// Iteration driver settings (length and excluded classes).
pub mod input;
