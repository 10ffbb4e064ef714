//! Internationalization test string generation library.
//!
//! This crate builds strings from several Unicode character classes
//! (Chinese, German, English, numeric, white space, syntax) to exercise
//! the i18n edge cases of a system under test:
//! - Deterministic tiling of a class into fixed-length strings
//! - Seeded random sampling, replayable from a logged seed
//! - Random "sentences" with inserted spaces and a trailing period
//! - A driver that feeds every class to a test callback
//!
//! The library never installs a logger; diagnostics go through the `log`
//! facade and are visible once the host test suite initializes one.

/// Character classes, string builders and the iteration driver.
pub mod i18n;

/// Error type shared by every fallible operation.
pub mod error;

pub use error::I18nError;
pub use i18n::charset::CharacterClass;
pub use i18n::generator::*;
pub use i18n::input::{Exclusion, TestStringsInput};

/// Version of this crate, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
