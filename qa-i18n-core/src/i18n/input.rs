use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::I18nError;
use super::charset::CharacterClass;

/// Classes fed to the iteration driver, in iteration order.
///
/// `Syntax` and `WhiteSpace` can be excluded, the others always run.
pub const DRIVER_CLASSES: [CharacterClass; 5] = [
	CharacterClass::Chinese,
	CharacterClass::German,
	CharacterClass::MaxLength,
	CharacterClass::Syntax,
	CharacterClass::WhiteSpace,
];

/// Character classes that can be left out of the iteration driver,
/// for inputs that reject them.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Exclusion {
	Syntax,
	WhiteSpace,
}

impl Exclusion {
	/// The character class this exclusion removes.
	pub fn class(self) -> CharacterClass {
		match self {
			Exclusion::Syntax => CharacterClass::Syntax,
			Exclusion::WhiteSpace => CharacterClass::WhiteSpace,
		}
	}
}

impl fmt::Display for Exclusion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.class().name())
	}
}

impl FromStr for Exclusion {
	type Err = I18nError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"syntax" => Ok(Exclusion::Syntax),
			"white_space" => Ok(Exclusion::WhiteSpace),
			_ => Err(I18nError::UnknownExclusion(s.to_owned())),
		}
	}
}

/// Settings of the iteration driver.
///
/// # Responsibilities
/// - Hold the requested string length (validated, never zero)
/// - Track excluded classes without duplicates
/// - Yield the classes to iterate, in driver order
///
/// Can be deserialized from a host configuration file; `exclude` is optional
/// there and the length is validated the same way as in [`TestStringsInput::new`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawTestStringsInput")]
pub struct TestStringsInput {
	/// Length, in characters, of every produced string.
	length: usize,

	/// Classes left out of the iteration.
	exclude: Vec<Exclusion>,
}

#[derive(Deserialize)]
struct RawTestStringsInput {
	length: usize,
	#[serde(default)]
	exclude: Vec<Exclusion>,
}

impl TryFrom<RawTestStringsInput> for TestStringsInput {
	type Error = I18nError;

	fn try_from(raw: RawTestStringsInput) -> Result<Self, Self::Error> {
		let input = Self::new(raw.length)?;
		Ok(raw.exclude.into_iter().fold(input, Self::exclude))
	}
}

impl TestStringsInput {
	/// Creates an input producing strings of `length` characters, nothing excluded.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `length` is zero.
	pub fn new(length: usize) -> Result<Self, I18nError> {
		Self::check_length(length)?;
		Ok(Self { length, exclude: Vec::new() })
	}

	/// Returns the requested string length.
	pub fn length(&self) -> usize {
		self.length
	}

	/// Sets the string length.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `length` is zero.
	pub fn set_length(&mut self, length: usize) -> Result<(), I18nError> {
		Self::check_length(length)?;
		self.length = length;
		Ok(())
	}

	/// Excludes a class from the iteration. Excluding twice is a no-op.
	pub fn exclude(mut self, exclusion: Exclusion) -> Self {
		if !self.exclude.contains(&exclusion) {
			self.exclude.push(exclusion);
		}
		self
	}

	/// Returns the excluded classes.
	pub fn exclusions(&self) -> &[Exclusion] {
		&self.exclude
	}

	/// Returns the classes to iterate, in driver order.
	pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
		DRIVER_CLASSES
			.into_iter()
			.filter(|class| !self.exclude.iter().any(|exclusion| exclusion.class() == *class))
	}

	fn check_length(length: usize) -> Result<(), I18nError> {
		if length == 0 {
			return Err(I18nError::invalid_argument("string length must be at least 1"));
		}
		Ok(())
	}
}
