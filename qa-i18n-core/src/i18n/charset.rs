use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::I18nError;
use super::tiling;

static CHINESE_CHARACTERS: LazyLock<Vec<char>> = LazyLock::new(|| ('\u{4E00}'..='\u{4E20}').collect());

static GERMAN_CHARACTERS: [char; 6] = ['\u{00C4}', '\u{00E4}', '\u{00D6}', '\u{00F6}', '\u{00DC}', '\u{00FC}'];

// Includes the punctuation between 'Z' and 'a'.
static ENGLISH_CHARACTERS: LazyLock<Vec<char>> = LazyLock::new(|| ('\u{0041}'..='\u{007A}').collect());

static NUMERIC_CHARACTERS: LazyLock<Vec<char>> = LazyLock::new(|| ('0'..='9').collect());

static WHITE_SPACE_CHARACTERS: LazyLock<Vec<char>> =
	LazyLock::new(|| std::iter::once(' ').chain('\u{2002}'..='\u{200B}').collect());

static MAX_LENGTH_CHARACTERS: [char; 1] = ['\u{00DF}'];

static SYNTAX_CHARACTERS: [char; 15] = ['&', '+', '/', '\\', '"', '\'', '(', ')', '?', '.', '#', '@', '_', '-', '~'];

/// A named, ordered set of code points used as a sampling or tiling source.
///
/// Each variant maps to an immutable table built once per process.
/// The snake-case name (`white_space`, `max_length`, ...) is used for
/// parsing, display and serde.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
	Chinese,
	German,
	English,
	Numeric,
	WhiteSpace,
	MaxLength,
	Syntax,
}

impl CharacterClass {
	/// Every class, in declaration order.
	pub const ALL: [CharacterClass; 7] = [
		CharacterClass::Chinese,
		CharacterClass::German,
		CharacterClass::English,
		CharacterClass::Numeric,
		CharacterClass::WhiteSpace,
		CharacterClass::MaxLength,
		CharacterClass::Syntax,
	];

	/// Returns the characters of this class, in table order.
	pub fn chars(self) -> &'static [char] {
		match self {
			CharacterClass::Chinese => CHINESE_CHARACTERS.as_slice(),
			CharacterClass::German => &GERMAN_CHARACTERS,
			CharacterClass::English => ENGLISH_CHARACTERS.as_slice(),
			CharacterClass::Numeric => NUMERIC_CHARACTERS.as_slice(),
			CharacterClass::WhiteSpace => WHITE_SPACE_CHARACTERS.as_slice(),
			CharacterClass::MaxLength => &MAX_LENGTH_CHARACTERS,
			CharacterClass::Syntax => &SYNTAX_CHARACTERS,
		}
	}

	/// Number of characters in the class (its natural string length).
	pub fn size(self) -> usize {
		self.chars().len()
	}

	/// Snake-case name of the class.
	pub fn name(self) -> &'static str {
		match self {
			CharacterClass::Chinese => "chinese",
			CharacterClass::German => "german",
			CharacterClass::English => "english",
			CharacterClass::Numeric => "numeric",
			CharacterClass::WhiteSpace => "white_space",
			CharacterClass::MaxLength => "max_length",
			CharacterClass::Syntax => "syntax",
		}
	}

	/// Human-readable label used in log records.
	pub fn label(self) -> &'static str {
		match self {
			CharacterClass::Chinese => "Chinese",
			CharacterClass::German => "German",
			CharacterClass::English => "English",
			CharacterClass::Numeric => "numeric",
			CharacterClass::WhiteSpace => "white space",
			CharacterClass::MaxLength => "max length",
			CharacterClass::Syntax => "syntax",
		}
	}

	/// Tiles this class into strings of `length` characters.
	///
	/// See [`tiling::strings_of_length`].
	pub fn tiled(self, length: Option<usize>) -> Result<Vec<String>, I18nError> {
		tiling::strings_of_length(self.chars(), length)
	}
}

impl fmt::Display for CharacterClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for CharacterClass {
	type Err = I18nError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim().to_ascii_lowercase();
		CharacterClass::ALL
			.into_iter()
			.find(|class| class.name() == name)
			.ok_or_else(|| I18nError::UnknownCharacterClass(s.to_owned()))
	}
}
