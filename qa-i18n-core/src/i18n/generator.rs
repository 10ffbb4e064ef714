use log::debug;

use crate::error::I18nError;
use super::charset::CharacterClass;
use super::input::{Exclusion, TestStringsInput};
use super::sampler::{MAX_WORD_GAP, RandomSampler};

/// Default number of characters taken from each class by [`get_test_string`].
pub const DEFAULT_TEST_STRING_LENGTH: usize = 5;

/// Shortest sentence the sentence builders accept (one character and the period).
pub const MIN_SENTENCE_LENGTH: usize = 2;

const MULTI_LANG_CLASSES: [CharacterClass; 3] =
	[CharacterClass::Chinese, CharacterClass::English, CharacterClass::German];

const ALPHA_NUMERIC_CLASSES: [CharacterClass; 2] = [CharacterClass::English, CharacterClass::Numeric];

const TEST_STRING_CLASSES: [CharacterClass; 4] = [
	CharacterClass::Chinese,
	CharacterClass::English,
	CharacterClass::German,
	CharacterClass::Syntax,
];

/// Returns every character of `class`, in table order.
///
/// Equivalent to tiling the class at its natural length.
pub fn get_i18n_string(class: CharacterClass) -> String {
	class.chars().iter().collect()
}

/// Returns a short mixed string: the first `len` characters of the Chinese,
/// English, German and syntax classes, concatenated in that order.
///
/// A class shorter than `len` contributes all of its characters.
pub fn get_test_string(len: usize) -> String {
	TEST_STRING_CLASSES
		.iter()
		.flat_map(|class| class.chars().iter().take(len))
		.collect()
}

/// [`get_test_string`] with [`DEFAULT_TEST_STRING_LENGTH`].
pub fn default_test_string() -> String {
	get_test_string(DEFAULT_TEST_STRING_LENGTH)
}

/// Generates a random string from the union of `classes`. Characters can repeat.
///
/// # Parameters
/// - `classes`: Classes pooled together, in order.
/// - `length`: Length of the result, in characters.
/// - `seed`: Replays a previous output when given. A fresh seed is drawn
///   (and logged at debug level) otherwise.
///
/// # Behavior
/// The pooled classes are repeated `length` times and `length` slots are
/// sampled without replacement, then joined in draw order. The same seed
/// and inputs always produce the same string.
///
/// # Errors
/// Returns `InvalidArgument` if `classes` is empty.
pub fn random_characters(
	classes: &[CharacterClass],
	length: usize,
	seed: Option<u64>,
) -> Result<String, I18nError> {
	if classes.is_empty() {
		return Err(I18nError::invalid_argument("at least one character class is required"));
	}
	Ok(sample_classes(classes, length, seed))
}

/// Random string of Chinese, English and German characters.
pub fn random_multi_lang(length: usize, seed: Option<u64>) -> String {
	sample_classes(&MULTI_LANG_CLASSES, length, seed)
}

/// Random string of Chinese characters.
pub fn random_chinese_characters(length: usize, seed: Option<u64>) -> String {
	sample_classes(&[CharacterClass::Chinese], length, seed)
}

/// Random string of English characters.
pub fn random_english(length: usize, seed: Option<u64>) -> String {
	sample_classes(&[CharacterClass::English], length, seed)
}

/// Random string of English and numeric characters.
pub fn random_alpha_numeric(length: usize, seed: Option<u64>) -> String {
	sample_classes(&ALPHA_NUMERIC_CLASSES, length, seed)
}

/// Random string of German characters.
pub fn random_german(length: usize, seed: Option<u64>) -> String {
	sample_classes(&[CharacterClass::German], length, seed)
}

/// Random sentence of Chinese, English and German characters.
///
/// See [`random_english_sentence`] for the sentence layout.
pub fn random_multi_lang_sentence(length: usize, seed: Option<u64>) -> Result<String, I18nError> {
	random_sentence(&MULTI_LANG_CLASSES, length, seed)
}

/// Random English sentence of exactly `length` characters.
///
/// Spaces are inserted every 1 to 12 characters and the last character is a
/// period. Space positions come from the same seeded sampler as the
/// characters, so a seed replays the whole sentence.
///
/// # Errors
/// Returns `InvalidArgument` if `length` is less than [`MIN_SENTENCE_LENGTH`].
pub fn random_english_sentence(length: usize, seed: Option<u64>) -> Result<String, I18nError> {
	random_sentence(&[CharacterClass::English], length, seed)
}

fn pool_of(classes: &[CharacterClass]) -> Vec<char> {
	classes.iter().flat_map(|class| class.chars().iter().copied()).collect()
}

fn sample_classes(classes: &[CharacterClass], length: usize, seed: Option<u64>) -> String {
	RandomSampler::new(seed).sample(&pool_of(classes), length).into_iter().collect()
}

fn random_sentence(classes: &[CharacterClass], length: usize, seed: Option<u64>) -> Result<String, I18nError> {
	if length < MIN_SENTENCE_LENGTH {
		return Err(I18nError::invalid_argument("length of sentence must be at least 2"));
	}

	let mut sampler = RandomSampler::new(seed);
	let mut chars = sampler.sample(&pool_of(classes), length);

	// Stop once the next gap could land on the trailing period
	let mut index = 0;
	while index + MAX_WORD_GAP < length - 1 {
		index += sampler.gap();
		chars.insert(index, ' ');
	}

	chars.truncate(length - 1);
	chars.push('.');
	Ok(chars.into_iter().collect())
}

/// Tiles every class of `input` at the requested length, in driver order.
fn tiled_classes(input: &TestStringsInput) -> Result<Vec<(CharacterClass, Vec<String>)>, I18nError> {
	input
		.classes()
		.map(|class| class.tiled(Some(input.length())).map(|strings| (class, strings)))
		.collect()
}

/// Returns every string the iteration driver would produce, tagged with its class.
///
/// Classes come in driver order: Chinese, German, max length, syntax,
/// white space (minus exclusions). Each string has exactly
/// `input.length()` characters.
pub fn i18n_strings(input: &TestStringsInput) -> Result<Vec<(CharacterClass, String)>, I18nError> {
	Ok(tiled_classes(input)?
		.into_iter()
		.flat_map(|(class, strings)| strings.into_iter().map(move |string| (class, string)))
		.collect())
}

/// Runs `callback` once per string of [`i18n_strings`], stopping at the first error.
///
/// All strings are built before the first call, so an invalid input fails
/// without running the callback. Callback errors are returned unmodified.
pub fn run_i18n_strings<F, E>(input: &TestStringsInput, mut callback: F) -> Result<(), E>
where
	F: FnMut(&str) -> Result<(), E>,
	E: From<I18nError>,
{
	for (class, strings) in tiled_classes(input)? {
		debug!("Testing {} characters", class.label());
		for string in &strings {
			callback(string.as_str())?;
		}
	}
	Ok(())
}

/// Feeds strings of `length` characters from every i18n class to `callback`.
///
/// Typical use inside a test:
///
/// ```
/// use qa_i18n_core::{test_i18n_strings, Exclusion};
///
/// let mut names = Vec::new();
/// test_i18n_strings(10, &[Exclusion::WhiteSpace], |string| {
///     names.push(format!("User{string}"));
/// })
/// .unwrap();
/// assert!(names.iter().all(|name| name.chars().count() == 14));
/// ```
///
/// # Errors
/// Returns `InvalidArgument` if `length` is zero, before any callback runs.
pub fn test_i18n_strings<F>(length: usize, exclude: &[Exclusion], mut callback: F) -> Result<(), I18nError>
where
	F: FnMut(&str),
{
	try_test_i18n_strings(length, exclude, |string| {
		callback(string);
		Ok(())
	})
}

/// [`test_i18n_strings`] with a fallible callback.
///
/// The first callback error aborts the iteration and is returned as is.
pub fn try_test_i18n_strings<F, E>(length: usize, exclude: &[Exclusion], callback: F) -> Result<(), E>
where
	F: FnMut(&str) -> Result<(), E>,
	E: From<I18nError>,
{
	let input = exclude
		.iter()
		.fold(TestStringsInput::new(length)?, |input, exclusion| input.exclude(*exclusion));
	run_i18n_strings(&input, callback)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_i18n_string() {
		assert_eq!(get_i18n_string(CharacterClass::German), "ÄäÖöÜü");
		assert_eq!(get_i18n_string(CharacterClass::Numeric), "0123456789");
		assert_eq!(get_i18n_string(CharacterClass::MaxLength), "ß");
		for class in CharacterClass::ALL {
			assert_eq!(class.tiled(None).unwrap(), vec![get_i18n_string(class)]);
		}
	}

	#[test]
	fn test_get_test_string() {
		assert_eq!(default_test_string(), "一丁丂七丄ABCDEÄäÖöÜ&+/\\\"");
		assert_eq!(get_test_string(1), "一AÄ&");
		assert_eq!(get_test_string(0), "");
		// German only has six characters
		assert_eq!(get_test_string(8).chars().count(), 8 + 8 + 6 + 8);
	}

	#[test]
	fn test_random_characters_requires_a_class() {
		let result = random_characters(&[], 5, Some(1));
		assert!(matches!(result, Err(I18nError::InvalidArgument(_))));
	}

	#[test]
	fn test_random_characters_pool() {
		let string = random_characters(&[CharacterClass::Numeric], 40, None).unwrap();
		assert_eq!(string.chars().count(), 40);
		assert!(string.chars().all(|c| c.is_ascii_digit()));
		assert_eq!(random_characters(&[CharacterClass::Numeric], 0, None).unwrap(), "");
	}

	#[test]
	fn test_wrappers_use_their_classes() {
		let german = CharacterClass::German.chars();
		assert!(random_german(20, None).chars().all(|c| german.contains(&c)));

		let chinese = CharacterClass::Chinese.chars();
		assert!(random_chinese_characters(20, None).chars().all(|c| chinese.contains(&c)));

		let english = CharacterClass::English.chars();
		assert!(random_english(20, None).chars().all(|c| english.contains(&c)));

		assert!(
			random_alpha_numeric(60, None)
				.chars()
				.all(|c| english.contains(&c) || c.is_ascii_digit())
		);

		let pool = pool_of(&MULTI_LANG_CLASSES);
		assert!(random_multi_lang(60, None).chars().all(|c| pool.contains(&c)));
	}

	#[test]
	fn test_seed_replays_output() {
		assert_eq!(random_multi_lang(30, Some(42)), random_multi_lang(30, Some(42)));
		assert_eq!(random_english(30, Some(5)), random_english(30, Some(5)));
		assert_eq!(
			random_multi_lang_sentence(30, Some(42)).unwrap(),
			random_multi_lang_sentence(30, Some(42)).unwrap()
		);
	}

	#[test]
	fn test_different_seeds_differ() {
		assert_ne!(random_multi_lang(30, Some(1)), random_multi_lang(30, Some(2)));
	}

	#[test]
	fn test_sentence_layout() {
		for length in MIN_SENTENCE_LENGTH..=60 {
			for sentence in [
				random_english_sentence(length, None).unwrap(),
				random_multi_lang_sentence(length, None).unwrap(),
			] {
				assert_eq!(sentence.chars().count(), length);
				assert!(sentence.ends_with('.'));
			}
		}
	}

	#[test]
	fn test_sentence_words_are_short() {
		// English has no space, so every run between spaces comes from the sampler
		let sentence = random_english_sentence(200, Some(9)).unwrap();
		let body = sentence.trim_end_matches('.');
		assert!(body.contains(' '));
		assert!(body.split(' ').all(|word| word.chars().count() <= 12));
	}

	#[test]
	fn test_sentence_too_short() {
		for length in 0..MIN_SENTENCE_LENGTH {
			assert_eq!(
				random_english_sentence(length, None),
				Err(I18nError::InvalidArgument("length of sentence must be at least 2".to_owned()))
			);
			assert!(random_multi_lang_sentence(length, Some(1)).is_err());
		}
	}

	#[test]
	fn test_i18n_strings_order() {
		let input = TestStringsInput::new(33).unwrap();
		let strings = i18n_strings(&input).unwrap();
		let classes: Vec<CharacterClass> = strings.iter().map(|(class, _)| *class).collect();
		assert_eq!(
			classes,
			vec![
				CharacterClass::Chinese,
				CharacterClass::German,
				CharacterClass::MaxLength,
				CharacterClass::Syntax,
				CharacterClass::WhiteSpace,
			]
		);
		assert_eq!(strings[0].1, get_i18n_string(CharacterClass::Chinese));
		assert_eq!(strings[2].1, "ß".repeat(33));
	}

	#[test]
	fn test_driver_calls_back_every_string() {
		let mut seen = Vec::new();
		test_i18n_strings(2, &[], |string| seen.push(string.to_owned())).unwrap();

		// 17 Chinese, 3 German, 1 max length, 8 syntax, 6 white space
		assert_eq!(seen.len(), 17 + 3 + 1 + 8 + 6);
		assert_eq!(seen[17], "Ää");
		assert_eq!(seen[20], "ßß");
		assert_eq!(seen[21], "&+");
		assert!(seen.iter().all(|string| string.chars().count() == 2));
	}

	#[test]
	fn test_driver_exclusions() {
		let mut seen = Vec::new();
		test_i18n_strings(15, &[Exclusion::Syntax, Exclusion::WhiteSpace], |string| {
			seen.push(string.to_owned())
		})
		.unwrap();

		assert_eq!(seen.len(), 3 + 1 + 1);
		assert!(!seen.contains(&get_i18n_string(CharacterClass::Syntax)));
	}

	#[test]
	fn test_driver_zero_length_never_calls_back() {
		let mut calls = 0;
		let result = test_i18n_strings(0, &[], |_| calls += 1);
		assert!(matches!(result, Err(I18nError::InvalidArgument(_))));
		assert_eq!(calls, 0);
	}

	#[derive(Debug, PartialEq)]
	enum CheckError {
		Rejected(String),
		Setup(I18nError),
	}

	impl From<I18nError> for CheckError {
		fn from(error: I18nError) -> Self {
			CheckError::Setup(error)
		}
	}

	#[test]
	fn test_try_driver_stops_at_first_error() {
		let mut calls = 0;
		let result = try_test_i18n_strings(6, &[], |string| {
			calls += 1;
			if string.contains('ß') {
				return Err(CheckError::Rejected(string.to_owned()));
			}
			Ok(())
		});

		// 6 Chinese strings and the German string pass first
		assert_eq!(result, Err(CheckError::Rejected("ßßßßßß".to_owned())));
		assert_eq!(calls, 6 + 1 + 1);
	}

	#[test]
	fn test_try_driver_setup_error() {
		let result = try_test_i18n_strings(0, &[], |_| Ok::<(), CheckError>(()));
		assert!(matches!(result, Err(CheckError::Setup(I18nError::InvalidArgument(_)))));
	}
}
