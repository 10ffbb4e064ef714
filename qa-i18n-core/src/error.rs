use thiserror::Error;

/// Errors returned by the string builders and the iteration driver.
///
/// Any error aborts the call immediately; nothing is retried and no
/// partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
	/// An argument is outside the accepted domain (zero length, short sentence, ...).
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// A character class name did not match any known class.
	#[error("unknown character class: {0}")]
	UnknownCharacterClass(String),

	/// An exclusion tag did not match `syntax` or `white_space`.
	#[error("unknown exclusion: {0}")]
	UnknownExclusion(String),
}

impl I18nError {
	pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
		Self::InvalidArgument(message.into())
	}
}
