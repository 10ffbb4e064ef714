use crate::error::I18nError;

/// Builds strings of exactly `length` characters from a character table.
///
/// # Parameters
/// - `chars`: The character table, in order.
/// - `length`: Target length in characters. `None` uses the table size.
///
/// # Behavior
/// - Table size == `length`: a single string holding the whole table.
/// - Table size < `length`: the table is repeated until long enough, then
///   truncated to `length`. A single string is returned.
/// - Table size > `length`: the table is cut into consecutive chunks of
///   `length` characters. The last partial chunk is padded with characters
///   taken from the start of the table.
///
/// # Errors
/// Returns `InvalidArgument` if the table is empty or `length` is zero.
///
/// # Notes
/// - Lengths are counted in `char`s, never in bytes.
/// - The result is never empty.
pub fn strings_of_length(chars: &[char], length: Option<usize>) -> Result<Vec<String>, I18nError> {
	if chars.is_empty() {
		return Err(I18nError::invalid_argument("character table must not be empty"));
	}

	let length = length.unwrap_or(chars.len());
	if length == 0 {
		return Err(I18nError::invalid_argument("string length must be at least 1"));
	}

	if chars.len() <= length {
		return Ok(vec![chars.iter().cycle().take(length).collect()]);
	}

	let mut strings = Vec::with_capacity(chars.len().div_ceil(length));
	for chunk in chars.chunks(length) {
		let mut string: String = chunk.iter().collect();
		// Pad the remainder from the start of the table
		string.extend(&chars[..length - chunk.len()]);
		strings.push(string);
	}

	Ok(strings)
}
