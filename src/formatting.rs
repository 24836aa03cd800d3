//! String normalization.

/// Slugifies arbitrary text into `[a-z0-9_]`.
///
/// Trims surrounding whitespace, lowercases, collapses every run of other
/// characters into a single underscore, and drops the underscore at either
/// edge. Total and idempotent; all-punctuation input yields `""`.
///
/// # Examples
/// ```
/// use vault_helpers::slugify;
///
/// assert_eq!(slugify(" Hello, World! "), "hello_world");
/// assert_eq!(slugify("2024 -- notes"), "2024_notes");
/// ```
pub fn slugify(input: &str) -> String {
	let mut slug = String::with_capacity(input.len());
	let mut gap = false;
	for c in input.trim().to_lowercase().chars() {
		if c.is_ascii_lowercase() || c.is_ascii_digit() {
			if gap && !slug.is_empty() {
				slug.push('_');
			}
			slug.push(c);
			gap = false;
		} else {
			gap = true;
		}
	}
	slug
}
