//! List and tag extraction from plain text.

/// Pulls list items out of multi-line text.
///
/// Lines are trimmed and one leading `"- "` bullet is stripped; blank lines
/// and `#` headings are dropped. Order is preserved, and already-clean text
/// passes through unchanged.
pub fn extract_list(text: &str) -> Vec<String> {
	text.lines()
		.map(|line| {
			let line = line.trim();
			line.strip_prefix("- ").unwrap_or(line)
		})
		.filter(|line| !line.is_empty() && !line.starts_with('#'))
		.map(ToString::to_string)
		.collect()
}

/// Parses a comma-separated string of tags into a vector.
/// Trims whitespace and filters out empty strings.
pub fn parse_tags(raw: &str) -> Vec<String> {
	raw.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
}
