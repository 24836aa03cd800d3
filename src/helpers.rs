//! Prompt-driven helpers, bound to a concrete host at construction time.

use std::path::Path;

use anyhow::Result;

use crate::host::{MetadataCache, Notifier, Prompter};
use crate::parsing::parse_tags;

/// Sentinel entry offered first in selection lists when "no choice" is
/// allowed.
const NONE_CHOICE: &str = "(none)";

/// The helper set for interactive note templates.
///
/// Pure transforms live at the crate root as free functions; everything here
/// goes through the injected host capabilities, so a template script and a
/// unit test construct the same value over different implementations.
pub struct Helpers<P, N, M> {
	prompter: P,
	notifier: N,
	metadata: M,
}

impl<P: Prompter, N: Notifier, M: MetadataCache> Helpers<P, N, M> {
	pub fn new(prompter: P, notifier: N, metadata: M) -> Self {
		Helpers { prompter, notifier, metadata }
	}

	/// Prompts until `validate` accepts the answer.
	///
	/// Each rejected answer triggers a warning notification carrying
	/// `error_message` (or a generic fallback) and a fresh prompt, so the
	/// returned value always satisfies the predicate. There is no retry cap:
	/// a predicate that never accepts keeps the caller suspended
	/// indefinitely.
	pub fn re_prompt(
		&self,
		message: &str,
		validate: impl Fn(&str) -> bool,
		error_message: Option<&str>,
		default: &str,
	) -> Result<String> {
		loop {
			let value = self.prompter.prompt(message, default)?;
			if validate(&value) {
				return Ok(value);
			}
			self.notifier.notify(&format!("⚠️ {}", error_message.unwrap_or("Invalid input")));
		}
	}

	/// Single-choice selection over `options`.
	///
	/// With `allow_none` a `"(none)"` entry is offered first; choosing it
	/// yields an empty string. No validation beyond what the prompt itself
	/// enforces.
	pub fn prompt_select(&self, label: &str, options: &[String], allow_none: bool) -> Result<String> {
		let choices: Vec<String> = if allow_none {
			std::iter::once(NONE_CHOICE.to_string()).chain(options.iter().cloned()).collect()
		} else {
			options.to_vec()
		};
		let value = self.prompter.suggest(&choices, &choices, true, label)?;
		if allow_none && value == NONE_CHOICE { Ok(String::new()) } else { Ok(value) }
	}

	/// Prompts for comma-separated tags; returns them trimmed, in order,
	/// with empty segments dropped.
	pub fn prompt_tags(&self, default: &str) -> Result<Vec<String>> {
		let raw = self.prompter.prompt("🏷️ Tags (comma-separated)", default)?;
		Ok(parse_tags(&raw))
	}

	/// The `fileClass` frontmatter field of `file`, if the metadata cache
	/// knows one. Missing file, missing frontmatter, and missing field all
	/// read as `None`.
	pub fn frontmatter_type(&self, file: &Path) -> Option<String> {
		self.metadata.frontmatter(file)?.get("fileClass")?.as_str().map(ToString::to_string)
	}
}
