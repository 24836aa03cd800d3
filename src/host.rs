//! Capability traits for the plugin host.
//!
//! Scripts run inside a host that owns the UI and the note index; this crate
//! never reaches for those as globals. Each capability is a narrow trait the
//! caller implements once and hands to [`Helpers`](crate::Helpers), which
//! also keeps every prompt-driven helper testable with a scripted double.

use std::path::Path;

use anyhow::Result;

/// Frontmatter as the host caches it: the structured key-value metadata
/// embedded at the head of a note file.
pub type Frontmatter = serde_json::Map<String, serde_json::Value>;

/// Interactive prompts.
///
/// Both calls suspend the caller until the host resolves the interaction.
/// Neither has a timeout; cancellation, if any, is the host's business.
pub trait Prompter {
	/// Single-line text prompt. The returned text may be empty.
	fn prompt(&self, message: &str, default: &str) -> Result<String>;

	/// Single-choice selection over `values`, rendered as `display`. The
	/// host constrains the answer to the presented set.
	fn suggest(&self, display: &[String], values: &[String], required: bool, label: &str) -> Result<String>;
}

/// Fire-and-forget user-visible notifications.
pub trait Notifier {
	fn notify(&self, message: &str);
}

/// Read-only view of the host's note-metadata index.
pub trait MetadataCache {
	/// Frontmatter for `file`, or `None` when the file is unknown to the
	/// index or carries no frontmatter.
	fn frontmatter(&self, file: &Path) -> Option<Frontmatter>;
}
