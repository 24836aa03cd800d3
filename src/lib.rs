//! Helper utilities for note-taking automation scripts running under a
//! plugin host.
//!
//! Pure transforms (slugs, ids, dates, lists) are free functions. Anything
//! that touches the host — prompts, notifications, metadata lookups — hangs
//! off [`Helpers`], which is constructed over the capability traits in
//! [`host`] so scripts and tests alike decide what a "prompt" actually is.

mod dates;
mod formatting;
mod helpers;
pub mod host;
mod ids;
mod parsing;

pub use dates::{date_to_millis, is_valid_date};
pub use formatting::slugify;
pub use helpers::Helpers;
pub use ids::{DEFAULT_ID_LENGTH, random_id};
pub use parsing::{extract_list, parse_tags};
