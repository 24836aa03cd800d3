//! Random id generation for note filenames.

use rand::Rng;

/// Characters an id may contain: the base-36 digit set.
const ID_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Conventional id length used by note templates.
pub const DEFAULT_ID_LENGTH: usize = 4;

/// A pseudo-random lowercase alphanumeric id of exactly `length` characters.
///
/// Not cryptographically secure and not unique across calls; at the lengths
/// this is used for, collisions are possible and callers own the consequence.
pub fn random_id(length: usize) -> String {
	let mut rng = rand::rng();
	(0..length).map(|_| ID_CHARS[rng.random_range(0..ID_CHARS.len())] as char).collect()
}
