use unicode_script::{Script, UnicodeScript};

/// Canonical form of a user query before embedding: lowercased, with every
/// character outside the ASCII-alphanumeric, Cyrillic-letter, and whitespace
/// classes replaced by a space, and whitespace runs collapsed to one space.
///
/// Applying it twice yields the same string as applying it once.
pub fn normalize_query(input: &str) -> String {
	let mut cleaned = String::with_capacity(input.len());

	for ch in input.chars() {
		for lower in ch.to_lowercase() {
			if is_query_char(lower) {
				cleaned.push(lower);
			} else {
				cleaned.push(' ');
			}
		}
	}

	cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_query_char(ch: char) -> bool {
	if ch.is_ascii_alphanumeric() || ch.is_whitespace() {
		return true;
	}

	ch.is_alphabetic() && ch.script() == Script::Cyrillic
}
