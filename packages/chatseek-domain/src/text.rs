//! Text normalization shared by list filtering and the in-memory index.

use std::iter;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};
use unicode_segmentation::UnicodeSegmentation;

/// Normalized text plus, for every byte of it, the byte offset in the source it came from.
struct Folded {
	text: String,
	origins: Vec<usize>,
}

/// Folds grapheme by grapheme so each output byte can be traced back to its source cluster.
fn fold(input: &str) -> Folded {
	let mut text = String::with_capacity(input.len());
	let mut origins = Vec::with_capacity(input.len());
	let mut pending_space = false;

	for (offset, grapheme) in input.grapheme_indices(true) {
		for ch in grapheme.nfkc().flat_map(char::to_lowercase) {
			if ch.is_whitespace() {
				pending_space = true;

				continue;
			}

			if pending_space && !text.is_empty() {
				text.push(' ');
				origins.push(offset);
			}

			pending_space = false;

			text.push(ch);
			origins.extend(iter::repeat_n(offset, ch.len_utf8()));
		}
	}

	Folded { text, origins }
}

/// NFKC-folds, lowercases and collapses whitespace runs into single spaces.
pub fn normalize_for_match(input: &str) -> String {
	fold(input).text
}

/// [`normalize_for_match`] with diacritics removed, for alphabetical ordering of names.
pub fn collation_key(input: &str) -> String {
	normalize_for_match(input).nfkd().filter(|ch| !is_combining_mark(*ch)).nfc().collect()
}

pub fn is_blank(query: &str) -> bool {
	query.trim().is_empty()
}

/// Case-insensitive, whitespace-normalized substring test. A blank query matches everything.
pub fn matches_query(haystack: &str, query: &str) -> bool {
	let needle = normalize_for_match(query);

	if needle.is_empty() {
		return true;
	}

	normalize_for_match(haystack).contains(&needle)
}

/// Byte offset of the first normalized occurrence of `query` in `haystack`, if any.
///
/// The offset refers to the original `haystack`, so callers can cut snippets from it.
pub fn find_match(haystack: &str, query: &str) -> Option<usize> {
	let needle = normalize_for_match(query);

	if needle.is_empty() {
		return None;
	}

	let folded = fold(haystack);
	let hit = folded.text.find(&needle)?;

	folded.origins.get(hit).copied()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn collapses_whitespace_and_case() {
		assert_eq!(normalize_for_match("  Alice \t\n Smith "), "alice smith");
	}

	#[test]
	fn folds_compatibility_forms() {
		assert_eq!(normalize_for_match("Ａｌｉｃｅ"), "alice");
	}

	#[test]
	fn find_match_points_into_original_text() {
		let text = "Lunch with  BOB tomorrow";
		let offset = find_match(text, "bob").expect("Expected a match.");

		assert_eq!(&text[offset..offset + 3], "BOB");
		assert_eq!(find_match(text, "with bob"), Some(6));
		assert_eq!(find_match(text, "carol"), None);
		assert_eq!(find_match(text, "  "), None);
	}

	#[test]
	fn find_match_maps_folded_text_back_to_source() {
		let text = "Ｈｉ  Ｂｏｂ and Zoë";

		assert_eq!(find_match(text, "bob"), text.find('Ｂ'));
		assert_eq!(find_match(text, "zoë"), text.find('Z'));
	}

	#[test]
	fn find_match_handles_long_text() {
		let text = format!("{}needle", "word ".repeat(20_000));

		assert_eq!(find_match(&text, "NEEDLE"), Some(100_000));
	}

	#[test]
	fn collation_key_drops_diacritics() {
		assert_eq!(collation_key("  Émile "), "emile");
		assert!(collation_key("Émile") < collation_key("Zoe"));
	}
}
