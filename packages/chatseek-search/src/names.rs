use std::cmp::Ordering;

use chatseek_domain::{Account, text};

use crate::{ContactsDirectory, NameComparer, TextMatcher};

/// Alphabetical order by display name, ignoring case, spacing and diacritics.
///
/// Names that differ only in accents fall back to their accented forms, then to the recipient id.
pub struct DisplayNameComparer<'a> {
	directory: &'a dyn ContactsDirectory,
}
impl<'a> DisplayNameComparer<'a> {
	pub fn new(directory: &'a dyn ContactsDirectory) -> Self {
		Self { directory }
	}
}
impl NameComparer for DisplayNameComparer<'_> {
	fn compare(&self, lhs: &Account, rhs: &Account) -> Ordering {
		let lhs_name = self.directory.display_name(&lhs.recipient_id);
		let rhs_name = self.directory.display_name(&rhs.recipient_id);

		text::collation_key(&lhs_name)
			.cmp(&text::collation_key(&rhs_name))
			.then_with(|| text::normalize_for_match(&lhs_name).cmp(&text::normalize_for_match(&rhs_name)))
			.then_with(|| lhs.recipient_id.cmp(&rhs.recipient_id))
	}
}

/// Case-insensitive, whitespace-normalized substring matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedSubstring;
impl TextMatcher for NormalizedSubstring {
	fn matches(&self, haystack: &str, query: &str) -> bool {
		text::matches_query(haystack, query)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chatseek_domain::RecipientId;

	struct Names;
	impl ContactsDirectory for Names {
		fn display_name(&self, recipient_id: &RecipientId) -> String {
			match recipient_id.as_str() {
				"+1" => "bob".to_string(),
				"+2" => "Alice".to_string(),
				"+3" => "  alice ".to_string(),
				"+4" => "Émile".to_string(),
				"+5" => "Zoe".to_string(),
				"+6" => "Emile".to_string(),
				other => other.to_string(),
			}
		}

		fn profile_name(&self, _recipient_id: &RecipientId) -> Option<String> {
			None
		}
	}

	#[test]
	fn orders_by_display_name_ignoring_case() {
		let comparer = DisplayNameComparer::new(&Names);

		assert_eq!(comparer.compare(&Account::new("+2"), &Account::new("+1")), Ordering::Less);
		assert_eq!(comparer.compare(&Account::new("+1"), &Account::new("+2")), Ordering::Greater);
	}

	#[test]
	fn equal_names_fall_back_to_recipient_id() {
		let comparer = DisplayNameComparer::new(&Names);

		assert_eq!(comparer.compare(&Account::new("+2"), &Account::new("+3")), Ordering::Less);
	}

	#[test]
	fn accented_names_sort_with_their_base_letter() {
		let comparer = DisplayNameComparer::new(&Names);

		assert_eq!(comparer.compare(&Account::new("+4"), &Account::new("+5")), Ordering::Less);
		assert_eq!(comparer.compare(&Account::new("+2"), &Account::new("+4")), Ordering::Less);
		assert_eq!(comparer.compare(&Account::new("+6"), &Account::new("+4")), Ordering::Less);
	}

	#[test]
	fn indexing_text_joins_id_and_names() {
		assert_eq!(Names.indexing_text(&RecipientId::new("+1")), "+1 bob ");
	}
}
