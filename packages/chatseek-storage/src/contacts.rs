use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use chatseek_domain::RecipientId;
use chatseek_search::ContactsDirectory;

use crate::Fixture;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactName {
	pub recipient_id: RecipientId,
	#[serde(default)]
	pub display_name: Option<String>,
	#[serde(default)]
	pub profile_name: Option<String>,
}

/// Address book lookups. Unknown recipients display as their id.
#[derive(Debug, Clone, Default)]
pub struct ContactsBook {
	names: HashMap<RecipientId, ContactName>,
}
impl ContactsBook {
	pub fn from_fixture(fixture: &Fixture) -> Self {
		let mut book = Self::default();

		for contact in &fixture.contacts {
			book.insert(contact.clone());
		}

		book
	}

	/// Adds or replaces the names of a recipient.
	pub fn insert(&mut self, contact: ContactName) {
		self.names.insert(contact.recipient_id.clone(), contact);
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}
impl ContactsDirectory for ContactsBook {
	fn display_name(&self, recipient_id: &RecipientId) -> String {
		self.names
			.get(recipient_id)
			.and_then(|contact| contact.display_name.as_deref())
			.map(str::trim)
			.filter(|name| !name.is_empty())
			.map(str::to_string)
			.unwrap_or_else(|| recipient_id.to_string())
	}

	fn profile_name(&self, recipient_id: &RecipientId) -> Option<String> {
		self.names
			.get(recipient_id)
			.and_then(|contact| contact.profile_name.as_deref())
			.map(str::trim)
			.filter(|name| !name.is_empty())
			.map(str::to_string)
	}
}
