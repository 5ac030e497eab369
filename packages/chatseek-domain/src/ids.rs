use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(String);
		impl $name {
			pub fn new(value: impl Into<String>) -> Self {
				Self(value.into())
			}

			pub fn as_str(&self) -> &str {
				&self.0
			}
		}
		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.0)
			}
		}
		impl From<&str> for $name {
			fn from(value: &str) -> Self {
				Self(value.to_string())
			}
		}
		impl From<String> for $name {
			fn from(value: String) -> Self {
				Self(value)
			}
		}
	};
}

string_id! {
	/// Stable key of a contact or participant, independent of any display name.
	RecipientId
}

string_id! {
	/// Stable unique id of a conversation record.
	ConversationId
}

string_id! {
	MessageId
}
