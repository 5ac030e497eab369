//! Aggregation, ranking and deduplication of full-text matches for a messaging client.
//!
//! The index, the store and the contacts directory are collaborators supplied by the caller
//! through the traits below. Everything here is synchronous: a query runs to completion inside
//! the caller's read scope and returns a [`ResultSet`] that borrows from that scope.

pub mod error;
pub mod filter;
pub mod index;
pub mod names;
pub mod projection;
pub mod result;
pub mod searcher;

use std::cmp::Ordering;

use chatseek_domain::{Account, Conversation, ConversationId, Message, MessageId, RecipientId};

pub use error::ClassificationFault;
pub use filter::Searcher;
pub use index::{IndexMatch, RawMatch};
pub use names::{DisplayNameComparer, NormalizedSubstring};
pub use result::{
	ContactResult, ConversationResult, MessageResult, ResultSet, SearchResult,
};
pub use searcher::{ConversationSearcher, SearchSettings};

/// Consistent read access to the message store.
///
/// Every reference handed out borrows the scope, so nothing built from it can outlive it.
pub trait ReadScope {
	fn conversation(&self, id: &ConversationId) -> Option<&Conversation>;

	fn message(&self, id: &MessageId) -> Option<&Message>;

	fn account(&self, recipient_id: &RecipientId) -> Option<&Account>;

	/// Most recent message of the conversation that counts as inbox activity.
	fn latest_inbox_message(&self, conversation_id: &ConversationId) -> Option<&Message>;
}

/// Full-text index over conversations, messages and contacts.
pub trait FullTextIndex
where
	Self: Send + Sync,
{
	/// Calls `visit` once per match for `search_text`, in no particular order.
	///
	/// The snippet is only present for message matches.
	fn enumerate<'s>(
		&self,
		search_text: &str,
		scope: &'s dyn ReadScope,
		visit: &mut dyn FnMut(IndexMatch<'s>, Option<&str>),
	);
}

/// Contact name resolution and the searchable text derived from it.
pub trait ContactsDirectory
where
	Self: Send + Sync,
{
	fn display_name(&self, recipient_id: &RecipientId) -> String;

	fn profile_name(&self, recipient_id: &RecipientId) -> Option<String>;

	/// Recipient id, contact name and profile name joined by spaces.
	fn indexing_text(&self, recipient_id: &RecipientId) -> String {
		let display_name = self.display_name(recipient_id);
		let profile_name = self.profile_name(recipient_id).unwrap_or_default();

		format!("{recipient_id} {display_name} {profile_name}")
	}
}

/// Orders contacts for display, typically alphabetically by display name.
pub trait NameComparer {
	fn compare(&self, lhs: &Account, rhs: &Account) -> Ordering;
}

/// Decides whether searchable text satisfies a user query.
pub trait TextMatcher
where
	Self: Send + Sync,
{
	fn matches(&self, haystack: &str, query: &str) -> bool;
}
