use std::cmp::Ordering;

use time::OffsetDateTime;

use chatseek_domain::{
	Account, Conversation, ConversationSortKey, MessageId, MessageSortKey, RecipientId,
};

use crate::{ClassificationFault, NameComparer};

pub type ConversationResult<'s> = SearchResult<'s, ConversationSortKey>;
pub type MessageResult<'s> = SearchResult<'s, MessageSortKey>;

/// A conversation hit, or a message hit shown in the context of its conversation.
///
/// Borrows the conversation from the read scope the search ran in.
#[derive(Debug, Clone)]
pub struct SearchResult<'s, K> {
	conversation: &'s Conversation,
	sort_key: K,
	message_id: Option<&'s MessageId>,
	message_at: Option<OffsetDateTime>,
	snippet: Option<String>,
}
impl<'s> SearchResult<'s, ConversationSortKey> {
	pub fn for_conversation(conversation: &'s Conversation, sort_key: ConversationSortKey) -> Self {
		Self { conversation, sort_key, message_id: None, message_at: None, snippet: None }
	}
}
impl<'s> SearchResult<'s, MessageSortKey> {
	pub fn for_message(
		conversation: &'s Conversation,
		sort_key: MessageSortKey,
		message_id: &'s MessageId,
		message_at: OffsetDateTime,
		snippet: Option<String>,
	) -> Self {
		Self {
			conversation,
			sort_key,
			message_id: Some(message_id),
			message_at: Some(message_at),
			snippet,
		}
	}
}
impl<'s, K> SearchResult<'s, K> {
	pub fn conversation(&self) -> &'s Conversation {
		self.conversation
	}

	pub fn sort_key(&self) -> &K {
		&self.sort_key
	}

	pub fn message_id(&self) -> Option<&'s MessageId> {
		self.message_id
	}

	pub fn message_at(&self) -> Option<OffsetDateTime> {
		self.message_at
	}

	pub fn snippet(&self) -> Option<&str> {
		self.snippet.as_deref()
	}
}
impl<K> SearchResult<'_, K>
where
	K: Ord,
{
	pub fn cmp_by_key(&self, other: &Self) -> Ordering {
		self.sort_key.cmp(&other.sort_key)
	}
}
impl<K> PartialEq for SearchResult<'_, K> {
	fn eq(&self, other: &Self) -> bool {
		self.conversation.id == other.conversation.id && self.message_id == other.message_id
	}
}
impl<K> Eq for SearchResult<'_, K> {}

/// A contact hit with no existing one-to-one conversation in the same result set.
#[derive(Debug, Clone, Copy)]
pub struct ContactResult<'s> {
	account: &'s Account,
}
impl<'s> ContactResult<'s> {
	pub fn new(account: &'s Account) -> Self {
		Self { account }
	}

	pub fn account(&self) -> &'s Account {
		self.account
	}

	pub fn recipient_id(&self) -> &'s RecipientId {
		&self.account.recipient_id
	}

	pub fn cmp_by_name(&self, other: &Self, names: &dyn NameComparer) -> Ordering {
		names.compare(self.account, other.account)
	}
}
impl PartialEq for ContactResult<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.account.recipient_id == other.account.recipient_id
	}
}
impl Eq for ContactResult<'_> {}

/// The outcome of one query. Immutable once built.
#[derive(Debug, Clone)]
pub struct ResultSet<'s> {
	search_text: String,
	conversations: Vec<ConversationResult<'s>>,
	contacts: Vec<ContactResult<'s>>,
	messages: Vec<MessageResult<'s>>,
	faults: Vec<ClassificationFault>,
}
impl<'s> ResultSet<'s> {
	/// The result set shown before any query has been entered.
	pub const EMPTY: Self = Self {
		search_text: String::new(),
		conversations: Vec::new(),
		contacts: Vec::new(),
		messages: Vec::new(),
		faults: Vec::new(),
	};

	pub fn new(
		search_text: impl Into<String>,
		conversations: Vec<ConversationResult<'s>>,
		contacts: Vec<ContactResult<'s>>,
		messages: Vec<MessageResult<'s>>,
	) -> Self {
		Self { search_text: search_text.into(), conversations, contacts, messages, faults: Vec::new() }
	}

	pub fn empty() -> Self {
		Self::EMPTY
	}

	pub(crate) fn with_faults(mut self, faults: Vec<ClassificationFault>) -> Self {
		self.faults = faults;

		self
	}

	pub fn search_text(&self) -> &str {
		&self.search_text
	}

	pub fn conversations(&self) -> &[ConversationResult<'s>] {
		&self.conversations
	}

	pub fn contacts(&self) -> &[ContactResult<'s>] {
		&self.contacts
	}

	pub fn messages(&self) -> &[MessageResult<'s>] {
		&self.messages
	}

	/// Items dropped while aggregating this result set.
	pub fn faults(&self) -> &[ClassificationFault] {
		&self.faults
	}

	/// True when no category holds a result. Faults do not count.
	pub fn is_empty(&self) -> bool {
		self.conversations.is_empty() && self.contacts.is_empty() && self.messages.is_empty()
	}
}
impl Default for ResultSet<'_> {
	fn default() -> Self {
		Self::EMPTY
	}
}
