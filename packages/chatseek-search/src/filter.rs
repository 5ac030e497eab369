//! Client-side list filtering, separate from the indexed search path.

use std::{marker::PhantomData, sync::Arc};

use chatseek_domain::{Account, Conversation, ConversationKind, GroupModel, RecipientId, text};

use crate::{ClassificationFault, ConversationSearcher, TextMatcher, error, projection};

/// A reusable "does this item match the query" predicate built from a text projection.
pub struct Searcher<T, F>
where
	T: ?Sized,
{
	projection: F,
	matcher: Arc<dyn TextMatcher>,
	_item: PhantomData<fn(&T)>,
}
impl<T, F> Searcher<T, F>
where
	T: ?Sized,
	F: Fn(&T) -> String,
{
	pub fn new(matcher: Arc<dyn TextMatcher>, projection: F) -> Self {
		Self { projection, matcher, _item: PhantomData }
	}

	pub fn matches(&self, item: &T, query: &str) -> bool {
		let haystack = (self.projection)(item);

		self.matcher.matches(&haystack, query)
	}
}

impl ConversationSearcher {
	/// Keeps the group and one-to-one conversations that match `search_text`.
	///
	/// A blank query keeps everything. Conversations of an unsupported kind never match.
	pub fn filter_conversations<'e>(
		&self,
		conversations: &'e [Conversation],
		search_text: &str,
	) -> Vec<&'e Conversation> {
		if text::is_blank(search_text) {
			return conversations.iter().collect();
		}

		let groups = self.group_searcher();
		let contacts = self.recipient_searcher();

		conversations
			.iter()
			.filter(|conversation| match &conversation.kind {
				ConversationKind::Group(model) => groups.matches(model, search_text),
				ConversationKind::Contact { recipient_id } =>
					contacts.matches(recipient_id, search_text),
				ConversationKind::Unsupported => {
					error::report(&ClassificationFault::UnsupportedConversation {
						conversation_id: conversation.id.clone(),
					});

					false
				},
			})
			.collect()
	}

	/// Keeps the group conversations that match `search_text`.
	///
	/// A blank query keeps everything. Anything other than a group never matches.
	pub fn filter_group_conversations<'e>(
		&self,
		conversations: &'e [Conversation],
		search_text: &str,
	) -> Vec<&'e Conversation> {
		if text::is_blank(search_text) {
			return conversations.iter().collect();
		}

		let groups = self.group_searcher();

		conversations
			.iter()
			.filter(|conversation| match conversation.group_model() {
				Some(model) => groups.matches(model, search_text),
				None => {
					error::report(&ClassificationFault::GroupExpected {
						conversation_id: conversation.id.clone(),
					});

					false
				},
			})
			.collect()
	}

	/// Keeps the contacts that match `search_text`. A blank query keeps everything.
	pub fn filter_accounts<'e>(&self, accounts: &'e [Account], search_text: &str) -> Vec<&'e Account> {
		if text::is_blank(search_text) {
			return accounts.iter().collect();
		}

		let recipients = self.recipient_searcher();

		accounts
			.iter()
			.filter(|account| recipients.matches(&account.recipient_id, search_text))
			.collect()
	}

	/// Member texts followed by the group name.
	pub fn group_indexing_text(&self, model: &GroupModel) -> String {
		projection::group_text(self.directory.as_ref(), model)
	}

	/// Recipient text, plus the note-to-self label when the recipient is the local user.
	pub fn conversation_indexing_text(&self, recipient_id: &RecipientId) -> String {
		projection::recipient_text(self.directory.as_ref(), &self.settings, recipient_id)
	}

	fn group_searcher(&self) -> Searcher<GroupModel, impl Fn(&GroupModel) -> String + '_> {
		Searcher::new(self.matcher.clone(), move |model: &GroupModel| self.group_indexing_text(model))
	}

	fn recipient_searcher(&self) -> Searcher<RecipientId, impl Fn(&RecipientId) -> String + '_> {
		Searcher::new(self.matcher.clone(), move |recipient_id: &RecipientId| {
			self.conversation_indexing_text(recipient_id)
		})
	}
}
