use std::{cmp::Ordering, collections::HashSet, sync::Arc};

use chatseek_config::{Config, TieBreak};
use chatseek_domain::{ConversationSortKey, MessageSortKey, RecipientId};

use crate::{
	ClassificationFault, ContactResult, ContactsDirectory, ConversationResult, FullTextIndex,
	IndexMatch, MessageResult, NameComparer, NormalizedSubstring, ReadScope, ResultSet,
	SearchResult, TextMatcher, error,
};

#[derive(Debug, Clone)]
pub struct SearchSettings {
	/// The local user, labelled "note to self" when filtering conversation lists.
	pub local_recipient_id: Option<RecipientId>,
	pub note_to_self_label: String,
	pub tie_break: TieBreak,
}
impl SearchSettings {
	pub fn from_config(cfg: &Config) -> Self {
		Self {
			local_recipient_id: cfg.account.local_recipient_id.as_deref().map(RecipientId::from),
			note_to_self_label: cfg.labels.note_to_self.clone(),
			tie_break: cfg.ranking.tie_break,
		}
	}
}
impl Default for SearchSettings {
	fn default() -> Self {
		Self {
			local_recipient_id: None,
			note_to_self_label: "Note to Self".to_string(),
			tie_break: TieBreak::InputOrder,
		}
	}
}

/// Turns index matches into ordered conversation, contact and message results.
///
/// Holds no per-query state; one searcher can serve overlapping queries as long as each query
/// brings its own read scope. A query cannot be cancelled once started, so callers that
/// supersede a query simply drop its result.
#[derive(Clone)]
pub struct ConversationSearcher {
	pub(crate) settings: SearchSettings,
	pub(crate) index: Arc<dyn FullTextIndex>,
	pub(crate) directory: Arc<dyn ContactsDirectory>,
	pub(crate) matcher: Arc<dyn TextMatcher>,
}
impl ConversationSearcher {
	pub fn new(
		settings: SearchSettings,
		index: Arc<dyn FullTextIndex>,
		directory: Arc<dyn ContactsDirectory>,
	) -> Self {
		Self { settings, index, directory, matcher: Arc::new(NormalizedSubstring) }
	}

	pub fn from_config(
		cfg: &Config,
		index: Arc<dyn FullTextIndex>,
		directory: Arc<dyn ContactsDirectory>,
	) -> Self {
		Self::new(SearchSettings::from_config(cfg), index, directory)
	}

	/// Replaces the text matcher used by the list filters.
	pub fn with_matcher(mut self, matcher: Arc<dyn TextMatcher>) -> Self {
		self.matcher = matcher;

		self
	}

	pub fn settings(&self) -> &SearchSettings {
		&self.settings
	}

	/// Runs `search_text` against the index and builds the ordered result set.
	///
	/// Conversations and messages come back most recent first, contacts in `names` order.
	/// Contacts that already have a one-to-one conversation among the conversation results are
	/// left out. Unclassifiable matches are logged, recorded in [`ResultSet::faults`] and
	/// skipped.
	pub fn results<'s>(
		&self,
		search_text: &str,
		scope: &'s dyn ReadScope,
		names: &dyn NameComparer,
	) -> ResultSet<'s> {
		let mut conversations: Vec<ConversationResult<'s>> = Vec::new();
		let mut contacts: Vec<ContactResult<'s>> = Vec::new();
		let mut messages: Vec<MessageResult<'s>> = Vec::new();
		let mut covered: HashSet<&'s RecipientId> = HashSet::new();
		let mut faults = Vec::new();

		self.index.enumerate(search_text, scope, &mut |found, snippet| match found {
			IndexMatch::Conversation(conversation) => {
				let last_activity_at =
					scope.latest_inbox_message(&conversation.id).map(|message| message.received_at);
				let sort_key = ConversationSortKey::new(conversation.created_at, last_activity_at);

				if let Some(recipient_id) = conversation.contact_recipient_id() {
					covered.insert(recipient_id);
				}

				conversations.push(ConversationResult::for_conversation(conversation, sort_key));
			},
			IndexMatch::Message(message) => {
				let Some(conversation) = scope.conversation(&message.conversation_id) else {
					let fault = ClassificationFault::MissingConversation {
						message_id: message.id.clone(),
						conversation_id: message.conversation_id.clone(),
					};

					error::report(&fault);
					faults.push(fault);

					return;
				};

				messages.push(MessageResult::for_message(
					conversation,
					MessageSortKey::new(message.sort_id),
					&message.id,
					message.sent_at(),
					snippet.map(str::to_string),
				));
			},
			IndexMatch::Contact(account) => contacts.push(ContactResult::new(account)),
			IndexMatch::Unknown(raw) => {
				let fault = ClassificationFault::UnknownMatch { kind: raw.kind, id: raw.id };

				error::report(&fault);
				faults.push(fault);
			},
		});

		let matched_contacts = contacts.len();

		contacts.retain(|contact| !covered.contains(contact.recipient_id()));

		let tie_break = self.settings.tie_break;

		conversations.sort_by(|lhs, rhs| {
			rhs.cmp_by_key(lhs).then_with(|| break_tie(tie_break, lhs, rhs))
		});
		messages.sort_by(|lhs, rhs| {
			rhs.cmp_by_key(lhs).then_with(|| break_tie(tie_break, lhs, rhs))
		});
		contacts.sort_by(|lhs, rhs| lhs.cmp_by_name(rhs, names));

		tracing::debug!(
			conversations = conversations.len(),
			contacts = contacts.len(),
			contacts_covered = matched_contacts - contacts.len(),
			messages = messages.len(),
			faults = faults.len(),
			"Search results aggregated."
		);

		ResultSet::new(search_text, conversations, contacts, messages).with_faults(faults)
	}
}

fn break_tie<K>(
	tie_break: TieBreak,
	lhs: &SearchResult<'_, K>,
	rhs: &SearchResult<'_, K>,
) -> Ordering {
	match tie_break {
		TieBreak::InputOrder => Ordering::Equal,
		TieBreak::Identifier => lhs
			.conversation()
			.id
			.cmp(&rhs.conversation().id)
			.then_with(|| lhs.message_id().cmp(&rhs.message_id())),
	}
}
