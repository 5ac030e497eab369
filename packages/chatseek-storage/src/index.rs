use unicode_segmentation::UnicodeSegmentation;

use chatseek_domain::{ConversationId, ConversationKind, MessageId, RecipientId, text};
use chatseek_search::{
	ContactsDirectory, FullTextIndex, IndexMatch, RawMatch, ReadScope, SearchSettings, projection,
};

use crate::MemoryStore;

const SNIPPET_LEAD_GRAPHEMES: usize = 24;
const SNIPPET_MAX_GRAPHEMES: usize = 80;
const ELLIPSIS: &str = "…";

#[derive(Debug, Clone)]
enum DocumentKey {
	Conversation(ConversationId),
	Message(MessageId),
	Account(RecipientId),
	Foreign(RawMatch),
}

#[derive(Debug, Clone)]
struct Document {
	key: DocumentKey,
	text: String,
}

/// A linear-scan full-text index over a [`MemoryStore`].
///
/// Documents store keys, not entities; matches are resolved against the read scope passed to
/// [`FullTextIndex::enumerate`]. Documents whose entity is gone from that scope are skipped.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
	documents: Vec<Document>,
}
impl MemoryIndex {
	/// Indexes every entity in `store` using the names known to `directory`.
	pub fn build(
		store: &MemoryStore,
		directory: &dyn ContactsDirectory,
		settings: &SearchSettings,
	) -> Self {
		let mut documents = Vec::new();

		for conversation in store.conversations() {
			let text = match &conversation.kind {
				ConversationKind::Contact { recipient_id } =>
					projection::recipient_text(directory, settings, recipient_id),
				ConversationKind::Group(model) => projection::group_text(directory, model),
				ConversationKind::Unsupported => conversation.id.to_string(),
			};

			documents.push(Document { key: DocumentKey::Conversation(conversation.id.clone()), text });
		}
		for message in store.messages() {
			let Some(body) = message.body.as_deref() else { continue };

			documents.push(Document {
				key: DocumentKey::Message(message.id.clone()),
				text: body.to_string(),
			});
		}
		for account in store.accounts() {
			documents.push(Document {
				key: DocumentKey::Account(account.recipient_id.clone()),
				text: directory.indexing_text(&account.recipient_id),
			});
		}
		for document in store.foreign_documents() {
			documents.push(Document {
				key: DocumentKey::Foreign(RawMatch {
					kind: document.kind.clone(),
					id: document.id.clone(),
				}),
				text: document.text.clone(),
			});
		}

		tracing::debug!(documents = documents.len(), "Memory index built.");

		Self { documents }
	}

	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}
}
impl FullTextIndex for MemoryIndex {
	fn enumerate<'s>(
		&self,
		search_text: &str,
		scope: &'s dyn ReadScope,
		visit: &mut dyn FnMut(IndexMatch<'s>, Option<&str>),
	) {
		if text::is_blank(search_text) {
			return;
		}

		for document in &self.documents {
			if !text::matches_query(&document.text, search_text) {
				continue;
			}

			match &document.key {
				DocumentKey::Conversation(id) => match scope.conversation(id) {
					Some(conversation) => visit(IndexMatch::Conversation(conversation), None),
					None => tracing::debug!(conversation_id = %id, "Stale index document skipped."),
				},
				DocumentKey::Message(id) => match scope.message(id) {
					Some(message) => {
						let snippet = build_snippet(&document.text, search_text);

						visit(IndexMatch::Message(message), Some(&snippet));
					},
					None => tracing::debug!(message_id = %id, "Stale index document skipped."),
				},
				DocumentKey::Account(recipient_id) => match scope.account(recipient_id) {
					Some(account) => visit(IndexMatch::Contact(account), None),
					None => tracing::debug!(
						recipient_id = %recipient_id,
						"Stale index document skipped."
					),
				},
				DocumentKey::Foreign(raw) => visit(IndexMatch::Unknown(raw.clone()), None),
			}
		}
	}
}

/// Cuts a window around the first hit, on grapheme boundaries, marking cut ends with an
/// ellipsis.
pub fn build_snippet(body: &str, query: &str) -> String {
	let graphemes: Vec<(usize, &str)> = body.grapheme_indices(true).collect();
	let hit = text::find_match(body, query).unwrap_or(0);
	let hit_pos = graphemes.iter().position(|(offset, _)| *offset >= hit).unwrap_or(0);
	let start = hit_pos.saturating_sub(SNIPPET_LEAD_GRAPHEMES);
	let end = (start + SNIPPET_MAX_GRAPHEMES).min(graphemes.len());
	let mut out = String::new();

	if start > 0 {
		out.push_str(ELLIPSIS);
	}

	for (_, grapheme) in &graphemes[start..end] {
		out.push_str(grapheme);
	}

	if end < graphemes.len() {
		out.push_str(ELLIPSIS);
	}

	out
}
