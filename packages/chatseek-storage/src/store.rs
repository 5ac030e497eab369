use std::collections::{BTreeMap, HashMap};

use chatseek_domain::{Account, Conversation, ConversationId, Message, MessageId, RecipientId};
use chatseek_search::ReadScope;

use crate::{Error, Fixture, ForeignDocument, Result};

/// Owns conversations, messages and contacts.
///
/// Reads go through a [`Snapshot`], which borrows the store; writes need `&mut self`, so the
/// borrow checker rules out a write while any snapshot, or any result built from one, is alive.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	conversations: BTreeMap<ConversationId, Conversation>,
	messages: BTreeMap<MessageId, Message>,
	accounts: BTreeMap<RecipientId, Account>,
	foreign_documents: Vec<ForeignDocument>,
	latest_inbox: HashMap<ConversationId, MessageId>,
}
impl MemoryStore {
	pub fn from_fixture(fixture: &Fixture) -> Result<Self> {
		let mut store = Self::default();

		for conversation in &fixture.conversations {
			store.insert_conversation(conversation.clone())?;
		}
		for message in &fixture.messages {
			store.insert_message(message.clone())?;
		}
		for account in &fixture.accounts {
			store.insert_account(account.clone())?;
		}

		store.foreign_documents = fixture.foreign_documents.clone();

		Ok(store)
	}

	pub fn read(&self) -> Snapshot<'_> {
		Snapshot { store: self }
	}

	pub fn insert_conversation(&mut self, conversation: Conversation) -> Result<()> {
		if self.conversations.contains_key(&conversation.id) {
			return Err(Error::Duplicate { kind: "conversation", id: conversation.id.to_string() });
		}

		self.conversations.insert(conversation.id.clone(), conversation);

		Ok(())
	}

	/// Inserts a message. The owning conversation does not have to exist yet.
	pub fn insert_message(&mut self, message: Message) -> Result<()> {
		if self.messages.contains_key(&message.id) {
			return Err(Error::Duplicate { kind: "message", id: message.id.to_string() });
		}

		if message.inbox_relevant {
			let newer = match self.latest_inbox.get(&message.conversation_id) {
				Some(current) => self
					.messages
					.get(current)
					.map(|current| message.sort_id > current.sort_id)
					.unwrap_or(true),
				None => true,
			};

			if newer {
				self.latest_inbox.insert(message.conversation_id.clone(), message.id.clone());
			}
		}

		self.messages.insert(message.id.clone(), message);

		Ok(())
	}

	pub fn insert_account(&mut self, account: Account) -> Result<()> {
		if self.accounts.contains_key(&account.recipient_id) {
			return Err(Error::Duplicate { kind: "account", id: account.recipient_id.to_string() });
		}

		self.accounts.insert(account.recipient_id.clone(), account);

		Ok(())
	}

	pub fn insert_foreign_document(&mut self, document: ForeignDocument) {
		self.foreign_documents.push(document);
	}

	pub fn conversations(&self) -> impl Iterator<Item = &Conversation> {
		self.conversations.values()
	}

	pub fn messages(&self) -> impl Iterator<Item = &Message> {
		self.messages.values()
	}

	pub fn accounts(&self) -> impl Iterator<Item = &Account> {
		self.accounts.values()
	}

	pub fn foreign_documents(&self) -> &[ForeignDocument] {
		&self.foreign_documents
	}
}

/// A read scope over a [`MemoryStore`].
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
	store: &'a MemoryStore,
}
impl<'a> Snapshot<'a> {
	pub fn store(&self) -> &'a MemoryStore {
		self.store
	}
}
impl ReadScope for Snapshot<'_> {
	fn conversation(&self, id: &ConversationId) -> Option<&Conversation> {
		self.store.conversations.get(id)
	}

	fn message(&self, id: &MessageId) -> Option<&Message> {
		self.store.messages.get(id)
	}

	fn account(&self, recipient_id: &RecipientId) -> Option<&Account> {
		self.store.accounts.get(recipient_id)
	}

	fn latest_inbox_message(&self, conversation_id: &ConversationId) -> Option<&Message> {
		let message_id = self.store.latest_inbox.get(conversation_id)?;

		self.store.messages.get(message_id)
	}
}
