use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{ConversationId, MessageId, RecipientId, time_serde};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
	pub id: ConversationId,
	#[serde(with = "time_serde")]
	pub created_at: OffsetDateTime,
	pub kind: ConversationKind,
}
impl Conversation {
	pub fn contact(
		id: impl Into<ConversationId>,
		created_at: OffsetDateTime,
		recipient_id: impl Into<RecipientId>,
	) -> Self {
		Self {
			id: id.into(),
			created_at,
			kind: ConversationKind::Contact { recipient_id: recipient_id.into() },
		}
	}

	pub fn group(id: impl Into<ConversationId>, created_at: OffsetDateTime, model: GroupModel) -> Self {
		Self { id: id.into(), created_at, kind: ConversationKind::Group(model) }
	}

	/// The counterpart of a one-to-one conversation.
	pub fn contact_recipient_id(&self) -> Option<&RecipientId> {
		match &self.kind {
			ConversationKind::Contact { recipient_id } => Some(recipient_id),
			_ => None,
		}
	}

	pub fn group_model(&self) -> Option<&GroupModel> {
		match &self.kind {
			ConversationKind::Group(model) => Some(model),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationKind {
	/// One-to-one conversation, keyed by the other participant.
	Contact { recipient_id: RecipientId },
	Group(GroupModel),
	/// A conversation record of a kind this build does not understand.
	#[serde(other)]
	Unsupported,
}
impl ConversationKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Contact { .. } => "contact",
			Self::Group(_) => "group",
			Self::Unsupported => "unsupported",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupModel {
	pub group_id: String,
	#[serde(default)]
	pub group_name: Option<String>,
	#[serde(default)]
	pub member_ids: Vec<RecipientId>,
	#[serde(default)]
	pub admin_ids: Vec<RecipientId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
	pub id: MessageId,
	pub conversation_id: ConversationId,
	/// Store-assigned sequence number, strictly increasing in creation order.
	pub sort_id: u64,
	/// Sender-side timestamp in milliseconds since the Unix epoch.
	pub timestamp_ms: u64,
	#[serde(with = "time_serde")]
	pub received_at: OffsetDateTime,
	#[serde(default)]
	pub body: Option<String>,
	/// Whether this message counts as conversation activity for inbox ordering.
	#[serde(default = "default_inbox_relevant")]
	pub inbox_relevant: bool,
}
impl Message {
	/// Sender timestamp as a UTC date. Out of range values clamp to the epoch.
	pub fn sent_at(&self) -> OffsetDateTime {
		let nanos = i128::from(self.timestamp_ms) * 1_000_000;

		OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
	}
}

/// A registered contact that can be messaged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
	pub recipient_id: RecipientId,
}
impl Account {
	pub fn new(recipient_id: impl Into<RecipientId>) -> Self {
		Self { recipient_id: recipient_id.into() }
	}
}

fn default_inbox_relevant() -> bool {
	true
}
