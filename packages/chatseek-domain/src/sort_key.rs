use std::cmp::Ordering;

use time::OffsetDateTime;

/// Recency key for a conversation.
///
/// Keys order by their effective time: the last activity when known, otherwise the creation
/// time. Equality follows the same rule, so two keys with different creation times compare
/// equal once both have the same last activity.
#[derive(Debug, Clone, Copy)]
pub struct ConversationSortKey {
	pub created_at: OffsetDateTime,
	pub last_activity_at: Option<OffsetDateTime>,
}
impl ConversationSortKey {
	pub fn new(created_at: OffsetDateTime, last_activity_at: Option<OffsetDateTime>) -> Self {
		Self { created_at, last_activity_at }
	}

	pub fn effective(&self) -> OffsetDateTime {
		self.last_activity_at.unwrap_or(self.created_at)
	}
}
impl PartialEq for ConversationSortKey {
	fn eq(&self, other: &Self) -> bool {
		self.effective() == other.effective()
	}
}
impl Eq for ConversationSortKey {}
impl PartialOrd for ConversationSortKey {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
impl Ord for ConversationSortKey {
	fn cmp(&self, other: &Self) -> Ordering {
		self.effective().cmp(&other.effective())
	}
}

/// Store-assigned message sequence number. Only ever compared, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageSortKey(u64);
impl MessageSortKey {
	pub fn new(sort_id: u64) -> Self {
		Self(sort_id)
	}

	pub fn get(self) -> u64 {
		self.0
	}
}
impl From<u64> for MessageSortKey {
	fn from(sort_id: u64) -> Self {
		Self(sort_id)
	}
}
