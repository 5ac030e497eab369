use time::{Duration, OffsetDateTime};

use chatseek_domain::{
	Conversation, ConversationKind, ConversationSortKey, Message, MessageSortKey, RecipientId,
	text,
};

fn at(seconds: i64) -> OffsetDateTime {
	OffsetDateTime::from_unix_timestamp(1_700_000_000 + seconds).expect("Valid timestamp.")
}

#[test]
fn conversation_key_prefers_last_activity() {
	let older_but_active = ConversationSortKey::new(at(0), Some(at(500)));
	let newer_but_idle = ConversationSortKey::new(at(100), None);

	assert!(older_but_active > newer_but_idle);
	assert_eq!(older_but_active.effective(), at(500));
	assert_eq!(newer_but_idle.effective(), at(100));
}

#[test]
fn conversation_keys_with_same_effective_time_are_equal() {
	let lhs = ConversationSortKey::new(at(0), Some(at(50)));
	let rhs = ConversationSortKey::new(at(50), None);

	assert_eq!(lhs, rhs);
	assert_eq!(lhs.cmp(&rhs), std::cmp::Ordering::Equal);
}

#[test]
fn message_keys_order_by_sequence() {
	let mut keys = [5_u64, 1, 9].map(MessageSortKey::new);

	keys.sort();

	assert_eq!(keys.map(MessageSortKey::get), [1, 5, 9]);
}

#[test]
fn unknown_conversation_kind_deserializes_as_unsupported() {
	let raw = serde_json::json!({
		"id": "c-9",
		"created_at": "2024-01-02T03:04:05Z",
		"kind": { "type": "broadcast_list", "audience": 42 },
	});
	let conversation: Conversation = serde_json::from_value(raw).expect("Failed to parse.");

	assert_eq!(conversation.kind, ConversationKind::Unsupported);
	assert!(conversation.contact_recipient_id().is_none());
	assert!(conversation.group_model().is_none());
}

#[test]
fn contact_conversation_round_trips_through_json() {
	let conversation = Conversation::contact("c-1", at(0), "+15550001");
	let raw = serde_json::to_value(&conversation).expect("Failed to serialize.");

	assert_eq!(raw["kind"]["type"], "contact");
	assert_eq!(raw["kind"]["recipient_id"], "+15550001");

	let parsed: Conversation = serde_json::from_value(raw).expect("Failed to parse.");

	assert_eq!(parsed, conversation);
	assert_eq!(parsed.contact_recipient_id(), Some(&RecipientId::new("+15550001")));
}

#[test]
fn message_sent_at_uses_millisecond_timestamp() {
	let message = Message {
		id: "m-1".into(),
		conversation_id: "c-1".into(),
		sort_id: 7,
		timestamp_ms: 1_700_000_000_250,
		received_at: at(0),
		body: None,
		inbox_relevant: true,
	};

	assert_eq!(message.sent_at(), at(0) + Duration::milliseconds(250));
}

#[test]
fn blank_query_matches_anything() {
	assert!(text::matches_query("anything", ""));
	assert!(text::matches_query("anything", " \t "));
	assert!(text::is_blank("\n"));
}

#[test]
fn query_matching_ignores_case_and_spacing() {
	assert!(text::matches_query("+1555 Alice   Smith", "alice smith"));
	assert!(text::matches_query("+1555 Alice Smith", "  ALICE  "));
	assert!(!text::matches_query("+1555 Alice Smith", "bob"));
}
