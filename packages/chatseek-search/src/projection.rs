//! Searchable text of conversations and recipients, shared by list filtering and indexers.

use chatseek_domain::{GroupModel, RecipientId};

use crate::{ContactsDirectory, SearchSettings};

/// Member texts followed by the group name.
pub fn group_text(directory: &dyn ContactsDirectory, model: &GroupModel) -> String {
	let members = model
		.member_ids
		.iter()
		.map(|recipient_id| directory.indexing_text(recipient_id))
		.collect::<Vec<_>>()
		.join(" ");
	let group_name = model.group_name.as_deref().unwrap_or_default();

	format!("{members} {group_name}")
}

/// Recipient text, plus the note-to-self label when the recipient is the local user.
pub fn recipient_text(
	directory: &dyn ContactsDirectory,
	settings: &SearchSettings,
	recipient_id: &RecipientId,
) -> String {
	let mut out = directory.indexing_text(recipient_id);

	if settings.local_recipient_id.as_ref() == Some(recipient_id) {
		out.push(' ');
		out.push_str(&settings.note_to_self_label);
	}

	out
}
