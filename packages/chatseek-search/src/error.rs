use chatseek_domain::{ConversationId, MessageId};

/// An item that could not be classified. The item is dropped and processing continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationFault {
	#[error("Index returned a match of unknown kind {kind:?} (id {id}).")]
	UnknownMatch { kind: String, id: String },
	#[error("Message {message_id} references missing conversation {conversation_id}.")]
	MissingConversation { message_id: MessageId, conversation_id: ConversationId },
	#[error("Conversation {conversation_id} has an unsupported kind.")]
	UnsupportedConversation { conversation_id: ConversationId },
	#[error("Conversation {conversation_id} is not a group conversation.")]
	GroupExpected { conversation_id: ConversationId },
}

pub(crate) fn report(fault: &ClassificationFault) {
	tracing::error!(fault = %fault, "Unclassifiable search item dropped.");
}
