use chatseek_domain::{Account, Conversation, Message};

/// One hit reported by the full-text index.
#[derive(Debug, Clone)]
pub enum IndexMatch<'s> {
	Conversation(&'s Conversation),
	Message(&'s Message),
	Contact(&'s Account),
	/// A document type this build does not know how to present.
	Unknown(RawMatch),
}
impl IndexMatch<'_> {
	pub fn kind(&self) -> &str {
		match self {
			Self::Conversation(_) => "conversation",
			Self::Message(_) => "message",
			Self::Contact(_) => "contact",
			Self::Unknown(raw) => raw.kind.as_str(),
		}
	}
}

/// Raw payload of an unrecognized index document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
	pub kind: String,
	pub id: String,
}
