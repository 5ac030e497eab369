use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub account: Account,
	#[serde(default)]
	pub labels: Labels,
	#[serde(default)]
	pub ranking: Ranking,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Account {
	/// Recipient id of the local user. Enables the "note to self" label in list filtering.
	pub local_recipient_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Labels {
	#[serde(default = "default_note_to_self")]
	pub note_to_self: String,
}
impl Default for Labels {
	fn default() -> Self {
		Self { note_to_self: default_note_to_self() }
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ranking {
	#[serde(default)]
	pub tie_break: TieBreak,
}

/// How results with equal sort keys are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
	/// Keep the order in which the index reported the matches.
	#[default]
	InputOrder,
	/// Order ties by conversation id, then message id.
	Identifier,
}
impl TieBreak {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::InputOrder => "input_order",
			Self::Identifier => "identifier",
		}
	}
}

fn default_note_to_self() -> String {
	"Note to Self".to_string()
}
