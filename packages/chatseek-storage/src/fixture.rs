use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use chatseek_domain::{Account, Conversation, Message};

use crate::{ContactName, Error, Result};

/// A serialized store snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
	#[serde(default)]
	pub conversations: Vec<Conversation>,
	#[serde(default)]
	pub messages: Vec<Message>,
	#[serde(default)]
	pub accounts: Vec<Account>,
	#[serde(default)]
	pub contacts: Vec<ContactName>,
	/// Index documents of kinds the search layer does not understand.
	#[serde(default)]
	pub foreign_documents: Vec<ForeignDocument>,
}
impl Fixture {
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadFixture { path: path.to_path_buf(), source: err })?;

		serde_json::from_str(&raw)
			.map_err(|err| Error::ParseFixture { path: path.to_path_buf(), source: err })
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignDocument {
	pub kind: String,
	pub id: String,
	pub text: String,
}
