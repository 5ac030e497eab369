mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Account, Config, Labels, Ranking, Service, TieBreak};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.labels.note_to_self.trim().is_empty() {
		return Err(Error::Validation {
			message: "labels.note_to_self must be non-empty.".to_string(),
		});
	}

	if let Some(local) = cfg.account.local_recipient_id.as_deref()
		&& local.chars().any(char::is_whitespace)
	{
		return Err(Error::Validation {
			message: "account.local_recipient_id must not contain whitespace.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.account.local_recipient_id = cfg
		.account
		.local_recipient_id
		.take()
		.map(|id| id.trim().to_string())
		.filter(|id| !id.is_empty());
	cfg.labels.note_to_self = cfg.labels.note_to_self.trim().to_string();
}
