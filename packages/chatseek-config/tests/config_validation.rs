use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use chatseek_config::{Config, Error, TieBreak};

const SAMPLE_CONFIG_TOML: &str = r#"
[service]
log_level = "info"

[account]
local_recipient_id = "+15550000000"

[labels]
note_to_self = "Note to Self"

[ranking]
tie_break = "identifier"
"#;

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be after the Unix epoch.")
		.as_nanos();
	let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
	let path = env::temp_dir().join(format!("chatseek_config_test_{nanos}_{seq}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_str(payload: &str) -> chatseek_config::Result<Config> {
	let path = write_temp_config(payload.to_string());
	let result = chatseek_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

#[test]
fn sample_config_loads() {
	let cfg = load_str(SAMPLE_CONFIG_TOML).expect("Failed to load sample config.");

	assert_eq!(cfg.service.log_level, "info");
	assert_eq!(cfg.account.local_recipient_id.as_deref(), Some("+15550000000"));
	assert_eq!(cfg.labels.note_to_self, "Note to Self");
	assert_eq!(cfg.ranking.tie_break, TieBreak::Identifier);
}

#[test]
fn optional_sections_fall_back_to_defaults() {
	let cfg = load_str("[service]\nlog_level = \"debug\"\n").expect("Failed to load config.");

	assert!(cfg.account.local_recipient_id.is_none());
	assert_eq!(cfg.labels.note_to_self, "Note to Self");
	assert_eq!(cfg.ranking.tie_break, TieBreak::InputOrder);
}

#[test]
fn blank_local_recipient_id_normalizes_to_none() {
	let payload = SAMPLE_CONFIG_TOML.replace("\"+15550000000\"", "\"   \"");
	let cfg = load_str(&payload).expect("Failed to load config.");

	assert!(cfg.account.local_recipient_id.is_none());
}

#[test]
fn padded_values_are_trimmed() {
	let payload = SAMPLE_CONFIG_TOML
		.replace("\"+15550000000\"", "\" +15550000000 \"")
		.replace("\"Note to Self\"", "\"  Notes  \"");
	let cfg = load_str(&payload).expect("Failed to load config.");

	assert_eq!(cfg.account.local_recipient_id.as_deref(), Some("+15550000000"));
	assert_eq!(cfg.labels.note_to_self, "Notes");
}

#[test]
fn empty_note_to_self_label_is_rejected() {
	let payload = SAMPLE_CONFIG_TOML.replace("\"Note to Self\"", "\" \"");
	let err = load_str(&payload).expect_err("Expected validation error.");

	match err {
		Error::Validation { message } => {
			assert!(message.contains("labels.note_to_self"), "Unexpected message: {message}");
		},
		other => panic!("Expected validation error, got {other:?}"),
	}
}

#[test]
fn empty_log_level_is_rejected() {
	let payload = SAMPLE_CONFIG_TOML.replace("\"info\"", "\"\"");
	let err = load_str(&payload).expect_err("Expected validation error.");

	assert!(matches!(err, Error::Validation { .. }), "Unexpected error: {err:?}");
}

#[test]
fn local_recipient_id_with_inner_whitespace_is_rejected() {
	let payload = SAMPLE_CONFIG_TOML.replace("\"+15550000000\"", "\"+1555 0000\"");
	let err = load_str(&payload).expect_err("Expected validation error.");

	match err {
		Error::Validation { message } => {
			assert!(message.contains("account.local_recipient_id"), "Unexpected message: {message}");
		},
		other => panic!("Expected validation error, got {other:?}"),
	}
}

#[test]
fn unknown_tie_break_fails_to_parse() {
	let payload = SAMPLE_CONFIG_TOML.replace("\"identifier\"", "\"random\"");
	let err = load_str(&payload).expect_err("Expected parse error.");

	assert!(matches!(err, Error::ParseConfig { .. }), "Unexpected error: {err:?}");
}

#[test]
fn missing_file_reports_read_error() {
	let path = env::temp_dir().join("chatseek_config_test_missing_file.toml");
	let err = chatseek_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }), "Unexpected error: {err:?}");
}
