pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read fixture at {path:?}.")]
	ReadFixture { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse fixture at {path:?}.")]
	ParseFixture { path: std::path::PathBuf, source: serde_json::Error },
	#[error("Duplicate {kind} id {id}.")]
	Duplicate { kind: &'static str, id: String },
}
