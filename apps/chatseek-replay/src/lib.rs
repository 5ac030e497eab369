use std::{
	fs,
	path::{Path, PathBuf},
	sync::Arc,
	time::Instant,
};

use clap::Parser;
use color_eyre::eyre;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use chatseek_config::Config;
use chatseek_search::{
	ConversationSearcher, DisplayNameComparer, NameComparer, ReadScope, ResultSet, SearchSettings,
};
use chatseek_storage::{ContactsBook, Fixture, MemoryIndex, MemoryStore};

#[derive(Debug, Parser)]
#[command(
	version = chatseek_cli::VERSION,
	rename_all = "kebab",
	styles = chatseek_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[arg(long, short = 'd', value_name = "FILE")]
	pub dataset: PathBuf,
	#[arg(long, value_name = "N", default_value_t = 1)]
	pub runs_per_query: u32,
}

/// A store fixture plus the queries to replay against it.
#[derive(Debug, Deserialize)]
pub struct ReplayDataset {
	pub name: Option<String>,
	pub store: Fixture,
	pub queries: Vec<ReplayQuery>,
}

#[derive(Debug, Deserialize)]
pub struct ReplayQuery {
	pub id: Option<String>,
	pub query: String,
	pub expected: Option<ResultOrder>,
}

/// Ids of a result set, category by category, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultOrder {
	#[serde(default)]
	pub conversations: Vec<String>,
	#[serde(default)]
	pub contacts: Vec<String>,
	#[serde(default)]
	pub messages: Vec<String>,
}
impl ResultOrder {
	pub fn of(results: &ResultSet<'_>) -> Self {
		Self {
			conversations: results
				.conversations()
				.iter()
				.map(|result| result.conversation().id.to_string())
				.collect(),
			contacts: results.contacts().iter().map(|result| result.recipient_id().to_string()).collect(),
			messages: results
				.messages()
				.iter()
				.filter_map(|result| result.message_id().map(ToString::to_string))
				.collect(),
		}
	}

	pub fn fingerprint(&self) -> eyre::Result<String> {
		let raw = serde_json::to_vec(self)?;

		Ok(blake3::hash(&raw).to_hex().to_string())
	}
}

#[derive(Debug, Serialize)]
pub struct ReplayOutput {
	pub dataset: ReplayDatasetInfo,
	pub settings: ReplaySettings,
	pub summary: ReplaySummary,
	pub queries: Vec<QueryReport>,
}

#[derive(Debug, Serialize)]
pub struct ReplayDatasetInfo {
	pub name: String,
	pub query_count: usize,
	pub conversation_count: usize,
	pub message_count: usize,
	pub contact_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ReplaySettings {
	pub config_path: String,
	pub tie_break: &'static str,
	pub runs_per_query: u32,
}

#[derive(Debug, Serialize)]
pub struct ReplaySummary {
	pub query_count: usize,
	pub unstable_count: usize,
	pub mismatch_count: usize,
	pub fault_count: usize,
	pub latency_ms_p50: f64,
	pub latency_ms_p95: f64,
}

#[derive(Debug, Serialize)]
pub struct QueryReport {
	pub id: String,
	pub query: String,
	pub fingerprint: String,
	/// Every run produced the same ordering.
	pub stable: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub matches_expected: Option<bool>,
	pub fault_count: usize,
	pub latency_ms: f64,
	pub results: ResultOrder,
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let cfg = chatseek_config::load(&args.config)?;
	let filter = EnvFilter::new(cfg.service.log_level.clone());

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	let dataset = load_dataset(&args.dataset)?;
	let output = replay(&args.config, &cfg, &dataset, args.runs_per_query)?;
	let json = serde_json::to_string_pretty(&output)?;

	println!("{json}");

	Ok(())
}

pub fn load_dataset(path: &Path) -> color_eyre::Result<ReplayDataset> {
	let raw = fs::read_to_string(path)?;
	let dataset: ReplayDataset = serde_json::from_str(&raw)?;

	if dataset.queries.is_empty() {
		return Err(eyre::eyre!("Dataset must include at least one query."));
	}

	Ok(dataset)
}

/// Replays every query of `dataset` `runs_per_query` times against one read scope.
pub fn replay(
	config_path: &Path,
	cfg: &Config,
	dataset: &ReplayDataset,
	runs_per_query: u32,
) -> color_eyre::Result<ReplayOutput> {
	let store = MemoryStore::from_fixture(&dataset.store)?;
	let book = ContactsBook::from_fixture(&dataset.store);
	let settings = SearchSettings::from_config(cfg);
	let index = MemoryIndex::build(&store, &book, &settings);
	let searcher = ConversationSearcher::new(settings, Arc::new(index), Arc::new(book.clone()));
	let names = DisplayNameComparer::new(&book);
	let snapshot = store.read();
	let runs_per_query = runs_per_query.max(1);

	let mut reports = Vec::with_capacity(dataset.queries.len());
	let mut latencies_ms = Vec::with_capacity(dataset.queries.len());

	for (index, query) in dataset.queries.iter().enumerate() {
		let id = query.id.clone().unwrap_or_else(|| format!("q{}", index + 1));
		let report = run_query_n_times(&searcher, &snapshot, &names, id, query, runs_per_query)?;

		if !report.stable {
			tracing::warn!(query_id = %report.id, "Query ordering changed between runs.");
		}

		latencies_ms.push(report.latency_ms);
		reports.push(report);
	}

	let summary = summarize(&reports, &latencies_ms);

	Ok(ReplayOutput {
		dataset: ReplayDatasetInfo {
			name: dataset.name.clone().unwrap_or_else(|| "replay".to_string()),
			query_count: reports.len(),
			conversation_count: dataset.store.conversations.len(),
			message_count: dataset.store.messages.len(),
			contact_count: dataset.store.accounts.len(),
		},
		settings: ReplaySettings {
			config_path: config_path.display().to_string(),
			tie_break: cfg.ranking.tie_break.as_str(),
			runs_per_query,
		},
		summary,
		queries: reports,
	})
}

fn run_query_n_times(
	searcher: &ConversationSearcher,
	scope: &dyn ReadScope,
	names: &dyn NameComparer,
	id: String,
	query: &ReplayQuery,
	runs: u32,
) -> color_eyre::Result<QueryReport> {
	let mut first: Option<(ResultOrder, String, usize)> = None;
	let mut stable = true;
	let mut latency_total_ms = 0.0_f64;

	for _ in 0..runs {
		let start = Instant::now();
		let results = searcher.results(&query.query, scope, names);
		let latency_ms = start.elapsed().as_secs_f64() * 1_000.0;

		latency_total_ms += latency_ms;

		let order = ResultOrder::of(&results);
		let fingerprint = order.fingerprint()?;

		if let Some((_, baseline, _)) = &first {
			stable &= *baseline == fingerprint;

			continue;
		}

		first = Some((order, fingerprint, results.faults().len()));
	}

	let Some((results, fingerprint, fault_count)) = first else {
		return Err(eyre::eyre!("No search runs were collected."));
	};
	let matches_expected = query.expected.as_ref().map(|expected| *expected == results);

	Ok(QueryReport {
		id,
		query: query.query.clone(),
		fingerprint,
		stable,
		matches_expected,
		fault_count,
		latency_ms: latency_total_ms / runs.max(1) as f64,
		results,
	})
}

fn summarize(reports: &[QueryReport], latencies_ms: &[f64]) -> ReplaySummary {
	let mut sorted = latencies_ms.to_vec();

	sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

	ReplaySummary {
		query_count: reports.len(),
		unstable_count: reports.iter().filter(|report| !report.stable).count(),
		mismatch_count: reports.iter().filter(|report| report.matches_expected == Some(false)).count(),
		fault_count: reports.iter().map(|report| report.fault_count).sum(),
		latency_ms_p50: percentile(&sorted, 0.50),
		latency_ms_p95: percentile(&sorted, 0.95),
	}
}

fn percentile(values: &[f64], percentile: f64) -> f64 {
	if values.is_empty() {
		return 0.0;
	}

	let clamped = percentile.clamp(0.0, 1.0);
	let pos = clamped * (values.len() as f64 - 1.0);
	let lower = pos.floor() as usize;
	let upper = pos.ceil() as usize;

	if lower == upper {
		values[lower]
	} else {
		let weight = pos - lower as f64;
		values[lower] * (1.0 - weight) + values[upper] * weight
	}
}
