// crates.io
use clap::Parser;
// self
use chatseek_replay::Args;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = Args::parse();
	chatseek_replay::run(args)
}
