use std::process::ExitCode;

use clap::Parser;
use todotxt::cli::{self, Cli};

fn main() -> ExitCode {
	color_eyre::install().expect("color_eyre::install is called exactly once");
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();
	match cli::run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			// Messages go to stdout, matching the tool's historical behavior.
			println!("{e}");
			ExitCode::FAILURE
		}
	}
}
