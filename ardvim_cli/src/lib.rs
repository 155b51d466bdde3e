use std::path::PathBuf;

use clap::Parser;

/// Environment variable holding the `tracing` filter for diagnostic logs.
pub const LOG_ENV: &str = "ARDVIM_LOG";

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate a vim syntax file from the Arduino keyword table.",
	long_about = "ardvim reads `build/shared/lib/keywords.txt` below an Arduino installation, \
	              sorts its keywords into `syn keyword` groups and fills them into \
	              `template.vim`.\n\nThe generated syntax file is written to standard output. \
	              Sections that cannot be placed in a group are reported on standard error \
	              without failing the run."
)]
pub struct ArdvimCli {
	/// Root of the Arduino installation. Defaults to the current directory.
	pub root: Option<PathBuf>,
}

impl ArdvimCli {
	pub fn resolve_root(&self) -> PathBuf {
		self.root
			.clone()
			.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
	}
}
