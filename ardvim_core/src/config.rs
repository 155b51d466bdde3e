use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ArdvimError;
use crate::ArdvimResult;
use crate::Mappings;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["ardvim.toml", ".ardvim.toml", ".config/ardvim.toml"];

/// Shared directory of an Arduino installation, relative to its root.
pub const DEFAULT_SHARED_DIR: &str = "build/shared";

/// Keyword table, relative to the shared directory.
pub const DEFAULT_KEYWORDS_FILE: &str = "lib/keywords.txt";

/// Version file, relative to the shared directory.
pub const DEFAULT_REVISIONS_FILE: &str = "revisions.txt";

/// Template document, relative to the working directory.
pub const DEFAULT_TEMPLATE_FILE: &str = "template.vim";

/// Configuration loaded from an `ardvim.toml` file.
///
/// ```toml
/// shared_dir = "build/shared"
/// keywords = "build/shared/lib/keywords.txt"
/// revisions = "build/shared/revisions.txt"
/// template = "template.vim"
/// reserved = ["nullptr"]
///
/// [mappings]
/// pinMode = "arduinoFunc"
/// "-=" = ""
/// ```
///
/// An empty string in `[mappings]` marks keywords whose section should be
/// left out without a warning.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ArdvimConfig {
	/// Shared directory relative to the root.
	#[serde(default)]
	pub shared_dir: Option<PathBuf>,
	/// Keyword table relative to the root.
	#[serde(default)]
	pub keywords: Option<PathBuf>,
	/// Version file relative to the root.
	#[serde(default)]
	pub revisions: Option<PathBuf>,
	/// Template document relative to the working directory.
	#[serde(default)]
	pub template: Option<PathBuf>,
	/// Extra disambiguation entries, overriding the built-in ones.
	#[serde(default)]
	pub mappings: BTreeMap<String, String>,
	/// Extra reserved words.
	#[serde(default)]
	pub reserved: Vec<String>,
}

impl ArdvimConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> ArdvimResult<Option<ArdvimConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;

		Ok(Some(config))
	}

	pub fn parse(content: &str) -> ArdvimResult<ArdvimConfig> {
		toml::from_str(content).map_err(|e| ArdvimError::ConfigParse(e.to_string()))
	}

	/// Built-in mappings extended with the configured entries and reserved
	/// words.
	pub fn mappings(&self) -> Mappings {
		let entries = self.mappings.iter().map(|(keyword, bucket)| {
			let bucket = (!bucket.is_empty()).then_some(bucket.as_str());
			(keyword.as_str(), bucket)
		});

		Mappings::default()
			.with_entries(entries)
			.with_reserved(self.reserved.iter().map(String::as_str))
	}
}
