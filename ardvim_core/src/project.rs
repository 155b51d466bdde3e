use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use chrono::Local;
use chrono::NaiveDate;

use crate::ArdvimConfig;
use crate::ArdvimError;
use crate::ArdvimResult;
use crate::DATE_PLACEHOLDER;
use crate::Mappings;
use crate::RULES_PLACEHOLDER;
use crate::SectionWarning;
use crate::VERSION_PLACEHOLDER;
use crate::config::DEFAULT_KEYWORDS_FILE;
use crate::config::DEFAULT_REVISIONS_FILE;
use crate::config::DEFAULT_SHARED_DIR;
use crate::config::DEFAULT_TEMPLATE_FILE;
use crate::fill_template;
use crate::group_sections;
use crate::read_records;
use crate::read_version;
use crate::render_groups;
use crate::resolve_sections;

/// Format of the `$date` placeholder, e.g. `18 October 2026`.
pub const DATE_FORMAT: &str = "%d %B %Y";

/// Locations of the files a run reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
	pub root: PathBuf,
	pub keywords: PathBuf,
	pub revisions: PathBuf,
	pub template: PathBuf,
}

impl ProjectPaths {
	/// Resolve file locations under `root`, applying config overrides. The
	/// template is resolved against the working directory.
	pub fn discover(root: &Path, config: &ArdvimConfig) -> Self {
		let shared_dir = root.join(
			config
				.shared_dir
				.as_deref()
				.unwrap_or(Path::new(DEFAULT_SHARED_DIR)),
		);
		let keywords = config.keywords.as_ref().map_or_else(
			|| shared_dir.join(DEFAULT_KEYWORDS_FILE),
			|path| root.join(path),
		);
		let revisions = config.revisions.as_ref().map_or_else(
			|| shared_dir.join(DEFAULT_REVISIONS_FILE),
			|path| root.join(path),
		);
		let template = config
			.template
			.clone()
			.unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_FILE));

		Self {
			root: root.to_path_buf(),
			keywords,
			revisions,
			template,
		}
	}
}

/// Everything a single run needs.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
	pub paths: ProjectPaths,
	pub mappings: Mappings,
	pub date: NaiveDate,
}

impl GenerateOptions {
	/// Load the config at `root` and use today's date.
	pub fn load(root: &Path) -> ArdvimResult<Self> {
		let config = ArdvimConfig::load(root)?.unwrap_or_default();

		Ok(Self {
			paths: ProjectPaths::discover(root, &config),
			mappings: config.mappings(),
			date: Local::now().date_naive(),
		})
	}
}

/// Output of a successful run.
#[derive(Debug)]
pub struct GenerateResult {
	/// The filled template.
	pub output: String,
	/// Sections dropped from the output.
	pub warnings: Vec<SectionWarning>,
}

/// Format a date the way the `$date` placeholder expects.
pub fn format_date(date: NaiveDate) -> String {
	date.format(DATE_FORMAT).to_string()
}

/// Read the keyword table, resolve it into syntax groups and fill the
/// template.
pub fn generate(options: &GenerateOptions) -> ArdvimResult<GenerateResult> {
	let paths = &options.paths;
	tracing::debug!(keywords = %paths.keywords.display(), "reading keyword table");

	let keyword_file_error = |e: std::io::Error| {
		ArdvimError::KeywordFile {
			path: paths.keywords.display().to_string(),
			reason: e.to_string(),
		}
	};
	let file = File::open(&paths.keywords).map_err(keyword_file_error)?;
	let sections =
		group_sections(read_records(BufReader::new(file))).map_err(|error| {
			match error {
				ArdvimError::Io(e) => keyword_file_error(e),
				other => other,
			}
		})?;
	let resolved = resolve_sections(&sections, &options.mappings);

	tracing::debug!(template = %paths.template.display(), "reading template");
	let source = std::fs::read_to_string(&paths.template).map_err(|e| {
		ArdvimError::TemplateFile {
			path: paths.template.display().to_string(),
			reason: e.to_string(),
		}
	})?;

	let values = HashMap::from([
		(RULES_PLACEHOLDER.to_string(), render_groups(&resolved.groups)),
		(DATE_PLACEHOLDER.to_string(), format_date(options.date)),
		(
			VERSION_PLACEHOLDER.to_string(),
			read_version(&paths.revisions),
		),
	]);
	let output = fill_template(&source, &values)?;

	Ok(GenerateResult {
		output,
		warnings: resolved.warnings,
	})
}
