use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

/// Substituted when the version file is missing or unreadable.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Read the version string from the first line of `revisions_file`.
///
/// Any failure falls back to [`UNKNOWN_VERSION`].
pub fn read_version(revisions_file: &Path) -> String {
	match read_first_line(revisions_file) {
		Ok(Some(version)) => version,
		Ok(None) => {
			tracing::debug!(path = %revisions_file.display(), "version file is empty");
			UNKNOWN_VERSION.to_string()
		}
		Err(error) => {
			tracing::debug!(path = %revisions_file.display(), %error, "version file unavailable");
			UNKNOWN_VERSION.to_string()
		}
	}
}

fn read_first_line(path: &Path) -> std::io::Result<Option<String>> {
	let mut reader = BufReader::new(File::open(path)?);
	let mut line = String::new();

	if reader.read_line(&mut line)? == 0 {
		return Ok(None);
	}

	let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
	line.truncate(trimmed_len);
	Ok(Some(line))
}
