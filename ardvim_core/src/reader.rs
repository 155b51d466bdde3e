use std::io::BufRead;

use crate::ArdvimError;
use crate::ArdvimResult;

/// Lines starting with this character are section headings.
pub const HEADING_MARKER: char = '#';

/// Separates the fields of a data line.
pub const FIELD_DELIMITER: char = '\t';

/// A single data line of the keyword table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRecord {
	/// The keyword itself, e.g. `digitalWrite`.
	pub keyword: String,
	/// The category label from the second column, e.g. `KEYWORD2`.
	pub category: String,
	/// Text of the most recent heading line, without the marker.
	pub heading: String,
	/// Number of blank lines seen before this record.
	pub paragraph: usize,
}

/// Scan state carried from one line to the next.
#[derive(Debug, Default, Clone)]
struct ReaderState {
	heading: String,
	paragraph: usize,
	line: usize,
}

impl ReaderState {
	/// Fold a single line into the state, producing a record for data lines.
	fn consume(&mut self, raw: &[u8]) -> ArdvimResult<Option<KeywordRecord>> {
		self.line += 1;
		let decoded = String::from_utf8_lossy(raw);
		let line = decoded.trim_end_matches(['\r', '\n']);

		if line.trim().is_empty() {
			self.paragraph += 1;
			return Ok(None);
		}

		if let Some(heading) = line.strip_prefix(HEADING_MARKER) {
			heading.trim().clone_into(&mut self.heading);
			return Ok(None);
		}

		let mut fields = line.split(FIELD_DELIMITER);
		let (Some(keyword), Some(category)) = (fields.next(), fields.next()) else {
			return Err(ArdvimError::MalformedLine {
				line: self.line,
				content: line.to_string(),
			});
		};

		Ok(Some(KeywordRecord {
			keyword: keyword.to_string(),
			category: category.to_string(),
			heading: self.heading.clone(),
			paragraph: self.paragraph,
		}))
	}
}

/// Lazily reads [`KeywordRecord`]s from a keyword table.
///
/// The iterator is single pass: it consumes the underlying reader and stops
/// after the first error. Bytes that are not valid UTF-8 are replaced with
/// `U+FFFD`.
pub struct KeywordRecords<R> {
	lines: std::io::Split<R>,
	state: ReaderState,
	failed: bool,
}

impl<R: BufRead> Iterator for KeywordRecords<R> {
	type Item = ArdvimResult<KeywordRecord>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed {
			return None;
		}

		for line in self.lines.by_ref() {
			let result = line
				.map_err(ArdvimError::from)
				.and_then(|line| self.state.consume(&line));

			match result {
				Ok(Some(record)) => return Some(Ok(record)),
				Ok(None) => {}
				Err(error) => {
					self.failed = true;
					return Some(Err(error));
				}
			}
		}

		None
	}
}

/// Read keyword records from a tab delimited keyword table.
///
/// Blank lines advance the paragraph counter, heading lines update the
/// current heading and every other line must contain at least a keyword and
/// a category. Fields past the second are ignored.
pub fn read_records<R: BufRead>(reader: R) -> KeywordRecords<R> {
	KeywordRecords {
		lines: reader.split(b'\n'),
		state: ReaderState::default(),
		failed: false,
	}
}
