use std::collections::HashMap;

use logos::Logos;

use crate::ArdvimError;
use crate::ArdvimResult;

/// Placeholder for the rendered `syn keyword` rules.
pub const RULES_PLACEHOLDER: &str = "rules";
/// Placeholder for the generation date.
pub const DATE_PLACEHOLDER: &str = "date";
/// Placeholder for the Arduino version string.
pub const VERSION_PLACEHOLDER: &str = "arduino_version";

/// Raw tokens of a dollar substitution template.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[token("$$")]
	Escape,
	#[regex(r"\$\{[A-Za-z_][A-Za-z0-9_]*\}")]
	BracedPlaceholder,
	#[regex(r"\$[A-Za-z_][A-Za-z0-9_]*")]
	Placeholder,
	#[token("$")]
	Dollar,
	#[regex(r"[^$]+")]
	Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Text(String),
	Placeholder {
		name: String,
		/// 1-indexed line of the `$`.
		line: usize,
		/// 1-indexed column of the `$`.
		column: usize,
	},
}

/// A parsed template document using `$name` / `${name}` placeholders and
/// `$$` for a literal dollar sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
	segments: Vec<Segment>,
}

/// Convert a byte offset into a 1-indexed line and column.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
	let before = &source[..offset];
	let line = before.matches('\n').count() + 1;
	let line_start = before.rfind('\n').map_or(0, |index| index + 1);
	let column = before[line_start..].chars().count() + 1;
	(line, column)
}

impl Template {
	pub fn parse(source: &str) -> ArdvimResult<Self> {
		let mut segments = Vec::new();
		let mut text = String::new();

		for (token, span) in RawToken::lexer(source).spanned() {
			let slice = &source[span.clone()];

			match token {
				Ok(RawToken::Text) => text.push_str(slice),
				Ok(RawToken::Escape) => text.push('$'),
				Ok(RawToken::Placeholder | RawToken::BracedPlaceholder) => {
					if !text.is_empty() {
						segments.push(Segment::Text(std::mem::take(&mut text)));
					}

					let name = slice.trim_start_matches('$');
					let name = name
						.strip_prefix('{')
						.and_then(|name| name.strip_suffix('}'))
						.unwrap_or(name);
					let (line, column) = line_column(source, span.start);

					segments.push(Segment::Placeholder {
						name: name.to_string(),
						line,
						column,
					});
				}
				Ok(RawToken::Dollar) | Err(()) => {
					let (line, column) = line_column(source, span.start);
					return Err(ArdvimError::InvalidPlaceholder { line, column });
				}
			}
		}

		if !text.is_empty() {
			segments.push(Segment::Text(text));
		}

		Ok(Self { segments })
	}

	/// Replace every placeholder with its value. Values that the template
	/// does not use are ignored, but a placeholder without a value is an
	/// error.
	#[allow(clippy::implicit_hasher)]
	pub fn substitute(&self, values: &HashMap<String, String>) -> ArdvimResult<String> {
		let mut output = String::new();

		for segment in &self.segments {
			match segment {
				Segment::Text(text) => output.push_str(text),
				Segment::Placeholder { name, line, column } => {
					let value = values.get(name).ok_or_else(|| {
						ArdvimError::UnknownPlaceholder {
							name: name.clone(),
							line: *line,
							column: *column,
						}
					})?;
					output.push_str(value);
				}
			}
		}

		Ok(output)
	}
}

/// Parse `source` and substitute `values` in a single step.
#[allow(clippy::implicit_hasher)]
pub fn fill_template(source: &str, values: &HashMap<String, String>) -> ArdvimResult<String> {
	Template::parse(source)?.substitute(values)
}
