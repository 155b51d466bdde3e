use std::cmp::Ordering;

use crate::SyntaxGroups;

/// Longest line the renderer produces, unless a single keyword cannot fit.
pub const MAX_LINE_WIDTH: usize = 80;

/// Minimum width of the group name column in the label.
pub const GROUP_NAME_WIDTH: usize = 16;

/// The label that starts every line of a group, e.g.
/// `syn keyword arduinoFunc     `.
pub fn label(group: &str) -> String {
	format!("syn keyword {group:<width$}", width = GROUP_NAME_WIDTH)
}

/// Case insensitive order with the exact spelling as a tie breaker, so the
/// order is total and independent of input order.
fn compare_keywords(a: &str, b: &str) -> Ordering {
	a.to_lowercase()
		.cmp(&b.to_lowercase())
		.then_with(|| a.cmp(b))
}

/// Render a single group as one or more `syn keyword` lines.
pub fn render_group<'a, I>(group: &str, keywords: I) -> String
where
	I: IntoIterator<Item = &'a str>,
{
	let mut keywords: Vec<&str> = keywords.into_iter().collect();
	keywords.sort_by(|a, b| compare_keywords(a, b));
	keywords.dedup();

	let label = label(group);
	let mut output = String::new();
	let mut line = label.clone();
	let mut has_keyword = false;

	for keyword in keywords {
		let width = line.chars().count() + 1 + keyword.chars().count();

		if has_keyword && width > MAX_LINE_WIDTH {
			output.push_str(&line);
			output.push('\n');
			line.clone_from(&label);
		}

		line.push(' ');
		line.push_str(keyword);
		has_keyword = true;
	}

	output.push_str(&line);
	output
}

/// Render every group, in ascending group name order, separated by a blank
/// line.
pub fn render_groups(groups: &SyntaxGroups) -> String {
	groups
		.iter()
		.map(|(name, keywords)| render_group(name, keywords.iter().map(String::as_str)))
		.collect::<Vec<_>>()
		.join("\n\n")
}
