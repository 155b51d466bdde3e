use std::collections::BTreeMap;
use std::fmt::Display;

use derive_more::Deref;
use derive_more::DerefMut;

use crate::ArdvimResult;
use crate::KeywordRecord;

/// Identity of a section: the paragraph it appeared in and its category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId {
	pub paragraph: usize,
	pub category: String,
}

impl Display for SectionId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}-{}", self.paragraph, self.category)
	}
}

/// Keywords sharing a paragraph and category, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	pub id: SectionId,
	/// Heading in effect when the first keyword of the section was read.
	pub heading: String,
	pub keywords: Vec<String>,
}

/// All sections of a keyword table ordered by paragraph then category.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deref, DerefMut)]
pub struct Sections(BTreeMap<SectionId, Section>);

impl Sections {
	/// Append a record to the section it belongs to, creating the section on
	/// first sight.
	pub fn push(&mut self, record: KeywordRecord) {
		let id = SectionId {
			paragraph: record.paragraph,
			category: record.category,
		};

		self.0
			.entry(id.clone())
			.or_insert_with(|| {
				Section {
					id,
					heading: record.heading,
					keywords: Vec::new(),
				}
			})
			.keywords
			.push(record.keyword);
	}
}

impl FromIterator<KeywordRecord> for Sections {
	fn from_iter<T: IntoIterator<Item = KeywordRecord>>(iter: T) -> Self {
		let mut sections = Self::default();
		for record in iter {
			sections.push(record);
		}
		sections
	}
}

/// Group records by `(paragraph, category)`, stopping at the first read
/// error.
pub fn group_sections<I>(records: I) -> ArdvimResult<Sections>
where
	I: IntoIterator<Item = ArdvimResult<KeywordRecord>>,
{
	records.into_iter().collect()
}
