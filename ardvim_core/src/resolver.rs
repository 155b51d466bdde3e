use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt::Display;

use derive_more::Deref;

use crate::Mappings;
use crate::Section;
use crate::SectionId;
use crate::Sections;

/// Outcome of resolving a single section against the disambiguation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	/// Every mapped keyword agrees on this bucket.
	Bucket(String),
	/// The only mapped value is the exclusion marker.
	Excluded,
	/// None of the section's keywords appear in the table.
	Unmapped,
	/// Mapped keywords disagree. Buckets are listed in first-seen order.
	Collision { buckets: Vec<String> },
}

impl Mappings {
	/// Decide which bucket a section belongs to.
	///
	/// Several keywords mapping to the same bucket resolve exactly like a
	/// single hit. Exclusion markers only win when no keyword names a bucket.
	pub fn resolve(&self, section: &Section) -> Resolution {
		let mut hits = 0_usize;
		let mut buckets: Vec<&str> = Vec::new();

		for keyword in &section.keywords {
			let Some(mapped) = self.get(keyword) else {
				continue;
			};

			hits += 1;

			if let Some(bucket) = mapped {
				if !buckets.contains(&bucket) {
					buckets.push(bucket);
				}
			}
		}

		match (hits, buckets.as_slice()) {
			(0, _) => Resolution::Unmapped,
			(_, []) => Resolution::Excluded,
			(_, [bucket]) => Resolution::Bucket((*bucket).to_string()),
			(_, buckets) => {
				Resolution::Collision {
					buckets: buckets.iter().map(ToString::to_string).collect(),
				}
			}
		}
	}
}

/// Why a section was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionWarningKind {
	/// No keyword of the section appears in the disambiguation table.
	NoMapping,
	/// The section's keywords map to more than one bucket.
	Collision { buckets: Vec<String> },
}

/// A section that was dropped from the output, reported without aborting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionWarning {
	pub section: SectionId,
	pub heading: String,
	pub keywords: Vec<String>,
	pub kind: SectionWarningKind,
}

impl Display for SectionWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let keywords = self.keywords.join(", ");

		match &self.kind {
			SectionWarningKind::NoMapping => {
				write!(f, "no mapping for section `{}`: [{keywords}]", self.section)
			}
			SectionWarningKind::Collision { buckets } => {
				write!(
					f,
					"collision for section `{}`: [{keywords}] maps to: {}",
					self.section,
					buckets.join(", ")
				)
			}
		}
	}
}

/// Keywords collected per bucket name. Both levels iterate in sorted order so
/// rendering is deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deref)]
pub struct SyntaxGroups(BTreeMap<String, BTreeSet<String>>);

impl SyntaxGroups {
	/// Merge keywords into the named bucket.
	pub fn extend<I, S>(&mut self, bucket: &str, keywords: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.0
			.entry(bucket.to_string())
			.or_default()
			.extend(keywords.into_iter().map(Into::into));
	}
}

impl<B, K> FromIterator<(B, K)> for SyntaxGroups
where
	B: AsRef<str>,
	K: IntoIterator,
	K::Item: Into<String>,
{
	fn from_iter<T: IntoIterator<Item = (B, K)>>(iter: T) -> Self {
		let mut groups = Self::default();
		for (bucket, keywords) in iter {
			groups.extend(bucket.as_ref(), keywords);
		}
		groups
	}
}

/// Syntax groups together with the sections that could not be placed.
#[derive(Debug, Default)]
pub struct ResolvedGroups {
	pub groups: SyntaxGroups,
	pub warnings: Vec<SectionWarning>,
}

/// Resolve every section and merge the surviving keywords into groups.
/// Reserved words are dropped from every group.
pub fn resolve_sections(sections: &Sections, mappings: &Mappings) -> ResolvedGroups {
	let mut resolved = ResolvedGroups::default();

	for section in sections.values() {
		let warning = |kind| {
			SectionWarning {
				section: section.id.clone(),
				heading: section.heading.clone(),
				keywords: section.keywords.clone(),
				kind,
			}
		};

		match mappings.resolve(section) {
			Resolution::Bucket(bucket) => {
				let keywords: Vec<&str> = section
					.keywords
					.iter()
					.map(String::as_str)
					.filter(|keyword| !mappings.is_reserved(keyword))
					.collect();

				if keywords.is_empty() {
					tracing::debug!(section = %section.id, %bucket, "only reserved words in section");
					continue;
				}

				tracing::debug!(section = %section.id, %bucket, "resolved section");
				resolved.groups.extend(&bucket, keywords);
			}
			Resolution::Excluded => {
				tracing::debug!(section = %section.id, "section excluded");
			}
			Resolution::Unmapped => {
				let warning = warning(SectionWarningKind::NoMapping);
				tracing::warn!("{warning}");
				resolved.warnings.push(warning);
			}
			Resolution::Collision { buckets } => {
				let warning = warning(SectionWarningKind::Collision { buckets });
				tracing::warn!("{warning}");
				resolved.warnings.push(warning);
			}
		}
	}

	resolved
}
