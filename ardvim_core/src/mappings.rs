use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Keywords that force their section into a syntax group. `None` marks a
/// section that is deliberately left without highlighting.
pub const DEFAULT_MAPPINGS: [(&str, Option<&str>); 10] = [
	("HIGH", Some("arduinoConstant")),
	("abs", Some("arduinoStdFunc")),
	("analogReference", Some("arduinoFunc")),
	("setup", Some("arduinoMethod")),
	("begin", Some("arduinoMethod")),
	("bitSet", Some("arduinoFunc")),
	("analogRead", Some("arduinoFunc")),
	("Serial", Some("arduinoModule")),
	("boolean", Some("arduinoType")),
	("+=", None),
];

/// C and C++ keywords. Vim already highlights these through the `cpp`
/// syntax, so they never end up in a generated group.
pub const CPP_RESERVED_WORDS: [&str; 62] = [
	"auto",
	"const",
	"double",
	"float",
	"int",
	"short",
	"struct",
	"unsigned",
	"break",
	"continue",
	"else",
	"for",
	"long",
	"signed",
	"switch",
	"void",
	"case",
	"default",
	"enum",
	"goto",
	"register",
	"sizeof",
	"typedef",
	"volatile",
	"char",
	"do",
	"extern",
	"if",
	"return",
	"static",
	"union",
	"while",
	"asm",
	"dynamic_cast",
	"namespace",
	"reinterpret_cast",
	"try",
	"bool",
	"explicit",
	"new",
	"static_cast",
	"typeid",
	"catch",
	"false",
	"operator",
	"template",
	"typename",
	"class",
	"friend",
	"private",
	"this",
	"using",
	"const_cast",
	"inline",
	"public",
	"throw",
	"virtual",
	"delete",
	"mutable",
	"protected",
	"true",
	"wchar_t",
];

/// The disambiguation table and reserved words used to resolve sections.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mappings {
	entries: BTreeMap<String, Option<String>>,
	reserved: BTreeSet<String>,
}

impl Default for Mappings {
	fn default() -> Self {
		Self::new(DEFAULT_MAPPINGS, CPP_RESERVED_WORDS)
	}
}

impl Mappings {
	pub fn new<M, K, B, R, W>(entries: M, reserved: R) -> Self
	where
		M: IntoIterator<Item = (K, Option<B>)>,
		K: Into<String>,
		B: Into<String>,
		R: IntoIterator<Item = W>,
		W: Into<String>,
	{
		Self {
			entries: entries
				.into_iter()
				.map(|(keyword, bucket)| (keyword.into(), bucket.map(Into::into)))
				.collect(),
			reserved: reserved.into_iter().map(Into::into).collect(),
		}
	}

	/// Add or replace entries, returning the updated table.
	#[must_use]
	pub fn with_entries<M, K, B>(mut self, entries: M) -> Self
	where
		M: IntoIterator<Item = (K, Option<B>)>,
		K: Into<String>,
		B: Into<String>,
	{
		self.entries.extend(
			entries
				.into_iter()
				.map(|(keyword, bucket)| (keyword.into(), bucket.map(Into::into))),
		);
		self
	}

	/// Add reserved words, returning the updated set.
	#[must_use]
	pub fn with_reserved<R, W>(mut self, reserved: R) -> Self
	where
		R: IntoIterator<Item = W>,
		W: Into<String>,
	{
		self.reserved.extend(reserved.into_iter().map(Into::into));
		self
	}

	/// Look up a keyword. The outer `Option` is whether the keyword is in the
	/// table at all, the inner one is the bucket or the exclusion marker.
	pub fn get(&self, keyword: &str) -> Option<Option<&str>> {
		self.entries.get(keyword).map(Option::as_deref)
	}

	pub fn is_reserved(&self, keyword: &str) -> bool {
		self.reserved.contains(keyword)
	}
}
