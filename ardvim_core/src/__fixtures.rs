use chrono::NaiveDate;

use crate::Mappings;
use crate::Section;
use crate::SectionId;

/// A trimmed down copy of the Arduino IDE `keywords.txt`.
pub const SAMPLE_KEYWORDS: &str = "# LITERAL1 specifies constants

HIGH\tLITERAL1\tConstants
LOW\tLITERAL1\tConstants
INPUT\tLITERAL1\tConstants

# KEYWORD1 specifies datatypes and C/C++ keywords

boolean\tKEYWORD1\tBooleanVariables
byte\tKEYWORD1\tByte
int\tKEYWORD1\tInt
word\tKEYWORD1\tWord

# operators aren't highlighted

+=\tKEYWORD1\tIncrementCompound
-=\tKEYWORD1\tIncrementCompound

# KEYWORD2 specifies methods and functions

abs\tKEYWORD2\tAbs
max\tKEYWORD2\tMax
min\tKEYWORD2\tMin

analogRead\tKEYWORD2\tAnalogRead
analogWrite\tKEYWORD2\tAnalogWrite
digitalWrite\tKEYWORD2\tDigitalWrite

setup\tKEYWORD3\tSetup
loop\tKEYWORD3\tLoop

Serial\tKEYWORD3\tSerial

PROGMEM\tKEYWORD1\tPROGMEM
";

/// Expected `syn keyword` rules for [`SAMPLE_KEYWORDS`] with the default
/// mappings.
pub const SAMPLE_RULES: &str = "syn keyword arduinoConstant  HIGH INPUT LOW

syn keyword arduinoFunc      analogRead analogWrite digitalWrite

syn keyword arduinoMethod    loop setup

syn keyword arduinoModule    Serial

syn keyword arduinoStdFunc   abs max min

syn keyword arduinoType      boolean byte word";

/// Mappings with two conflicting buckets and an exclusion marker.
pub fn test_mappings() -> Mappings {
	Mappings::new(
		[
			("foo", Some("group1")),
			("baz", Some("group1")),
			("bar", Some("group2")),
			("+=", None),
		],
		["int", "while"],
	)
}

pub fn section(paragraph: usize, category: &str, keywords: &[&str]) -> Section {
	Section {
		id: SectionId {
			paragraph,
			category: category.to_string(),
		},
		heading: String::new(),
		keywords: keywords.iter().map(ToString::to_string).collect(),
	}
}

pub fn sample_date() -> NaiveDate {
	NaiveDate::from_ymd_opt(2026, 10, 18).unwrap_or_else(|| panic!("invalid fixture date"))
}
