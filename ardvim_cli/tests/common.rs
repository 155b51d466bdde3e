use std::path::Path;

use ardvim_core::AnyEmptyResult;
use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub const KEYWORDS: &str = "# LITERAL1 specifies constants

HIGH\tLITERAL1\tConstants
LOW\tLITERAL1\tConstants

# KEYWORD1 specifies datatypes

boolean\tKEYWORD1\tBooleanVariables
int\tKEYWORD1\tInt

+=\tKEYWORD1\tIncrementCompound

PROGMEM\tKEYWORD1\tPROGMEM
";

pub const TEMPLATE: &str = "\" Arduino $arduino_version, generated $date\n\n$rules\n";

pub fn ardvim_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("ardvim"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("ARDVIM_LOG");
	cmd
}

/// Lay out an Arduino installation with the keyword table at
/// `build/shared/lib/keywords.txt` and a `template.vim` at `root`.
pub fn write_installation(root: &Path, keywords: &str, template: &str) -> AnyEmptyResult {
	let lib = root.join("build/shared/lib");
	std::fs::create_dir_all(&lib)?;
	std::fs::write(lib.join("keywords.txt"), keywords)?;
	std::fs::write(root.join("template.vim"), template)?;

	Ok(())
}
