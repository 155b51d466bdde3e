mod common;

use ardvim_core::AnyEmptyResult;
use predicates::prelude::*;

#[test]
fn generate_writes_syntax_to_stdout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_installation(tmp.path(), common::KEYWORDS, common::TEMPLATE)?;
	std::fs::write(
		tmp.path().join("build/shared/revisions.txt"),
		"ARDUINO 1.0.5 - 2013.05.15\n\n* Bug fixes\n",
	)?;

	common::ardvim_cmd()
		.current_dir(tmp.path())
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicate::str::starts_with(
			"\" Arduino ARDUINO 1.0.5 - 2013.05.15, generated ",
		))
		.stdout(predicate::str::contains(
			"syn keyword arduinoConstant  HIGH LOW\n\nsyn keyword arduinoType      boolean\n",
		))
		.stderr(predicate::str::contains(
			"warning: no mapping for section `5-KEYWORD1`: [PROGMEM]",
		));

	Ok(())
}

#[test]
fn generate_defaults_to_current_directory() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_installation(tmp.path(), common::KEYWORDS, "$arduino_version\n")?;

	common::ardvim_cmd()
		.current_dir(tmp.path())
		.assert()
		.success()
		.stdout("unknown\n");

	Ok(())
}

#[test]
fn reserved_words_and_exclusions_are_silent() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_installation(
		tmp.path(),
		"boolean\tKEYWORD1\nint\tKEYWORD1\n\n+=\tKEYWORD1\n",
		"$rules",
	)?;

	common::ardvim_cmd()
		.current_dir(tmp.path())
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("syn keyword arduinoType      boolean")
		.stderr(predicate::str::is_empty());

	Ok(())
}

#[test]
fn collision_is_reported_and_dropped() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_installation(
		tmp.path(),
		"HIGH\tLITERAL1\nabs\tLITERAL1\n\nSerial\tKEYWORD3\n",
		"$rules",
	)?;

	common::ardvim_cmd()
		.current_dir(tmp.path())
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("syn keyword arduinoModule    Serial")
		.stderr(predicate::str::contains(
			"warning: collision for section `0-LITERAL1`: [HIGH, abs] maps to: arduinoConstant, \
			 arduinoStdFunc",
		));

	Ok(())
}

#[test]
fn config_adds_mappings() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_installation(tmp.path(), "PROGMEM\tKEYWORD1\n", "$rules")?;
	std::fs::write(
		tmp.path().join("ardvim.toml"),
		"[mappings]\nPROGMEM = \"arduinoQualifier\"\n",
	)?;

	common::ardvim_cmd()
		.current_dir(tmp.path())
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("syn keyword arduinoQualifier PROGMEM")
		.stderr(predicate::str::is_empty());

	Ok(())
}

#[test]
fn missing_placeholder_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_installation(tmp.path(), common::KEYWORDS, "$rules\n$maintainer\n")?;

	common::ardvim_cmd()
		.current_dir(tmp.path())
		.arg(tmp.path())
		.assert()
		.failure()
		.stdout(predicate::str::is_empty())
		.stderr(predicate::str::contains("unknown placeholder `$maintainer`"));

	Ok(())
}

#[test]
fn malformed_line_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_installation(tmp.path(), "HIGH\tLITERAL1\nbroken line\n", "$rules")?;

	common::ardvim_cmd()
		.current_dir(tmp.path())
		.arg(tmp.path())
		.assert()
		.failure()
		.stdout(predicate::str::is_empty())
		.stderr(predicate::str::contains("malformed keyword table line 2"));

	Ok(())
}

#[test]
fn missing_keyword_table_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::ardvim_cmd()
		.current_dir(tmp.path())
		.arg(tmp.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("failed to read keyword table"));

	Ok(())
}
