use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ArdvimError {
	#[error(transparent)]
	#[diagnostic(code(ardvim::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read keyword table `{path}`: {reason}")]
	#[diagnostic(
		code(ardvim::keyword_file),
		help("pass the arduino installation directory as the first argument")
	)]
	KeywordFile { path: String, reason: String },

	#[error("failed to read template `{path}`: {reason}")]
	#[diagnostic(
		code(ardvim::template_file),
		help("run ardvim from the directory containing `template.vim` or set `template` in ardvim.toml")
	)]
	TemplateFile { path: String, reason: String },

	#[error("malformed keyword table line {line}: `{content}`")]
	#[diagnostic(
		code(ardvim::malformed_line),
		help("data lines need at least a keyword and a category separated by a tab")
	)]
	MalformedLine { line: usize, content: String },

	#[error("template references unknown placeholder `${name}` at {line}:{column}")]
	#[diagnostic(
		code(ardvim::unknown_placeholder),
		help("available placeholders: $rules, $date, $arduino_version")
	)]
	UnknownPlaceholder {
		name: String,
		line: usize,
		column: usize,
	},

	#[error("invalid placeholder in template at {line}:{column}")]
	#[diagnostic(
		code(ardvim::invalid_placeholder),
		help("use `$$` for a literal dollar sign")
	)]
	InvalidPlaceholder { line: usize, column: usize },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(ardvim::config_parse),
		help("check that ardvim.toml is valid TOML")
	)]
	ConfigParse(String),
}

pub type ArdvimResult<T> = Result<T, ArdvimError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
