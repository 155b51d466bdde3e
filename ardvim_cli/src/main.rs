use std::io::Write;
use std::process;

use ardvim_cli::ArdvimCli;
use ardvim_cli::LOG_ENV;
use ardvim_core::AnyEmptyResult;
use ardvim_core::GenerateOptions;
use ardvim_core::SectionWarning;
use ardvim_core::generate;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = ArdvimCli::parse();
	let use_color = std::env::var_os("NO_COLOR").is_none();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off")),
		)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.init();

	if let Err(e) = run(&args, use_color) {
		match e.downcast::<ardvim_core::ArdvimError>() {
			Ok(ardvim_err) => {
				let report: miette::Report = (*ardvim_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				let label = "error:";
				if use_color {
					eprintln!("{} {e}", label.red());
				} else {
					eprintln!("{label} {e}");
				}
			}
		}
		process::exit(1);
	}
}

fn run(args: &ArdvimCli, use_color: bool) -> AnyEmptyResult {
	let root = args.resolve_root();
	let options = GenerateOptions::load(&root)?;
	let result = generate(&options)?;

	print_section_warnings(&result.warnings, use_color);

	let mut stdout = std::io::stdout().lock();
	stdout.write_all(result.output.as_bytes())?;
	stdout.flush()?;

	Ok(())
}

/// Print sections that were dropped from the output.
fn print_section_warnings(warnings: &[SectionWarning], use_color: bool) {
	let label = "warning:";

	for warning in warnings {
		if use_color {
			eprintln!("{} {warning}", label.yellow());
		} else {
			eprintln!("{label} {warning}");
		}
	}
}
