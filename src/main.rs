//! Command-line entry point for syscall-defgen

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use syscall_defgen::header::DEFAULT_MACRO_PREFIX;
use syscall_defgen::util::init_logging;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
	/// Path of the header to generate.
	output: PathBuf,
	/// Kernel syscall tables, one per architecture (e.g. syscalls-x86_64.txt).
	#[arg(required = true)]
	tables: Vec<PathBuf>,
	/// Syscall to emit; may be repeated. Replaces the built-in list.
	#[arg(long = "syscall", value_name = "NAME")]
	syscalls: Vec<String>,
	/// Prefix of the generated number macros.
	#[arg(long, default_value = DEFAULT_MACRO_PREFIX)]
	prefix: String,
	/// Only check that the output is up to date; do not write it.
	#[arg(long)]
	check: bool,
	/// Log every table read.
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging(args.verbose);

	let mut builder = syscall_defgen::new().macro_prefix(args.prefix);
	if !args.syscalls.is_empty() {
		builder = builder.symbols(args.syscalls);
	}
	let generator = builder.build().context("invalid generator configuration")?;

	if args.check {
		generator.check(&args.output, &args.tables)?;
		println!("{} is up to date", args.output.display());
	} else {
		generator
			.generate(&args.output, &args.tables)
			.with_context(|| format!("failed to generate {}", args.output.display()))?;
		println!("Wrote {}", args.output.display());
	}

	Ok(())
}
