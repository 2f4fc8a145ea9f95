//! Logging utilities for syscall-defgen
//!
//! This module provides logging functionality for the generator.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Initialize logging once
static INIT: Once = Once::new();

/// Environment variable that turns on debug logging
pub const DEBUG_ENV: &str = "SYSCALL_DEFGEN_DEBUG";

/// Initialize the tracing system
///
/// This function sets up tracing with an `EnvFilter` that:
/// - Honors the `RUST_LOG` environment variable if set
/// - Uses the `SYSCALL_DEFGEN_DEBUG` environment variable to enable debug logging
/// - Logs info and above when `verbose` is set
/// - Only logs warnings and errors by default
///
/// Logs go to stderr; stdout is left to the command output.
pub fn init_logging(verbose: bool) {
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			EnvFilter::new(format!("syscall_defgen={}", default_level(verbose)))
		});

		tracing_subscriber::registry()
			.with(fmt::layer().with_target(true).with_writer(std::io::stderr))
			.with(filter)
			.init();
	});
}

fn default_level(verbose: bool) -> &'static str {
	if std::env::var_os(DEBUG_ENV).is_some() {
		"debug"
	} else if verbose {
		"info"
	} else {
		"warn"
	}
}
