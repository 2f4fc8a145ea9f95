//! Syscall symbol list
//!
//! We only generate numbers for a handful of syscalls: the ones the C
//! library headers may still be missing.

use crate::error::{GenError, Result};
use std::collections::HashSet;

/// Syscalls emitted when no list is given
pub const DEFAULT_SYSCALLS: &[&str] = &[
	"close_range",   // in glibc headers since 2.33
	"fchmodat2",     // in glibc headers since 2.39
	"mount_setattr", // in glibc headers since 2.34
	"openat2",       // in glibc headers since 2.32
	"quotactl_fd",   // in glibc headers since 2.35
	"removexattrat",
	"setxattrat",
];

/// Check whether a string is a valid C identifier
#[must_use]
pub fn is_c_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	chars
		.next()
		.is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate a symbol list
///
/// Every name must be a C identifier and appear only once, since each
/// one becomes part of a macro name.
pub fn validate_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<()> {
	if symbols.is_empty() {
		return Err(GenError::NoSymbols);
	}

	let mut seen = HashSet::new();
	for symbol in symbols {
		let symbol = symbol.as_ref();
		if !is_c_identifier(symbol) {
			return Err(GenError::InvalidSymbol(symbol.to_string()));
		}
		if !seen.insert(symbol) {
			return Err(GenError::DuplicateSymbol(symbol.to_string()));
		}
	}

	Ok(())
}
