//! Error types for the generator
//!
//! This module contains the error type and a result type shared by the
//! table loader, the symbol list and the generator.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Error type for generator operations
#[derive(Debug, Error)]
pub enum GenError {
	/// A file could not be read or written
	#[error("I/O error on {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The second token of a table line is not an integer
	#[error("{}:{line}: invalid syscall number {token:?}: {source}", .path.display())]
	InvalidNumber {
		path: PathBuf,
		line: usize,
		token: String,
		#[source]
		source: ParseIntError,
	},

	/// A syscall name (or macro prefix) is not a valid C identifier
	#[error("{0:?} is not a valid C identifier")]
	InvalidSymbol(String),

	/// A syscall name appears more than once in the symbol list
	#[error("syscall {0:?} is listed more than once")]
	DuplicateSymbol(String),

	/// The symbol list is empty
	#[error("no syscalls to generate")]
	NoSymbols,

	/// The existing header does not match freshly generated output
	#[error("{} is out of date", .path.display())]
	Stale { path: PathBuf },
}

impl GenError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}
