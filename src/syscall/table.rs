//! Syscall table loading
//!
//! This module reads the per-architecture kernel syscall tables. Each
//! table is a text file whose lines start with a syscall name followed
//! by its number; everything after the second token is ignored.

use crate::arch::Arch;
use crate::error::{GenError, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Number emitted for syscalls that a table does not define
pub const UNDEFINED_NR: i64 = -1;

/// Syscall numbers of a single architecture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyscallTable {
	entries: BTreeMap<String, i64>,
}

impl SyscallTable {
	/// Create an empty table
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Get the number of a syscall, if the table defines it
	#[must_use]
	pub fn get(&self, symbol: &str) -> Option<i64> {
		self.entries.get(symbol).copied()
	}

	/// Number of syscalls in the table
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the table defines no syscalls at all
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate over `(name, number)` pairs in name order
	pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
		self.entries.iter().map(|(name, nr)| (name.as_str(), *nr))
	}
}

impl<S: Into<String>> FromIterator<(S, i64)> for SyscallTable {
	fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(name, nr)| (name.into(), nr)).collect(),
		}
	}
}

/// Parse a syscall table
///
/// Lines with fewer than two tokens are skipped. A second token that is
/// not an integer is an error; nothing is recovered from a bad table.
/// `path` is only used for error messages.
pub fn parse_table<R: BufRead>(path: &Path, reader: R) -> Result<SyscallTable> {
	let mut entries = BTreeMap::new();

	for (index, line) in reader.lines().enumerate() {
		let line = line.map_err(|e| GenError::io(path, e))?;
		let mut tokens = line.split_whitespace();
		let (Some(name), Some(token)) = (tokens.next(), tokens.next()) else {
			continue;
		};

		let nr = token.parse::<i64>().map_err(|source| GenError::InvalidNumber {
			path: path.to_path_buf(),
			line: index + 1,
			token: token.to_string(),
			source,
		})?;
		entries.insert(name.to_string(), nr);
	}

	Ok(SyscallTable { entries })
}

/// Derive the architecture name from a table file name
///
/// `syscalls-x86_64.txt` becomes `x86_64`. A name without a dash uses
/// its whole stem.
#[must_use]
pub fn arch_from_path(path: &Path) -> String {
	let stem = path
		.file_stem()
		.map(|s| s.to_string_lossy().into_owned())
		.unwrap_or_default();

	match stem.rsplit_once('-') {
		Some((_, arch)) => arch.to_string(),
		None => stem,
	}
}

/// Load a single table file
pub fn load_table(path: &Path) -> Result<SyscallTable> {
	info!("Reading {}", path.display());

	let file = File::open(path).map_err(|e| GenError::io(path, e))?;
	parse_table(path, BufReader::new(file))
}

/// Syscall tables of every architecture given on the command line
///
/// Architectures without a table behave as if their table were empty.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
	tables: BTreeMap<Arch, SyscallTable>,
}

impl TableSet {
	/// Create an empty set
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Add the table of an architecture, returning the one it replaces
	pub fn insert(&mut self, arch: Arch, table: SyscallTable) -> Option<SyscallTable> {
		self.tables.insert(arch, table)
	}

	/// Get the table of an architecture
	#[must_use]
	pub fn get(&self, arch: Arch) -> Option<&SyscallTable> {
		self.tables.get(&arch)
	}

	/// Get the number of a syscall, or [`UNDEFINED_NR`] if unknown
	#[must_use]
	pub fn number(&self, arch: Arch, symbol: &str) -> i64 {
		self.get(arch)
			.and_then(|table| table.get(symbol))
			.unwrap_or(UNDEFINED_NR)
	}

	/// Whether any table defines the syscall
	#[must_use]
	pub fn defines(&self, symbol: &str) -> bool {
		self.tables.values().any(|table| table.get(symbol).is_some())
	}

	/// Architectures that have a table, in template order
	pub fn arches(&self) -> impl Iterator<Item = Arch> + '_ {
		self.tables.keys().copied()
	}
}

/// Load every table file into a [`TableSet`]
///
/// Every file is parsed, but tables of architectures the template does
/// not know (e.g. `s390x`) are left out of the set. If two files resolve
/// to the same architecture, the later one wins.
pub fn load_tables<P: AsRef<Path>>(paths: &[P]) -> Result<TableSet> {
	let mut set = TableSet::new();

	for path in paths {
		let path = path.as_ref();
		let table = load_table(path)?;

		let name = arch_from_path(path);
		let Ok(arch) = name.parse::<Arch>() else {
			warn!("Skipping {}: {name:?} is not in the architecture template", path.display());
			continue;
		};

		if set.insert(arch, table).is_some() {
			warn!("{} replaces an earlier table for {}", path.display(), arch);
		}
	}

	Ok(set)
}
