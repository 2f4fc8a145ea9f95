//! Header generation
//!
//! Ties the table loader and the header emitter together: load every
//! table, render the header in memory, then write it out (or compare it
//! with the copy already on disk).

mod builder;

pub use builder::{GeneratorBuilder, GeneratorConfig};

use crate::error::{GenError, Result};
use crate::header::HeaderEmitter;
use crate::syscall::{TableSet, load_tables};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// A configured header generator
///
/// Created with [`GeneratorBuilder`].
#[derive(Debug, Clone)]
pub struct Generator {
	config: GeneratorConfig,
	emitter: HeaderEmitter,
}

impl Generator {
	pub(crate) fn new(config: GeneratorConfig) -> Self {
		let emitter = HeaderEmitter::new(&config.macro_prefix, &config.generator_name);
		Self { config, emitter }
	}

	/// Get the configuration of the generator
	#[must_use]
	pub const fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Render the header for already loaded tables
	#[must_use]
	pub fn render(&self, tables: &TableSet) -> String {
		self.emitter.render(&self.config.symbols, tables)
	}

	/// Load the tables and render the header
	pub fn render_files<P: AsRef<Path>>(&self, table_files: &[P]) -> Result<String> {
		let tables = load_tables(table_files)?;
		Ok(self.render(&tables))
	}

	/// Generate the header and write it to `output`
	///
	/// The output file is only touched once every table has been parsed,
	/// and is replaced by renaming a fully written temporary file over it.
	pub fn generate<P: AsRef<Path>>(&self, output: &Path, table_files: &[P]) -> Result<()> {
		let header = self.render_files(table_files)?;

		let dir = match output.parent() {
			Some(dir) if !dir.as_os_str().is_empty() => dir,
			_ => Path::new("."),
		};
		let mut file = NamedTempFile::new_in(dir).map_err(|e| GenError::io(dir, e))?;
		file.write_all(header.as_bytes())
			.map_err(|e| GenError::io(file.path(), e))?;

		// Temporary files are created 0600; headers are world-readable
		#[cfg(unix)]
		{
			use std::os::unix::fs::PermissionsExt;
			file.as_file()
				.set_permissions(fs::Permissions::from_mode(0o644))
				.map_err(|e| GenError::io(file.path(), e))?;
		}

		file.persist(output).map_err(|e| GenError::io(output, e.error))?;
		info!("Wrote {}", output.display());

		Ok(())
	}

	/// Check that `output` matches what [`Generator::generate`] would write
	pub fn check<P: AsRef<Path>>(&self, output: &Path, table_files: &[P]) -> Result<()> {
		let header = self.render_files(table_files)?;

		let existing = match fs::read_to_string(output) {
			Ok(existing) => existing,
			Err(e) if e.kind() == io::ErrorKind::NotFound => {
				return Err(GenError::Stale {
					path: output.to_path_buf(),
				});
			},
			Err(e) => return Err(GenError::io(output, e)),
		};

		if existing != header {
			return Err(GenError::Stale {
				path: output.to_path_buf(),
			});
		}

		info!("{} is up to date", output.display());
		Ok(())
	}
}
