//! Builder for creating generators
//!
//! This module contains the `GeneratorBuilder` struct and the
//! configuration it produces.

use crate::error::{GenError, Result};
use crate::generator::Generator;
use crate::header::DEFAULT_MACRO_PREFIX;
use crate::syscall::{DEFAULT_SYSCALLS, is_c_identifier, validate_symbols};

/// Configuration for a generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
	/// Syscalls to emit, in output order
	pub symbols: Vec<String>,
	/// Prefix of the generated number macros
	pub macro_prefix: String,
	/// Name written into the "do not edit" notice
	pub generator_name: String,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			symbols: DEFAULT_SYSCALLS.iter().map(ToString::to_string).collect(),
			macro_prefix: DEFAULT_MACRO_PREFIX.to_string(),
			generator_name: env!("CARGO_PKG_NAME").to_string(),
		}
	}
}

/// Builder for creating generators
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
	config: GeneratorConfig,
}

impl GeneratorBuilder {
	/// Create a new generator builder with default settings
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the list of syscalls to emit
	#[must_use]
	pub fn symbols<I, S>(mut self, symbols: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.config.symbols = symbols.into_iter().map(Into::into).collect();
		self
	}

	/// Set the prefix of the generated number macros
	#[must_use]
	pub fn macro_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.config.macro_prefix = prefix.into();
		self
	}

	/// Set the name written into the "do not edit" notice
	#[must_use]
	pub fn generator_name(mut self, name: impl Into<String>) -> Self {
		self.config.generator_name = name.into();
		self
	}

	/// Build the generator
	///
	/// Fails if the symbol list is empty, has duplicates, or holds
	/// anything that cannot be pasted into a C macro name.
	pub fn build(self) -> Result<Generator> {
		validate_symbols(&self.config.symbols)?;

		if !is_c_identifier(&self.config.macro_prefix) {
			return Err(GenError::InvalidSymbol(self.config.macro_prefix));
		}

		Ok(Generator::new(self.config))
	}
}
