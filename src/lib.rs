//! syscall-defgen - Fallback syscall number header generator
//!
//! Reads the kernel's per-architecture syscall tables and writes a C
//! header that defines `__NR_<name>` for a handful of syscalls the C
//! library headers may not know about yet. Every number is selected at
//! compile time by architecture macros; where the C library already has
//! a number, a static assertion checks that both agree.
//!
//! # Getting Started
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = syscall_defgen::new()
//!         .symbols(["openat2", "close_range"])
//!         .build()?;
//!
//!     generator.generate(
//!         Path::new("missing_syscall_def.h"),
//!         &["syscalls-x86_64.txt", "syscalls-arm64.txt"],
//!     )?;
//!     Ok(())
//! }
//! ```

pub mod arch;
pub mod error;
pub mod generator;
pub mod header;
pub mod syscall;
pub mod util;

pub use arch::Arch;
pub use error::{GenError, Result};
pub use generator::{Generator, GeneratorBuilder, GeneratorConfig};
pub use header::HeaderEmitter;
pub use syscall::{SyscallTable, TableSet, UNDEFINED_NR};

/// Create a new generator builder
#[must_use]
pub fn new() -> GeneratorBuilder {
	GeneratorBuilder::new()
}

/// Generate the header with default settings
///
/// This is equivalent to `new().build()?.generate(output, table_files)`
pub fn generate<P: AsRef<std::path::Path>>(output: &std::path::Path, table_files: &[P]) -> Result<()> {
	new().build()?.generate(output, table_files)
}
