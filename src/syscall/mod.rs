//! Syscall-related types and functionality
//!
//! This module contains the per-architecture syscall tables and the
//! list of syscalls the header is generated for.

mod symbols;
mod table;

pub use symbols::{DEFAULT_SYSCALLS, is_c_identifier, validate_symbols};
pub use table::{
	SyscallTable, TableSet, UNDEFINED_NR, arch_from_path, load_table, load_tables, parse_table,
};
