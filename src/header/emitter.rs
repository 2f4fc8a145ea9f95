//! Header emitter
//!
//! Renders the generated header: a preamble, a check that the build
//! architecture is covered by the template, and one conditional block
//! per syscall. Rendering is a pure function of its inputs, so the same
//! tables and symbols always produce the same bytes.

use crate::arch::{Arch, FALLBACK_CONDITION, Selector, TEMPLATE, X32_SYSCALL_BIT};
use crate::syscall::TableSet;
use tracing::{debug, warn};

/// Macro prefix used for the generated syscall numbers
pub const DEFAULT_MACRO_PREFIX: &str = "systemd_NR_";

/// Macro defined once the template has warned about the build architecture
const MISSING_ARCH_MACRO: &str = "missing_arch_template";

/// A macro to define in every arm of the template
struct Definition<'a> {
	macro_name: String,
	symbol: &'a str,
	tables: &'a TableSet,
}

impl Definition<'_> {
	fn number(&self, arch: Arch) -> i64 {
		self.tables.number(arch, self.symbol)
	}
}

/// Renders the generated header
#[derive(Debug, Clone)]
pub struct HeaderEmitter {
	macro_prefix: String,
	generator_name: String,
}

impl HeaderEmitter {
	/// Create an emitter
	///
	/// `generator_name` is only mentioned in the "do not edit" notice.
	#[must_use]
	pub fn new(macro_prefix: impl Into<String>, generator_name: impl Into<String>) -> Self {
		Self {
			macro_prefix: macro_prefix.into(),
			generator_name: generator_name.into(),
		}
	}

	/// Render the whole header
	#[must_use]
	pub fn render<S: AsRef<str>>(&self, symbols: &[S], tables: &TableSet) -> String {
		let mut lines = Vec::new();

		self.preamble(&mut lines);
		lines.push(String::new());
		arch_check(&mut lines);

		for symbol in symbols {
			let symbol = symbol.as_ref();
			if !tables.defines(symbol) {
				warn!("{symbol}() is not defined by any syscall table");
			}
			debug!("Rendering {symbol}()");

			lines.push(String::new());
			self.syscall_block(&mut lines, symbol, tables);
		}

		let mut out = lines.join("\n");
		out.push('\n');
		out
	}

	/// Render the block for a single syscall
	#[must_use]
	pub fn render_syscall(&self, symbol: &str, tables: &TableSet) -> String {
		let mut lines = Vec::new();
		self.syscall_block(&mut lines, symbol, tables);

		let mut out = lines.join("\n");
		out.push('\n');
		out
	}

	fn preamble(&self, lines: &mut Vec<String>) {
		lines.extend(
			[
				"/* SPDX-License-Identifier: LGPL-2.1-or-later",
				format!(" * This file is generated by {}. Do not edit!", self.generator_name).as_str(),
				" *",
				" * Use 'ninja -C build update-syscall-tables' to download new syscall tables,",
				" * and 'ninja -C build update-syscall-header' to regenerate this file.",
				" */",
				"#pragma once",
			]
			.map(String::from),
		);
	}

	fn syscall_block(&self, lines: &mut Vec<String>, symbol: &str, tables: &TableSet) {
		let def = Definition {
			macro_name: format!("{}{symbol}", self.macro_prefix),
			symbol,
			tables,
		};
		let m = &def.macro_name;
		let nr = format!("__NR_{symbol}");

		lines.push(format!("#ifndef __IGNORE_{symbol}"));
		template(
			lines,
			Some(&def),
			&[format!(
				"#    warning \"{symbol}() syscall number is unknown for your architecture\""
			)],
		);
		lines.extend([
			String::new(),
			"/* may be an (invalid) negative number due to libseccomp, see PR 13319 */".to_string(),
			format!("#  if defined {nr} && {nr} >= 0"),
			format!("#    if defined {m}"),
			format!("assert_cc({nr} == {m});"),
			"#    endif".to_string(),
			"#  else".to_string(),
			format!("#    if defined {nr}"),
			format!("#      undef {nr}"),
			"#    endif".to_string(),
			format!("#    if defined {m} && {m} >= 0"),
			format!("#      define {nr} {m}"),
			"#    endif".to_string(),
			"#  endif".to_string(),
			"#endif".to_string(),
		]);
	}
}

impl Default for HeaderEmitter {
	fn default() -> Self {
		Self::new(DEFAULT_MACRO_PREFIX, env!("CARGO_PKG_NAME"))
	}
}

/// The template with every `define` line left out
///
/// Warns once at the top of the header if the build architecture is not
/// in the template, so the per-syscall blocks can stay quiet about it.
fn arch_check(lines: &mut Vec<String>) {
	lines.push(
		"/* Note: if this code looks strange, this is because it is derived from the same".into(),
	);
	lines.push(" * template as the per-syscall blocks below. */".into());
	template(
		lines,
		None,
		&[
			"#    warning \"Current architecture is missing from the template\"".to_string(),
			format!("#    define {MISSING_ARCH_MACRO} 1"),
		],
	);
}

/// Render the architecture template
fn template(lines: &mut Vec<String>, def: Option<&Definition<'_>>, fallback: &[String]) {
	for (i, branch) in TEMPLATE.iter().enumerate() {
		let keyword = if i == 0 { "if" } else { "elif" };
		lines.push(format!("#  {keyword} {}", branch.condition));

		match branch.selector {
			Selector::Single(arch) => {
				if let Some(def) = def {
					lines.push(format!("#    define {} {}", def.macro_name, def.number(arch)));
				}
			},
			Selector::SubAbi { variants, unknown } => {
				for (j, (condition, arch)) in variants.iter().enumerate() {
					let keyword = if j == 0 { "if" } else { "elif" };
					lines.push(format!("#    {keyword} {condition}"));
					if let Some(def) = def {
						lines.push(format!("#      define {} {}", def.macro_name, def.number(*arch)));
					}
				}
				lines.push("#    else".into());
				lines.push(format!("#      error \"{unknown}\""));
				lines.push("#    endif".into());
			},
			Selector::X32(arch) => {
				lines.push("#    if defined(__ILP32__)".into());
				if let Some(def) = def {
					lines.push(format!(
						"#      define {} ({} | /* __X32_SYSCALL_BIT */ {X32_SYSCALL_BIT})",
						def.macro_name,
						def.number(arch)
					));
				}
				lines.push("#    else".into());
				if let Some(def) = def {
					lines.push(format!("#      define {} {}", def.macro_name, def.number(arch)));
				}
				lines.push("#    endif".into());
			},
		}
	}

	lines.push(format!("#  elif {FALLBACK_CONDITION}"));
	lines.extend(fallback.iter().cloned());
	lines.push("#  endif".into());
}
