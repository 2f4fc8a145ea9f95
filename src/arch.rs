//! Architecture template
//!
//! This module lists the architectures the generated header knows about
//! and the preprocessor condition that selects each of them. The same
//! template drives both the architecture check at the top of the header
//! and every per-syscall block, so the two can never disagree.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Architecture (or sub-ABI) with its own syscall numbering table
///
/// The names match the suffix of the kernel syscall table files,
/// e.g. `syscalls-x86_64.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Arch {
	Arm64,
	Alpha,
	Arc,
	Arm,
	I386,
	Ia64,
	Loongarch64,
	M68k,
	Mipso32,
	Mips64n32,
	Mips64,
	Parisc,
	Powerpc,
	Riscv32,
	Riscv64,
	S390,
	Sparc,
	X86_64,
}

impl Arch {
	/// All architectures, in template order
	pub const ALL: [Self; 18] = [
		Self::Arm64,
		Self::Alpha,
		Self::Arc,
		Self::Arm,
		Self::I386,
		Self::Ia64,
		Self::Loongarch64,
		Self::M68k,
		Self::Mipso32,
		Self::Mips64n32,
		Self::Mips64,
		Self::Parisc,
		Self::Powerpc,
		Self::Riscv32,
		Self::Riscv64,
		Self::S390,
		Self::Sparc,
		Self::X86_64,
	];

	/// Get the table name of the architecture
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Arm64 => "arm64",
			Self::Alpha => "alpha",
			Self::Arc => "arc",
			Self::Arm => "arm",
			Self::I386 => "i386",
			Self::Ia64 => "ia64",
			Self::Loongarch64 => "loongarch64",
			Self::M68k => "m68k",
			Self::Mipso32 => "mipso32",
			Self::Mips64n32 => "mips64n32",
			Self::Mips64 => "mips64",
			Self::Parisc => "parisc",
			Self::Powerpc => "powerpc",
			Self::Riscv32 => "riscv32",
			Self::Riscv64 => "riscv64",
			Self::S390 => "s390",
			Self::Sparc => "sparc",
			Self::X86_64 => "x86_64",
		}
	}
}

impl fmt::Display for Arch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Error returned when parsing an unknown architecture name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown architecture {0:?}")]
pub struct UnknownArch(pub String);

impl FromStr for Arch {
	type Err = UnknownArch;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|arch| arch.name() == s)
			.ok_or_else(|| UnknownArch(s.to_string()))
	}
}

/// How a template branch picks the syscall number
#[derive(Debug, Clone, Copy)]
pub enum Selector {
	/// The branch maps to a single architecture
	Single(Arch),
	/// The branch is split further by a sub-ABI test
	SubAbi {
		variants: &'static [(&'static str, Arch)],
		unknown: &'static str,
	},
	/// x86-64, with the x32 ABI selected by `__ILP32__`
	X32(Arch),
}

/// One `#if`/`#elif` arm of the architecture template
#[derive(Debug, Clone, Copy)]
pub struct Branch {
	/// Preprocessor condition selecting this arm
	pub condition: &'static str,
	/// How the number is picked once the arm is taken
	pub selector: Selector,
}

/// Bit the kernel sets on syscall numbers of the x32 ABI
pub const X32_SYSCALL_BIT: &str = "0x40000000";

/// The architecture template, in emission order
pub static TEMPLATE: &[Branch] = &[
	Branch {
		condition: "defined(__aarch64__)",
		selector: Selector::Single(Arch::Arm64),
	},
	Branch {
		condition: "defined(__alpha__)",
		selector: Selector::Single(Arch::Alpha),
	},
	Branch {
		condition: "defined(__arc__) || defined(__tilegx__)",
		selector: Selector::Single(Arch::Arc),
	},
	Branch {
		condition: "defined(__arm__)",
		selector: Selector::Single(Arch::Arm),
	},
	Branch {
		condition: "defined(__i386__)",
		selector: Selector::Single(Arch::I386),
	},
	Branch {
		condition: "defined(__ia64__)",
		selector: Selector::Single(Arch::Ia64),
	},
	Branch {
		condition: "defined(__loongarch_lp64)",
		selector: Selector::Single(Arch::Loongarch64),
	},
	Branch {
		condition: "defined(__m68k__)",
		selector: Selector::Single(Arch::M68k),
	},
	Branch {
		condition: "defined(_MIPS_SIM)",
		selector: Selector::SubAbi {
			variants: &[
				("_MIPS_SIM == _MIPS_SIM_ABI32", Arch::Mipso32),
				("_MIPS_SIM == _MIPS_SIM_NABI32", Arch::Mips64n32),
				("_MIPS_SIM == _MIPS_SIM_ABI64", Arch::Mips64),
			],
			unknown: "Unknown MIPS ABI",
		},
	},
	Branch {
		condition: "defined(__hppa__)",
		selector: Selector::Single(Arch::Parisc),
	},
	Branch {
		condition: "defined(__powerpc__)",
		selector: Selector::Single(Arch::Powerpc),
	},
	Branch {
		condition: "defined(__riscv)",
		selector: Selector::SubAbi {
			variants: &[
				("__riscv_xlen == 32", Arch::Riscv32),
				("__riscv_xlen == 64", Arch::Riscv64),
			],
			unknown: "Unknown RISC-V ABI",
		},
	},
	Branch {
		condition: "defined(__s390__)",
		selector: Selector::Single(Arch::S390),
	},
	Branch {
		condition: "defined(__sparc__)",
		selector: Selector::Single(Arch::Sparc),
	},
	Branch {
		condition: "defined(__x86_64__)",
		selector: Selector::X32(Arch::X86_64),
	},
];

/// Condition of the final arm, taken on architectures missing from the template
pub const FALLBACK_CONDITION: &str = "!defined(missing_arch_template)";
