//! Syscall table loader tests

use std::fs;
use std::io::Cursor;
use std::path::Path;
use syscall_defgen::syscall::{arch_from_path, load_table, load_tables, parse_table};
use syscall_defgen::{Arch, GenError, UNDEFINED_NR};
use tempfile::TempDir;

fn parse(text: &str) -> Result<syscall_defgen::SyscallTable, GenError> {
	parse_table(Path::new("syscalls-test.txt"), Cursor::new(text))
}

#[test]
fn parses_name_and_number() {
	let table = parse("read\t0\nwrite\t1\nopenat2\t437\n").unwrap();

	assert_eq!(table.len(), 3);
	assert_eq!(table.get("read"), Some(0));
	assert_eq!(table.get("openat2"), Some(437));
	assert_eq!(table.get("close_range"), None);
}

#[test]
fn skips_lines_with_fewer_than_two_tokens() {
	let table = parse("\n   \nlonely\nread 0\n\t\n").unwrap();

	assert_eq!(table.len(), 1);
	assert_eq!(table.get("lonely"), None);
	assert_eq!(table.get("read"), Some(0));
}

#[test]
fn ignores_tokens_after_the_number() {
	let table = parse("mmap2 192 common sys_mmap_pgoff\n").unwrap();

	assert_eq!(table.get("mmap2"), Some(192));
}

#[test]
fn accepts_negative_numbers() {
	let table = parse("oldstat -1\n").unwrap();

	assert_eq!(table.get("oldstat"), Some(-1));
}

#[test]
fn last_duplicate_wins() {
	let table = parse("foo 1\nfoo 2\n").unwrap();

	assert_eq!(table.get("foo"), Some(2));
}

#[test]
fn non_integer_number_is_fatal() {
	let err = parse("read 0\nwrite one\nclose 3\n").unwrap_err();

	match err {
		GenError::InvalidNumber { line, token, .. } => {
			assert_eq!(line, 2);
			assert_eq!(token, "one");
		},
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn error_message_names_file_and_line() {
	let err = parse("\nbad 0x10\n").unwrap_err();

	let message = err.to_string();
	assert!(message.starts_with("syscalls-test.txt:2:"), "{message}");
	assert!(message.contains("\"0x10\""), "{message}");
}

#[test]
fn arch_name_comes_from_file_name() {
	assert_eq!(arch_from_path(Path::new("syscalls-x86_64.txt")), "x86_64");
	assert_eq!(arch_from_path(Path::new("/src/basic/syscalls-mips64n32.txt")), "mips64n32");
	assert_eq!(arch_from_path(Path::new("some-dir/arm64.txt")), "arm64");
	assert_eq!(arch_from_path(Path::new("a-b-riscv64")), "riscv64");
}

#[test]
fn arch_names_round_trip() {
	for arch in Arch::ALL {
		assert_eq!(arch.name().parse::<Arch>(), Ok(arch));
	}
	assert!("vax".parse::<Arch>().is_err());
}

#[test]
fn missing_file_is_an_io_error() {
	let dir = TempDir::new().unwrap();
	let err = load_table(&dir.path().join("syscalls-arm.txt")).unwrap_err();

	assert!(matches!(err, GenError::Io { .. }));
}

#[test]
fn loads_tables_by_architecture() {
	let dir = TempDir::new().unwrap();
	let arm64 = dir.path().join("syscalls-arm64.txt");
	let x86_64 = dir.path().join("syscalls-x86_64.txt");
	fs::write(&arm64, "openat2 437\n").unwrap();
	fs::write(&x86_64, "openat2 437\nclose_range 436\n").unwrap();

	let set = load_tables(&[arm64, x86_64]).unwrap();

	assert_eq!(set.arches().collect::<Vec<_>>(), vec![Arch::Arm64, Arch::X86_64]);
	assert_eq!(set.number(Arch::X86_64, "close_range"), 436);
	assert_eq!(set.number(Arch::Arm64, "close_range"), UNDEFINED_NR);
	assert_eq!(set.number(Arch::Sparc, "openat2"), UNDEFINED_NR);
	assert!(set.defines("close_range"));
	assert!(!set.defines("fchmodat2"));
}

#[test]
fn later_table_for_same_arch_wins() {
	let dir = TempDir::new().unwrap();
	let old = dir.path().join("old-s390.txt");
	let new = dir.path().join("new-s390.txt");
	fs::write(&old, "openat2 1\n").unwrap();
	fs::write(&new, "openat2 2\n").unwrap();

	let set = load_tables(&[old, new]).unwrap();

	assert_eq!(set.number(Arch::S390, "openat2"), 2);
}

#[test]
fn tables_outside_the_template_are_skipped() {
	let dir = TempDir::new().unwrap();
	let s390 = dir.path().join("syscalls-s390.txt");
	let s390x = dir.path().join("syscalls-s390x.txt");
	let powerpc64 = dir.path().join("syscalls-powerpc64.txt");
	fs::write(&s390, "openat2 437\n").unwrap();
	fs::write(&s390x, "openat2 999\n").unwrap();
	fs::write(&powerpc64, "openat2 998\n").unwrap();

	let set = load_tables(&[s390, s390x, powerpc64]).unwrap();

	assert_eq!(set.arches().collect::<Vec<_>>(), vec![Arch::S390]);
	assert_eq!(set.number(Arch::S390, "openat2"), 437);
	assert_eq!(set.number(Arch::Powerpc, "openat2"), UNDEFINED_NR);
}

#[test]
fn skipped_tables_are_still_parsed() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("syscalls-vax.txt");
	fs::write(&path, "read three\n").unwrap();

	let err = load_tables(&[path]).unwrap_err();

	assert!(matches!(err, GenError::InvalidNumber { line: 1, .. }));
}

#[test]
fn table_iterates_in_name_order() {
	let table = parse("write 1\nclose 3\nread 0\n").unwrap();

	assert_eq!(
		table.iter().collect::<Vec<_>>(),
		vec![("close", 3), ("read", 0), ("write", 1)]
	);
}
