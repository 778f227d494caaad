//! Colored flag/register diffing for test failures.
//!
//! Grounded on `cpu_6502/test_helpers.rs::assert_status`, which prints an
//! expected/actual line per mismatched bit rather than a single opaque
//! "assertion failed" — generalized here from the teacher's packed status
//! byte to this core's six independent flag booleans ([`FlagsView`] carries
//! no `B`; see its doc comment), and extended to cover the register file too.

use colored::Colorize;

use crate::trace::{FlagsView, RegistersView};

/// Formats every mismatched flag between `expected` and `actual` as one
/// colored line each (green/bold for what was expected, red for what the CPU
/// actually did); returns `None` if they match exactly.
pub fn diff_flags(expected: FlagsView, actual: FlagsView) -> Option<String> {
    let pairs: [(&str, bool, bool); 6] = [
        ("N", expected.n, actual.n),
        ("V", expected.v, actual.v),
        ("D", expected.d, actual.d),
        ("I", expected.i, actual.i),
        ("Z", expected.z, actual.z),
        ("C", expected.c, actual.c),
    ];

    let mut lines = Vec::new();
    for (name, want, got) in pairs {
        if want != got {
            lines.push(format!(
                "  {} expected {} but got {}",
                name.bold(),
                fmt_bool(want).green(),
                fmt_bool(got).red(),
            ));
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Panics with a colored diff if `actual` doesn't match `expected` exactly.
pub fn assert_flags(expected: FlagsView, actual: FlagsView) {
    if let Some(diff) = diff_flags(expected, actual) {
        panic!("flag mismatch:\n{}", diff);
    }
}

/// Panics with a colored diff if any register differs from `expected`.
pub fn assert_registers(expected: RegistersView, actual: RegistersView) {
    let mut lines = Vec::new();
    if expected.a != actual.a {
        lines.push(reg_line("A", expected.a as u16, actual.a as u16));
    }
    if expected.x != actual.x {
        lines.push(reg_line("X", expected.x as u16, actual.x as u16));
    }
    if expected.y != actual.y {
        lines.push(reg_line("Y", expected.y as u16, actual.y as u16));
    }
    if expected.sp != actual.sp {
        lines.push(reg_line("SP", expected.sp as u16, actual.sp as u16));
    }
    if expected.pc != actual.pc {
        lines.push(reg_line("PC", expected.pc, actual.pc));
    }
    if !lines.is_empty() {
        panic!("register mismatch:\n{}", lines.join("\n"));
    }
}

fn reg_line(name: &str, expected: u16, actual: u16) -> String {
    format!(
        "  {} expected {} but got {}",
        name.bold(),
        format!("{:#06x}", expected).green(),
        format!("{:#06x}", actual).red(),
    )
}

fn fmt_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}
