//! Byte-program test harness for the instruction-set unit tests in `test.rs`.
//!
//! Grounded on the teacher's `cpu_6502/test_helpers.rs` (`run_program`,
//! `assert_register_a`, `assert_status`, the `register_a!`/`status!` macros),
//! adapted from its assembler-driven `run_program(text: &str)` to raw byte
//! programs — this core carries no assembler (§1 Non-goals) — and from a
//! packed status byte to [`FlagsView`]'s independent booleans.

use super::Cpu;
use crate::diagnostics;
use crate::trace::FlagsView;

/// Where test programs are loaded and the reset vector points. Arbitrary;
/// chosen to sit well clear of both zero page and the stack page.
pub const ORIGIN: u16 = 0x0600;

/// Loads `bytes` at [`ORIGIN`], resets, and runs exactly one instruction.
pub fn run(bytes: &[u8]) -> Cpu {
    run_with(|_| {}, bytes)
}

/// Like [`run`], but `setup` gets a chance to poke registers/memory after
/// reset and before the single instruction executes — for tests that need a
/// starting register value ([`A`], `X`, a carry-in, decimal mode, ...).
pub fn run_with(setup: impl FnOnce(&mut Cpu), bytes: &[u8]) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.set_reset_vector(ORIGIN);
    cpu.load_bytes(ORIGIN, bytes);
    cpu.reset();
    setup(&mut cpu);
    cpu.step_one_instruction().expect("unexpected opcode");
    cpu
}

/// Runs `count` instructions in sequence from a freshly reset CPU — for
/// multi-instruction scenarios (JSR/RTS round trips, BRK/RTI, ...).
pub fn run_instructions(bytes: &[u8], count: usize) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.set_reset_vector(ORIGIN);
    cpu.load_bytes(ORIGIN, bytes);
    cpu.reset();
    for _ in 0..count {
        cpu.step_one_instruction().expect("unexpected opcode");
    }
    cpu
}

pub fn assert_flags(cpu: &Cpu, expected: FlagsView) {
    diagnostics::assert_flags(expected, cpu.flags());
}

/// All seven... six flags clear. The common case most opcode tests start from.
pub const CLEAR: FlagsView = FlagsView {
    n: false,
    v: false,
    d: false,
    i: false,
    z: false,
    c: false,
};

/// Runs a `$count`-instruction byte program and asserts the final `A` and
/// flags. `$count` lets a test chain a setup instruction (e.g. `LDA #imm`)
/// ahead of the one actually under test, the way the teacher's macros drove
/// everything through its assembler instead of a setup closure.
macro_rules! register_a {
    ($name:ident, $bytes:expr, $count:expr, $a:expr, $flags:expr) => {
        #[test]
        fn $name() {
            let cpu = $crate::cpu::test_helpers::run_instructions($bytes, $count);
            assert_eq!(cpu.a, $a, "register A");
            $crate::cpu::test_helpers::assert_flags(&cpu, $flags);
        }
    };
}

macro_rules! register_x {
    ($name:ident, $bytes:expr, $count:expr, $x:expr, $flags:expr) => {
        #[test]
        fn $name() {
            let cpu = $crate::cpu::test_helpers::run_instructions($bytes, $count);
            assert_eq!(cpu.x, $x, "register X");
            $crate::cpu::test_helpers::assert_flags(&cpu, $flags);
        }
    };
}

macro_rules! status {
    ($name:ident, $bytes:expr, $count:expr, $flags:expr) => {
        #[test]
        fn $name() {
            let cpu = $crate::cpu::test_helpers::run_instructions($bytes, $count);
            $crate::cpu::test_helpers::assert_flags(&cpu, $flags);
        }
    };
}

pub(crate) use register_a;
pub(crate) use register_x;
pub(crate) use status;
