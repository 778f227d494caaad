//! Load, store, transfer, and stack kernels. Grounded on the teacher's
//! `cpu_6502/opcodes_move.rs`, generalized from `fn(&mut Cpu6502, Mode, u8)`
//! function-pointer slots to plain functions `dispatch` matches by tag.

use super::Cpu;

/// Function: `A := {adr}`. Flags: N Z
pub(super) fn lda(cpu: &mut Cpu) -> u32 {
    cpu.a = cpu.operand_value();
    cpu.set_zn(cpu.a);
    0
}

/// Function: `{adr} := A`. No flags.
pub(super) fn sta(cpu: &mut Cpu) -> u32 {
    cpu.write_back(cpu.a);
    0
}

/// Function: `X := {adr}`. Flags: N Z
pub(super) fn ldx(cpu: &mut Cpu) -> u32 {
    cpu.x = cpu.operand_value();
    cpu.set_zn(cpu.x);
    0
}

/// Function: `{adr} := X`. No flags.
pub(super) fn stx(cpu: &mut Cpu) -> u32 {
    cpu.write_back(cpu.x);
    0
}

/// Function: `Y := {adr}`. Flags: N Z
pub(super) fn ldy(cpu: &mut Cpu) -> u32 {
    cpu.y = cpu.operand_value();
    cpu.set_zn(cpu.y);
    0
}

/// Function: `{adr} := Y`. No flags.
pub(super) fn sty(cpu: &mut Cpu) -> u32 {
    cpu.write_back(cpu.y);
    0
}

/// Function: `X := A`. Flags: N Z
pub(super) fn tax(cpu: &mut Cpu) -> u32 {
    cpu.x = cpu.a;
    cpu.set_zn(cpu.x);
    0
}

/// Function: `A := X`. Flags: N Z
pub(super) fn txa(cpu: &mut Cpu) -> u32 {
    cpu.a = cpu.x;
    cpu.set_zn(cpu.a);
    0
}

/// Function: `Y := A`. Flags: N Z
pub(super) fn tay(cpu: &mut Cpu) -> u32 {
    cpu.y = cpu.a;
    cpu.set_zn(cpu.y);
    0
}

/// Function: `A := Y`. Flags: N Z
pub(super) fn tya(cpu: &mut Cpu) -> u32 {
    cpu.a = cpu.y;
    cpu.set_zn(cpu.a);
    0
}

/// Function: `X := SP`. Flags: N Z
pub(super) fn tsx(cpu: &mut Cpu) -> u32 {
    cpu.x = cpu.sp;
    cpu.set_zn(cpu.x);
    0
}

/// Function: `SP := X`. No flags — unlike every other transfer, TXS never
/// touches N/Z.
pub(super) fn txs(cpu: &mut Cpu) -> u32 {
    cpu.sp = cpu.x;
    0
}

/// Function: `A := pull()`. Flags: N Z
pub(super) fn pla(cpu: &mut Cpu) -> u32 {
    cpu.a = cpu.pull_byte();
    cpu.set_zn(cpu.a);
    0
}

/// Function: `push(A)`. No flags.
pub(super) fn pha(cpu: &mut Cpu) -> u32 {
    cpu.push_byte(cpu.a);
    0
}

/// Function: `P := pull()`. Flags: all 7, from the pulled byte.
pub(super) fn plp(cpu: &mut Cpu) -> u32 {
    let p = cpu.pull_byte();
    cpu.unpack(p);
    0
}

/// Function: `push(P)`, with the B bit set — PHP is one of the two places
/// (the other is BRK) the break flag is ever actually observable.
pub(super) fn php(cpu: &mut Cpu) -> u32 {
    let p = cpu.pack(true);
    cpu.push_byte(p);
    0
}
