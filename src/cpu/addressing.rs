//! Resolves each of the 13 addressing modes to an effective address, reporting
//! whether doing so crossed a page boundary. `Implicit`/`Accumulator` modes
//! have no address and resolve to `(0, false)`; the accumulator case is
//! handled separately by [`super::Cpu::operand_value`]/`write_back`.
//!
//! Comments on the modes themselves follow <http://www.emulator101.com/6502-addressing-modes.html>,
//! the same reference the teacher cites.

use super::Cpu;
use crate::opcodes::Mode;

fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xff00) != (b & 0xff00)
}

impl Cpu {
    pub(super) fn resolve_address(&mut self, mode: Mode) -> (u16, bool) {
        match mode {
            Mode::Implicit | Mode::Accumulator => (0, false),

            // The operand byte itself is the value; its address is wherever
            // the PC currently sits.
            Mode::Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                (address, false)
            }

            Mode::ZeroPage => (self.fetch_byte() as u16, false),

            // The zero-page index wraps within the page rather than carrying
            // out of it: `LDA $C0,X` with `X = $60` reads `$20`, not `$120`.
            Mode::ZeroPageX => (self.fetch_byte().wrapping_add(self.x) as u16, false),
            Mode::ZeroPageY => (self.fetch_byte().wrapping_add(self.y) as u16, false),

            Mode::Absolute => (self.fetch_word(), false),

            Mode::AbsoluteX => {
                let base = self.fetch_word();
                let address = base.wrapping_add(self.x as u16);
                (address, page_crossed(base, address))
            }
            Mode::AbsoluteY => {
                let base = self.fetch_word();
                let address = base.wrapping_add(self.y as u16);
                (address, page_crossed(base, address))
            }

            // Only JMP uses this mode, and only JMP reproduces the hardware's
            // page-wrap bug when the pointer sits at the end of a page.
            Mode::Indirect => {
                let pointer = self.fetch_word();
                (self.memory.read_word_buggy(pointer), false)
            }

            // `($zp,X)`: index into the zero page first (wrapping within it),
            // then read a two-byte pointer out of the result.
            Mode::IndirectX => {
                let zero_page = self.fetch_byte().wrapping_add(self.x);
                (self.memory.read_word_zero_page(zero_page), false)
            }

            // `($zp),Y`: read a two-byte pointer out of the zero page, then
            // index the result by Y. The pointer read itself cannot cross a
            // page (it is always zero-page), but applying Y can.
            Mode::IndirectY => {
                let zero_page = self.fetch_byte();
                let base = self.memory.read_word_zero_page(zero_page);
                let address = base.wrapping_add(self.y as u16);
                (address, page_crossed(base, address))
            }

            // Relative addressing is only used by branches. The operand is a
            // signed offset from the address of the instruction *following*
            // the branch, which is where the PC sits once the offset byte has
            // been consumed.
            Mode::Relative => {
                let offset = self.fetch_byte() as i8;
                let base = self.pc;
                let address = base.wrapping_add(offset as u16);
                (address, page_crossed(base, address))
            }
        }
    }
}
