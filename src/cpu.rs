//! The MOS Technology 6502 central processing unit.
//!
//! <http://www.6502.org/>
//! <https://en.wikipedia.org/wiki/MOS_Technology_6502>
//!
//! Unlike the teacher's `Cpu6502`, this CPU owns its memory outright and keeps
//! the 7 status bits as independent booleans rather than a packed register —
//! packing only happens at the moment a PHP/BRK/IRQ/NMI commits them to the
//! stack, and unpacking only happens when PLP/RTI pulls them back off.
//!
//! A guest program doing something unusual — an infinite loop, a stack
//! pointer that wraps past the bottom of the stack page, self-modifying code
//! that rewrites the instruction stream under the PC — is not a fault of this
//! emulator, it is simply what the guest asked for. The one condition this
//! module treats as fatal is decoding a byte with no entry in [`OPCODE_TABLE`];
//! see [`crate::error`].

mod addressing;
mod ops_jump;
mod ops_logical;
mod ops_move;

#[cfg(test)]
mod test_helpers;


use crate::constants::{memory_range, InterruptVectors, StatusFlag};
use crate::error::{CpuError, CpuResult};
use crate::memory::Memory;
use crate::opcodes::{Instruction, Mode, OpcodeEntry, OPCODE_TABLE};
use crate::trace::{FlagsView, RegistersView, TraceRecord};

/// The synthetic decode-table row a freshly reset CPU reports before its
/// first real fetch. `base_cycles: 1` keeps it distinguishable from the real
/// `NOP` opcode (`0xEA`, `base_cycles: 2`), so a trace snapshot taken before
/// `step_one_cycle`/`step_one_instruction` is ever called doesn't claim a
/// fetch happened that didn't.
const RESET_OPCODE: OpcodeEntry = OpcodeEntry {
    base_cycles: 1,
    mnemonic: Instruction::NOP,
    mode: Mode::Implicit,
};

pub struct Cpu {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub sp: u8,

    pub n: bool,
    pub v: bool,
    pub d: bool,
    pub i: bool,
    pub z: bool,
    pub c: bool,

    pub memory: Memory,

    /// Cycles still owed from the instruction currently in flight. Charged in
    /// full the moment the instruction is decoded, then burned down one at a
    /// time by [`Cpu::step_one_cycle`].
    pub clock_remaining: u32,

    /// Running total of cycles executed since construction, for tracers.
    total_cycles: u64,

    current_opcode: OpcodeEntry,
    absolute_addr: u16,
    page_crossed: bool,

    /// Total cycle cost of the in-flight instruction, penalties included —
    /// distinct from `current_opcode.base_cycles`, which a tracer would
    /// otherwise under-report for a page-crossing or taken-branch instruction.
    current_instruction_cycles: u32,
}

impl Cpu {
    pub fn new() -> Cpu {
        let mut cpu = Cpu {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0xfd,
            n: false,
            v: false,
            d: false,
            i: false,
            z: false,
            c: false,
            memory: Memory::new(),
            clock_remaining: 0,
            total_cycles: 0,
            current_opcode: RESET_OPCODE,
            absolute_addr: 0,
            page_crossed: false,
            current_instruction_cycles: RESET_OPCODE.base_cycles as u32,
        };
        cpu.pc = cpu.memory.read_word(InterruptVectors::Reset as u16);
        cpu
    }

    /// Bulk-loads a program image into memory without touching registers.
    pub fn load_bytes(&mut self, start: u16, data: &[u8]) {
        self.memory.load_bytes(start, data);
    }

    /// Points the reset vector at `addr`. Call before [`Cpu::reset`] (or
    /// before [`Cpu::new`], since construction reads the vector once) to
    /// control where execution begins.
    pub fn set_reset_vector(&mut self, addr: u16) {
        self.memory.write_word(InterruptVectors::Reset as u16, addr);
    }

    /// Re-enters the post-reset state: registers and flags cleared (per §3,
    /// `I` included — unlike real hardware, which boots with interrupts
    /// masked, this design's reset leaves them unmasked), `PC` reloaded from
    /// the reset vector, any in-flight instruction abandoned.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xfd;
        self.n = false;
        self.v = false;
        self.d = false;
        self.i = false;
        self.z = false;
        self.c = false;
        self.clock_remaining = 0;
        self.current_opcode = RESET_OPCODE;
        self.current_instruction_cycles = RESET_OPCODE.base_cycles as u32;
        self.pc = self.memory.read_word(InterruptVectors::Reset as u16);
    }

    pub fn read_memory(&self, address: u16) -> u8 {
        self.memory.read_byte(address)
    }

    pub fn write_memory(&mut self, address: u16, value: u8) {
        self.memory.write_byte(address, value);
    }

    /// A read-only snapshot of A/X/Y/SP/PC for tracers (§6).
    pub fn registers(&self) -> RegistersView {
        RegistersView {
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
        }
    }

    /// A read-only snapshot of the six stored flags for tracers (§6).
    pub fn flags(&self) -> FlagsView {
        FlagsView {
            n: self.n,
            v: self.v,
            d: self.d,
            i: self.i,
            z: self.z,
            c: self.c,
        }
    }

    /// The decode-table row for the instruction currently in flight (or the
    /// synthetic reset record before the first fetch).
    pub fn current_opcode(&self) -> OpcodeEntry {
        self.current_opcode
    }

    /// Total cycles executed since construction.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// The stack page above `SP`, for tracers (§6: `mem[0x0101 + SP .. 0x01FF]`).
    pub fn stack_slice(&self) -> &[u8] {
        self.memory.stack_slice(self.sp)
    }

    /// A complete trace record for the instruction currently in flight.
    pub fn snapshot(&self) -> TraceRecord {
        TraceRecord {
            opcode: self.current_opcode,
            registers: self.registers(),
            flags: self.flags(),
            cycle_tick: self.total_cycles,
            instruction_cycles: self.current_instruction_cycles,
            stack: self.stack_slice().to_vec(),
        }
    }

    /// Burns exactly one clock cycle. Returns `Ok(true)` on the cycle that
    /// fetches and fully decodes a new instruction (every later cycle of that
    /// instruction, already charged up front, just ticks down and returns
    /// `Ok(false)`).
    pub fn step_one_cycle(&mut self) -> CpuResult<bool> {
        if self.clock_remaining > 0 {
            self.clock_remaining -= 1;
            return Ok(false);
        }
        self.execute_next()?;
        Ok(true)
    }

    /// Runs exactly one full instruction to completion, regardless of how
    /// many cycles it costs, and leaves `clock_remaining` at 0 so the next
    /// call starts a fresh fetch. Useful for tests and tracers that care
    /// about instruction boundaries, not cycle timing.
    pub fn step_one_instruction(&mut self) -> CpuResult<bool> {
        if self.clock_remaining == 0 {
            self.execute_next()?;
        }
        self.clock_remaining = 0;
        Ok(true)
    }

    fn execute_next(&mut self) -> CpuResult<()> {
        let pc_at_fetch = self.pc;
        let opcode_byte = self.fetch_byte();
        let entry = OPCODE_TABLE[opcode_byte as usize].ok_or(CpuError::UnknownOpcode {
            opcode: opcode_byte,
            pc: pc_at_fetch,
        })?;
        self.current_opcode = entry;

        let (address, crossed) = self.resolve_address(entry.mode);
        self.absolute_addr = address;
        self.page_crossed = crossed;

        let mut cost = entry.base_cycles as u32;
        if entry.page_cross_penalty && crossed {
            cost += 1;
        }
        cost += self.dispatch(entry.mnemonic);

        self.total_cycles += cost as u64;
        self.current_instruction_cycles = cost;
        self.clock_remaining = cost.saturating_sub(1);
        Ok(())
    }

    fn dispatch(&mut self, instruction: Instruction) -> u32 {
        use Instruction::*;
        match instruction {
            ADC => ops_logical::adc(self),
            AND => ops_logical::and(self),
            ASL => ops_logical::asl(self),
            BCC => ops_jump::bcc(self),
            BCS => ops_jump::bcs(self),
            BEQ => ops_jump::beq(self),
            BIT => ops_logical::bit(self),
            BMI => ops_jump::bmi(self),
            BNE => ops_jump::bne(self),
            BPL => ops_jump::bpl(self),
            BRK => ops_jump::brk(self),
            BVC => ops_jump::bvc(self),
            BVS => ops_jump::bvs(self),
            CLC => ops_jump::clc(self),
            CLD => ops_jump::cld(self),
            CLI => ops_jump::cli(self),
            CLV => ops_jump::clv(self),
            CMP => ops_logical::cmp(self),
            CPX => ops_logical::cpx(self),
            CPY => ops_logical::cpy(self),
            DEC => ops_logical::dec(self),
            DEX => ops_logical::dex(self),
            DEY => ops_logical::dey(self),
            EOR => ops_logical::eor(self),
            INC => ops_logical::inc(self),
            INX => ops_logical::inx(self),
            INY => ops_logical::iny(self),
            JMP => ops_jump::jmp(self),
            JSR => ops_jump::jsr(self),
            LDA => ops_move::lda(self),
            LDX => ops_move::ldx(self),
            LDY => ops_move::ldy(self),
            LSR => ops_logical::lsr(self),
            NOP => ops_jump::nop(self),
            ORA => ops_logical::ora(self),
            PHA => ops_move::pha(self),
            PHP => ops_move::php(self),
            PLA => ops_move::pla(self),
            PLP => ops_move::plp(self),
            ROL => ops_logical::rol(self),
            ROR => ops_logical::ror(self),
            RTI => ops_jump::rti(self),
            RTS => ops_jump::rts(self),
            SBC => ops_logical::sbc(self),
            SEC => ops_jump::sec(self),
            SED => ops_jump::sed(self),
            SEI => ops_jump::sei(self),
            STA => ops_move::sta(self),
            STX => ops_move::stx(self),
            STY => ops_move::sty(self),
            TAX => ops_move::tax(self),
            TAY => ops_move::tay(self),
            TSX => ops_move::tsx(self),
            TXA => ops_move::txa(self),
            TXS => ops_move::txs(self),
            TYA => ops_move::tya(self),
        }
    }

    /// Services a maskable interrupt request. A no-op while `I` is set, per
    /// the hardware. Charges its own 7 cycles rather than relying on the
    /// instruction dispatch loop, since an IRQ is not itself an opcode fetch.
    pub fn irq(&mut self) -> CpuResult<()> {
        if self.i {
            return Ok(());
        }
        self.push_word(self.pc);
        let p = self.pack(false);
        self.push_byte(p);
        self.i = true;
        self.pc = self.memory.read_word(InterruptVectors::IrqBrk as u16);
        self.clock_remaining += 7;
        self.total_cycles += 7;
        self.current_instruction_cycles = 7;
        Ok(())
    }

    /// Services a non-maskable interrupt. Unlike `irq`, this always fires.
    pub fn nmi(&mut self) -> CpuResult<()> {
        self.push_word(self.pc);
        let p = self.pack(false);
        self.push_byte(p);
        self.i = true;
        self.pc = self
            .memory
            .read_word(InterruptVectors::NonMaskableInterrupt as u16);
        self.clock_remaining += 8;
        self.total_cycles += 8;
        self.current_instruction_cycles = 8;
        Ok(())
    }

    fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read_byte(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn fetch_word(&mut self) -> u16 {
        let value = self.memory.read_word(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    fn push_byte(&mut self, value: u8) {
        let address = memory_range::STACK.min + self.sp as u16;
        self.memory.write_byte(address, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn pull_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let address = memory_range::STACK.min + self.sp as u16;
        self.memory.read_byte(address)
    }

    fn push_word(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_byte(high);
        self.push_byte(low);
    }

    fn pull_word(&mut self) -> u16 {
        let low = self.pull_byte();
        let high = self.pull_byte();
        u16::from_le_bytes([low, high])
    }

    /// Packs the 7 flags plus the synthesized B bit into the classic `NVss
    /// DIZC` layout. `break_flag` is true only for PHP/BRK, which is the only
    /// place the B bit is ever observable — it is not CPU state.
    fn pack(&self, break_flag: bool) -> u8 {
        let mut p = StatusFlag::Unused as u8;
        if self.c {
            p |= StatusFlag::Carry as u8;
        }
        if self.z {
            p |= StatusFlag::Zero as u8;
        }
        if self.i {
            p |= StatusFlag::InterruptDisable as u8;
        }
        if self.d {
            p |= StatusFlag::Decimal as u8;
        }
        if break_flag {
            p |= StatusFlag::Break as u8;
        }
        if self.v {
            p |= StatusFlag::Overflow as u8;
        }
        if self.n {
            p |= StatusFlag::Negative as u8;
        }
        p
    }

    /// Unpacks a pulled status byte. The B/unused bits carry no CPU state and
    /// are discarded.
    fn unpack(&mut self, p: u8) {
        self.c = p & StatusFlag::Carry as u8 != 0;
        self.z = p & StatusFlag::Zero as u8 != 0;
        self.i = p & StatusFlag::InterruptDisable as u8 != 0;
        self.d = p & StatusFlag::Decimal as u8 != 0;
        self.v = p & StatusFlag::Overflow as u8 != 0;
        self.n = p & StatusFlag::Negative as u8 != 0;
    }

    fn set_zn(&mut self, value: u8) {
        self.z = value == 0;
        self.n = value & 0x80 != 0;
    }

    /// The value the current instruction's mode resolved to: the accumulator
    /// itself in `Accumulator` mode, else the byte at `absolute_addr`.
    fn operand_value(&self) -> u8 {
        if self.current_opcode.mode == Mode::Accumulator {
            self.a
        } else {
            self.memory.read_byte(self.absolute_addr)
        }
    }

    /// Commits a read-modify-write result back to wherever the operand came
    /// from. This is the one spot the teacher's accumulator-mode write-back
    /// bug lived — ASL/LSR/ROL/ROR always wrote through to memory even when
    /// the instruction addressed the accumulator.
    fn write_back(&mut self, value: u8) {
        if self.current_opcode.mode == Mode::Accumulator {
            self.a = value;
        } else {
            self.memory.write_byte(self.absolute_addr, value);
        }
    }
}

impl Default for Cpu {
    fn default() -> Cpu {
        Cpu::new()
    }
}
