//! The opcode decode table: one row per byte value, 151 documented, 105 empty.
//!
//! Collapsed from the teacher's parallel struct-of-arrays (`CYCLES_TABLE`,
//! `ADDRESSING_MODE_TABLE`, `OPCODE_STRING_TABLE`, `OPERATION_FN_TABLE`) into a
//! single `[Option<OpcodeEntry>; 256]`, dispatched by a `match` on `Instruction`
//! rather than by indexing a parallel function-pointer table.

/// The 13 addressing modes a documented 6502 opcode can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Implicit,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
}

impl Mode {
    /// Number of operand bytes following the opcode byte itself.
    pub fn operand_len(self) -> u8 {
        match self {
            Mode::Implicit | Mode::Accumulator => 0,
            Mode::Immediate
            | Mode::ZeroPage
            | Mode::ZeroPageX
            | Mode::ZeroPageY
            | Mode::IndirectX
            | Mode::IndirectY
            | Mode::Relative => 1,
            Mode::Absolute | Mode::AbsoluteX | Mode::AbsoluteY | Mode::Indirect => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Implicit => "implicit",
            Mode::Accumulator => "accumulator",
            Mode::Immediate => "immediate",
            Mode::ZeroPage => "zero_page",
            Mode::ZeroPageX => "zero_page_x",
            Mode::ZeroPageY => "zero_page_y",
            Mode::Absolute => "absolute",
            Mode::AbsoluteX => "absolute_x",
            Mode::AbsoluteY => "absolute_y",
            Mode::Indirect => "indirect",
            Mode::IndirectX => "indirect_x",
            Mode::IndirectY => "indirect_y",
            Mode::Relative => "relative",
        }
    }
}

/// The 56 documented mnemonics. Illegal/undocumented opcodes are out of scope
/// (see the Non-goals) and have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Instruction {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC, CLD,
    CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP, JSR, LDA,
    LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP, ROL, ROR, RTI, RTS, SBC, SEC,
    SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
}

impl Instruction {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Instruction::ADC => "ADC", Instruction::AND => "AND", Instruction::ASL => "ASL",
            Instruction::BCC => "BCC", Instruction::BCS => "BCS", Instruction::BEQ => "BEQ",
            Instruction::BIT => "BIT", Instruction::BMI => "BMI", Instruction::BNE => "BNE",
            Instruction::BPL => "BPL", Instruction::BRK => "BRK", Instruction::BVC => "BVC",
            Instruction::BVS => "BVS", Instruction::CLC => "CLC", Instruction::CLD => "CLD",
            Instruction::CLI => "CLI", Instruction::CLV => "CLV", Instruction::CMP => "CMP",
            Instruction::CPX => "CPX", Instruction::CPY => "CPY", Instruction::DEC => "DEC",
            Instruction::DEX => "DEX", Instruction::DEY => "DEY", Instruction::EOR => "EOR",
            Instruction::INC => "INC", Instruction::INX => "INX", Instruction::INY => "INY",
            Instruction::JMP => "JMP", Instruction::JSR => "JSR", Instruction::LDA => "LDA",
            Instruction::LDX => "LDX", Instruction::LDY => "LDY", Instruction::LSR => "LSR",
            Instruction::NOP => "NOP", Instruction::ORA => "ORA", Instruction::PHA => "PHA",
            Instruction::PHP => "PHP", Instruction::PLA => "PLA", Instruction::PLP => "PLP",
            Instruction::ROL => "ROL", Instruction::ROR => "ROR", Instruction::RTI => "RTI",
            Instruction::RTS => "RTS", Instruction::SBC => "SBC", Instruction::SEC => "SEC",
            Instruction::SED => "SED", Instruction::SEI => "SEI", Instruction::STA => "STA",
            Instruction::STX => "STX", Instruction::STY => "STY", Instruction::TAX => "TAX",
            Instruction::TAY => "TAY", Instruction::TSX => "TSX", Instruction::TXA => "TXA",
            Instruction::TXS => "TXS", Instruction::TYA => "TYA",
        }
    }
}

/// A single decode-table row: how many cycles the instruction costs at minimum,
/// which kernel to run, which mode to resolve the operand with, and whether a
/// page crossing while resolving the operand costs one more cycle.
///
/// `page_cross_penalty` is `false` for stores and read-modify-write instructions
/// in indexed modes: those always pay the worst-case cycle count regardless of
/// whether the effective address actually crosses a page, since the 6502 has no
/// early-exit path for a write it must commit either way. It is `true` only for
/// the read-only instructions that skip the extra bus cycle when no crossing
/// occurs (ADC, AND, CMP, EOR, LDA, LDX, LDY, ORA, SBC, in their indexed modes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub base_cycles: u8,
    pub mnemonic: Instruction,
    pub mode: Mode,
    pub page_cross_penalty: bool,
}

const fn op(
    base_cycles: u8,
    mnemonic: Instruction,
    mode: Mode,
    page_cross_penalty: bool,
) -> Option<OpcodeEntry> {
    Some(OpcodeEntry {
        base_cycles,
        mnemonic,
        mode,
        page_cross_penalty,
    })
}

#[rustfmt::skip]
pub const OPCODE_TABLE: [Option<OpcodeEntry>; 256] = {
    use Instruction::*;
    use Mode::*;
    [
        // 0x00
        op(7, BRK, Implicit, false), op(6, ORA, IndirectX, false), None, None,
        None, op(3, ORA, ZeroPage, false), op(5, ASL, ZeroPage, false), None,
        op(3, PHP, Implicit, false), op(2, ORA, Immediate, false), op(2, ASL, Accumulator, false), None,
        None, op(4, ORA, Absolute, false), op(6, ASL, Absolute, false), None,
        // 0x10
        op(2, BPL, Relative, false), op(5, ORA, IndirectY, true), None, None,
        None, op(4, ORA, ZeroPageX, false), op(6, ASL, ZeroPageX, false), None,
        op(2, CLC, Implicit, false), op(4, ORA, AbsoluteY, true), None, None,
        None, op(4, ORA, AbsoluteX, true), op(7, ASL, AbsoluteX, false), None,
        // 0x20
        op(6, JSR, Absolute, false), op(6, AND, IndirectX, false), None, None,
        op(3, BIT, ZeroPage, false), op(3, AND, ZeroPage, false), op(5, ROL, ZeroPage, false), None,
        op(4, PLP, Implicit, false), op(2, AND, Immediate, false), op(2, ROL, Accumulator, false), None,
        op(4, BIT, Absolute, false), op(4, AND, Absolute, false), op(6, ROL, Absolute, false), None,
        // 0x30
        op(2, BMI, Relative, false), op(5, AND, IndirectY, true), None, None,
        None, op(4, AND, ZeroPageX, false), op(6, ROL, ZeroPageX, false), None,
        op(2, SEC, Implicit, false), op(4, AND, AbsoluteY, true), None, None,
        None, op(4, AND, AbsoluteX, true), op(7, ROL, AbsoluteX, false), None,
        // 0x40
        op(6, RTI, Implicit, false), op(6, EOR, IndirectX, false), None, None,
        None, op(3, EOR, ZeroPage, false), op(5, LSR, ZeroPage, false), None,
        op(3, PHA, Implicit, false), op(2, EOR, Immediate, false), op(2, LSR, Accumulator, false), None,
        op(3, JMP, Absolute, false), op(4, EOR, Absolute, false), op(6, LSR, Absolute, false), None,
        // 0x50
        op(2, BVC, Relative, false), op(5, EOR, IndirectY, true), None, None,
        None, op(4, EOR, ZeroPageX, false), op(6, LSR, ZeroPageX, false), None,
        op(2, CLI, Implicit, false), op(4, EOR, AbsoluteY, true), None, None,
        None, op(4, EOR, AbsoluteX, true), op(7, LSR, AbsoluteX, false), None,
        // 0x60
        op(6, RTS, Implicit, false), op(6, ADC, IndirectX, false), None, None,
        None, op(3, ADC, ZeroPage, false), op(5, ROR, ZeroPage, false), None,
        op(4, PLA, Implicit, false), op(2, ADC, Immediate, false), op(2, ROR, Accumulator, false), None,
        op(5, JMP, Indirect, false), op(4, ADC, Absolute, false), op(6, ROR, Absolute, false), None,
        // 0x70
        op(2, BVS, Relative, false), op(5, ADC, IndirectY, true), None, None,
        None, op(4, ADC, ZeroPageX, false), op(6, ROR, ZeroPageX, false), None,
        op(2, SEI, Implicit, false), op(4, ADC, AbsoluteY, true), None, None,
        None, op(4, ADC, AbsoluteX, true), op(7, ROR, AbsoluteX, false), None,
        // 0x80
        None, op(6, STA, IndirectX, false), None, None,
        op(3, STY, ZeroPage, false), op(3, STA, ZeroPage, false), op(3, STX, ZeroPage, false), None,
        op(2, DEY, Implicit, false), None, op(2, TXA, Implicit, false), None,
        op(4, STY, Absolute, false), op(4, STA, Absolute, false), op(4, STX, Absolute, false), None,
        // 0x90
        op(2, BCC, Relative, false), op(6, STA, IndirectY, false), None, None,
        op(4, STY, ZeroPageX, false), op(4, STA, ZeroPageX, false), op(4, STX, ZeroPageY, false), None,
        op(2, TYA, Implicit, false), op(5, STA, AbsoluteY, false), op(2, TXS, Implicit, false), None,
        None, op(5, STA, AbsoluteX, false), None, None,
        // 0xA0
        op(2, LDY, Immediate, false), op(6, LDA, IndirectX, false), op(2, LDX, Immediate, false), None,
        op(3, LDY, ZeroPage, false), op(3, LDA, ZeroPage, false), op(3, LDX, ZeroPage, false), None,
        op(2, TAY, Implicit, false), op(2, LDA, Immediate, false), op(2, TAX, Implicit, false), None,
        op(4, LDY, Absolute, false), op(4, LDA, Absolute, false), op(4, LDX, Absolute, false), None,
        // 0xB0
        op(2, BCS, Relative, false), op(5, LDA, IndirectY, true), None, None,
        op(4, LDY, ZeroPageX, false), op(4, LDA, ZeroPageX, false), op(4, LDX, ZeroPageY, false), None,
        op(2, CLV, Implicit, false), op(4, LDA, AbsoluteY, true), op(2, TSX, Implicit, false), None,
        op(4, LDY, AbsoluteX, true), op(4, LDA, AbsoluteX, true), op(4, LDX, AbsoluteY, true), None,
        // 0xC0
        op(2, CPY, Immediate, false), op(6, CMP, IndirectX, false), None, None,
        op(3, CPY, ZeroPage, false), op(3, CMP, ZeroPage, false), op(5, DEC, ZeroPage, false), None,
        op(2, INY, Implicit, false), op(2, CMP, Immediate, false), op(2, DEX, Implicit, false), None,
        op(4, CPY, Absolute, false), op(4, CMP, Absolute, false), op(6, DEC, Absolute, false), None,
        // 0xD0
        op(2, BNE, Relative, false), op(5, CMP, IndirectY, true), None, None,
        None, op(4, CMP, ZeroPageX, false), op(6, DEC, ZeroPageX, false), None,
        op(2, CLD, Implicit, false), op(4, CMP, AbsoluteY, true), None, None,
        None, op(4, CMP, AbsoluteX, true), op(7, DEC, AbsoluteX, false), None,
        // 0xE0
        op(2, CPX, Immediate, false), op(6, SBC, IndirectX, false), None, None,
        op(3, CPX, ZeroPage, false), op(3, SBC, ZeroPage, false), op(5, INC, ZeroPage, false), None,
        op(2, INX, Implicit, false), op(2, SBC, Immediate, false), op(2, NOP, Implicit, false), None,
        op(4, CPX, Absolute, false), op(4, SBC, Absolute, false), op(6, INC, Absolute, false), None,
        // 0xF0
        op(2, BEQ, Relative, false), op(5, SBC, IndirectY, true), None, None,
        None, op(4, SBC, ZeroPageX, false), op(6, INC, ZeroPageX, false), None,
        op(2, SED, Implicit, false), op(4, SBC, AbsoluteY, true), None, None,
        None, op(4, SBC, AbsoluteX, true), op(7, INC, AbsoluteX, false), None,
    ]
};
