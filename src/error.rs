//! The crate's sole error type.
//!
//! Everything else a guest program can do — stack-pointer wraparound, an infinite
//! loop, self-modifying code — is observable behavior, not a fault of the emulator
//! (see the module docs on [`crate::cpu`]). The one fatal condition is decoding an
//! opcode byte the table has no entry for.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// The byte at `pc` does not correspond to any documented opcode.
    UnknownOpcode { opcode: u8, pc: u16 },
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::UnknownOpcode { opcode, pc } => write!(
                f,
                "unknown opcode {:#04x} fetched at {:#06x}",
                opcode, pc
            ),
        }
    }
}

impl std::error::Error for CpuError {}

pub type CpuResult<T> = Result<T, CpuError>;
