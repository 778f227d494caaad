//! Fixed memory layout and vector addresses for the MOS 6502.

pub mod memory_range {
    pub struct Range {
        pub min: u16,
        pub max: u16,
    }

    impl Range {
        #[inline]
        pub fn size(&self) -> u32 {
            self.max as u32 - self.min as u32 + 1
        }
    }

    /// The first 256 bytes of memory, addressed by the short-form zero-page modes.
    pub const ZERO_PAGE: Range = Range {
        min: 0x0000,
        max: 0x00ff,
    };

    /// The hardware stack. `SP` indexes within this page as `0x0100 | SP`.
    pub const STACK: Range = Range {
        min: 0x0100,
        max: 0x01ff,
    };

    pub const STACK_PAGE: u8 = 0x01;
}

/// The fixed vector table at the top of the address space.
#[rustfmt::skip]
pub enum InterruptVectors {
    /// The Non-Maskable Interrupt vector ($FFFA/$FFFB).
    NonMaskableInterrupt = 0xFFFA,
    /// The reset vector ($FFFC/$FFFD). `reset()` loads `PC` from here.
    Reset                = 0xFFFC,
    /// The IRQ/BRK vector ($FFFE/$FFFF).
    IrqBrk               = 0xFFFE,
}

/// Status register bits, packed as `NVss DIZC` (see `cpu::flags`).
#[rustfmt::skip]
pub enum StatusFlag {
    Carry            = 0b0000_0001,
    Zero             = 0b0000_0010,
    InterruptDisable = 0b0000_0100,
    Decimal          = 0b0000_1000,
    Break            = 0b0001_0000,
    Unused           = 0b0010_0000,
    Overflow         = 0b0100_0000,
    Negative         = 0b1000_0000,
}
