use thiserror::Error;

/// Fatal decode errors raised by the processor.
///
/// These are never recovered mid-instruction: the CPU leaves PC pointing at
/// the offending opcode so the state can be inspected as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    #[error("unknown opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    UnknownOpcode { opcode: u8, pc: u16 },
    #[error("unknown extended opcode 0xCB 0x{opcode:02X} at PC=0x{pc:04X}")]
    UnknownExtendedOpcode { opcode: u8, pc: u16 },
}

impl CpuError {
    /// Address of the instruction that failed to decode.
    pub fn pc(&self) -> u16 {
        match *self {
            CpuError::UnknownOpcode { pc, .. } | CpuError::UnknownExtendedOpcode { pc, .. } => pc,
        }
    }
}

/// Reasons an image is rejected at load time. The machine keeps its previous
/// cartridge and state whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartridgeError {
    #[error("unsupported cartridge size: {0} bytes (expected 32 KiB * 2^n, n = 0..=8)")]
    InvalidSize(usize),
    #[error("unsupported cartridge controller type 0x{0:02X}")]
    UnsupportedController(u8),
    #[error("boot image must be exactly 256 bytes, got {0}")]
    InvalidBootRomSize(usize),
}
