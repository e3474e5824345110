pub mod config;
pub mod cpu;
pub mod error;
pub mod machine;

pub use config::GameBoyConfig;
pub use cpu::{Bus, Cpu, Flag, Registers, Timing};
pub use error::{CartridgeError, CpuError};
pub use machine::{
    Button, CartridgeInfo, Color, ControllerKind, DebugSnapshot, Disassembly, FrameOutcome,
    GameBoy, InterruptFlags, Mode, VideoRegisters,
};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// Bytes per pixel in every RGBA buffer the core hands out.
pub const BYTES_PER_PIXEL: usize = 4;
/// One DMG frame worth of T-cycles (154 lines of 456 cycles).
pub const CYCLES_PER_FRAME: u32 = 70_224;
