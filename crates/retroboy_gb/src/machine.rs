mod bus;
mod cartridge;
mod debug;
mod gameboy;
mod interrupts;
mod joypad;
mod serial;
mod timer;
mod video;

pub use cartridge::{CartridgeInfo, ControllerKind};
pub use debug::{DebugSnapshot, Disassembly};
pub use gameboy::{FrameOutcome, GameBoy};
pub use interrupts::InterruptFlags;
pub use joypad::Button;
pub use video::{Color, Mode, VideoRegisters};

#[cfg(test)]
mod tests;
