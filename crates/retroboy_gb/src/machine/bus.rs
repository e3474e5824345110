mod dma;
mod mmio;

use super::cartridge::Cartridge;
use super::interrupts::InterruptController;
use super::joypad::Joypad;
use super::serial::Serial;
use super::timer::Timer;
use super::video::VideoUnit;
use crate::config::GameBoyConfig;
use crate::cpu::Timing;
use crate::error::CartridgeError;

pub(crate) const BOOT_ROM_SIZE: usize = 0x100;
const WRAM_SIZE: usize = 0x2000;
const HRAM_SIZE: usize = 0x7F;

/// Address decoder that owns every memory region and peripheral.
///
/// The CPU only reaches it through the `Bus` trait; peripherals signal the
/// CPU by raising bits in the shared `InterruptController`.
pub(crate) struct MemoryBus {
    pub(crate) cartridge: Cartridge,
    boot_rom: Option<Box<[u8; BOOT_ROM_SIZE]>>,
    boot_active: bool,
    wram: Box<[u8; WRAM_SIZE]>,
    hram: [u8; HRAM_SIZE],
    pub(crate) video: VideoUnit,
    pub(crate) timer: Timer,
    pub(crate) joypad: Joypad,
    pub(crate) serial: Serial,
    pub(crate) interrupts: InterruptController,
    /// Last value written to 0xFF46.
    dma_source: u8,
}

impl MemoryBus {
    pub(crate) fn new(config: &GameBoyConfig) -> Self {
        Self {
            cartridge: Cartridge::default(),
            boot_rom: None,
            boot_active: false,
            wram: Box::new([0; WRAM_SIZE]),
            hram: [0; HRAM_SIZE],
            video: VideoUnit::new(config.palette),
            timer: Timer::new(),
            joypad: Joypad::default(),
            serial: Serial::new(config.log_serial),
            interrupts: InterruptController::default(),
            dma_source: 0,
        }
    }

    /// Clear RAM, peripherals and bank registers. The cartridge image and
    /// any boot image survive; a loaded boot image is mapped in again.
    pub(crate) fn reset(&mut self) {
        self.cartridge.reset();
        self.boot_active = self.boot_rom.is_some();
        self.wram.fill(0);
        self.hram.fill(0);
        self.video.reset();
        self.timer.reset();
        self.joypad.reset();
        self.serial.reset();
        self.interrupts = InterruptController::default();
        self.dma_source = 0;
    }

    pub(crate) fn insert_cartridge(&mut self, cartridge: Cartridge) {
        self.cartridge = cartridge;
    }

    pub(crate) fn load_boot_rom(&mut self, image: &[u8]) -> Result<(), CartridgeError> {
        let rom: [u8; BOOT_ROM_SIZE] = image
            .try_into()
            .map_err(|_| CartridgeError::InvalidBootRomSize(image.len()))?;
        self.boot_rom = Some(Box::new(rom));
        self.boot_active = true;
        Ok(())
    }

    #[inline]
    pub(crate) fn boot_active(&self) -> bool {
        self.boot_active
    }

    /// Run the peripherals for the time one instruction (or interrupt
    /// dispatch) took. Video counts clock cycles, the timer machine cycles.
    pub(crate) fn advance(&mut self, timing: Timing) {
        self.video.step(timing.t, &mut self.interrupts);
        self.timer.step(timing.m, &mut self.interrupts);
    }
}
