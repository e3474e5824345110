use super::{MemoryBus, BOOT_ROM_SIZE, WRAM_SIZE};
use crate::cpu::Bus;

impl MemoryBus {
    pub(crate) fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x00FF if self.boot_active => match &self.boot_rom {
                Some(rom) => rom[usize::from(addr) % BOOT_ROM_SIZE],
                None => self.cartridge.read_rom(addr),
            },
            0x0000..=0x7FFF => self.cartridge.read_rom(addr),
            0x8000..=0x9FFF => self.video.read_vram(usize::from(addr - 0x8000)),
            0xA000..=0xBFFF => self.cartridge.read_ram(addr),
            0xC000..=0xFDFF => self.wram[usize::from(addr) & (WRAM_SIZE - 1)],
            0xFE00..=0xFE9F => self.video.read_oam(usize::from(addr - 0xFE00)),
            0xFF00 => self.joypad.read(),
            0xFF01 | 0xFF02 => self.serial.read(addr),
            0xFF04..=0xFF07 => self.timer.read(addr),
            0xFF0F => self.interrupts.read_if(),
            0xFF46 => self.dma_source(),
            0xFF40..=0xFF4B => self.video.read_register(addr),
            0xFF80..=0xFFFE => self.hram[usize::from(addr - 0xFF80)],
            0xFFFF => self.interrupts.read_ie(),
            // Unusable OAM tail and unmapped IO behave as open bus.
            _ => 0xFF,
        }
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF => self.cartridge.write_rom(addr, value),
            0x8000..=0x9FFF => self.video.write_vram(usize::from(addr - 0x8000), value),
            0xA000..=0xBFFF => self.cartridge.write_ram(addr, value),
            0xC000..=0xFDFF => self.wram[usize::from(addr) & (WRAM_SIZE - 1)] = value,
            0xFE00..=0xFE9F => self.video.write_oam(usize::from(addr - 0xFE00), value),
            0xFF00 => self.joypad.write(value),
            0xFF01 | 0xFF02 => self.serial.write(addr, value),
            0xFF04..=0xFF07 => self.timer.write(addr, value),
            0xFF0F => self.interrupts.write_if(value),
            0xFF46 => self.oam_dma(value),
            0xFF40..=0xFF4B => self.video.write_register(addr, value, &mut self.interrupts),
            0xFF50 => {
                if self.boot_active {
                    log::debug!("boot overlay unmapped");
                }
                self.boot_active = false;
            }
            0xFF80..=0xFFFE => self.hram[usize::from(addr - 0xFF80)] = value,
            0xFFFF => self.interrupts.write_ie(value),
            _ => {}
        }
    }
}

impl Bus for MemoryBus {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value);
    }
}
