const ROM_BANK_SIZE: usize = 0x4000;
const RAM_BANK_SIZE: usize = 0x2000;

/// MBC1 bank-switching registers.
///
/// The controller only computes offsets into the image and external RAM;
/// the bytes themselves stay owned by `Cartridge`.
#[derive(Clone, Debug)]
pub(super) struct Mbc1 {
    rom_banks: usize,
    ram_banks: usize,
    /// 5-bit register at 0x2000..=0x3FFF; zero is stored as one.
    bank_low: u8,
    /// 2-bit register at 0x4000..=0x5FFF.
    bank_high: u8,
    ram_enabled: bool,
    /// false: ROM banking mode (0), true: RAM banking mode (1).
    advanced_mode: bool,
}

impl Mbc1 {
    pub(super) fn new(rom_banks: usize, ram_banks: usize) -> Self {
        Self {
            rom_banks: rom_banks.max(1),
            ram_banks: ram_banks.max(1),
            bank_low: 1,
            bank_high: 0,
            ram_enabled: false,
            advanced_mode: false,
        }
    }

    /// Bank mapped into 0x0000..=0x3FFF.
    pub(super) fn fixed_bank(&self) -> usize {
        if self.advanced_mode {
            (usize::from(self.bank_high) << 5) % self.rom_banks
        } else {
            0
        }
    }

    /// Bank mapped into 0x4000..=0x7FFF.
    pub(super) fn switchable_bank(&self) -> usize {
        ((usize::from(self.bank_high) << 5) | usize::from(self.bank_low)) % self.rom_banks
    }

    pub(super) fn ram_bank(&self) -> usize {
        if self.advanced_mode {
            usize::from(self.bank_high) % self.ram_banks
        } else {
            0
        }
    }

    /// Byte offset in the ROM image for a CPU address below 0x8000.
    pub(super) fn rom_offset(&self, addr: u16) -> usize {
        let bank = if addr < 0x4000 {
            self.fixed_bank()
        } else {
            self.switchable_bank()
        };
        bank * ROM_BANK_SIZE + usize::from(addr & 0x3FFF)
    }

    /// Byte offset in external RAM for 0xA000..=0xBFFF, or `None` while the
    /// RAM gate is closed.
    pub(super) fn ram_offset(&self, addr: u16) -> Option<usize> {
        self.ram_enabled
            .then(|| self.ram_bank() * RAM_BANK_SIZE + usize::from(addr & 0x1FFF))
    }

    /// Register writes land in the ROM address range.
    pub(super) fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram_enabled = value & 0x0F == 0x0A,
            0x2000..=0x3FFF => {
                self.bank_low = match value & 0x1F {
                    0 => 1,
                    low => low,
                };
                log::debug!("MBC1 ROM bank -> {}", self.switchable_bank());
            }
            0x4000..=0x5FFF => {
                self.bank_high = value & 0x03;
                log::debug!(
                    "MBC1 upper bits -> {} (rom {}, ram {})",
                    self.bank_high,
                    self.switchable_bank(),
                    self.ram_bank()
                );
            }
            0x6000..=0x7FFF => self.advanced_mode = value & 0x01 != 0,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_zero_writes_select_bank_one() {
        let mut mbc = Mbc1::new(64, 1);
        mbc.write_register(0x2000, 0x00);
        assert_eq!(mbc.switchable_bank(), 1);
        mbc.write_register(0x2000, 0x20);
        assert_eq!(mbc.switchable_bank(), 1);
        mbc.write_register(0x4000, 0x01);
        assert_eq!(mbc.switchable_bank(), 0x21);
    }

    #[test]
    fn bank_numbers_wrap_to_image_size() {
        let mut mbc = Mbc1::new(4, 1);
        mbc.write_register(0x2000, 0x05);
        assert_eq!(mbc.switchable_bank(), 1);
        assert_eq!(mbc.rom_offset(0x4000), ROM_BANK_SIZE);
    }

    #[test]
    fn advanced_mode_moves_fixed_window_and_ram_bank() {
        let mut mbc = Mbc1::new(128, 4);
        mbc.write_register(0x4000, 0x02);
        assert_eq!(mbc.fixed_bank(), 0);
        assert_eq!(mbc.ram_bank(), 0);

        mbc.write_register(0x6000, 0x01);
        assert_eq!(mbc.fixed_bank(), 0x40);
        assert_eq!(mbc.ram_bank(), 2);
        assert_eq!(mbc.rom_offset(0x0010), 0x40 * ROM_BANK_SIZE + 0x10);
    }

    #[test]
    fn ram_gate_needs_low_nibble_a() {
        let mut mbc = Mbc1::new(2, 1);
        assert_eq!(mbc.ram_offset(0xA000), None);
        mbc.write_register(0x0000, 0x1A);
        assert_eq!(mbc.ram_offset(0xA123), Some(0x123));
        mbc.write_register(0x1FFF, 0x0B);
        assert_eq!(mbc.ram_offset(0xA123), None);
    }
}
