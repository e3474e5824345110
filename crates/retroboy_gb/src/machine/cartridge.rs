mod mbc1;

use std::fmt;

use self::mbc1::Mbc1;
use crate::error::CartridgeError;

const MIN_ROM_SIZE: usize = 0x8000;
const TITLE_RANGE: std::ops::Range<usize> = 0x134..0x144;
const TYPE_ADDR: usize = 0x147;
const RAM_SIZE_ADDR: usize = 0x149;
const RAM_BANK_SIZE: usize = 0x2000;

/// Controller family declared by header byte 0x147.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerKind {
    RomOnly,
    Mbc1,
    Mbc1Ram,
    Mbc1RamBattery,
}

impl ControllerKind {
    fn from_code(code: u8) -> Result<Self, CartridgeError> {
        match code {
            0x00 => Ok(Self::RomOnly),
            0x01 => Ok(Self::Mbc1),
            0x02 => Ok(Self::Mbc1Ram),
            0x03 => Ok(Self::Mbc1RamBattery),
            other => Err(CartridgeError::UnsupportedController(other)),
        }
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControllerKind::RomOnly => "ROM ONLY",
            ControllerKind::Mbc1 => "MBC1",
            ControllerKind::Mbc1Ram => "MBC1+RAM",
            ControllerKind::Mbc1RamBattery => "MBC1+RAM+BATTERY",
        };
        f.write_str(name)
    }
}

/// Header facts about the loaded image, for hosts and logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartridgeInfo {
    pub title: String,
    pub kind: ControllerKind,
    pub rom_size: usize,
    pub ram_size: usize,
}

#[derive(Clone, Debug)]
enum Controller {
    None,
    Mbc1(Mbc1),
}

/// A validated cartridge image together with its external RAM and
/// bank-switching state.
#[derive(Clone, Debug)]
pub(crate) struct Cartridge {
    rom: Vec<u8>,
    ram: Vec<u8>,
    kind: ControllerKind,
    controller: Controller,
}

impl Default for Cartridge {
    /// An empty slot: every ROM read is open bus, 8 KiB of RAM are present.
    fn default() -> Self {
        Self {
            rom: Vec::new(),
            ram: vec![0; RAM_BANK_SIZE],
            kind: ControllerKind::RomOnly,
            controller: Controller::None,
        }
    }
}

impl Cartridge {
    /// Validate an image and build its controller. Nothing is mutated on
    /// failure, so the caller can keep its previous cartridge.
    pub(crate) fn from_image(image: &[u8]) -> Result<Self, CartridgeError> {
        let len = image.len();
        let valid_size = (0..=8).any(|n| len == MIN_ROM_SIZE << n);
        if !valid_size {
            return Err(CartridgeError::InvalidSize(len));
        }

        let kind = ControllerKind::from_code(image[TYPE_ADDR])?;
        let ram_banks = match image[RAM_SIZE_ADDR] {
            0x03 => 4,
            0x04 => 16,
            0x05 => 8,
            _ => 1,
        };

        let controller = match kind {
            ControllerKind::RomOnly => Controller::None,
            _ => Controller::Mbc1(Mbc1::new(len / 0x4000, ram_banks)),
        };

        Ok(Self {
            rom: image.to_vec(),
            ram: vec![0; ram_banks * RAM_BANK_SIZE],
            kind,
            controller,
        })
    }

    /// Title field: ASCII up to the first NUL, or all 16 bytes.
    pub(crate) fn title(&self) -> String {
        let Some(field) = self.rom.get(TITLE_RANGE) else {
            return String::new();
        };
        field
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { char::from(b) } else { '?' })
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    pub(crate) fn info(&self) -> CartridgeInfo {
        CartridgeInfo {
            title: self.title(),
            kind: self.kind,
            rom_size: self.rom.len(),
            ram_size: self.ram.len(),
        }
    }

    pub(crate) fn is_loaded(&self) -> bool {
        !self.rom.is_empty()
    }

    /// Clear bank registers and external RAM, keeping the image.
    pub(crate) fn reset(&mut self) {
        if let Controller::Mbc1(mbc) = &mut self.controller {
            *mbc = Mbc1::new(self.rom.len() / 0x4000, self.ram.len() / RAM_BANK_SIZE);
        }
        self.ram.fill(0);
    }

    /// 0x0000..=0x7FFF.
    pub(crate) fn read_rom(&self, addr: u16) -> u8 {
        let offset = match &self.controller {
            Controller::None => usize::from(addr),
            Controller::Mbc1(mbc) => mbc.rom_offset(addr),
        };
        self.rom.get(offset).copied().unwrap_or(0xFF)
    }

    /// Writes to the ROM range program the controller; without one they
    /// are dropped.
    pub(crate) fn write_rom(&mut self, addr: u16, value: u8) {
        match &mut self.controller {
            Controller::None => {}
            Controller::Mbc1(mbc) => mbc.write_register(addr, value),
        }
    }

    fn ram_offset(&self, addr: u16) -> Option<usize> {
        match &self.controller {
            Controller::None => Some(usize::from(addr & 0x1FFF)),
            Controller::Mbc1(mbc) => mbc.ram_offset(addr),
        }
    }

    /// 0xA000..=0xBFFF. A closed RAM gate reads as open bus.
    pub(crate) fn read_ram(&self, addr: u16) -> u8 {
        self.ram_offset(addr)
            .and_then(|offset| self.ram.get(offset).copied())
            .unwrap_or(0xFF)
    }

    pub(crate) fn write_ram(&mut self, addr: u16, value: u8) {
        if let Some(offset) = self.ram_offset(addr) {
            if let Some(byte) = self.ram.get_mut(offset) {
                *byte = value;
            }
        }
    }
}
