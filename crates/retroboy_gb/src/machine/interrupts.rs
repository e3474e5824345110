use bitflags::bitflags;

bitflags! {
    /// Interrupt sources as laid out in IF (0xFF0F) and IE (0xFFFF).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

/// Shared request/enable state that peripherals raise into and the CPU
/// polls through the bus. Nothing here holds a reference back to the CPU.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct InterruptController {
    requested: InterruptFlags,
    /// IE is a plain byte: all eight bits are stored and read back.
    enabled: u8,
}

impl InterruptController {
    #[inline]
    pub(crate) fn request(&mut self, flags: InterruptFlags) {
        self.requested |= flags;
    }

    #[inline]
    pub(crate) fn requested(&self) -> InterruptFlags {
        self.requested
    }

    /// IF as seen by software: the unused top three bits read as 1.
    #[inline]
    pub(crate) fn read_if(&self) -> u8 {
        0xE0 | self.requested.bits()
    }

    #[inline]
    pub(crate) fn write_if(&mut self, value: u8) {
        self.requested = InterruptFlags::from_bits_truncate(value);
    }

    #[inline]
    pub(crate) fn read_ie(&self) -> u8 {
        self.enabled
    }

    #[inline]
    pub(crate) fn write_ie(&mut self, value: u8) {
        self.enabled = value;
    }
}
