use super::interrupts::{InterruptController, InterruptFlags};

/// Cycles between DIV increments.
const DIV_PERIOD: u32 = 16;

/// Divider and programmable interval timer (0xFF04..=0xFF07).
///
/// Time is measured in machine cycles. DIV ticks every 16; TIMA ticks at the
/// rate chosen by TAC bits 0..=1 while TAC bit 2 is set.
#[derive(Clone, Debug, Default)]
pub(crate) struct Timer {
    div: u8,
    tima: u8,
    tma: u8,
    tac: u8,
    div_clock: u32,
    tima_clock: u32,
}

impl Timer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    fn enabled(&self) -> bool {
        self.tac & 0x04 != 0
    }

    /// Machine cycles per TIMA increment for the current TAC selector.
    #[inline]
    fn threshold(&self) -> u32 {
        match self.tac & 0x03 {
            0 => 64,
            1 => 1,
            2 => 4,
            _ => 16,
        }
    }

    /// Advance by `cycles` machine cycles.
    pub(crate) fn step(&mut self, cycles: u32, interrupts: &mut InterruptController) {
        self.div_clock += cycles;
        while self.div_clock >= DIV_PERIOD {
            self.div_clock -= DIV_PERIOD;
            self.div = self.div.wrapping_add(1);
        }

        if !self.enabled() {
            return;
        }

        self.tima_clock += cycles;
        let threshold = self.threshold();
        while self.tima_clock >= threshold {
            self.tima_clock -= threshold;
            self.tick_tima(interrupts);
        }
    }

    /// TIMA is compared against 0xFF before it increments: the tick that
    /// finds it at 0xFF reloads TMA and raises the timer interrupt.
    fn tick_tima(&mut self, interrupts: &mut InterruptController) {
        if self.tima == 0xFF {
            self.tima = self.tma;
            interrupts.request(InterruptFlags::TIMER);
        } else {
            self.tima += 1;
        }
    }

    pub(crate) fn read(&self, addr: u16) -> u8 {
        match addr {
            0xFF04 => self.div,
            0xFF05 => self.tima,
            0xFF06 => self.tma,
            0xFF07 => 0xF8 | self.tac,
            _ => 0xFF,
        }
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        match addr {
            // Any write clears the divider and its sub-clock.
            0xFF04 => {
                self.div = 0;
                self.div_clock = 0;
            }
            0xFF05 => self.tima = value,
            0xFF06 => self.tma = value,
            0xFF07 => {
                let was_enabled = self.enabled();
                self.tac = value & 0x07;
                if !was_enabled && self.enabled() {
                    self.tima_clock = 0;
                }
            }
            _ => {}
        }
    }
}
