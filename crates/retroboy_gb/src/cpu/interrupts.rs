use super::{Bus, Cpu, Timing};

const IF_ADDR: u16 = 0xFF0F;
const IE_ADDR: u16 = 0xFFFF;

/// Serviceable sources in priority order, with their bit and vector.
/// Serial (bit 3) may be requested but is never dispatched.
const SERVICED: [(u8, u16); 4] = [(0, 0x0040), (1, 0x0048), (2, 0x0050), (4, 0x0060)];

/// Cost of an interrupt dispatch.
const DISPATCH_CYCLES: u32 = 16;

impl Cpu {
    /// Check IE & IF and, if warranted, dispatch one interrupt.
    ///
    /// Returns the timing of the dispatch when a vector was taken. A pending
    /// enabled request always ends HALT, even with IME clear; in that case
    /// execution simply resumes after the HALT.
    pub fn service_interrupts(&mut self, bus: &mut dyn Bus) -> Option<Timing> {
        let pending = bus.read8(IE_ADDR) & bus.read8(IF_ADDR) & 0x1F;
        if pending == 0 {
            return None;
        }

        if !self.ime {
            if self.halted {
                log::trace!("HALT released with IME clear (pending={pending:02X})");
                self.halted = false;
            }
            return None;
        }

        let Some((bit, vector)) = SERVICED
            .iter()
            .copied()
            .find(|&(bit, _)| pending & (1 << bit) != 0)
        else {
            // Only a serial request is pending: wake, but take no vector.
            self.halted = false;
            return None;
        };

        let flags = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, flags & !(1 << bit));
        self.ime = false;
        self.halted = false;

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = vector;
        log::trace!("interrupt bit {bit} -> {vector:04X} (from {pc:04X})");

        self.timing = Timing::from_t(DISPATCH_CYCLES);
        Some(self.timing)
    }
}
