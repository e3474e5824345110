use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(crate) fn exec_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        0
    }

    /// HALT: stop fetching until an enabled interrupt becomes pending.
    pub(crate) fn exec_halt(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.halted = true;
        0
    }

    /// STOP: consumes its padding byte and parks the CPU until resumed.
    pub(crate) fn exec_stop(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let _ = self.fetch8(bus);
        self.stopped = true;
        log::debug!("STOP at {:04X}", self.regs.pc.wrapping_sub(2));
        0
    }

    pub(crate) fn exec_di(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        0
    }

    /// EI takes effect after the instruction that follows it.
    pub(crate) fn exec_ei(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ime_enable_pending = true;
        0
    }
}
