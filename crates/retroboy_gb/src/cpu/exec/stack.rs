use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// PUSH BC/DE/HL/AF.
    pub(crate) fn exec_push(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.regs.rp2((opcode >> 4) & 0x03);
        self.push_u16(bus, value);
        0
    }

    /// POP BC/DE/HL/AF. Popping into AF drops the low nibble of F.
    pub(crate) fn exec_pop(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.pop_u16(bus);
        self.regs.set_rp2((opcode >> 4) & 0x03, value);
        0
    }
}
