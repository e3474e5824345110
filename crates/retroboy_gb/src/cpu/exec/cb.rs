use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// RLC/RRC/RL/RR/SLA/SRA/SWAP/SRL r (0xCB 0x00..=0x3F).
    pub(crate) fn exec_cb_shift(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let index = opcode & 0x07;
        let value = self.read_reg8(bus, index);
        let result = self.alu_shift(opcode >> 3, value);
        self.write_reg8(bus, index, result);
        0
    }

    /// BIT b,r: Z reflects the complement of the bit; C is preserved.
    pub(crate) fn exec_cb_bit(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let bit = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, opcode & 0x07);
        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
        0
    }

    pub(crate) fn exec_cb_res(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let bit = (opcode >> 3) & 0x07;
        let index = opcode & 0x07;
        let value = self.read_reg8(bus, index);
        self.write_reg8(bus, index, value & !(1 << bit));
        0
    }

    pub(crate) fn exec_cb_set(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let bit = (opcode >> 3) & 0x07;
        let index = opcode & 0x07;
        let value = self.read_reg8(bus, index);
        self.write_reg8(bus, index, value | (1 << bit));
        0
    }
}
