use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r (0x80..=0xBF).
    pub(crate) fn exec_alu_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.read_reg8(bus, opcode & 0x07);
        self.alu_op(opcode >> 3, value);
        0
    }

    /// The same eight operations against an immediate byte.
    pub(crate) fn exec_alu_d8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.fetch8(bus);
        self.alu_op(opcode >> 3, value);
        0
    }

    pub(crate) fn exec_inc8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let index = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, index);
        let result = self.alu_inc8(value);
        self.write_reg8(bus, index, result);
        0
    }

    pub(crate) fn exec_dec8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let index = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, index);
        let result = self.alu_dec8(value);
        self.write_reg8(bus, index, result);
        0
    }

    /// INC rr. No flags.
    pub(crate) fn exec_inc16(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let index = opcode >> 4;
        let value = self.regs.rp(index).wrapping_add(1);
        self.regs.set_rp(index, value);
        0
    }

    /// DEC rr. No flags.
    pub(crate) fn exec_dec16(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let index = opcode >> 4;
        let value = self.regs.rp(index).wrapping_sub(1);
        self.regs.set_rp(index, value);
        0
    }

    pub(crate) fn exec_add_hl_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.regs.rp(opcode >> 4);
        self.alu_add16_hl(value);
        0
    }

    pub(crate) fn exec_add_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add_sp_offset(imm);
        0
    }

    /// RLCA, RRCA, RLA, RRA. Unlike the 0xCB forms these always clear Z.
    pub(crate) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        self.regs.a = self.alu_shift(opcode >> 3, self.regs.a);
        self.set_flag(Flag::Z, false);
        0
    }

    pub(crate) fn exec_daa(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.alu_daa();
        0
    }

    pub(crate) fn exec_cpl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        0
    }

    pub(crate) fn exec_scf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        0
    }

    pub(crate) fn exec_ccf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
        0
    }
}
