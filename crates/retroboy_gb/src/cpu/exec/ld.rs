use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// LD r,r' (0x40..=0x7F except 0x76).
    pub(crate) fn exec_ld_r_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.read_reg8(bus, opcode & 0x07);
        self.write_reg8(bus, (opcode >> 3) & 0x07, value);
        0
    }

    /// LD r,d8 and LD (HL),d8.
    pub(crate) fn exec_ld_r_d8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.fetch8(bus);
        self.write_reg8(bus, (opcode >> 3) & 0x07, value);
        0
    }

    /// LD BC/DE/HL/SP,d16.
    pub(crate) fn exec_ld_rr_d16(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.fetch16(bus);
        self.regs.set_rp(opcode >> 4, value);
        0
    }

    /// Address for the indirect A transfers 0x02/0x0A family, applying the
    /// HL+ / HL- post-adjustment for the last two rows.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match opcode >> 4 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    /// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A.
    pub(crate) fn exec_ld_indirect_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = self.indirect_addr(opcode);
        bus.write8(addr, self.regs.a);
        0
    }

    /// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-).
    pub(crate) fn exec_ld_a_indirect(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = self.indirect_addr(opcode);
        self.regs.a = bus.read8(addr);
        0
    }

    pub(crate) fn exec_ld_a16_sp(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        bus.write16(addr, self.regs.sp);
        0
    }

    /// LDH (a8),A.
    pub(crate) fn exec_ldh_a8_a(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        bus.write8(addr, self.regs.a);
        0
    }

    /// LDH A,(a8).
    pub(crate) fn exec_ldh_a_a8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        self.regs.a = bus.read8(addr);
        0
    }

    /// LD (C),A.
    pub(crate) fn exec_ldh_c_a(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        bus.write8(0xFF00 | u16::from(self.regs.c), self.regs.a);
        0
    }

    /// LD A,(C).
    pub(crate) fn exec_ldh_a_c(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.a = bus.read8(0xFF00 | u16::from(self.regs.c));
        0
    }

    pub(crate) fn exec_ld_a16_a(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        bus.write8(addr, self.regs.a);
        0
    }

    pub(crate) fn exec_ld_a_a16(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        self.regs.a = bus.read8(addr);
        0
    }

    pub(crate) fn exec_ld_hl_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let imm = self.fetch8(bus);
        let value = self.alu_add_sp_offset(imm);
        self.regs.set_hl(value);
        0
    }

    pub(crate) fn exec_ld_sp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.sp = self.regs.hl();
        0
    }
}
