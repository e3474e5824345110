use crate::cpu::{Bus, Cpu};

/// Extra cost of a taken JR cc / JP cc.
const JUMP_TAKEN: u32 = 4;
/// Extra cost of a taken CALL cc / RET cc.
const CALL_TAKEN: u32 = 12;

impl Cpu {
    fn relative_target(&mut self, bus: &mut dyn Bus) -> u16 {
        let offset = self.fetch8(bus) as i8;
        self.regs.pc.wrapping_add_signed(i16::from(offset))
    }

    pub(crate) fn exec_jr(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.pc = self.relative_target(bus);
        0
    }

    pub(crate) fn exec_jr_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let target = self.relative_target(bus);
        if self.condition(opcode) {
            self.regs.pc = target;
            JUMP_TAKEN
        } else {
            0
        }
    }

    pub(crate) fn exec_jp(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.pc = self.fetch16(bus);
        0
    }

    pub(crate) fn exec_jp_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        if self.condition(opcode) {
            self.regs.pc = addr;
            JUMP_TAKEN
        } else {
            0
        }
    }

    pub(crate) fn exec_jp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.pc = self.regs.hl();
        0
    }

    pub(crate) fn exec_call(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = addr;
        0
    }

    pub(crate) fn exec_call_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        if !self.condition(opcode) {
            return 0;
        }
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = addr;
        CALL_TAKEN
    }

    pub(crate) fn exec_ret(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.pc = self.pop_u16(bus);
        0
    }

    pub(crate) fn exec_ret_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        if !self.condition(opcode) {
            return 0;
        }
        self.regs.pc = self.pop_u16(bus);
        CALL_TAKEN
    }

    /// RETI enables interrupts immediately, without the EI delay.
    pub(crate) fn exec_reti(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        0
    }

    /// RST n: call the fixed vector encoded in bits 3..=5.
    pub(crate) fn exec_rst(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = u16::from(opcode & 0x38);
        0
    }
}
