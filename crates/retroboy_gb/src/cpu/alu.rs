use super::{Cpu, Flag};

impl Cpu {
    /// Apply one of the eight accumulator operations selected by bits 3..=5
    /// of an ALU opcode: ADD, ADC, SUB, SBC, AND, XOR, OR, CP.
    pub(super) fn alu_op(&mut self, op: u8, value: u8) {
        match op & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// 8-bit ADD/ADC on A.
    fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.get_flag(Flag::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
        let result = full as u8;

        self.regs.a = result;
        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, half > 0x0F);
        self.set_flag(Flag::C, full > 0xFF);
    }

    /// 8-bit SUB/SBC on A.
    fn alu_sub(&mut self, value: u8, use_carry: bool) {
        self.regs.a = self.alu_compare(value, use_carry);
    }

    fn alu_cp(&mut self, value: u8) {
        self.alu_compare(value, false);
    }

    /// Compute `A - value - carry`, set flags and return the difference
    /// without storing it.
    fn alu_compare(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = i16::from(use_carry && self.get_flag(Flag::C));

        let half = i16::from(a & 0x0F) - i16::from(value & 0x0F) - carry_in;
        let full = i16::from(a) - i16::from(value) - carry_in;
        let result = full as u8;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, half < 0);
        self.set_flag(Flag::C, full < 0);
        result
    }

    fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        let zero = self.regs.a == 0;
        self.clear_flags();
        self.set_flag(Flag::Z, zero);
        self.set_flag(Flag::H, true);
    }

    fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        let zero = self.regs.a == 0;
        self.clear_flags();
        self.set_flag(Flag::Z, zero);
    }

    fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        let zero = self.regs.a == 0;
        self.clear_flags();
        self.set_flag(Flag::Z, zero);
    }

    /// Decimal adjust after a BCD addition or subtraction.
    ///
    /// N is preserved; Z, H and C are recomputed from the correction applied.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust = if self.get_flag(Flag::C) { 0x60 } else { 0x00 };
        if self.get_flag(Flag::H) {
            adjust |= 0x06;
        }

        if self.get_flag(Flag::N) {
            a = a.wrapping_sub(adjust);
        } else {
            if a & 0x0F > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        }

        self.set_flag(Flag::C, adjust >= 0x60);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::Z, a == 0);
        self.regs.a = a;
    }

    /// INC r: Z, N, H updated; C untouched.
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, value & 0x0F == 0x0F);
        result
    }

    /// DEC r: Z, N, H updated; C untouched.
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, value & 0x0F == 0);
        result
    }

    /// ADD HL,rr. Z is left alone; H is the carry out of bit 11.
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, u32::from(hl) + u32::from(value) > 0xFFFF);
        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// SP plus a signed displacement, shared by ADD SP,r8 and LD HL,SP+r8.
    ///
    /// H and C come from the unsigned low-byte addition; Z and N are cleared.
    pub(super) fn alu_add_sp_offset(&mut self, imm8: u8) -> u16 {
        let sp = self.regs.sp;
        let offset = imm8 as i8 as i16 as u16;
        self.clear_flags();
        self.set_flag(Flag::H, (sp & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(Flag::C, (sp & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        sp.wrapping_add(offset)
    }

    /// Rotate/shift selected by bits 3..=5 of a 0xCB opcode:
    /// RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL. Sets all four flags.
    pub(super) fn alu_shift(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C);
        let (result, carry) = match op & 0x07 {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            3 => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry);
        result
    }
}
