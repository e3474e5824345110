//! Opcode tables for the primary and 0xCB-prefixed instruction sets.
//!
//! `cycles` is the full cost in clock cycles of the instruction; for
//! conditional branches it is the not-taken cost and the handler returns the
//! extra cycles of the taken path. `length` counts the opcode byte(s) and any
//! immediate operand. Operand placeholders in mnemonics (`d8`, `d16`, `a8`,
//! `a16`, `r8`) are filled in by the disassembler.

use super::{Bus, Cpu};

/// Instruction body. Receives the opcode byte it was dispatched for and
/// returns the extra cycles beyond the table's base cost.
pub type Handler = fn(&mut Cpu, &mut dyn Bus, u8) -> u32;

#[derive(Clone, Copy)]
pub enum Exec {
    Op(Handler),
    /// 0xCB: the next byte indexes `EXTENDED`.
    Prefix,
    /// Undefined opcode; executing it is fatal.
    Illegal,
}

impl std::fmt::Debug for Exec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exec::Op(_) => f.write_str("Op"),
            Exec::Prefix => f.write_str("Prefix"),
            Exec::Illegal => f.write_str("Illegal"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u32,
    pub exec: Exec,
}

impl Instruction {
    #[inline]
    pub const fn is_defined(&self) -> bool {
        !matches!(self.exec, Exec::Illegal)
    }
}

const fn op(mnemonic: &'static str, length: u8, cycles: u32, handler: Handler) -> Instruction {
    Instruction {
        mnemonic,
        length,
        cycles,
        exec: Exec::Op(handler),
    }
}

const PREFIX: Instruction = Instruction {
    mnemonic: "PREFIX CB",
    length: 1,
    cycles: 0,
    exec: Exec::Prefix,
};

const ILLEGAL: Instruction = Instruction {
    mnemonic: "ILLEGAL",
    length: 1,
    cycles: 4,
    exec: Exec::Illegal,
};

#[rustfmt::skip]
pub static PRIMARY: [Instruction; 256] = [
    /* 00 */ op("NOP", 1, 4, Cpu::exec_nop),
    /* 01 */ op("LD BC,d16", 3, 12, Cpu::exec_ld_rr_d16),
    /* 02 */ op("LD (BC),A", 1, 8, Cpu::exec_ld_indirect_a),
    /* 03 */ op("INC BC", 1, 8, Cpu::exec_inc16),
    /* 04 */ op("INC B", 1, 4, Cpu::exec_inc8),
    /* 05 */ op("DEC B", 1, 4, Cpu::exec_dec8),
    /* 06 */ op("LD B,d8", 2, 8, Cpu::exec_ld_r_d8),
    /* 07 */ op("RLCA", 1, 4, Cpu::exec_rotate_a),
    /* 08 */ op("LD (a16),SP", 3, 20, Cpu::exec_ld_a16_sp),
    /* 09 */ op("ADD HL,BC", 1, 8, Cpu::exec_add_hl_rr),
    /* 0A */ op("LD A,(BC)", 1, 8, Cpu::exec_ld_a_indirect),
    /* 0B */ op("DEC BC", 1, 8, Cpu::exec_dec16),
    /* 0C */ op("INC C", 1, 4, Cpu::exec_inc8),
    /* 0D */ op("DEC C", 1, 4, Cpu::exec_dec8),
    /* 0E */ op("LD C,d8", 2, 8, Cpu::exec_ld_r_d8),
    /* 0F */ op("RRCA", 1, 4, Cpu::exec_rotate_a),
    /* 10 */ op("STOP", 2, 4, Cpu::exec_stop),
    /* 11 */ op("LD DE,d16", 3, 12, Cpu::exec_ld_rr_d16),
    /* 12 */ op("LD (DE),A", 1, 8, Cpu::exec_ld_indirect_a),
    /* 13 */ op("INC DE", 1, 8, Cpu::exec_inc16),
    /* 14 */ op("INC D", 1, 4, Cpu::exec_inc8),
    /* 15 */ op("DEC D", 1, 4, Cpu::exec_dec8),
    /* 16 */ op("LD D,d8", 2, 8, Cpu::exec_ld_r_d8),
    /* 17 */ op("RLA", 1, 4, Cpu::exec_rotate_a),
    /* 18 */ op("JR r8", 2, 12, Cpu::exec_jr),
    /* 19 */ op("ADD HL,DE", 1, 8, Cpu::exec_add_hl_rr),
    /* 1A */ op("LD A,(DE)", 1, 8, Cpu::exec_ld_a_indirect),
    /* 1B */ op("DEC DE", 1, 8, Cpu::exec_dec16),
    /* 1C */ op("INC E", 1, 4, Cpu::exec_inc8),
    /* 1D */ op("DEC E", 1, 4, Cpu::exec_dec8),
    /* 1E */ op("LD E,d8", 2, 8, Cpu::exec_ld_r_d8),
    /* 1F */ op("RRA", 1, 4, Cpu::exec_rotate_a),
    /* 20 */ op("JR NZ,r8", 2, 8, Cpu::exec_jr_cc),
    /* 21 */ op("LD HL,d16", 3, 12, Cpu::exec_ld_rr_d16),
    /* 22 */ op("LD (HL+),A", 1, 8, Cpu::exec_ld_indirect_a),
    /* 23 */ op("INC HL", 1, 8, Cpu::exec_inc16),
    /* 24 */ op("INC H", 1, 4, Cpu::exec_inc8),
    /* 25 */ op("DEC H", 1, 4, Cpu::exec_dec8),
    /* 26 */ op("LD H,d8", 2, 8, Cpu::exec_ld_r_d8),
    /* 27 */ op("DAA", 1, 4, Cpu::exec_daa),
    /* 28 */ op("JR Z,r8", 2, 8, Cpu::exec_jr_cc),
    /* 29 */ op("ADD HL,HL", 1, 8, Cpu::exec_add_hl_rr),
    /* 2A */ op("LD A,(HL+)", 1, 8, Cpu::exec_ld_a_indirect),
    /* 2B */ op("DEC HL", 1, 8, Cpu::exec_dec16),
    /* 2C */ op("INC L", 1, 4, Cpu::exec_inc8),
    /* 2D */ op("DEC L", 1, 4, Cpu::exec_dec8),
    /* 2E */ op("LD L,d8", 2, 8, Cpu::exec_ld_r_d8),
    /* 2F */ op("CPL", 1, 4, Cpu::exec_cpl),
    /* 30 */ op("JR NC,r8", 2, 8, Cpu::exec_jr_cc),
    /* 31 */ op("LD SP,d16", 3, 12, Cpu::exec_ld_rr_d16),
    /* 32 */ op("LD (HL-),A", 1, 8, Cpu::exec_ld_indirect_a),
    /* 33 */ op("INC SP", 1, 8, Cpu::exec_inc16),
    /* 34 */ op("INC (HL)", 1, 12, Cpu::exec_inc8),
    /* 35 */ op("DEC (HL)", 1, 12, Cpu::exec_dec8),
    /* 36 */ op("LD (HL),d8", 2, 12, Cpu::exec_ld_r_d8),
    /* 37 */ op("SCF", 1, 4, Cpu::exec_scf),
    /* 38 */ op("JR C,r8", 2, 8, Cpu::exec_jr_cc),
    /* 39 */ op("ADD HL,SP", 1, 8, Cpu::exec_add_hl_rr),
    /* 3A */ op("LD A,(HL-)", 1, 8, Cpu::exec_ld_a_indirect),
    /* 3B */ op("DEC SP", 1, 8, Cpu::exec_dec16),
    /* 3C */ op("INC A", 1, 4, Cpu::exec_inc8),
    /* 3D */ op("DEC A", 1, 4, Cpu::exec_dec8),
    /* 3E */ op("LD A,d8", 2, 8, Cpu::exec_ld_r_d8),
    /* 3F */ op("CCF", 1, 4, Cpu::exec_ccf),
    /* 40 */ op("LD B,B", 1, 4, Cpu::exec_ld_r_r),
    /* 41 */ op("LD B,C", 1, 4, Cpu::exec_ld_r_r),
    /* 42 */ op("LD B,D", 1, 4, Cpu::exec_ld_r_r),
    /* 43 */ op("LD B,E", 1, 4, Cpu::exec_ld_r_r),
    /* 44 */ op("LD B,H", 1, 4, Cpu::exec_ld_r_r),
    /* 45 */ op("LD B,L", 1, 4, Cpu::exec_ld_r_r),
    /* 46 */ op("LD B,(HL)", 1, 8, Cpu::exec_ld_r_r),
    /* 47 */ op("LD B,A", 1, 4, Cpu::exec_ld_r_r),
    /* 48 */ op("LD C,B", 1, 4, Cpu::exec_ld_r_r),
    /* 49 */ op("LD C,C", 1, 4, Cpu::exec_ld_r_r),
    /* 4A */ op("LD C,D", 1, 4, Cpu::exec_ld_r_r),
    /* 4B */ op("LD C,E", 1, 4, Cpu::exec_ld_r_r),
    /* 4C */ op("LD C,H", 1, 4, Cpu::exec_ld_r_r),
    /* 4D */ op("LD C,L", 1, 4, Cpu::exec_ld_r_r),
    /* 4E */ op("LD C,(HL)", 1, 8, Cpu::exec_ld_r_r),
    /* 4F */ op("LD C,A", 1, 4, Cpu::exec_ld_r_r),
    /* 50 */ op("LD D,B", 1, 4, Cpu::exec_ld_r_r),
    /* 51 */ op("LD D,C", 1, 4, Cpu::exec_ld_r_r),
    /* 52 */ op("LD D,D", 1, 4, Cpu::exec_ld_r_r),
    /* 53 */ op("LD D,E", 1, 4, Cpu::exec_ld_r_r),
    /* 54 */ op("LD D,H", 1, 4, Cpu::exec_ld_r_r),
    /* 55 */ op("LD D,L", 1, 4, Cpu::exec_ld_r_r),
    /* 56 */ op("LD D,(HL)", 1, 8, Cpu::exec_ld_r_r),
    /* 57 */ op("LD D,A", 1, 4, Cpu::exec_ld_r_r),
    /* 58 */ op("LD E,B", 1, 4, Cpu::exec_ld_r_r),
    /* 59 */ op("LD E,C", 1, 4, Cpu::exec_ld_r_r),
    /* 5A */ op("LD E,D", 1, 4, Cpu::exec_ld_r_r),
    /* 5B */ op("LD E,E", 1, 4, Cpu::exec_ld_r_r),
    /* 5C */ op("LD E,H", 1, 4, Cpu::exec_ld_r_r),
    /* 5D */ op("LD E,L", 1, 4, Cpu::exec_ld_r_r),
    /* 5E */ op("LD E,(HL)", 1, 8, Cpu::exec_ld_r_r),
    /* 5F */ op("LD E,A", 1, 4, Cpu::exec_ld_r_r),
    /* 60 */ op("LD H,B", 1, 4, Cpu::exec_ld_r_r),
    /* 61 */ op("LD H,C", 1, 4, Cpu::exec_ld_r_r),
    /* 62 */ op("LD H,D", 1, 4, Cpu::exec_ld_r_r),
    /* 63 */ op("LD H,E", 1, 4, Cpu::exec_ld_r_r),
    /* 64 */ op("LD H,H", 1, 4, Cpu::exec_ld_r_r),
    /* 65 */ op("LD H,L", 1, 4, Cpu::exec_ld_r_r),
    /* 66 */ op("LD H,(HL)", 1, 8, Cpu::exec_ld_r_r),
    /* 67 */ op("LD H,A", 1, 4, Cpu::exec_ld_r_r),
    /* 68 */ op("LD L,B", 1, 4, Cpu::exec_ld_r_r),
    /* 69 */ op("LD L,C", 1, 4, Cpu::exec_ld_r_r),
    /* 6A */ op("LD L,D", 1, 4, Cpu::exec_ld_r_r),
    /* 6B */ op("LD L,E", 1, 4, Cpu::exec_ld_r_r),
    /* 6C */ op("LD L,H", 1, 4, Cpu::exec_ld_r_r),
    /* 6D */ op("LD L,L", 1, 4, Cpu::exec_ld_r_r),
    /* 6E */ op("LD L,(HL)", 1, 8, Cpu::exec_ld_r_r),
    /* 6F */ op("LD L,A", 1, 4, Cpu::exec_ld_r_r),
    /* 70 */ op("LD (HL),B", 1, 8, Cpu::exec_ld_r_r),
    /* 71 */ op("LD (HL),C", 1, 8, Cpu::exec_ld_r_r),
    /* 72 */ op("LD (HL),D", 1, 8, Cpu::exec_ld_r_r),
    /* 73 */ op("LD (HL),E", 1, 8, Cpu::exec_ld_r_r),
    /* 74 */ op("LD (HL),H", 1, 8, Cpu::exec_ld_r_r),
    /* 75 */ op("LD (HL),L", 1, 8, Cpu::exec_ld_r_r),
    /* 76 */ op("HALT", 1, 4, Cpu::exec_halt),
    /* 77 */ op("LD (HL),A", 1, 8, Cpu::exec_ld_r_r),
    /* 78 */ op("LD A,B", 1, 4, Cpu::exec_ld_r_r),
    /* 79 */ op("LD A,C", 1, 4, Cpu::exec_ld_r_r),
    /* 7A */ op("LD A,D", 1, 4, Cpu::exec_ld_r_r),
    /* 7B */ op("LD A,E", 1, 4, Cpu::exec_ld_r_r),
    /* 7C */ op("LD A,H", 1, 4, Cpu::exec_ld_r_r),
    /* 7D */ op("LD A,L", 1, 4, Cpu::exec_ld_r_r),
    /* 7E */ op("LD A,(HL)", 1, 8, Cpu::exec_ld_r_r),
    /* 7F */ op("LD A,A", 1, 4, Cpu::exec_ld_r_r),
    /* 80 */ op("ADD A,B", 1, 4, Cpu::exec_alu_r),
    /* 81 */ op("ADD A,C", 1, 4, Cpu::exec_alu_r),
    /* 82 */ op("ADD A,D", 1, 4, Cpu::exec_alu_r),
    /* 83 */ op("ADD A,E", 1, 4, Cpu::exec_alu_r),
    /* 84 */ op("ADD A,H", 1, 4, Cpu::exec_alu_r),
    /* 85 */ op("ADD A,L", 1, 4, Cpu::exec_alu_r),
    /* 86 */ op("ADD A,(HL)", 1, 8, Cpu::exec_alu_r),
    /* 87 */ op("ADD A,A", 1, 4, Cpu::exec_alu_r),
    /* 88 */ op("ADC A,B", 1, 4, Cpu::exec_alu_r),
    /* 89 */ op("ADC A,C", 1, 4, Cpu::exec_alu_r),
    /* 8A */ op("ADC A,D", 1, 4, Cpu::exec_alu_r),
    /* 8B */ op("ADC A,E", 1, 4, Cpu::exec_alu_r),
    /* 8C */ op("ADC A,H", 1, 4, Cpu::exec_alu_r),
    /* 8D */ op("ADC A,L", 1, 4, Cpu::exec_alu_r),
    /* 8E */ op("ADC A,(HL)", 1, 8, Cpu::exec_alu_r),
    /* 8F */ op("ADC A,A", 1, 4, Cpu::exec_alu_r),
    /* 90 */ op("SUB B", 1, 4, Cpu::exec_alu_r),
    /* 91 */ op("SUB C", 1, 4, Cpu::exec_alu_r),
    /* 92 */ op("SUB D", 1, 4, Cpu::exec_alu_r),
    /* 93 */ op("SUB E", 1, 4, Cpu::exec_alu_r),
    /* 94 */ op("SUB H", 1, 4, Cpu::exec_alu_r),
    /* 95 */ op("SUB L", 1, 4, Cpu::exec_alu_r),
    /* 96 */ op("SUB (HL)", 1, 8, Cpu::exec_alu_r),
    /* 97 */ op("SUB A", 1, 4, Cpu::exec_alu_r),
    /* 98 */ op("SBC A,B", 1, 4, Cpu::exec_alu_r),
    /* 99 */ op("SBC A,C", 1, 4, Cpu::exec_alu_r),
    /* 9A */ op("SBC A,D", 1, 4, Cpu::exec_alu_r),
    /* 9B */ op("SBC A,E", 1, 4, Cpu::exec_alu_r),
    /* 9C */ op("SBC A,H", 1, 4, Cpu::exec_alu_r),
    /* 9D */ op("SBC A,L", 1, 4, Cpu::exec_alu_r),
    /* 9E */ op("SBC A,(HL)", 1, 8, Cpu::exec_alu_r),
    /* 9F */ op("SBC A,A", 1, 4, Cpu::exec_alu_r),
    /* A0 */ op("AND B", 1, 4, Cpu::exec_alu_r),
    /* A1 */ op("AND C", 1, 4, Cpu::exec_alu_r),
    /* A2 */ op("AND D", 1, 4, Cpu::exec_alu_r),
    /* A3 */ op("AND E", 1, 4, Cpu::exec_alu_r),
    /* A4 */ op("AND H", 1, 4, Cpu::exec_alu_r),
    /* A5 */ op("AND L", 1, 4, Cpu::exec_alu_r),
    /* A6 */ op("AND (HL)", 1, 8, Cpu::exec_alu_r),
    /* A7 */ op("AND A", 1, 4, Cpu::exec_alu_r),
    /* A8 */ op("XOR B", 1, 4, Cpu::exec_alu_r),
    /* A9 */ op("XOR C", 1, 4, Cpu::exec_alu_r),
    /* AA */ op("XOR D", 1, 4, Cpu::exec_alu_r),
    /* AB */ op("XOR E", 1, 4, Cpu::exec_alu_r),
    /* AC */ op("XOR H", 1, 4, Cpu::exec_alu_r),
    /* AD */ op("XOR L", 1, 4, Cpu::exec_alu_r),
    /* AE */ op("XOR (HL)", 1, 8, Cpu::exec_alu_r),
    /* AF */ op("XOR A", 1, 4, Cpu::exec_alu_r),
    /* B0 */ op("OR B", 1, 4, Cpu::exec_alu_r),
    /* B1 */ op("OR C", 1, 4, Cpu::exec_alu_r),
    /* B2 */ op("OR D", 1, 4, Cpu::exec_alu_r),
    /* B3 */ op("OR E", 1, 4, Cpu::exec_alu_r),
    /* B4 */ op("OR H", 1, 4, Cpu::exec_alu_r),
    /* B5 */ op("OR L", 1, 4, Cpu::exec_alu_r),
    /* B6 */ op("OR (HL)", 1, 8, Cpu::exec_alu_r),
    /* B7 */ op("OR A", 1, 4, Cpu::exec_alu_r),
    /* B8 */ op("CP B", 1, 4, Cpu::exec_alu_r),
    /* B9 */ op("CP C", 1, 4, Cpu::exec_alu_r),
    /* BA */ op("CP D", 1, 4, Cpu::exec_alu_r),
    /* BB */ op("CP E", 1, 4, Cpu::exec_alu_r),
    /* BC */ op("CP H", 1, 4, Cpu::exec_alu_r),
    /* BD */ op("CP L", 1, 4, Cpu::exec_alu_r),
    /* BE */ op("CP (HL)", 1, 8, Cpu::exec_alu_r),
    /* BF */ op("CP A", 1, 4, Cpu::exec_alu_r),
    /* C0 */ op("RET NZ", 1, 8, Cpu::exec_ret_cc),
    /* C1 */ op("POP BC", 1, 12, Cpu::exec_pop),
    /* C2 */ op("JP NZ,a16", 3, 12, Cpu::exec_jp_cc),
    /* C3 */ op("JP a16", 3, 16, Cpu::exec_jp),
    /* C4 */ op("CALL NZ,a16", 3, 12, Cpu::exec_call_cc),
    /* C5 */ op("PUSH BC", 1, 16, Cpu::exec_push),
    /* C6 */ op("ADD A,d8", 2, 8, Cpu::exec_alu_d8),
    /* C7 */ op("RST 00H", 1, 16, Cpu::exec_rst),
    /* C8 */ op("RET Z", 1, 8, Cpu::exec_ret_cc),
    /* C9 */ op("RET", 1, 16, Cpu::exec_ret),
    /* CA */ op("JP Z,a16", 3, 12, Cpu::exec_jp_cc),
    /* CB */ PREFIX,
    /* CC */ op("CALL Z,a16", 3, 12, Cpu::exec_call_cc),
    /* CD */ op("CALL a16", 3, 24, Cpu::exec_call),
    /* CE */ op("ADC A,d8", 2, 8, Cpu::exec_alu_d8),
    /* CF */ op("RST 08H", 1, 16, Cpu::exec_rst),
    /* D0 */ op("RET NC", 1, 8, Cpu::exec_ret_cc),
    /* D1 */ op("POP DE", 1, 12, Cpu::exec_pop),
    /* D2 */ op("JP NC,a16", 3, 12, Cpu::exec_jp_cc),
    /* D3 */ ILLEGAL,
    /* D4 */ op("CALL NC,a16", 3, 12, Cpu::exec_call_cc),
    /* D5 */ op("PUSH DE", 1, 16, Cpu::exec_push),
    /* D6 */ op("SUB d8", 2, 8, Cpu::exec_alu_d8),
    /* D7 */ op("RST 10H", 1, 16, Cpu::exec_rst),
    /* D8 */ op("RET C", 1, 8, Cpu::exec_ret_cc),
    /* D9 */ op("RETI", 1, 16, Cpu::exec_reti),
    /* DA */ op("JP C,a16", 3, 12, Cpu::exec_jp_cc),
    /* DB */ ILLEGAL,
    /* DC */ op("CALL C,a16", 3, 12, Cpu::exec_call_cc),
    /* DD */ ILLEGAL,
    /* DE */ op("SBC A,d8", 2, 8, Cpu::exec_alu_d8),
    /* DF */ op("RST 18H", 1, 16, Cpu::exec_rst),
    /* E0 */ op("LDH (a8),A", 2, 12, Cpu::exec_ldh_a8_a),
    /* E1 */ op("POP HL", 1, 12, Cpu::exec_pop),
    /* E2 */ op("LD (C),A", 1, 8, Cpu::exec_ldh_c_a),
    /* E3 */ ILLEGAL,
    /* E4 */ ILLEGAL,
    /* E5 */ op("PUSH HL", 1, 16, Cpu::exec_push),
    /* E6 */ op("AND d8", 2, 8, Cpu::exec_alu_d8),
    /* E7 */ op("RST 20H", 1, 16, Cpu::exec_rst),
    /* E8 */ op("ADD SP,r8", 2, 16, Cpu::exec_add_sp_r8),
    /* E9 */ op("JP HL", 1, 4, Cpu::exec_jp_hl),
    /* EA */ op("LD (a16),A", 3, 16, Cpu::exec_ld_a16_a),
    /* EB */ ILLEGAL,
    /* EC */ ILLEGAL,
    /* ED */ ILLEGAL,
    /* EE */ op("XOR d8", 2, 8, Cpu::exec_alu_d8),
    /* EF */ op("RST 28H", 1, 16, Cpu::exec_rst),
    /* F0 */ op("LDH A,(a8)", 2, 12, Cpu::exec_ldh_a_a8),
    /* F1 */ op("POP AF", 1, 12, Cpu::exec_pop),
    /* F2 */ op("LD A,(C)", 1, 8, Cpu::exec_ldh_a_c),
    /* F3 */ op("DI", 1, 4, Cpu::exec_di),
    /* F4 */ ILLEGAL,
    /* F5 */ op("PUSH AF", 1, 16, Cpu::exec_push),
    /* F6 */ op("OR d8", 2, 8, Cpu::exec_alu_d8),
    /* F7 */ op("RST 30H", 1, 16, Cpu::exec_rst),
    /* F8 */ op("LD HL,SP+r8", 2, 12, Cpu::exec_ld_hl_sp_r8),
    /* F9 */ op("LD SP,HL", 1, 8, Cpu::exec_ld_sp_hl),
    /* FA */ op("LD A,(a16)", 3, 16, Cpu::exec_ld_a_a16),
    /* FB */ op("EI", 1, 4, Cpu::exec_ei),
    /* FC */ ILLEGAL,
    /* FD */ ILLEGAL,
    /* FE */ op("CP d8", 2, 8, Cpu::exec_alu_d8),
    /* FF */ op("RST 38H", 1, 16, Cpu::exec_rst),
];

#[rustfmt::skip]
pub static EXTENDED: [Instruction; 256] = [
    /* 00 */ op("RLC B", 2, 8, Cpu::exec_cb_shift),
    /* 01 */ op("RLC C", 2, 8, Cpu::exec_cb_shift),
    /* 02 */ op("RLC D", 2, 8, Cpu::exec_cb_shift),
    /* 03 */ op("RLC E", 2, 8, Cpu::exec_cb_shift),
    /* 04 */ op("RLC H", 2, 8, Cpu::exec_cb_shift),
    /* 05 */ op("RLC L", 2, 8, Cpu::exec_cb_shift),
    /* 06 */ op("RLC (HL)", 2, 16, Cpu::exec_cb_shift),
    /* 07 */ op("RLC A", 2, 8, Cpu::exec_cb_shift),
    /* 08 */ op("RRC B", 2, 8, Cpu::exec_cb_shift),
    /* 09 */ op("RRC C", 2, 8, Cpu::exec_cb_shift),
    /* 0A */ op("RRC D", 2, 8, Cpu::exec_cb_shift),
    /* 0B */ op("RRC E", 2, 8, Cpu::exec_cb_shift),
    /* 0C */ op("RRC H", 2, 8, Cpu::exec_cb_shift),
    /* 0D */ op("RRC L", 2, 8, Cpu::exec_cb_shift),
    /* 0E */ op("RRC (HL)", 2, 16, Cpu::exec_cb_shift),
    /* 0F */ op("RRC A", 2, 8, Cpu::exec_cb_shift),
    /* 10 */ op("RL B", 2, 8, Cpu::exec_cb_shift),
    /* 11 */ op("RL C", 2, 8, Cpu::exec_cb_shift),
    /* 12 */ op("RL D", 2, 8, Cpu::exec_cb_shift),
    /* 13 */ op("RL E", 2, 8, Cpu::exec_cb_shift),
    /* 14 */ op("RL H", 2, 8, Cpu::exec_cb_shift),
    /* 15 */ op("RL L", 2, 8, Cpu::exec_cb_shift),
    /* 16 */ op("RL (HL)", 2, 16, Cpu::exec_cb_shift),
    /* 17 */ op("RL A", 2, 8, Cpu::exec_cb_shift),
    /* 18 */ op("RR B", 2, 8, Cpu::exec_cb_shift),
    /* 19 */ op("RR C", 2, 8, Cpu::exec_cb_shift),
    /* 1A */ op("RR D", 2, 8, Cpu::exec_cb_shift),
    /* 1B */ op("RR E", 2, 8, Cpu::exec_cb_shift),
    /* 1C */ op("RR H", 2, 8, Cpu::exec_cb_shift),
    /* 1D */ op("RR L", 2, 8, Cpu::exec_cb_shift),
    /* 1E */ op("RR (HL)", 2, 16, Cpu::exec_cb_shift),
    /* 1F */ op("RR A", 2, 8, Cpu::exec_cb_shift),
    /* 20 */ op("SLA B", 2, 8, Cpu::exec_cb_shift),
    /* 21 */ op("SLA C", 2, 8, Cpu::exec_cb_shift),
    /* 22 */ op("SLA D", 2, 8, Cpu::exec_cb_shift),
    /* 23 */ op("SLA E", 2, 8, Cpu::exec_cb_shift),
    /* 24 */ op("SLA H", 2, 8, Cpu::exec_cb_shift),
    /* 25 */ op("SLA L", 2, 8, Cpu::exec_cb_shift),
    /* 26 */ op("SLA (HL)", 2, 16, Cpu::exec_cb_shift),
    /* 27 */ op("SLA A", 2, 8, Cpu::exec_cb_shift),
    /* 28 */ op("SRA B", 2, 8, Cpu::exec_cb_shift),
    /* 29 */ op("SRA C", 2, 8, Cpu::exec_cb_shift),
    /* 2A */ op("SRA D", 2, 8, Cpu::exec_cb_shift),
    /* 2B */ op("SRA E", 2, 8, Cpu::exec_cb_shift),
    /* 2C */ op("SRA H", 2, 8, Cpu::exec_cb_shift),
    /* 2D */ op("SRA L", 2, 8, Cpu::exec_cb_shift),
    /* 2E */ op("SRA (HL)", 2, 16, Cpu::exec_cb_shift),
    /* 2F */ op("SRA A", 2, 8, Cpu::exec_cb_shift),
    /* 30 */ op("SWAP B", 2, 8, Cpu::exec_cb_shift),
    /* 31 */ op("SWAP C", 2, 8, Cpu::exec_cb_shift),
    /* 32 */ op("SWAP D", 2, 8, Cpu::exec_cb_shift),
    /* 33 */ op("SWAP E", 2, 8, Cpu::exec_cb_shift),
    /* 34 */ op("SWAP H", 2, 8, Cpu::exec_cb_shift),
    /* 35 */ op("SWAP L", 2, 8, Cpu::exec_cb_shift),
    /* 36 */ op("SWAP (HL)", 2, 16, Cpu::exec_cb_shift),
    /* 37 */ op("SWAP A", 2, 8, Cpu::exec_cb_shift),
    /* 38 */ op("SRL B", 2, 8, Cpu::exec_cb_shift),
    /* 39 */ op("SRL C", 2, 8, Cpu::exec_cb_shift),
    /* 3A */ op("SRL D", 2, 8, Cpu::exec_cb_shift),
    /* 3B */ op("SRL E", 2, 8, Cpu::exec_cb_shift),
    /* 3C */ op("SRL H", 2, 8, Cpu::exec_cb_shift),
    /* 3D */ op("SRL L", 2, 8, Cpu::exec_cb_shift),
    /* 3E */ op("SRL (HL)", 2, 16, Cpu::exec_cb_shift),
    /* 3F */ op("SRL A", 2, 8, Cpu::exec_cb_shift),
    /* 40 */ op("BIT 0,B", 2, 8, Cpu::exec_cb_bit),
    /* 41 */ op("BIT 0,C", 2, 8, Cpu::exec_cb_bit),
    /* 42 */ op("BIT 0,D", 2, 8, Cpu::exec_cb_bit),
    /* 43 */ op("BIT 0,E", 2, 8, Cpu::exec_cb_bit),
    /* 44 */ op("BIT 0,H", 2, 8, Cpu::exec_cb_bit),
    /* 45 */ op("BIT 0,L", 2, 8, Cpu::exec_cb_bit),
    /* 46 */ op("BIT 0,(HL)", 2, 12, Cpu::exec_cb_bit),
    /* 47 */ op("BIT 0,A", 2, 8, Cpu::exec_cb_bit),
    /* 48 */ op("BIT 1,B", 2, 8, Cpu::exec_cb_bit),
    /* 49 */ op("BIT 1,C", 2, 8, Cpu::exec_cb_bit),
    /* 4A */ op("BIT 1,D", 2, 8, Cpu::exec_cb_bit),
    /* 4B */ op("BIT 1,E", 2, 8, Cpu::exec_cb_bit),
    /* 4C */ op("BIT 1,H", 2, 8, Cpu::exec_cb_bit),
    /* 4D */ op("BIT 1,L", 2, 8, Cpu::exec_cb_bit),
    /* 4E */ op("BIT 1,(HL)", 2, 12, Cpu::exec_cb_bit),
    /* 4F */ op("BIT 1,A", 2, 8, Cpu::exec_cb_bit),
    /* 50 */ op("BIT 2,B", 2, 8, Cpu::exec_cb_bit),
    /* 51 */ op("BIT 2,C", 2, 8, Cpu::exec_cb_bit),
    /* 52 */ op("BIT 2,D", 2, 8, Cpu::exec_cb_bit),
    /* 53 */ op("BIT 2,E", 2, 8, Cpu::exec_cb_bit),
    /* 54 */ op("BIT 2,H", 2, 8, Cpu::exec_cb_bit),
    /* 55 */ op("BIT 2,L", 2, 8, Cpu::exec_cb_bit),
    /* 56 */ op("BIT 2,(HL)", 2, 12, Cpu::exec_cb_bit),
    /* 57 */ op("BIT 2,A", 2, 8, Cpu::exec_cb_bit),
    /* 58 */ op("BIT 3,B", 2, 8, Cpu::exec_cb_bit),
    /* 59 */ op("BIT 3,C", 2, 8, Cpu::exec_cb_bit),
    /* 5A */ op("BIT 3,D", 2, 8, Cpu::exec_cb_bit),
    /* 5B */ op("BIT 3,E", 2, 8, Cpu::exec_cb_bit),
    /* 5C */ op("BIT 3,H", 2, 8, Cpu::exec_cb_bit),
    /* 5D */ op("BIT 3,L", 2, 8, Cpu::exec_cb_bit),
    /* 5E */ op("BIT 3,(HL)", 2, 12, Cpu::exec_cb_bit),
    /* 5F */ op("BIT 3,A", 2, 8, Cpu::exec_cb_bit),
    /* 60 */ op("BIT 4,B", 2, 8, Cpu::exec_cb_bit),
    /* 61 */ op("BIT 4,C", 2, 8, Cpu::exec_cb_bit),
    /* 62 */ op("BIT 4,D", 2, 8, Cpu::exec_cb_bit),
    /* 63 */ op("BIT 4,E", 2, 8, Cpu::exec_cb_bit),
    /* 64 */ op("BIT 4,H", 2, 8, Cpu::exec_cb_bit),
    /* 65 */ op("BIT 4,L", 2, 8, Cpu::exec_cb_bit),
    /* 66 */ op("BIT 4,(HL)", 2, 12, Cpu::exec_cb_bit),
    /* 67 */ op("BIT 4,A", 2, 8, Cpu::exec_cb_bit),
    /* 68 */ op("BIT 5,B", 2, 8, Cpu::exec_cb_bit),
    /* 69 */ op("BIT 5,C", 2, 8, Cpu::exec_cb_bit),
    /* 6A */ op("BIT 5,D", 2, 8, Cpu::exec_cb_bit),
    /* 6B */ op("BIT 5,E", 2, 8, Cpu::exec_cb_bit),
    /* 6C */ op("BIT 5,H", 2, 8, Cpu::exec_cb_bit),
    /* 6D */ op("BIT 5,L", 2, 8, Cpu::exec_cb_bit),
    /* 6E */ op("BIT 5,(HL)", 2, 12, Cpu::exec_cb_bit),
    /* 6F */ op("BIT 5,A", 2, 8, Cpu::exec_cb_bit),
    /* 70 */ op("BIT 6,B", 2, 8, Cpu::exec_cb_bit),
    /* 71 */ op("BIT 6,C", 2, 8, Cpu::exec_cb_bit),
    /* 72 */ op("BIT 6,D", 2, 8, Cpu::exec_cb_bit),
    /* 73 */ op("BIT 6,E", 2, 8, Cpu::exec_cb_bit),
    /* 74 */ op("BIT 6,H", 2, 8, Cpu::exec_cb_bit),
    /* 75 */ op("BIT 6,L", 2, 8, Cpu::exec_cb_bit),
    /* 76 */ op("BIT 6,(HL)", 2, 12, Cpu::exec_cb_bit),
    /* 77 */ op("BIT 6,A", 2, 8, Cpu::exec_cb_bit),
    /* 78 */ op("BIT 7,B", 2, 8, Cpu::exec_cb_bit),
    /* 79 */ op("BIT 7,C", 2, 8, Cpu::exec_cb_bit),
    /* 7A */ op("BIT 7,D", 2, 8, Cpu::exec_cb_bit),
    /* 7B */ op("BIT 7,E", 2, 8, Cpu::exec_cb_bit),
    /* 7C */ op("BIT 7,H", 2, 8, Cpu::exec_cb_bit),
    /* 7D */ op("BIT 7,L", 2, 8, Cpu::exec_cb_bit),
    /* 7E */ op("BIT 7,(HL)", 2, 12, Cpu::exec_cb_bit),
    /* 7F */ op("BIT 7,A", 2, 8, Cpu::exec_cb_bit),
    /* 80 */ op("RES 0,B", 2, 8, Cpu::exec_cb_res),
    /* 81 */ op("RES 0,C", 2, 8, Cpu::exec_cb_res),
    /* 82 */ op("RES 0,D", 2, 8, Cpu::exec_cb_res),
    /* 83 */ op("RES 0,E", 2, 8, Cpu::exec_cb_res),
    /* 84 */ op("RES 0,H", 2, 8, Cpu::exec_cb_res),
    /* 85 */ op("RES 0,L", 2, 8, Cpu::exec_cb_res),
    /* 86 */ op("RES 0,(HL)", 2, 16, Cpu::exec_cb_res),
    /* 87 */ op("RES 0,A", 2, 8, Cpu::exec_cb_res),
    /* 88 */ op("RES 1,B", 2, 8, Cpu::exec_cb_res),
    /* 89 */ op("RES 1,C", 2, 8, Cpu::exec_cb_res),
    /* 8A */ op("RES 1,D", 2, 8, Cpu::exec_cb_res),
    /* 8B */ op("RES 1,E", 2, 8, Cpu::exec_cb_res),
    /* 8C */ op("RES 1,H", 2, 8, Cpu::exec_cb_res),
    /* 8D */ op("RES 1,L", 2, 8, Cpu::exec_cb_res),
    /* 8E */ op("RES 1,(HL)", 2, 16, Cpu::exec_cb_res),
    /* 8F */ op("RES 1,A", 2, 8, Cpu::exec_cb_res),
    /* 90 */ op("RES 2,B", 2, 8, Cpu::exec_cb_res),
    /* 91 */ op("RES 2,C", 2, 8, Cpu::exec_cb_res),
    /* 92 */ op("RES 2,D", 2, 8, Cpu::exec_cb_res),
    /* 93 */ op("RES 2,E", 2, 8, Cpu::exec_cb_res),
    /* 94 */ op("RES 2,H", 2, 8, Cpu::exec_cb_res),
    /* 95 */ op("RES 2,L", 2, 8, Cpu::exec_cb_res),
    /* 96 */ op("RES 2,(HL)", 2, 16, Cpu::exec_cb_res),
    /* 97 */ op("RES 2,A", 2, 8, Cpu::exec_cb_res),
    /* 98 */ op("RES 3,B", 2, 8, Cpu::exec_cb_res),
    /* 99 */ op("RES 3,C", 2, 8, Cpu::exec_cb_res),
    /* 9A */ op("RES 3,D", 2, 8, Cpu::exec_cb_res),
    /* 9B */ op("RES 3,E", 2, 8, Cpu::exec_cb_res),
    /* 9C */ op("RES 3,H", 2, 8, Cpu::exec_cb_res),
    /* 9D */ op("RES 3,L", 2, 8, Cpu::exec_cb_res),
    /* 9E */ op("RES 3,(HL)", 2, 16, Cpu::exec_cb_res),
    /* 9F */ op("RES 3,A", 2, 8, Cpu::exec_cb_res),
    /* A0 */ op("RES 4,B", 2, 8, Cpu::exec_cb_res),
    /* A1 */ op("RES 4,C", 2, 8, Cpu::exec_cb_res),
    /* A2 */ op("RES 4,D", 2, 8, Cpu::exec_cb_res),
    /* A3 */ op("RES 4,E", 2, 8, Cpu::exec_cb_res),
    /* A4 */ op("RES 4,H", 2, 8, Cpu::exec_cb_res),
    /* A5 */ op("RES 4,L", 2, 8, Cpu::exec_cb_res),
    /* A6 */ op("RES 4,(HL)", 2, 16, Cpu::exec_cb_res),
    /* A7 */ op("RES 4,A", 2, 8, Cpu::exec_cb_res),
    /* A8 */ op("RES 5,B", 2, 8, Cpu::exec_cb_res),
    /* A9 */ op("RES 5,C", 2, 8, Cpu::exec_cb_res),
    /* AA */ op("RES 5,D", 2, 8, Cpu::exec_cb_res),
    /* AB */ op("RES 5,E", 2, 8, Cpu::exec_cb_res),
    /* AC */ op("RES 5,H", 2, 8, Cpu::exec_cb_res),
    /* AD */ op("RES 5,L", 2, 8, Cpu::exec_cb_res),
    /* AE */ op("RES 5,(HL)", 2, 16, Cpu::exec_cb_res),
    /* AF */ op("RES 5,A", 2, 8, Cpu::exec_cb_res),
    /* B0 */ op("RES 6,B", 2, 8, Cpu::exec_cb_res),
    /* B1 */ op("RES 6,C", 2, 8, Cpu::exec_cb_res),
    /* B2 */ op("RES 6,D", 2, 8, Cpu::exec_cb_res),
    /* B3 */ op("RES 6,E", 2, 8, Cpu::exec_cb_res),
    /* B4 */ op("RES 6,H", 2, 8, Cpu::exec_cb_res),
    /* B5 */ op("RES 6,L", 2, 8, Cpu::exec_cb_res),
    /* B6 */ op("RES 6,(HL)", 2, 16, Cpu::exec_cb_res),
    /* B7 */ op("RES 6,A", 2, 8, Cpu::exec_cb_res),
    /* B8 */ op("RES 7,B", 2, 8, Cpu::exec_cb_res),
    /* B9 */ op("RES 7,C", 2, 8, Cpu::exec_cb_res),
    /* BA */ op("RES 7,D", 2, 8, Cpu::exec_cb_res),
    /* BB */ op("RES 7,E", 2, 8, Cpu::exec_cb_res),
    /* BC */ op("RES 7,H", 2, 8, Cpu::exec_cb_res),
    /* BD */ op("RES 7,L", 2, 8, Cpu::exec_cb_res),
    /* BE */ op("RES 7,(HL)", 2, 16, Cpu::exec_cb_res),
    /* BF */ op("RES 7,A", 2, 8, Cpu::exec_cb_res),
    /* C0 */ op("SET 0,B", 2, 8, Cpu::exec_cb_set),
    /* C1 */ op("SET 0,C", 2, 8, Cpu::exec_cb_set),
    /* C2 */ op("SET 0,D", 2, 8, Cpu::exec_cb_set),
    /* C3 */ op("SET 0,E", 2, 8, Cpu::exec_cb_set),
    /* C4 */ op("SET 0,H", 2, 8, Cpu::exec_cb_set),
    /* C5 */ op("SET 0,L", 2, 8, Cpu::exec_cb_set),
    /* C6 */ op("SET 0,(HL)", 2, 16, Cpu::exec_cb_set),
    /* C7 */ op("SET 0,A", 2, 8, Cpu::exec_cb_set),
    /* C8 */ op("SET 1,B", 2, 8, Cpu::exec_cb_set),
    /* C9 */ op("SET 1,C", 2, 8, Cpu::exec_cb_set),
    /* CA */ op("SET 1,D", 2, 8, Cpu::exec_cb_set),
    /* CB */ op("SET 1,E", 2, 8, Cpu::exec_cb_set),
    /* CC */ op("SET 1,H", 2, 8, Cpu::exec_cb_set),
    /* CD */ op("SET 1,L", 2, 8, Cpu::exec_cb_set),
    /* CE */ op("SET 1,(HL)", 2, 16, Cpu::exec_cb_set),
    /* CF */ op("SET 1,A", 2, 8, Cpu::exec_cb_set),
    /* D0 */ op("SET 2,B", 2, 8, Cpu::exec_cb_set),
    /* D1 */ op("SET 2,C", 2, 8, Cpu::exec_cb_set),
    /* D2 */ op("SET 2,D", 2, 8, Cpu::exec_cb_set),
    /* D3 */ op("SET 2,E", 2, 8, Cpu::exec_cb_set),
    /* D4 */ op("SET 2,H", 2, 8, Cpu::exec_cb_set),
    /* D5 */ op("SET 2,L", 2, 8, Cpu::exec_cb_set),
    /* D6 */ op("SET 2,(HL)", 2, 16, Cpu::exec_cb_set),
    /* D7 */ op("SET 2,A", 2, 8, Cpu::exec_cb_set),
    /* D8 */ op("SET 3,B", 2, 8, Cpu::exec_cb_set),
    /* D9 */ op("SET 3,C", 2, 8, Cpu::exec_cb_set),
    /* DA */ op("SET 3,D", 2, 8, Cpu::exec_cb_set),
    /* DB */ op("SET 3,E", 2, 8, Cpu::exec_cb_set),
    /* DC */ op("SET 3,H", 2, 8, Cpu::exec_cb_set),
    /* DD */ op("SET 3,L", 2, 8, Cpu::exec_cb_set),
    /* DE */ op("SET 3,(HL)", 2, 16, Cpu::exec_cb_set),
    /* DF */ op("SET 3,A", 2, 8, Cpu::exec_cb_set),
    /* E0 */ op("SET 4,B", 2, 8, Cpu::exec_cb_set),
    /* E1 */ op("SET 4,C", 2, 8, Cpu::exec_cb_set),
    /* E2 */ op("SET 4,D", 2, 8, Cpu::exec_cb_set),
    /* E3 */ op("SET 4,E", 2, 8, Cpu::exec_cb_set),
    /* E4 */ op("SET 4,H", 2, 8, Cpu::exec_cb_set),
    /* E5 */ op("SET 4,L", 2, 8, Cpu::exec_cb_set),
    /* E6 */ op("SET 4,(HL)", 2, 16, Cpu::exec_cb_set),
    /* E7 */ op("SET 4,A", 2, 8, Cpu::exec_cb_set),
    /* E8 */ op("SET 5,B", 2, 8, Cpu::exec_cb_set),
    /* E9 */ op("SET 5,C", 2, 8, Cpu::exec_cb_set),
    /* EA */ op("SET 5,D", 2, 8, Cpu::exec_cb_set),
    /* EB */ op("SET 5,E", 2, 8, Cpu::exec_cb_set),
    /* EC */ op("SET 5,H", 2, 8, Cpu::exec_cb_set),
    /* ED */ op("SET 5,L", 2, 8, Cpu::exec_cb_set),
    /* EE */ op("SET 5,(HL)", 2, 16, Cpu::exec_cb_set),
    /* EF */ op("SET 5,A", 2, 8, Cpu::exec_cb_set),
    /* F0 */ op("SET 6,B", 2, 8, Cpu::exec_cb_set),
    /* F1 */ op("SET 6,C", 2, 8, Cpu::exec_cb_set),
    /* F2 */ op("SET 6,D", 2, 8, Cpu::exec_cb_set),
    /* F3 */ op("SET 6,E", 2, 8, Cpu::exec_cb_set),
    /* F4 */ op("SET 6,H", 2, 8, Cpu::exec_cb_set),
    /* F5 */ op("SET 6,L", 2, 8, Cpu::exec_cb_set),
    /* F6 */ op("SET 6,(HL)", 2, 16, Cpu::exec_cb_set),
    /* F7 */ op("SET 6,A", 2, 8, Cpu::exec_cb_set),
    /* F8 */ op("SET 7,B", 2, 8, Cpu::exec_cb_set),
    /* F9 */ op("SET 7,C", 2, 8, Cpu::exec_cb_set),
    /* FA */ op("SET 7,D", 2, 8, Cpu::exec_cb_set),
    /* FB */ op("SET 7,E", 2, 8, Cpu::exec_cb_set),
    /* FC */ op("SET 7,H", 2, 8, Cpu::exec_cb_set),
    /* FD */ op("SET 7,L", 2, 8, Cpu::exec_cb_set),
    /* FE */ op("SET 7,(HL)", 2, 16, Cpu::exec_cb_set),
    /* FF */ op("SET 7,A", 2, 8, Cpu::exec_cb_set),
];
