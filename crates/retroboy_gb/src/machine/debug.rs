use std::fmt;

use super::video::{Mode, VideoRegisters};
use crate::cpu::{Exec, EXTENDED, PRIMARY};

/// Register, flag and video state captured between instructions.
///
/// Plain data only; hosts decide how to present it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebugSnapshot {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
    pub zero: bool,
    pub subtract: bool,
    pub half_carry: bool,
    pub carry: bool,
    pub ime: bool,
    pub halted: bool,
    pub stopped: bool,
    pub interrupt_enable: u8,
    pub interrupt_flags: u8,
    pub mode: Mode,
    pub video: VideoRegisters,
}

impl fmt::Display for DebugSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |set: bool, name: char| if set { name } else { '-' };
        writeln!(
            f,
            "AF={:02X}{:02X} BC={:02X}{:02X} DE={:02X}{:02X} HL={:02X}{:02X} SP={:04X} PC={:04X}",
            self.a, self.f, self.b, self.c, self.d, self.e, self.h, self.l, self.sp, self.pc
        )?;
        writeln!(
            f,
            "flags={}{}{}{} IME={} HALT={} STOP={} IE={:02X} IF={:02X}",
            flag(self.zero, 'Z'),
            flag(self.subtract, 'N'),
            flag(self.half_carry, 'H'),
            flag(self.carry, 'C'),
            u8::from(self.ime),
            u8::from(self.halted),
            u8::from(self.stopped),
            self.interrupt_enable,
            self.interrupt_flags,
        )?;
        let v = &self.video;
        write!(
            f,
            "LCDC={:02X} STAT={:02X} LY={:02X} LYC={:02X} SCY={:02X} SCX={:02X} WY={:02X} WX={:02X} \
             BGP={:02X} OBP0={:02X} OBP1={:02X} mode={:?}",
            v.lcdc, v.stat, v.ly, v.lyc, v.scy, v.scx, v.wy, v.wx, v.bgp, v.obp0, v.obp1, self.mode
        )
    }
}

/// One decoded instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disassembly {
    pub address: u16,
    pub length: u8,
    pub text: String,
}

/// Decode the instruction at `address`, reading bytes through `read`.
///
/// Operand placeholders in the table mnemonics are replaced with the
/// actual immediate; relative jumps show their absolute target.
pub(crate) fn disassemble(address: u16, read: impl Fn(u16) -> u8) -> Disassembly {
    let opcode = read(address);
    let entry = &PRIMARY[usize::from(opcode)];

    let (mnemonic, length) = match entry.exec {
        Exec::Prefix => {
            let ext = &EXTENDED[usize::from(read(address.wrapping_add(1)))];
            (ext.mnemonic, ext.length)
        }
        Exec::Illegal => {
            return Disassembly {
                address,
                length: 1,
                text: format!("DB ${opcode:02X}"),
            }
        }
        Exec::Op(_) => (entry.mnemonic, entry.length),
    };

    let imm8 = read(address.wrapping_add(1));
    let imm16 = u16::from_le_bytes([imm8, read(address.wrapping_add(2))]);
    let text = if mnemonic.contains("d16") {
        mnemonic.replace("d16", &format!("${imm16:04X}"))
    } else if mnemonic.contains("a16") {
        mnemonic.replace("a16", &format!("${imm16:04X}"))
    } else if mnemonic.contains("SP+r8") {
        mnemonic.replace("r8", &format!("{}", imm8 as i8))
    } else if mnemonic.starts_with("JR") {
        let target = address
            .wrapping_add(2)
            .wrapping_add_signed(i16::from(imm8 as i8));
        mnemonic.replace("r8", &format!("${target:04X}"))
    } else if mnemonic.contains("r8") {
        mnemonic.replace("r8", &format!("{}", imm8 as i8))
    } else if mnemonic.contains("a8") {
        mnemonic.replace("(a8)", &format!("($FF{imm8:02X})"))
    } else if mnemonic.contains("d8") {
        mnemonic.replace("d8", &format!("${imm8:02X}"))
    } else {
        mnemonic.to_string()
    };

    Disassembly {
        address,
        length,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> Disassembly {
        let bytes = bytes.to_vec();
        disassemble(0x0100, move |addr| {
            bytes
                .get(usize::from(addr.wrapping_sub(0x0100)))
                .copied()
                .unwrap_or(0)
        })
    }

    #[test]
    fn fills_in_operands() {
        assert_eq!(decode(&[0x00]).text, "NOP");
        assert_eq!(decode(&[0x21, 0x34, 0x12]).text, "LD HL,$1234");
        assert_eq!(decode(&[0xC3, 0x50, 0x01]).text, "JP $0150");
        assert_eq!(decode(&[0x3E, 0x7F]).text, "LD A,$7F");
        assert_eq!(decode(&[0xE0, 0x40]).text, "LDH ($FF40),A");
        assert_eq!(decode(&[0x18, 0xFE]).text, "JR $0100");
        assert_eq!(decode(&[0x20, 0x05]).text, "JR NZ,$0107");
        assert_eq!(decode(&[0xE8, 0xFC]).text, "ADD SP,-4");
        assert_eq!(decode(&[0xF8, 0x02]).text, "LD HL,SP+2");
    }

    #[test]
    fn prefixed_and_illegal() {
        let d = decode(&[0xCB, 0x7C]);
        assert_eq!(d.text, "BIT 7,H");
        assert_eq!(d.length, 2);
        let d = decode(&[0xDD]);
        assert_eq!(d.text, "DB $DD");
        assert_eq!(d.length, 1);
    }
}
