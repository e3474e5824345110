mod alu;
mod bus;
mod exec;
mod helpers;
mod interrupts;
mod regs;
pub mod table;

pub use bus::Bus;
pub use regs::{Flag, Registers};
pub use table::{Exec, Instruction, EXTENDED, PRIMARY};

use crate::error::CpuError;

/// Elapsed time reported for one processor step.
///
/// `t` counts clock cycles and `m` machine cycles; the two are always kept in
/// the fixed 4:1 ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timing {
    pub t: u32,
    pub m: u32,
}

impl Timing {
    pub const ZERO: Timing = Timing { t: 0, m: 0 };

    #[inline]
    pub const fn from_t(t: u32) -> Self {
        Self { t, m: t / 4 }
    }
}

impl std::ops::Add for Timing {
    type Output = Timing;

    fn add(self, rhs: Timing) -> Timing {
        Timing::from_t(self.t + rhs.t)
    }
}

impl std::ops::AddAssign for Timing {
    fn add_assign(&mut self, rhs: Timing) {
        *self = *self + rhs;
    }
}

/// Game Boy CPU core (Sharp LR35902).
///
/// Decoding is table-driven: the opcode byte indexes `PRIMARY`, and the 0xCB
/// prefix indexes `EXTENDED` with the following byte. Every handler operates
/// on the explicit `(Cpu, Bus)` pair it is given.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    /// STOP low-power state. The orchestrator does not fetch instructions
    /// while this is set; only an external `resume` clears it.
    stopped: bool,
    /// EI was executed; IME turns on after the following instruction.
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    /// Cost of the most recent step or interrupt dispatch.
    timing: Timing,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            timing: Timing::ZERO,
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Restore the register file to the state the boot ROM leaves behind.
    pub fn reset(&mut self) {
        self.ime = false;
        self.halted = false;
        self.stopped = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.timing = Timing::ZERO;
        self.apply_dmg_boot_state();
    }

    /// Clear every register for a cold start through the boot overlay.
    pub fn power_on(&mut self) {
        self.reset();
        self.regs = Registers::default();
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code at 0x0100.
    fn apply_dmg_boot_state(&mut self) {
        self.regs.set_af(0x0190);
        self.regs.set_bc(0x0013);
        self.regs.set_de(0x00D8);
        self.regs.set_hl(0x014D);
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Leave the STOP and HALT states. Used by the orchestrator's `resume`.
    pub fn wake(&mut self) {
        self.stopped = false;
        self.halted = false;
    }

    /// Timing of the last step or interrupt dispatch.
    #[inline]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Execute exactly one instruction and return the cycles it consumed.
    ///
    /// While halted or stopped no instruction is fetched and a single idle
    /// M-cycle is reported so peripherals keep running. An opcode without a
    /// table entry leaves PC on the opcode and returns a `CpuError`.
    pub fn step(&mut self, bus: &mut dyn Bus) -> Result<Timing, CpuError> {
        if self.halted || self.stopped {
            self.timing = Timing::from_t(4);
            return Ok(self.timing);
        }

        let pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        let instruction = &PRIMARY[opcode as usize];

        self.ime_enable_delay = std::mem::take(&mut self.ime_enable_pending);

        let cycles = match instruction.exec {
            Exec::Op(handler) => {
                log::trace!("{pc:04X}: {}", instruction.mnemonic);
                instruction.cycles + handler(self, bus, opcode)
            }
            Exec::Prefix => {
                let ext_opcode = self.fetch8(bus);
                let ext = &EXTENDED[ext_opcode as usize];
                match ext.exec {
                    Exec::Op(handler) => {
                        log::trace!("{pc:04X}: {}", ext.mnemonic);
                        ext.cycles + handler(self, bus, ext_opcode)
                    }
                    Exec::Prefix | Exec::Illegal => {
                        self.regs.pc = pc;
                        self.ime_enable_pending = self.ime_enable_delay;
                        return Err(CpuError::UnknownExtendedOpcode {
                            opcode: ext_opcode,
                            pc,
                        });
                    }
                }
            }
            Exec::Illegal => {
                self.regs.pc = pc;
                self.ime_enable_pending = self.ime_enable_delay;
                return Err(CpuError::UnknownOpcode { opcode, pc });
            }
        };

        if std::mem::take(&mut self.ime_enable_delay) {
            self.ime = true;
        }

        self.timing = Timing::from_t(cycles);
        Ok(self.timing)
    }
}

#[cfg(test)]
mod tests;
