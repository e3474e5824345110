use std::collections::BTreeSet;

use super::bus::MemoryBus;
use super::cartridge::{Cartridge, CartridgeInfo};
use super::debug::{self, DebugSnapshot, Disassembly};
use super::joypad::Button;
use crate::config::GameBoyConfig;
use crate::cpu::{Cpu, Flag, Timing};
use crate::error::{CartridgeError, CpuError};

/// Why `run_frame` returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The whole cycle budget was spent.
    Completed,
    /// PC reached a breakpoint; the instruction there has not run yet.
    Breakpoint(u16),
    /// The CPU executed STOP and waits for `resume`.
    Stopped,
    /// A previous decode error froze the machine; nothing was executed.
    Frozen,
}

/// The whole machine: CPU, bus with its peripherals, and run control.
///
/// Each step is one instruction, then the peripherals advanced by that
/// instruction's cost, then one interrupt check. `run_frame` repeats this
/// until the frame's cycle budget is spent.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: MemoryBus,
    config: GameBoyConfig,
    breakpoints: BTreeSet<u16>,
    /// Breakpoint reported by the last `run_frame`; skipped once so the
    /// next run can execute past it.
    paused_at: Option<u16>,
    /// Set when an instruction failed to decode.
    fault: Option<CpuError>,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self::with_config(GameBoyConfig::default())
    }

    pub fn with_config(config: GameBoyConfig) -> Self {
        Self {
            cpu: Cpu::new(),
            bus: MemoryBus::new(&config),
            config,
            breakpoints: BTreeSet::new(),
            paused_at: None,
            fault: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &GameBoyConfig {
        &self.config
    }

    /// Return every component to its power-up state. The cartridge,
    /// boot image and breakpoints are kept. With a boot image loaded,
    /// execution restarts at 0x0000 through the overlay.
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset();
        if self.bus.boot_active() {
            self.cpu.power_on();
        }
        self.paused_at = None;
        self.fault = None;
    }

    /// Validate and insert a cartridge image, then reset.
    ///
    /// A rejected image leaves the machine exactly as it was.
    pub fn load_rom(&mut self, image: &[u8]) -> Result<CartridgeInfo, CartridgeError> {
        let cartridge = Cartridge::from_image(image).map_err(|err| {
            log::warn!("cartridge rejected: {err}");
            err
        })?;
        let info = cartridge.info();
        self.bus.insert_cartridge(cartridge);
        self.reset();
        log::info!(
            "loaded \"{}\" ({}, {} KiB ROM, {} KiB RAM)",
            info.title,
            info.kind,
            info.rom_size / 1024,
            info.ram_size / 1024
        );
        Ok(info)
    }

    /// Map a 256-byte boot image over 0x0000..=0x00FF and restart from it.
    pub fn load_boot_rom(&mut self, image: &[u8]) -> Result<(), CartridgeError> {
        self.bus.load_boot_rom(image)?;
        self.reset();
        log::info!("boot image mapped; starting at 0x0000");
        Ok(())
    }

    pub fn cartridge_info(&self) -> Option<CartridgeInfo> {
        self.bus
            .cartridge
            .is_loaded()
            .then(|| self.bus.cartridge.info())
    }

    /// Execute one instruction and everything that follows from it.
    ///
    /// Returns the time consumed, including an interrupt dispatch if one
    /// happened. A decode error freezes the machine and is returned again
    /// by every later call until `resume` or `reset`.
    pub fn step_instruction(&mut self) -> Result<Timing, CpuError> {
        if let Some(err) = self.fault {
            return Err(err);
        }

        let timing = match self.cpu.step(&mut self.bus) {
            Ok(timing) => timing,
            Err(err) => {
                self.freeze(err);
                return Err(err);
            }
        };
        self.bus.advance(timing);

        let mut total = timing;
        if let Some(dispatch) = self.cpu.service_interrupts(&mut self.bus) {
            log::debug!("interrupt dispatched to {:04X}", self.cpu.regs.pc);
            self.bus.advance(dispatch);
            total += dispatch;
        }
        Ok(total)
    }

    fn freeze(&mut self, err: CpuError) {
        let regs = &self.cpu.regs;
        log::error!(
            "{err}; machine frozen (AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X})",
            regs.af(),
            regs.bc(),
            regs.de(),
            regs.hl(),
            regs.sp
        );
        self.fault = Some(err);
    }

    /// Run until the configured cycle budget is spent, a breakpoint is
    /// reached, the CPU stops, or an instruction fails to decode.
    pub fn run_frame(&mut self) -> Result<FrameOutcome, CpuError> {
        if self.fault.is_some() {
            return Ok(FrameOutcome::Frozen);
        }

        let budget = self.config.cycles_per_frame;
        let mut elapsed = 0u32;
        while elapsed < budget {
            if self.cpu.is_stopped() {
                return Ok(FrameOutcome::Stopped);
            }

            let pc = self.cpu.regs.pc;
            let resuming = self.paused_at.take() == Some(pc);
            if !resuming && !self.cpu.halted && self.breakpoints.contains(&pc) {
                log::debug!("breakpoint hit at {pc:04X}");
                self.paused_at = Some(pc);
                return Ok(FrameOutcome::Breakpoint(pc));
            }

            elapsed += self.step_instruction()?.t;
        }
        Ok(FrameOutcome::Completed)
    }

    /// Clear a frozen, stopped or halted state so execution can continue.
    pub fn resume(&mut self) {
        if let Some(err) = self.fault.take() {
            log::debug!("resuming after: {err}");
        }
        self.cpu.wake();
    }

    pub fn is_frozen(&self) -> bool {
        self.fault.is_some()
    }

    /// Last completed frame as 160x144 RGBA bytes. The contents only
    /// change when the video unit enters VBlank.
    pub fn framebuffer(&self) -> &[u8] {
        self.bus.video.framebuffer()
    }

    /// All 384 tiles as a 128x192 RGBA sheet.
    pub fn tile_sheet(&self) -> &[u8] {
        self.bus.video.tile_sheet()
    }

    /// The current background map as 256x256 RGBA.
    pub fn background_map(&self) -> &[u8] {
        self.bus.video.background_map()
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        let bus = &mut self.bus;
        bus.joypad.set_button(button, pressed, &mut bus.interrupts);
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.bus.joypad.is_pressed(button)
    }

    pub fn add_breakpoint(&mut self, pc: u16) -> bool {
        self.breakpoints.insert(pc)
    }

    pub fn remove_breakpoint(&mut self, pc: u16) -> bool {
        self.breakpoints.remove(&pc)
    }

    pub fn breakpoints(&self) -> impl Iterator<Item = u16> + '_ {
        self.breakpoints.iter().copied()
    }

    /// Bytes captured from the serial port since the last reset.
    pub fn serial_output(&self) -> &[u8] {
        self.bus.serial.output()
    }

    /// Read memory as the CPU would, without side effects.
    pub fn peek(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    pub fn peek_range(&self, start: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| self.bus.read(start.wrapping_add(i as u16)))
            .collect()
    }

    pub fn disassemble(&self, addr: u16) -> Disassembly {
        debug::disassemble(addr, |a| self.bus.read(a))
    }

    pub fn debug_snapshot(&self) -> DebugSnapshot {
        let regs = &self.cpu.regs;
        DebugSnapshot {
            a: regs.a,
            f: regs.f,
            b: regs.b,
            c: regs.c,
            d: regs.d,
            e: regs.e,
            h: regs.h,
            l: regs.l,
            sp: regs.sp,
            pc: regs.pc,
            zero: self.cpu.get_flag(Flag::Z),
            subtract: self.cpu.get_flag(Flag::N),
            half_carry: self.cpu.get_flag(Flag::H),
            carry: self.cpu.get_flag(Flag::C),
            ime: self.cpu.ime,
            halted: self.cpu.halted,
            stopped: self.cpu.is_stopped(),
            interrupt_enable: self.bus.interrupts.read_ie(),
            interrupt_flags: self.bus.interrupts.read_if(),
            mode: self.bus.video.mode(),
            video: self.bus.video.registers(),
        }
    }
}
