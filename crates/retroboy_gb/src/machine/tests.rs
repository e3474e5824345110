use super::*;
use crate::config::GameBoyConfig;
use crate::error::{CartridgeError, CpuError};

/// 32 KiB ROM-only image with `program` at the entry point 0x0100.
fn rom_with(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    rom[0x0134..0x0138].copy_from_slice(b"TEST");
    rom
}

fn machine_with(program: &[u8]) -> GameBoy {
    let mut gb = GameBoy::new();
    gb.load_rom(&rom_with(program)).unwrap();
    gb
}

#[test]
fn load_reports_header_and_resets_cpu() {
    let mut gb = GameBoy::new();
    assert_eq!(gb.cartridge_info(), None);

    let info = gb.load_rom(&rom_with(&[])).unwrap();
    assert_eq!(info.title, "TEST");
    assert_eq!(info.kind, ControllerKind::RomOnly);
    assert_eq!(info.rom_size, 0x8000);
    assert_eq!(gb.cartridge_info(), Some(info));

    let snapshot = gb.debug_snapshot();
    assert_eq!(snapshot.pc, 0x0100);
    assert_eq!(snapshot.sp, 0xFFFE);
    assert_eq!((snapshot.a, snapshot.f), (0x01, 0x90));
    assert!(snapshot.zero && snapshot.carry);
    assert_eq!(snapshot.video.lcdc, 0x91);
    assert_eq!(snapshot.mode, Mode::OamScan);
}

#[test]
fn rejected_image_leaves_machine_untouched() {
    // NOP ; NOP ; JR -2
    let mut gb = machine_with(&[0x00, 0x00, 0x18, 0xFE]);
    gb.step_instruction().unwrap();
    gb.step_instruction().unwrap();
    let before = gb.debug_snapshot();

    assert_eq!(
        gb.load_rom(&vec![0u8; 0x8000 + 0x4000]).unwrap_err(),
        CartridgeError::InvalidSize(0xC000)
    );
    let mut bad_type = rom_with(&[]);
    bad_type[0x147] = 0x19;
    assert_eq!(
        gb.load_rom(&bad_type).unwrap_err(),
        CartridgeError::UnsupportedController(0x19)
    );

    assert_eq!(gb.debug_snapshot(), before);
    assert_eq!(gb.cartridge_info().unwrap().title, "TEST");
    assert_eq!(gb.peek(0x0102), 0x18);
}

#[test]
fn frame_budget_spends_exactly_one_frame_of_nops() {
    let mut gb = GameBoy::new();
    let mut rom = vec![0u8; 0x8000];
    // All NOPs until 0x7FFF, then a JP back to the start.
    rom[0x7FFD..].copy_from_slice(&[0xC3, 0x00, 0x01]);
    gb.load_rom(&rom).unwrap();

    assert_eq!(gb.run_frame(), Ok(FrameOutcome::Completed));
    let snapshot = gb.debug_snapshot();
    assert_eq!(snapshot.video.ly, 0);
    assert_eq!(snapshot.mode, Mode::OamScan);
    // VBlank was requested during the frame (IME is off, so it stays pending).
    assert_ne!(snapshot.interrupt_flags & 0x01, 0);
}

#[test]
fn configured_budget_is_honoured() {
    let config = GameBoyConfig::builder().cycles_per_frame(456).build();
    let mut gb = GameBoy::with_config(config);
    gb.load_rom(&rom_with(&[0x18, 0xFE])).unwrap();
    assert_eq!(gb.run_frame(), Ok(FrameOutcome::Completed));
    assert_eq!(gb.debug_snapshot().video.ly, 1);
}

#[test]
fn vblank_interrupt_runs_handler_from_halt() {
    let mut rom = rom_with(&[
        0x3E, 0x01, // LD A,0x01
        0xE0, 0xFF, // LDH (IE),A
        0xFB, // EI
        0x76, // HALT
        0x18, 0xFD, // JR -3
    ]);
    rom[0x40] = 0x04; // INC B
    rom[0x41] = 0xD9; // RETI
    let mut gb = GameBoy::new();
    gb.load_rom(&rom).unwrap();

    // Reset leaves IF clear and LY at 0, so the first VBlank arrives
    // 144 lines into the first frame and each later one a frame apart.
    assert_eq!(gb.cpu.regs.b, 0x00);
    for frame in 1..=3u8 {
        assert_eq!(gb.run_frame(), Ok(FrameOutcome::Completed));
        assert_eq!(gb.cpu.regs.b, frame, "handler entries after frame {frame}");
    }
    assert!(gb.cpu.ime);
    assert!(gb.cpu.halted);
    assert_eq!(gb.debug_snapshot().interrupt_flags & 0x01, 0);
}

#[test]
fn timer_interrupt_is_requested_through_bus() {
    // LD A,0x05 ; LDH (TAC),A ; JR -2
    let mut gb = machine_with(&[0x3E, 0x05, 0xE0, 0x07, 0x18, 0xFE]);
    gb.run_frame().unwrap();
    assert_ne!(gb.debug_snapshot().interrupt_flags & 0x04, 0);
}

#[test]
fn serial_bytes_are_captured() {
    let mut gb = machine_with(&[
        0x3E, b'o', 0xE0, 0x01, 0x3E, 0x81, 0xE0, 0x02, // 'o'
        0x3E, b'k', 0xE0, 0x01, 0x3E, 0x81, 0xE0, 0x02, // 'k'
        0x18, 0xFE,
    ]);
    gb.run_frame().unwrap();
    assert_eq!(gb.serial_output(), b"ok");
}

#[test]
fn breakpoint_stops_before_instruction_and_resumes_past_it() {
    // NOP ; INC A ; JR -3
    let mut gb = machine_with(&[0x00, 0x3C, 0x18, 0xFD]);
    assert!(gb.add_breakpoint(0x0101));
    assert!(!gb.add_breakpoint(0x0101));
    let a = gb.cpu.regs.a;

    assert_eq!(gb.run_frame(), Ok(FrameOutcome::Breakpoint(0x0101)));
    assert_eq!(gb.cpu.regs.pc, 0x0101);
    assert_eq!(gb.cpu.regs.a, a);

    assert_eq!(gb.run_frame(), Ok(FrameOutcome::Breakpoint(0x0101)));
    assert_eq!(gb.cpu.regs.a, a.wrapping_add(1));

    assert!(gb.remove_breakpoint(0x0101));
    assert_eq!(gb.breakpoints().count(), 0);
    assert_eq!(gb.run_frame(), Ok(FrameOutcome::Completed));
}

#[test]
fn decode_error_freezes_at_failing_instruction() {
    // NOP ; <illegal 0xDD>
    let mut gb = machine_with(&[0x00, 0xDD]);
    let err = gb.run_frame().unwrap_err();
    assert_eq!(err, CpuError::UnknownOpcode { opcode: 0xDD, pc: 0x0101 });
    assert!(gb.is_frozen());
    assert_eq!(gb.debug_snapshot().pc, 0x0101);

    assert_eq!(gb.run_frame(), Ok(FrameOutcome::Frozen));
    assert_eq!(gb.step_instruction(), Err(err));
    assert_eq!(gb.debug_snapshot().pc, 0x0101);

    gb.resume();
    assert!(!gb.is_frozen());
    assert_eq!(gb.run_frame(), Err(err));

    gb.reset();
    assert!(!gb.is_frozen());
    assert_eq!(gb.cpu.regs.pc, 0x0100);
}

#[test]
fn extended_decode_is_total() {
    // Every 0xCB entry is defined, so a prefixed stream never faults.
    let mut gb = machine_with(&[0xCB, 0x37, 0xCB, 0xFF, 0x18, 0xFA]);
    assert_eq!(gb.run_frame(), Ok(FrameOutcome::Completed));
}

#[test]
fn stop_parks_until_resume() {
    // STOP ; INC B ; JR -2
    let mut gb = machine_with(&[0x10, 0x00, 0x04, 0x18, 0xFE]);
    assert_eq!(gb.run_frame(), Ok(FrameOutcome::Stopped));
    assert!(gb.debug_snapshot().stopped);
    assert_eq!(gb.run_frame(), Ok(FrameOutcome::Stopped));

    let b = gb.cpu.regs.b;
    gb.resume();
    assert_eq!(gb.run_frame(), Ok(FrameOutcome::Completed));
    assert_eq!(gb.cpu.regs.b, b.wrapping_add(1));
}

#[test]
fn button_press_requests_joypad_interrupt_once() {
    let mut gb = machine_with(&[0x18, 0xFE]);
    gb.set_button(Button::A, true);
    assert!(gb.is_pressed(Button::A));
    assert_ne!(gb.peek(0xFF0F) & 0x10, 0);

    gb.bus.write(0xFF0F, 0x00);
    gb.set_button(Button::A, true);
    assert_eq!(gb.peek(0xFF0F) & 0x10, 0);

    gb.bus.write(0xFF00, 0x10);
    assert_eq!(gb.peek(0xFF00) & 0x0F, 0x0E);
    gb.set_button(Button::A, false);
    assert_eq!(gb.peek(0xFF00) & 0x0F, 0x0F);
}

#[test]
fn boot_image_runs_from_zero_then_unmaps() {
    let mut gb = machine_with(&[]);
    let mut boot = [0u8; 256];
    // LD A,0x01 ; LDH (0x50),A
    boot[..4].copy_from_slice(&[0x3E, 0x01, 0xE0, 0x50]);
    gb.load_boot_rom(&boot).unwrap();

    assert_eq!(gb.cpu.regs.pc, 0x0000);
    assert_eq!(gb.cpu.regs.af(), 0x0000);
    assert_eq!(gb.peek(0x0000), 0x3E);

    gb.step_instruction().unwrap();
    gb.step_instruction().unwrap();
    assert_eq!(gb.peek(0x0000), 0x00);
    assert_eq!(gb.cpu.regs.pc, 0x0004);

    assert_eq!(
        gb.load_boot_rom(&[0; 128]),
        Err(CartridgeError::InvalidBootRomSize(128))
    );
}

#[test]
fn mbc1_banks_are_switched_by_program_writes() {
    let mut rom = vec![0u8; 0x4000 * 8];
    for bank in 0..8 {
        rom[bank * 0x4000 + 0x0200] = bank as u8;
    }
    rom[0x147] = 0x01;
    // LD A,0x03 ; LD (0x2000),A ; JR -2
    rom[0x0100..0x0108].copy_from_slice(&[0x3E, 0x03, 0xEA, 0x00, 0x20, 0x18, 0xFE, 0x00]);

    let mut gb = GameBoy::new();
    gb.load_rom(&rom).unwrap();
    assert_eq!(gb.peek(0x4200), 1);
    gb.step_instruction().unwrap();
    gb.step_instruction().unwrap();
    assert_eq!(gb.peek(0x4200), 3);
    assert_eq!(gb.peek(0x0200), 0);

    gb.reset();
    assert_eq!(gb.peek(0x4200), 1);
}

#[test]
fn peek_and_disassemble() {
    let gb = machine_with(&[0x31, 0xFE, 0xFF, 0xAF]);
    assert_eq!(gb.peek_range(0x0100, 4), vec![0x31, 0xFE, 0xFF, 0xAF]);
    let first = gb.disassemble(0x0100);
    assert_eq!(first.text, "LD SP,$FFFE");
    assert_eq!(first.length, 3);
    assert_eq!(gb.disassemble(0x0103).text, "XOR A");
}

#[test]
fn framebuffer_has_screen_dimensions() {
    let mut gb = machine_with(&[0x18, 0xFE]);
    gb.run_frame().unwrap();
    assert_eq!(
        gb.framebuffer().len(),
        crate::SCREEN_WIDTH * crate::SCREEN_HEIGHT * crate::BYTES_PER_PIXEL
    );
    // Blank VRAM with BGP 0xFC renders the lightest configured shade.
    assert_eq!(&gb.framebuffer()[..4], &gb.config().palette[0].rgba());
}
