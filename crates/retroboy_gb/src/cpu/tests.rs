use super::*;
use crate::error::CpuError;

struct TestBus {
    memory: [u8; 0x10000],
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl TestBus {
    fn with_program(program: &[u8]) -> Self {
        let mut bus = Self::default();
        bus.memory[..program.len()].copy_from_slice(program);
        bus
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

/// CPU positioned at 0x0000 with a stack at 0xFFFE and all flags clear.
fn cpu_at_zero() -> Cpu {
    let mut cpu = Cpu::new();
    cpu.regs.pc = 0x0000;
    cpu.regs.sp = 0xFFFE;
    cpu.clear_flags();
    cpu
}

fn step_t(cpu: &mut Cpu, bus: &mut TestBus) -> u32 {
    cpu.step(bus).expect("defined opcode").t
}

#[test]
fn reset_applies_post_boot_registers() {
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x55;
    cpu.ime = true;
    cpu.halted = true;
    cpu.reset();

    assert_eq!(cpu.regs.af(), 0x0190);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert!(!cpu.ime);
    assert!(!cpu.halted);
    assert_eq!(cpu.timing(), Timing::ZERO);
}

#[test]
fn power_on_starts_from_zeroed_registers() {
    let mut cpu = Cpu::new();
    cpu.power_on();
    assert_eq!(cpu.regs, Registers::default());
}

#[test]
fn nop_advances_pc() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0x00]);

    let timing = cpu.step(&mut bus).unwrap();
    assert_eq!(timing, Timing { t: 4, m: 1 });
    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(cpu.timing(), timing);
}

#[test]
fn xor_a_clears_accumulator_and_sets_only_zero() {
    let mut cpu = cpu_at_zero();
    cpu.regs.a = 0x3C;
    cpu.regs.f = 0xF0;
    let mut bus = TestBus::with_program(&[0xAF]);

    assert_eq!(step_t(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.a, 0);
    assert_eq!(cpu.regs.f, 0x80);
}

#[test]
fn ld_16bit_and_indirect_forms() {
    // LD HL,0xC000 ; LD A,0x42 ; LD (HL+),A ; LD (HL-),A ; LD A,(HL-)
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0x21, 0x00, 0xC0, 0x3E, 0x42, 0x22, 0x32, 0x3A]);

    assert_eq!(step_t(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xC000);
    assert_eq!(step_t(&mut cpu, &mut bus), 8);
    assert_eq!(step_t(&mut cpu, &mut bus), 8);
    assert_eq!(bus.memory[0xC000], 0x42);
    assert_eq!(cpu.regs.hl(), 0xC001);
    step_t(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0xC001], 0x42);
    assert_eq!(cpu.regs.hl(), 0xC000);
    cpu.regs.a = 0;
    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x42);
    assert_eq!(cpu.regs.hl(), 0xBFFF);
}

#[test]
fn ld_r_r_through_hl_costs_extra() {
    // LD B,C ; LD (HL),B ; LD D,(HL)
    let mut cpu = cpu_at_zero();
    cpu.regs.c = 0x99;
    cpu.regs.set_hl(0xC123);
    let mut bus = TestBus::with_program(&[0x41, 0x70, 0x56]);

    assert_eq!(step_t(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.b, 0x99);
    assert_eq!(step_t(&mut cpu, &mut bus), 8);
    assert_eq!(bus.memory[0xC123], 0x99);
    assert_eq!(step_t(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.d, 0x99);
}

#[test]
fn inc_and_dec_are_inverses_for_every_value() {
    // INC B ; DEC B ; DEC B ; INC B
    for start in 0..=0xFFu8 {
        let mut cpu = cpu_at_zero();
        cpu.regs.b = start;
        let carry = start & 1 != 0;
        cpu.set_flag(Flag::C, carry);
        let mut bus = TestBus::with_program(&[0x04, 0x05, 0x05, 0x04]);

        let up = start.wrapping_add(1);
        step_t(&mut cpu, &mut bus);
        assert_eq!(cpu.regs.b, up);
        assert_eq!(cpu.get_flag(Flag::Z), up == 0, "INC {start:02X}");
        assert!(!cpu.get_flag(Flag::N));
        assert_eq!(cpu.get_flag(Flag::H), start & 0x0F == 0x0F, "INC {start:02X}");
        assert_eq!(cpu.get_flag(Flag::C), carry);

        step_t(&mut cpu, &mut bus);
        assert_eq!(cpu.regs.b, start, "DEC after INC {start:02X}");
        assert_eq!(cpu.get_flag(Flag::Z), start == 0);
        assert!(cpu.get_flag(Flag::N));
        assert_eq!(cpu.get_flag(Flag::H), up & 0x0F == 0);
        assert_eq!(cpu.get_flag(Flag::C), carry);

        let down = start.wrapping_sub(1);
        step_t(&mut cpu, &mut bus);
        assert_eq!(cpu.regs.b, down);
        assert_eq!(cpu.get_flag(Flag::Z), down == 0, "DEC {start:02X}");
        assert!(cpu.get_flag(Flag::N));
        assert_eq!(cpu.get_flag(Flag::H), start & 0x0F == 0, "DEC {start:02X}");
        assert_eq!(cpu.get_flag(Flag::C), carry);

        step_t(&mut cpu, &mut bus);
        assert_eq!(cpu.regs.b, start, "INC after DEC {start:02X}");
        assert_eq!(cpu.get_flag(Flag::Z), start == 0);
        assert!(!cpu.get_flag(Flag::N));
        assert_eq!(cpu.get_flag(Flag::H), down & 0x0F == 0x0F);
        assert_eq!(cpu.get_flag(Flag::C), carry);
        assert_eq!(cpu.regs.f & 0x0F, 0);
    }
}

#[test]
fn inc_hl_memory_takes_twelve_cycles() {
    let mut cpu = cpu_at_zero();
    cpu.regs.set_hl(0xC000);
    let mut bus = TestBus::with_program(&[0x34]);
    bus.memory[0xC000] = 0xFF;

    assert_eq!(step_t(&mut cpu, &mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
}

#[test]
fn add_hl_rr_leaves_zero_flag_alone() {
    let mut cpu = cpu_at_zero();
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    cpu.set_flag(Flag::Z, true);
    let mut bus = TestBus::with_program(&[0x09]);

    assert_eq!(step_t(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn add_sp_r8_uses_low_byte_carries() {
    // ADD SP,-1
    let mut cpu = cpu_at_zero();
    cpu.regs.sp = 0x00FF;
    let mut bus = TestBus::with_program(&[0xE8, 0xFF]);

    assert_eq!(step_t(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.sp, 0x00FE);
    assert!(!cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn ld_hl_sp_plus_r8_and_ld_sp_hl() {
    let mut cpu = cpu_at_zero();
    cpu.regs.sp = 0xFFF8;
    let mut bus = TestBus::with_program(&[0xF8, 0x02, 0xF9]);

    assert_eq!(step_t(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xFFFA);
    cpu.regs.set_hl(0x1234);
    assert_eq!(step_t(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.sp, 0x1234);
}

#[test]
fn push_pop_round_trip_masks_f() {
    // PUSH BC ; POP AF
    let mut cpu = cpu_at_zero();
    cpu.regs.set_bc(0x12FF);
    let mut bus = TestBus::with_program(&[0xC5, 0xF1]);

    assert_eq!(step_t(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0xFF);
    assert_eq!(bus.memory[0xFFFD], 0x12);
    assert_eq!(step_t(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.af(), 0x12F0);
    assert_eq!(cpu.regs.f & 0x0F, 0);
}

#[test]
fn flag_low_nibble_stays_zero_across_alu_ops() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::default();
    for (i, opcode) in (0x80u8..=0xBF).enumerate() {
        bus.memory[i] = opcode;
    }
    cpu.regs.set_hl(0xC000);
    for _ in 0x80..=0xBF {
        step_t(&mut cpu, &mut bus);
        assert_eq!(cpu.regs.f & 0x0F, 0);
    }
}

#[test]
fn sub_and_compare_set_borrow_flags() {
    // SUB 0x01 with A=0x10 ; CP 0x20
    let mut cpu = cpu_at_zero();
    cpu.regs.a = 0x10;
    let mut bus = TestBus::with_program(&[0xD6, 0x01, 0xFE, 0x20]);

    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x0F);
    assert!(cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));

    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x0F);
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn adc_and_sbc_consume_carry() {
    // ADC A,0x0F ; SBC A,0x00
    let mut cpu = cpu_at_zero();
    cpu.regs.a = 0xF0;
    cpu.set_flag(Flag::C, true);
    let mut bus = TestBus::with_program(&[0xCE, 0x0F, 0xDE, 0x00]);

    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));
    assert!(cpu.get_flag(Flag::H));

    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn and_sets_half_carry() {
    let mut cpu = cpu_at_zero();
    cpu.regs.a = 0xF0;
    let mut bus = TestBus::with_program(&[0xE6, 0x0F]);

    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0);
    assert_eq!(cpu.regs.f, 0xA0);
}

#[test]
fn daa_produces_bcd_for_every_sum() {
    // ADD A,B ; DAA
    for x in 0u8..100 {
        for y in 0u8..100 {
            let mut cpu = cpu_at_zero();
            cpu.regs.a = (x / 10) << 4 | (x % 10);
            cpu.regs.b = (y / 10) << 4 | (y % 10);
            let mut bus = TestBus::with_program(&[0x80, 0x27]);
            step_t(&mut cpu, &mut bus);
            step_t(&mut cpu, &mut bus);

            let sum = x as u16 + y as u16;
            let expected = ((sum % 100) / 10) as u8 * 16 + (sum % 10) as u8;
            assert_eq!(cpu.regs.a, expected, "{x} + {y}");
            assert_eq!(cpu.get_flag(Flag::C), sum >= 100, "{x} + {y}");
        }
    }
}

#[test]
fn daa_after_subtraction() {
    // SUB B ; DAA : 0x42 - 0x09 = 33 in BCD
    let mut cpu = cpu_at_zero();
    cpu.regs.a = 0x42;
    cpu.regs.b = 0x09;
    let mut bus = TestBus::with_program(&[0x90, 0x27]);

    step_t(&mut cpu, &mut bus);
    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x33);
    assert!(cpu.get_flag(Flag::N));
}

#[test]
fn cpl_scf_ccf() {
    let mut cpu = cpu_at_zero();
    cpu.regs.a = 0x35;
    let mut bus = TestBus::with_program(&[0x2F, 0x37, 0x3F]);

    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xCA);
    assert!(cpu.get_flag(Flag::N) && cpu.get_flag(Flag::H));
    step_t(&mut cpu, &mut bus);
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::N));
    step_t(&mut cpu, &mut bus);
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn accumulator_rotates_always_clear_zero() {
    // RLCA with A=0x80 ; RLA with carry clear and A=0x00
    let mut cpu = cpu_at_zero();
    cpu.regs.a = 0x80;
    let mut bus = TestBus::with_program(&[0x07, 0x17, 0x0F, 0x1F]);

    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.f, 0x10);

    cpu.regs.a = 0x00;
    cpu.clear_flags();
    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, 0x00);

    cpu.regs.a = 0x01;
    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x80);
    assert_eq!(cpu.regs.f, 0x10);

    cpu.regs.a = 0x01;
    cpu.clear_flags();
    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, 0x10);
}

#[test]
fn cb_shift_swap_and_bit_ops() {
    // RLC B ; SWAP C ; SRA D ; BIT 7,B ; RES 0,(HL) ; SET 3,(HL)
    let mut cpu = cpu_at_zero();
    cpu.regs.b = 0x80;
    cpu.regs.c = 0xA5;
    cpu.regs.d = 0x81;
    cpu.regs.set_hl(0xC000);
    let mut bus =
        TestBus::with_program(&[0xCB, 0x00, 0xCB, 0x31, 0xCB, 0x2A, 0xCB, 0x78, 0xCB, 0x86, 0xCB, 0xDE]);
    bus.memory[0xC000] = 0x01;

    assert_eq!(step_t(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.b, 0x01);
    assert!(cpu.get_flag(Flag::C));

    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.c, 0x5A);
    assert!(!cpu.get_flag(Flag::C));

    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.d, 0xC0);
    assert!(cpu.get_flag(Flag::C));

    assert_eq!(step_t(&mut cpu, &mut bus), 8);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C), "BIT keeps carry");

    assert_eq!(step_t(&mut cpu, &mut bus), 16);
    assert_eq!(bus.memory[0xC000], 0x00);
    assert_eq!(step_t(&mut cpu, &mut bus), 16);
    assert_eq!(bus.memory[0xC000], 0x08);
    assert_eq!(cpu.regs.pc, 12);
}

#[test]
fn bit_on_hl_costs_twelve() {
    let mut cpu = cpu_at_zero();
    cpu.regs.set_hl(0xC000);
    let mut bus = TestBus::with_program(&[0xCB, 0x46]);
    bus.memory[0xC000] = 0x01;

    assert_eq!(step_t(&mut cpu, &mut bus), 12);
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn jr_taken_and_not_taken_costs() {
    // JR +2 ; (skipped) ; JR NZ,-4 with Z set ; JR Z,-6 with Z set
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0x18, 0x02, 0x00, 0x00, 0x20, 0xFC, 0x28, 0xF8]);

    assert_eq!(step_t(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0004);

    cpu.set_flag(Flag::Z, true);
    assert_eq!(step_t(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0006);
    assert_eq!(step_t(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0000);
}

#[test]
fn jp_and_jp_cc() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0xC3, 0x00, 0x10]);
    bus.memory[0x1000..0x1006].copy_from_slice(&[0xDA, 0x00, 0x20, 0xD2, 0x00, 0x30]);

    assert_eq!(step_t(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x1000);
    assert_eq!(step_t(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x1003);
    assert_eq!(step_t(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x3000);
}

#[test]
fn call_ret_and_conditional_variants() {
    // CALL 0x0010 ; at 0x0010: RET NC (taken) ; at 0x0003: CALL C,0x0010 (not taken)
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0xCD, 0x10, 0x00, 0xDC, 0x10, 0x00, 0xC9]);
    bus.memory[0x0010] = 0xD0;

    assert_eq!(step_t(&mut cpu, &mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x0010);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x03);
    assert_eq!(bus.memory[0xFFFD], 0x00);

    assert_eq!(step_t(&mut cpu, &mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0xFFFE);

    assert_eq!(step_t(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0006);

    cpu.regs.sp = 0xFFFC;
    assert_eq!(step_t(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0003);
}

#[test]
fn ret_cc_not_taken_costs_eight() {
    let mut cpu = cpu_at_zero();
    cpu.set_flag(Flag::Z, false);
    let mut bus = TestBus::with_program(&[0xC8]);

    assert_eq!(step_t(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0001);
}

#[test]
fn rst_pushes_and_reti_enables_ime() {
    let mut cpu = cpu_at_zero();
    cpu.regs.pc = 0x0200;
    let mut bus = TestBus::default();
    bus.memory[0x0200] = 0xEF; // RST 28H
    bus.memory[0x0028] = 0xD9; // RETI

    assert_eq!(step_t(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(step_t(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0201);
    assert!(cpu.ime);
}

#[test]
fn ld_a16_sp_stores_little_endian() {
    let mut cpu = cpu_at_zero();
    cpu.regs.sp = 0xBEEF;
    let mut bus = TestBus::with_program(&[0x08, 0x00, 0xC0]);

    assert_eq!(step_t(&mut cpu, &mut bus), 20);
    assert_eq!(bus.memory[0xC000], 0xEF);
    assert_eq!(bus.memory[0xC001], 0xBE);
}

#[test]
fn ldh_forms_address_high_page() {
    // LDH (0x80),A ; LD (C),A ; LDH A,(0x81)
    let mut cpu = cpu_at_zero();
    cpu.regs.a = 0x5A;
    cpu.regs.c = 0x81;
    let mut bus = TestBus::with_program(&[0xE0, 0x80, 0xE2, 0xF0, 0x81]);

    assert_eq!(step_t(&mut cpu, &mut bus), 12);
    assert_eq!(bus.memory[0xFF80], 0x5A);
    assert_eq!(step_t(&mut cpu, &mut bus), 8);
    assert_eq!(bus.memory[0xFF81], 0x5A);
    cpu.regs.a = 0;
    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x5A);
}

#[test]
fn ei_takes_effect_after_following_instruction() {
    // EI ; NOP ; NOP
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0xFB, 0x00, 0x00]);

    step_t(&mut cpu, &mut bus);
    assert!(!cpu.ime);
    step_t(&mut cpu, &mut bus);
    assert!(cpu.ime);
}

#[test]
fn di_right_after_ei_cancels_it() {
    // EI ; DI ; NOP
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0xFB, 0xF3, 0x00]);

    for _ in 0..3 {
        step_t(&mut cpu, &mut bus);
    }
    assert!(!cpu.ime);
}

#[test]
fn halt_idles_until_interrupt_pending() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0x76, 0x00]);

    step_t(&mut cpu, &mut bus);
    assert!(cpu.halted);
    assert_eq!(step_t(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0001);

    // IME clear: HALT ends without a dispatch.
    bus.memory[0xFFFF] = 0x04;
    bus.memory[0xFF0F] = 0x04;
    assert_eq!(cpu.service_interrupts(&mut bus), None);
    assert!(!cpu.halted);
    assert_eq!(bus.memory[0xFF0F], 0x04);
    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn interrupt_dispatch_pushes_pc_and_clears_request() {
    let mut cpu = cpu_at_zero();
    cpu.regs.pc = 0x1234;
    cpu.ime = true;
    cpu.halted = true;
    let mut bus = TestBus::default();
    bus.memory[0xFFFF] = 0x1F;
    bus.memory[0xFF0F] = 0x05; // VBlank and Timer

    let timing = cpu.service_interrupts(&mut bus);
    assert_eq!(timing, Some(Timing::from_t(16)));
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x34);
    assert_eq!(bus.memory[0xFFFD], 0x12);
    assert_eq!(bus.memory[0xFF0F], 0x04);
    assert!(!cpu.ime);
    assert!(!cpu.halted);
}

#[test]
fn joypad_vector_and_disabled_sources() {
    let mut cpu = cpu_at_zero();
    cpu.ime = true;
    let mut bus = TestBus::default();
    bus.memory[0xFFFF] = 0x10;
    bus.memory[0xFF0F] = 0x17;
    assert_eq!(cpu.service_interrupts(&mut bus), Some(Timing::from_t(16)));
    assert_eq!(cpu.regs.pc, 0x0060);
    assert_eq!(bus.memory[0xFF0F], 0x07);
}

#[test]
fn serial_request_is_never_dispatched() {
    let mut cpu = cpu_at_zero();
    cpu.ime = true;
    let mut bus = TestBus::default();
    bus.memory[0xFFFF] = 0x08;
    bus.memory[0xFF0F] = 0x08;

    assert_eq!(cpu.service_interrupts(&mut bus), None);
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0000);
}

#[test]
fn stop_consumes_padding_and_parks() {
    let mut cpu = cpu_at_zero();
    let mut bus = TestBus::with_program(&[0x10, 0x00, 0x00]);

    assert_eq!(step_t(&mut cpu, &mut bus), 4);
    assert!(cpu.is_stopped());
    assert_eq!(cpu.regs.pc, 0x0002);
    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0002);

    cpu.wake();
    step_t(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0003);
}

#[test]
fn undefined_opcodes_fail_without_advancing() {
    for opcode in [0xD3u8, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD] {
        let mut cpu = cpu_at_zero();
        cpu.regs.pc = 0x0100;
        let mut bus = TestBus::default();
        bus.memory[0x0100] = opcode;

        let err = cpu.step(&mut bus).unwrap_err();
        assert_eq!(err, CpuError::UnknownOpcode { opcode, pc: 0x0100 });
        assert_eq!(err.pc(), 0x0100);
        assert_eq!(cpu.regs.pc, 0x0100);
        assert!(!PRIMARY[opcode as usize].is_defined());
    }
}

#[test]
fn every_defined_opcode_executes() {
    for opcode in 0..=0xFFu8 {
        if !PRIMARY[opcode as usize].is_defined() || opcode == 0xCB {
            continue;
        }
        let mut cpu = cpu_at_zero();
        cpu.regs.pc = 0x0100;
        cpu.regs.set_hl(0xC000);
        cpu.regs.f = 0xF0;
        let mut bus = TestBus::default();
        bus.memory[0x0100] = opcode;
        bus.memory[0x0101] = 0x5A;
        bus.memory[0x0102] = 0xA5;
        bus.memory[0xC000] = 0x3C;
        // POP AF reads a low byte with every bit set.
        bus.memory[0xFFFE] = 0xFF;
        bus.memory[0xFFFF] = 0x12;

        let timing = cpu.step(&mut bus).unwrap();
        assert!(timing.t >= 4 && timing.t % 4 == 0, "{opcode:02X}");
        assert_eq!(timing.m * 4, timing.t);
        assert_eq!(cpu.regs.f & 0x0F, 0, "{opcode:02X}");
    }

    for ext in 0..=0xFFu8 {
        let mut cpu = cpu_at_zero();
        cpu.regs.set_hl(0xC000);
        cpu.regs.f = 0xF0;
        cpu.regs.a = 0x81;
        let mut bus = TestBus::with_program(&[0xCB, ext]);
        bus.memory[0xC000] = 0x81;
        let timing = cpu.step(&mut bus).unwrap();
        assert_eq!(timing.t, EXTENDED[ext as usize].cycles, "CB {ext:02X}");
        assert_eq!(cpu.regs.pc, 2);
        assert_eq!(cpu.regs.f & 0x0F, 0, "CB {ext:02X}");
    }
}

#[test]
fn table_lengths_match_operand_placeholders() {
    for (opcode, instruction) in PRIMARY.iter().enumerate() {
        if !instruction.is_defined() || opcode == 0xCB || opcode == 0x10 {
            continue;
        }
        let m = instruction.mnemonic;
        let expected = if m.contains("d16") || m.contains("a16") {
            3
        } else if m.contains("d8") || m.contains("a8") || m.contains("r8") {
            2
        } else {
            1
        };
        assert_eq!(instruction.length, expected, "{opcode:02X} {m}");
    }
}
