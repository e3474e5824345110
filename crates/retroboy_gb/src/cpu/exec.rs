//! Instruction handlers referenced from the opcode tables.
//!
//! Every handler has the same shape, `fn(&mut Cpu, &mut dyn Bus, u8) -> u32`:
//! it receives the opcode byte it was dispatched for (so one handler can
//! serve a whole register-encoded group) and returns the cycles to add on
//! top of the table's base cost. Only taken conditional branches return
//! anything but zero.

mod alu;
mod cb;
mod control;
mod ld;
mod stack;
mod system;
