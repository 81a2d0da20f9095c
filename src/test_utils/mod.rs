//! Shared test utilities for building small program images.
//!
//! Every helper lays memory out the same way:
//! - program bytes at `PROGRAM_START` ($8000), which is also the RESET target
//! - IRQ/BRK vector -> `IRQ_HANDLER`, NMI vector -> `NMI_HANDLER`
//!
//! `setup` also runs the 8-cycle reset sequence to completion so the first
//! `step` or `tick` fetches the first program byte.

#![allow(dead_code)]

use crate::bus::FlatMemory;
use crate::cpu::Cpu;

pub const PROGRAM_START: u16 = 0x8000;
pub const IRQ_HANDLER: u16 = 0x9000;
pub const NMI_HANDLER: u16 = 0xA000;

/// Memory image with `program` at $8000 and all three vectors set.
pub fn image_with_program(program: &[u8]) -> FlatMemory {
    let mut mem = FlatMemory::new();
    mem.load(PROGRAM_START, program).expect("program fits");
    mem.set_reset_vector(PROGRAM_START);
    mem.set_irq_vector(IRQ_HANDLER);
    mem.set_nmi_vector(NMI_HANDLER);
    mem
}

/// Reset a CPU against `program` and burn the reset cycles.
pub fn setup(program: &[u8]) -> (Cpu, FlatMemory) {
    let mut mem = image_with_program(program);
    let mut cpu = Cpu::new();
    cpu.reset(&mut mem);
    while !cpu.complete() {
        cpu.tick(&mut mem);
    }
    (cpu, mem)
}
