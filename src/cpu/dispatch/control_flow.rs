/*!
control_flow.rs - JMP / JSR / RTS / RTI / BRK

Behavior Details
================
- JMP loads PC from the resolved address. The indirect form's page-wrap
  quirk is handled by the resolver.
- JSR pushes (PC - 1), high byte first, then jumps. PC already points past
  the operand when the handler runs.
- RTS pulls low then high and adds 1.
- RTI pulls P (as PLP) then PC, with no increment.
- BRK skips its padding byte, pushes PC and P with B set, sets I and loads
  PC from $FFFE/$FFFF.
*/

use crate::bus::Bus;
use crate::cpu::dispatch::Exec;
use crate::cpu::execute::{pop_word, pull_status, push_status, push_word};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{IRQ_DISABLE, IRQ_VECTOR};

pub(super) fn jmp<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let target = ex.address();
    ex.cpu.set_pc(target);
}

pub(super) fn jsr<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let target = ex.address();
    let ret = ex.cpu.pc().wrapping_sub(1);
    push_word(ex.cpu, ex.bus, ret);
    ex.cpu.set_pc(target);
}

pub(super) fn rts<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let ret = pop_word(ex.cpu, ex.bus);
    ex.cpu.set_pc(ret.wrapping_add(1));
}

pub(super) fn rti<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    pull_status(ex.cpu, ex.bus);
    let pc = pop_word(ex.cpu, ex.bus);
    ex.cpu.set_pc(pc);
}

pub(super) fn brk<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    ex.cpu.advance_pc_one();
    let pc = ex.cpu.pc();
    push_word(ex.cpu, ex.bus, pc);
    push_status(ex.cpu, ex.bus, true);
    ex.cpu.assign_flag(IRQ_DISABLE, true);
    let target = ex.bus.read_word(IRQ_VECTOR);
    ex.cpu.set_pc(target);
}
