/*!
rmw.rs - Shift / rotate and memory INC / DEC family

Overview
========
ASL, LSR, ROL and ROR operate on A in Accumulator mode and on memory
otherwise; INC and DEC are memory-only. Memory forms go through
`Exec::modify`, which performs the read -> write old -> write new sequence.

Timing
======
The opcode table already carries the fixed RMW cost (5/6/6/7 for
zp/zp,X/abs/abs,X); absolute,X forms never pay a page-cross cycle.
*/

use crate::bus::Bus;
use crate::cpu::dispatch::Exec;
use crate::cpu::execute;
use crate::cpu::regs::CpuRegs;

pub(super) fn asl<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    ex.modify(execute::asl);
}

pub(super) fn lsr<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    ex.modify(execute::lsr);
}

pub(super) fn rol<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    ex.modify(execute::rol);
}

pub(super) fn ror<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    ex.modify(execute::ror);
}

pub(super) fn inc<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    ex.modify(execute::increment);
}

pub(super) fn dec<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    ex.modify(execute::decrement);
}
