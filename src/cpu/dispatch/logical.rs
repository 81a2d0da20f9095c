/*!
logical.rs - AND / ORA / EOR / BIT

AND, ORA and EOR combine the operand into A and set Z/N. BIT leaves A alone:
Z from `A & M`, N and V copied from bits 7 and 6 of the operand.
*/

use crate::bus::Bus;
use crate::cpu::dispatch::Exec;
use crate::cpu::execute;
use crate::cpu::regs::CpuRegs;

pub(super) fn and<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.read();
    execute::and(ex.cpu, v);
}

pub(super) fn ora<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.read();
    execute::ora(ex.cpu, v);
}

pub(super) fn eor<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.read();
    execute::eor(ex.cpu, v);
}

pub(super) fn bit<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let v = ex.read();
    execute::bit(ex.cpu, v);
}
