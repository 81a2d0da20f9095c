/*!
misc.rs - Register transfers, stack pushes / pulls, flag set / clear and
index increment / decrement.

All of these are single-byte implied instructions; none touch the resolved
operand.
*/

use crate::bus::Bus;
use crate::cpu::dispatch::Exec;
use crate::cpu::execute;
use crate::cpu::regs::CpuRegs;

pub(super) fn tax<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    execute::tax(ex.cpu);
}

pub(super) fn tay<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    execute::tay(ex.cpu);
}

pub(super) fn txa<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    execute::txa(ex.cpu);
}

pub(super) fn tya<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    execute::tya(ex.cpu);
}

pub(super) fn tsx<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    execute::tsx(ex.cpu);
}

/// The only transfer that leaves N and Z alone.
pub(super) fn txs<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    execute::txs(ex.cpu);
}

pub(super) fn pha<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    execute::pha(ex.cpu, ex.bus);
}

pub(super) fn php<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    execute::php(ex.cpu, ex.bus);
}

pub(super) fn pla<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    execute::pla(ex.cpu, ex.bus);
}

pub(super) fn plp<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    execute::plp(ex.cpu, ex.bus);
}

/// CLC/SEC/CLI/SEI/CLD/SED/CLV: force one status bit.
pub(super) fn flag<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>, mask: u8, on: bool) {
    ex.cpu.assign_flag(mask, on);
}

pub(super) fn inx<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let x = ex.cpu.x();
    let v = execute::increment(ex.cpu, x);
    ex.cpu.set_x(v);
}

pub(super) fn iny<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let y = ex.cpu.y();
    let v = execute::increment(ex.cpu, y);
    ex.cpu.set_y(v);
}

pub(super) fn dex<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let x = ex.cpu.x();
    let v = execute::decrement(ex.cpu, x);
    ex.cpu.set_x(v);
}

pub(super) fn dey<C: CpuRegs, B: Bus>(ex: &mut Exec<'_, C, B>) {
    let y = ex.cpu.y();
    let v = execute::decrement(ex.cpu, y);
    ex.cpu.set_y(v);
}
